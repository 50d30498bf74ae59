//! truesize - Drag country and state outlines across the map at their true size

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod io;

pub use error::GeometryError;
pub use geometry::{
    Geometry, LatLng, Ring, ScaleCorrector, bounds_center, centroid_of, correct_scale, relocate,
    rotate_about, translate,
};
