//! GeoJSON boundary files in, styled clone collections out

pub mod codec;
pub mod parser;
pub mod writer;

pub use codec::{decode_geometry, encode_geometry};
pub use parser::{LoadReport, Skipped, parse_boundaries, parse_collection, read_collection};
pub use writer::{clone_to_feature, frames_to_collection, write_collection};

pub use geojson::{Feature, FeatureCollection};
