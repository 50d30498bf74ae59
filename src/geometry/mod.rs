pub mod centroid;
pub mod relocate;
pub mod rotate;
pub mod scale;
pub mod translate;

pub use centroid::{bounds_center, centroid_of};
pub use relocate::{relocate, relocate_with};
pub use rotate::rotate_about;
pub use scale::{ScaleCorrector, correct_scale};
pub use translate::translate;

use geo::{Area, Coord, LineString};

use crate::error::{GeometryError, Result};

/// One boundary of a polygon, vertices stored as x = longitude, y = latitude.
///
/// Rings are kept exactly as supplied: never closed, deduplicated or reoriented.
pub type Ring = LineString<f64>;

/// A reference point such as a centroid or a drag target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Like [`LatLng::new`], for untrusted input such as command-line flags
    ///
    /// # Errors
    /// * `InvalidCenter` unless both values are finite and `|lat| <= 90`
    pub fn checked(lat: f64, lng: f64) -> Result<Self> {
        if lat.is_finite() && lng.is_finite() && (-90.0..=90.0).contains(&lat) {
            Ok(Self { lat, lng })
        } else {
            Err(GeometryError::InvalidCenter { lat, lng })
        }
    }
}

/// Area geometry that can be relocated
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Outer ring first, then holes
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// GeoJSON type name of this geometry
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Apply `f` to every vertex, keeping the ring and polygon structure intact.
    ///
    /// This is the only place that walks the Polygon/MultiPolygon nesting; all
    /// transforms are expressed as a per-vertex function passed in here.
    pub fn map_coords<F>(&self, f: F) -> Geometry
    where
        F: Fn(Coord<f64>) -> Coord<f64>,
    {
        match self {
            Geometry::Polygon(rings) => Geometry::Polygon(map_rings(rings, &f)),
            Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(
                polygons.iter().map(|rings| map_rings(rings, &f)).collect(),
            ),
        }
    }

    /// Iterate over every ring, polygon by polygon
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Geometry::Polygon(rings) => Box::new(rings.iter()),
            Geometry::MultiPolygon(polygons) => Box::new(polygons.iter().flatten()),
        }
    }

    /// Iterate over every vertex in ring order
    pub fn coords(&self) -> impl Iterator<Item = &Coord<f64>> + '_ {
        self.rings().flat_map(|ring| ring.0.iter())
    }

    pub fn vertex_count(&self) -> usize {
        self.rings().map(|ring| ring.0.len()).sum()
    }

    pub fn ring_count(&self) -> usize {
        self.rings().count()
    }

    /// Planar area in square degrees, holes subtracted.
    ///
    /// Only meaningful for comparing shapes at a similar latitude; used for
    /// reporting, never by the transforms.
    pub fn area_sq_degrees(&self) -> f64 {
        match self {
            Geometry::Polygon(rings) => polygon_area(rings),
            Geometry::MultiPolygon(polygons) => {
                polygons.iter().map(|rings| polygon_area(rings)).sum()
            }
        }
    }
}

fn map_rings<F>(rings: &[Ring], f: &F) -> Vec<Ring>
where
    F: Fn(Coord<f64>) -> Coord<f64>,
{
    rings
        .iter()
        .map(|ring| ring.0.iter().map(|&c| f(c)).collect())
        .collect()
}

fn polygon_area(rings: &[Ring]) -> f64 {
    let Some((exterior, interiors)) = rings.split_first() else {
        return 0.0;
    };
    // geo closes rings on construction; this copy never leaves the function
    geo::Polygon::new(exterior.clone(), interiors.to_vec()).unsigned_area()
}
