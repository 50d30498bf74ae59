use thiserror::Error;

/// Errors raised by the geometry core and the GeoJSON codec
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// Only `Polygon` and `MultiPolygon` can be relocated
    #[error("unsupported geometry kind: {0} (expected Polygon or MultiPolygon)")]
    UnsupportedGeometryKind(String),

    #[error("geometry has no vertices")]
    EmptyGeometry,

    #[error("position needs at least 2 numbers, got {len}")]
    InvalidPosition { len: usize },

    /// Reference points must be finite and have a latitude within [-90, 90]
    #[error("invalid reference point: lat {lat}, lng {lng}")]
    InvalidCenter { lat: f64, lng: f64 },

    #[error("invalid scale correction settings: {0}")]
    InvalidCorrection(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
