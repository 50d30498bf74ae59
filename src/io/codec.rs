use geo::{Coord, coord};
use geojson::{PolygonType, Value};

use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, Ring};

/// Convert a GeoJSON geometry value into a typed [`Geometry`].
///
/// Positions keep their first two numbers (longitude, latitude); any
/// altitude is dropped.
///
/// # Errors
/// * `UnsupportedGeometryKind` for anything other than Polygon/MultiPolygon
/// * `InvalidPosition` for positions with fewer than two numbers
pub fn decode_geometry(value: &Value) -> Result<Geometry> {
    let unsupported = |kind: &str| Err(GeometryError::UnsupportedGeometryKind(kind.to_string()));

    match value {
        Value::Polygon(rings) => Ok(Geometry::Polygon(decode_polygon(rings)?)),
        Value::MultiPolygon(polygons) => {
            let polygons = polygons
                .iter()
                .map(decode_polygon)
                .collect::<Result<Vec<_>>>()?;
            Ok(Geometry::MultiPolygon(polygons))
        }
        Value::Point(_) => unsupported("Point"),
        Value::MultiPoint(_) => unsupported("MultiPoint"),
        Value::LineString(_) => unsupported("LineString"),
        Value::MultiLineString(_) => unsupported("MultiLineString"),
        Value::GeometryCollection(_) => unsupported("GeometryCollection"),
    }
}

impl TryFrom<&Value> for Geometry {
    type Error = GeometryError;

    fn try_from(value: &Value) -> Result<Self> {
        decode_geometry(value)
    }
}

/// Encode a [`Geometry`] as a GeoJSON geometry with the same nesting
pub fn encode_geometry(geometry: &Geometry) -> geojson::Geometry {
    let value = match geometry {
        Geometry::Polygon(rings) => Value::Polygon(encode_polygon(rings)),
        Geometry::MultiPolygon(polygons) => {
            Value::MultiPolygon(polygons.iter().map(|rings| encode_polygon(rings)).collect())
        }
    };
    geojson::Geometry::new(value)
}

fn decode_polygon(rings: &PolygonType) -> Result<Vec<Ring>> {
    rings
        .iter()
        .map(|ring| {
            ring.iter()
                .map(|position| decode_position(position))
                .collect::<Result<Vec<Coord<f64>>>>()
                .map(Ring::new)
        })
        .collect()
}

fn decode_position(position: &[f64]) -> Result<Coord<f64>> {
    match position {
        [x, y, ..] => Ok(coord! { x: *x, y: *y }),
        _ => Err(GeometryError::InvalidPosition {
            len: position.len(),
        }),
    }
}

fn encode_polygon(rings: &[Ring]) -> PolygonType {
    rings
        .iter()
        .map(|ring| ring.0.iter().map(|c| vec![c.x, c.y]).collect())
        .collect()
}
