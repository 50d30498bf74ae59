use geo::{BoundingRect, MultiPoint, Point};

use super::{Geometry, LatLng};
use crate::error::{GeometryError, Result};

/// Mean of every vertex across all rings and polygons.
///
/// This is not an area centroid: closing vertices and dense coastlines pull
/// the result towards them. It is the reference point used for relocation.
///
/// # Errors
/// * `EmptyGeometry` if there are no vertices
pub fn centroid_of(geometry: &Geometry) -> Result<LatLng> {
    let (sum_lng, sum_lat, count) = geometry
        .coords()
        .fold((0.0, 0.0, 0usize), |(x, y, n), c| (x + c.x, y + c.y, n + 1));

    if count == 0 {
        return Err(GeometryError::EmptyGeometry);
    }

    let n = count as f64;
    Ok(LatLng::new(sum_lat / n, sum_lng / n))
}

/// Centre of the latitude/longitude bounding box
///
/// # Errors
/// * `EmptyGeometry` if there are no vertices
pub fn bounds_center(geometry: &Geometry) -> Result<LatLng> {
    let points: MultiPoint<f64> = geometry.coords().map(|&c| Point::from(c)).collect();
    let rect = points.bounding_rect().ok_or(GeometryError::EmptyGeometry)?;
    let center = rect.center();
    Ok(LatLng::new(center.y, center.x))
}
