use geo::coord;

use super::{Geometry, LatLng};

/// Shift every vertex by the offset between two reference points.
///
/// A vertex `(lng, lat)` becomes `(lng + dLng, lat + dLat)` where the deltas
/// are `new_center - original_center`. No scaling happens here.
pub fn translate(geometry: &Geometry, original_center: LatLng, new_center: LatLng) -> Geometry {
    let d_lat = new_center.lat - original_center.lat;
    let d_lng = new_center.lng - original_center.lng;

    geometry.map_coords(|c| coord! { x: c.x + d_lng, y: c.y + d_lat })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tests::{ring, unit_square};

    #[test]
    fn test_translate_single_point() {
        let geometry = Geometry::Polygon(vec![ring(&[(0.0, 0.0)])]);
        let moved = translate(&geometry, LatLng::new(0.0, 0.0), LatLng::new(0.0, 10.0));

        assert_eq!(moved, Geometry::Polygon(vec![ring(&[(10.0, 0.0)])]));
    }

    #[test]
    fn test_translate_multipolygon() {
        let geometry = Geometry::MultiPolygon(vec![
            vec![unit_square(0.0, 0.0)],
            vec![unit_square(10.0, 20.0), unit_square(10.2, 20.2)],
        ]);
        let moved = translate(&geometry, LatLng::new(1.0, 2.0), LatLng::new(-4.0, 7.5));

        assert_eq!(moved.vertex_count(), geometry.vertex_count());
        for (before, after) in geometry.coords().zip(moved.coords()) {
            assert!((after.x - before.x - 5.5).abs() < 1e-12);
            assert!((after.y - before.y + 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_translate_zero_offset_is_identity() {
        let geometry = Geometry::Polygon(vec![unit_square(-73.5, 40.25)]);
        let center = LatLng::new(40.75, -73.0);
        assert_eq!(translate(&geometry, center, center), geometry);
    }
}
