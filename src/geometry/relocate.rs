use super::{Geometry, LatLng, ScaleCorrector, translate};

/// Move a shape from `original_center` to `new_center` and correct its width.
///
/// Translation runs first because the correction pivots around the
/// destination centre.
pub fn relocate(geometry: &Geometry, original_center: LatLng, new_center: LatLng) -> Geometry {
    relocate_with(&ScaleCorrector::default(), geometry, original_center, new_center)
}

/// [`relocate`] with a caller-supplied corrector
pub fn relocate_with(
    corrector: &ScaleCorrector,
    geometry: &Geometry,
    original_center: LatLng,
    new_center: LatLng,
) -> Geometry {
    let moved = translate(geometry, original_center, new_center);
    corrector.correct(&moved, original_center, new_center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::centroid_of;
    use crate::geometry::tests::{ring, unit_square};

    fn sample_multipolygon() -> Geometry {
        Geometry::MultiPolygon(vec![
            vec![
                ring(&[(-5.0, 50.0), (2.0, 50.0), (2.0, 58.0), (-5.0, 58.0), (-5.0, 50.0)]),
                unit_square(-1.0, 53.0),
            ],
            vec![ring(&[(-8.0, 52.0), (-6.0, 52.0), (-7.0, 55.0), (-8.0, 52.0)])],
        ])
    }

    #[test]
    fn test_relocate_same_center_is_identity() {
        let geometry = sample_multipolygon();
        for center in [
            LatLng::new(0.0, 0.0),
            LatLng::new(54.0, -2.0),
            LatLng::new(-89.0, 179.0),
        ] {
            assert_eq!(relocate(&geometry, center, center), geometry);
        }
    }

    #[test]
    fn test_relocate_preserves_vertex_count() {
        let geometry = sample_multipolygon();
        let moved = relocate(&geometry, LatLng::new(54.0, -2.0), LatLng::new(5.0, 30.0));

        assert_eq!(moved.vertex_count(), geometry.vertex_count());
        assert_eq!(moved.ring_count(), geometry.ring_count());
        assert_eq!(moved.kind(), "MultiPolygon");
    }

    #[test]
    fn test_relocate_translation_only_at_equator() {
        let geometry = Geometry::Polygon(vec![ring(&[(0.0, 0.0)])]);
        let moved = relocate(&geometry, LatLng::new(0.0, 0.0), LatLng::new(0.0, 10.0));
        assert_eq!(moved, Geometry::Polygon(vec![ring(&[(10.0, 0.0)])]));
    }

    #[test]
    fn test_relocate_dead_zone_only_translates() {
        let geometry = Geometry::Polygon(vec![unit_square(3.0, 9.5)]);
        let original = LatLng::new(10.0, 3.5);
        let target = LatLng::new(10.05, 3.5);
        let moved = relocate(&geometry, original, target);

        for (before, after) in geometry.coords().zip(moved.coords()) {
            assert_eq!(after.x, before.x);
            assert!((after.y - before.y - 0.05).abs() < 1e-12);
        }
    }

    #[test]
    fn test_relocate_square_from_40_to_60() {
        let geometry = Geometry::Polygon(vec![ring(&[
            (0.0, 40.0),
            (1.0, 40.0),
            (1.0, 41.0),
            (0.0, 41.0),
            (0.0, 40.0),
        ])]);
        let moved = relocate(&geometry, LatLng::new(40.5, 0.5), LatLng::new(60.5, 0.5));

        let factor = 40.5_f64.to_radians().cos() / 60.5_f64.to_radians().cos();
        let coords: Vec<_> = moved.coords().copied().collect();
        assert_eq!(coords.len(), 5);

        let expected = [
            (0.5 - 0.5 * factor, 60.0),
            (0.5 + 0.5 * factor, 60.0),
            (0.5 + 0.5 * factor, 61.0),
            (0.5 - 0.5 * factor, 61.0),
            (0.5 - 0.5 * factor, 60.0),
        ];
        for (c, (x, y)) in coords.iter().zip(expected) {
            assert!((c.x - x).abs() < 1e-9, "lng {} != {}", c.x, x);
            assert!((c.y - y).abs() < 1e-9, "lat {} != {}", c.y, y);
        }

        // Width grows in degrees so the ground width stays the same
        let width = coords[1].x - coords[0].x;
        assert!((width - factor).abs() < 1e-9);
        assert!((factor - 1.544).abs() < 0.001);
    }

    #[test]
    fn test_relocate_keeps_destination_as_pivot() {
        let geometry = sample_multipolygon();
        let original = centroid_of(&geometry).unwrap();
        let target = LatLng::new(-20.0, 135.0);
        let moved = relocate(&geometry, original, target);

        let center = centroid_of(&moved).unwrap();
        assert!((center.lat - target.lat).abs() < 1e-9);
        assert!((center.lng - target.lng).abs() < 1e-9);
    }

    #[test]
    fn test_relocate_with_custom_corrector() {
        let geometry = Geometry::Polygon(vec![unit_square(0.0, 0.0)]);
        let never = ScaleCorrector::new(0.1, 85.0, 100.0).unwrap();
        let moved = relocate_with(&never, &geometry, LatLng::new(0.5, 0.5), LatLng::new(70.5, 0.5));

        // Huge dead zone disables correction, leaving a pure translation
        let coords: Vec<_> = moved.coords().copied().collect();
        assert_eq!(coords[0].x, 0.0);
        assert_eq!(coords[1].x, 1.0);
        assert!((coords[0].y - 70.0).abs() < 1e-12);
    }
}
