use super::{BoundaryFeature, CloneStyle};
use crate::error::Result;
use crate::geometry::{Geometry, LatLng, ScaleCorrector, centroid_of, rotate_about, translate};

/// Relocated geometry for one step of a drag
#[derive(Debug, Clone)]
pub struct DragFrame {
    pub center: LatLng,
    pub geometry: Geometry,
}

/// A styled copy of a boundary that can be moved around the map.
///
/// Every move starts again from the untouched source geometry, so moving
/// back and forth never accumulates rounding or scaling error.
#[derive(Debug, Clone)]
pub struct DraggableClone {
    source: BoundaryFeature,
    style: CloneStyle,
    origin: LatLng,
    rotation: f64,
    corrector: ScaleCorrector,
}

impl DraggableClone {
    /// # Errors
    /// * `EmptyGeometry` if the feature has no vertices to take a centre from
    pub fn new(source: BoundaryFeature, style: CloneStyle) -> Result<Self> {
        let origin = centroid_of(&source.geometry)?;
        Ok(Self {
            source,
            style,
            origin,
            rotation: 0.0,
            corrector: ScaleCorrector::default(),
        })
    }

    pub fn with_corrector(mut self, corrector: ScaleCorrector) -> Self {
        self.corrector = corrector;
        self
    }

    /// Turn the clone by `degrees`, counter-clockwise, about its centre
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn source(&self) -> &BoundaryFeature {
        &self.source
    }

    pub fn style(&self) -> &CloneStyle {
        &self.style
    }

    /// Centre of the source geometry
    pub fn origin(&self) -> LatLng {
        self.origin
    }

    /// Geometry of the clone centred at `center`, at its true size.
    ///
    /// Rotation happens at the destination before the width correction, so
    /// the turned shape is stretched along the local east-west axis.
    pub fn move_to(&self, center: LatLng) -> Geometry {
        let moved = translate(&self.source.geometry, self.origin, center);
        let turned = rotate_about(&moved, center, self.rotation);
        self.corrector.correct(&turned, self.origin, center)
    }

    /// Straight-line drag from the origin to `to`.
    ///
    /// Returns `steps` frames (at least one); the last frame is centred
    /// exactly on `to`.
    pub fn drag_frames(&self, to: LatLng, steps: usize) -> Vec<DragFrame> {
        let steps = steps.max(1);
        (1..=steps)
            .map(|i| {
                let center = if i == steps {
                    to
                } else {
                    let t = i as f64 / steps as f64;
                    LatLng::new(
                        self.origin.lat + (to.lat - self.origin.lat) * t,
                        self.origin.lng + (to.lng - self.origin.lng) * t,
                    )
                };
                DragFrame {
                    center,
                    geometry: self.move_to(center),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeatureKind, Palette};
    use crate::error::GeometryError;
    use crate::geometry::tests::{ring, unit_square};
    use crate::geometry::{correct_scale, relocate};

    fn clone_of_square() -> DraggableClone {
        let feature = BoundaryFeature::new(
            "Square",
            FeatureKind::Country,
            Geometry::Polygon(vec![unit_square(10.0, 40.0)]),
        );
        DraggableClone::new(feature, Palette::new().next_style()).unwrap()
    }

    #[test]
    fn test_origin_is_vertex_centroid() {
        let clone = clone_of_square();
        assert!((clone.origin().lat - 40.4).abs() < 1e-12);
        assert!((clone.origin().lng - 10.4).abs() < 1e-12);
        assert_eq!(clone.style().color, "#e6194B");
    }

    #[test]
    fn test_empty_feature_rejected() {
        let feature = BoundaryFeature::new("Nowhere", FeatureKind::State, Geometry::Polygon(vec![]));
        let err = DraggableClone::new(feature, Palette::new().next_style()).unwrap_err();
        assert_eq!(err, GeometryError::EmptyGeometry);
    }

    #[test]
    fn test_moves_do_not_accumulate() {
        let clone = clone_of_square();
        let north = LatLng::new(65.0, 10.4);

        let direct = clone.move_to(north);
        let _ = clone.move_to(LatLng::new(-30.0, 100.0));
        let again = clone.move_to(north);
        assert_eq!(direct, again);

        let back = clone.move_to(clone.origin());
        assert_eq!(&back, &clone.source().geometry);
    }

    #[test]
    fn test_drag_frames() {
        let clone = clone_of_square();
        let to = LatLng::new(60.4, -20.0);
        let frames = clone.drag_frames(to, 4);

        assert_eq!(frames.len(), 4);
        assert_eq!(frames[3].center, to);
        assert!((frames[1].center.lat - 50.4).abs() < 1e-9);
        assert!((frames[1].center.lng - (-4.8)).abs() < 1e-9);

        let last = relocate(&clone.source().geometry, clone.origin(), to);
        assert_eq!(frames[3].geometry, last);

        for frame in &frames {
            assert_eq!(frame.geometry.vertex_count(), 5);
        }
    }

    #[test]
    fn test_drag_frames_zero_steps() {
        let clone = clone_of_square();
        let frames = clone.drag_frames(LatLng::new(0.0, 0.0), 0);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].center, LatLng::new(0.0, 0.0));
    }

    #[test]
    fn test_unrotated_move_matches_relocate() {
        let clone = clone_of_square().with_rotation(0.0);
        let to = LatLng::new(-55.0, 140.0);
        assert_eq!(
            clone.move_to(to),
            relocate(&clone.source().geometry, clone.origin(), to)
        );
    }

    #[test]
    fn test_rotation_applies_before_correction() {
        // East-west bar on the equator, moved to 60N where the factor is 2
        let feature = BoundaryFeature::new(
            "Bar",
            FeatureKind::State,
            Geometry::Polygon(vec![ring(&[(-2.0, 0.0), (2.0, 0.0)])]),
        );
        let clone = DraggableClone::new(feature, Palette::new().next_style())
            .unwrap()
            .with_rotation(90.0);
        assert_eq!(clone.rotation(), 90.0);

        let to = LatLng::new(60.0, 30.0);
        let moved = clone.move_to(to);
        assert_eq!(moved.vertex_count(), 2);

        // A quarter turn makes the bar north-south, so the east-west stretch
        // leaves it on the destination meridian.
        let expected = correct_scale(
            &Geometry::Polygon(vec![ring(&[(30.0, 58.0), (30.0, 62.0)])]),
            clone.origin(),
            to,
        );
        for (got, want) in moved.coords().zip(expected.coords()) {
            assert!((got.x - want.x).abs() < 1e-9);
            assert!((got.y - want.y).abs() < 1e-9);
        }
        for c in moved.coords() {
            assert!((c.x - 30.0).abs() < 1e-9);
        }
    }
}
