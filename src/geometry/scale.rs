use geo::coord;

use super::{Geometry, LatLng};
use crate::error::{GeometryError, Result};

/// Smallest |latitude| used when computing a secant, keeps the equator finite
pub const MIN_LATITUDE: f64 = 0.1;
/// Largest |latitude| used when computing a secant, avoids the pole blow-up
pub const MAX_LATITUDE: f64 = 85.0;
/// Factors within this distance of 1.0 are ignored to avoid jitter while dragging
pub const DEAD_ZONE: f64 = 0.01;

/// Rescales the east-west extent of a shape for the secant of its latitude.
///
/// A shape drawn at latitude L and shown at latitude L' covers
/// `sec(L') / sec(L)` times as many degrees of longitude for the same ground
/// width. Latitude spans are left untouched, so this is a width-only
/// approximation of Mercator distortion, not a reprojection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleCorrector {
    min_latitude: f64,
    max_latitude: f64,
    dead_zone: f64,
}

impl Default for ScaleCorrector {
    fn default() -> Self {
        Self {
            min_latitude: MIN_LATITUDE,
            max_latitude: MAX_LATITUDE,
            dead_zone: DEAD_ZONE,
        }
    }
}

impl ScaleCorrector {
    /// Create a corrector with custom clamp bounds and dead zone
    ///
    /// # Errors
    /// * `InvalidCorrection` unless `0 <= min_latitude < max_latitude < 90`
    ///   and `dead_zone` is finite and non-negative
    pub fn new(min_latitude: f64, max_latitude: f64, dead_zone: f64) -> Result<Self> {
        if !(min_latitude >= 0.0 && min_latitude < max_latitude && max_latitude < 90.0) {
            return Err(GeometryError::InvalidCorrection(format!(
                "latitude clamp must satisfy 0 <= min < max < 90, got [{}, {}]",
                min_latitude, max_latitude
            )));
        }
        if !(dead_zone.is_finite() && dead_zone >= 0.0) {
            return Err(GeometryError::InvalidCorrection(format!(
                "dead zone must be a non-negative number, got {}",
                dead_zone
            )));
        }

        Ok(Self {
            min_latitude,
            max_latitude,
            dead_zone,
        })
    }

    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    pub fn dead_zone(&self) -> f64 {
        self.dead_zone
    }

    /// Absolute latitude limited to the clamp range
    pub fn clamp_latitude(&self, lat: f64) -> f64 {
        lat.abs().clamp(self.min_latitude, self.max_latitude)
    }

    /// Longitude scale factor for moving a shape from `original_lat` to `new_lat`
    pub fn scale_factor(&self, original_lat: f64, new_lat: f64) -> f64 {
        let secant = |lat: f64| 1.0 / self.clamp_latitude(lat).to_radians().cos();
        secant(new_lat) / secant(original_lat)
    }

    pub fn in_dead_zone(&self, factor: f64) -> bool {
        (factor - 1.0).abs() < self.dead_zone
    }

    /// Stretch longitudes around `new_center.lng` by the scale factor.
    ///
    /// The geometry is expected to already sit at `new_center`. Inside the
    /// dead zone the input is returned unchanged.
    pub fn correct(
        &self,
        geometry: &Geometry,
        original_center: LatLng,
        new_center: LatLng,
    ) -> Geometry {
        let factor = self.scale_factor(original_center.lat, new_center.lat);
        if self.in_dead_zone(factor) {
            return geometry.clone();
        }

        let pivot = new_center.lng;
        geometry.map_coords(|c| coord! { x: pivot + (c.x - pivot) * factor, y: c.y })
    }
}

/// Scale correction with the default clamp range and dead zone
pub fn correct_scale(geometry: &Geometry, original_center: LatLng, new_center: LatLng) -> Geometry {
    ScaleCorrector::default().correct(geometry, original_center, new_center)
}
