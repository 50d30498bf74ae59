use geo::coord;

use super::{Geometry, LatLng};

/// Rotate every vertex about `center` in the longitude/latitude plane.
///
/// Positive angles turn counter-clockwise, as in `geo::Rotate`. A zero angle
/// returns an exact copy.
pub fn rotate_about(geometry: &Geometry, center: LatLng, angle_deg: f64) -> Geometry {
    if angle_deg == 0.0 {
        return geometry.clone();
    }

    let (sin, cos) = angle_deg.to_radians().sin_cos();
    geometry.map_coords(|c| {
        let dx = c.x - center.lng;
        let dy = c.y - center.lat;
        coord! {
            x: center.lng + dx * cos - dy * sin,
            y: center.lat + dx * sin + dy * cos,
        }
    })
}
