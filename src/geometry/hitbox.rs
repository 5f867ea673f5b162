use glam::DVec2;

use crate::config::{HITBOX_LENGTH_SCALE, HITBOX_WIDTH_SCALE};
use crate::core::{VehicleSpec, VehicleState};

/// Rotates a vehicle-frame point by the heading and moves it into world space.
///
/// Screen Y grows downward while headings turn counter-clockwise, hence the
/// sign on the sine terms.
pub fn local_to_world(local: DVec2, heading_deg: f64, origin: DVec2) -> DVec2 {
    let (sin, cos) = heading_deg.to_radians().sin_cos();
    DVec2::new(
        local.x * cos + local.y * sin + origin.x,
        -local.x * sin + local.y * cos + origin.y,
    )
}

/// Half length and half width of the shrunk collision rectangle.
pub fn hitbox_half_extents(spec: &VehicleSpec) -> DVec2 {
    DVec2::new(
        spec.width_px * HITBOX_LENGTH_SCALE / 2.0,
        spec.height_px * HITBOX_WIDTH_SCALE / 2.0,
    )
}

/// Corners of the debug hitbox in world space, ordered front-left,
/// front-right, rear-right, rear-left.
pub fn hitbox_polygon(state: &VehicleState, spec: &VehicleSpec) -> [DVec2; 4] {
    let half = hitbox_half_extents(spec);
    [
        DVec2::new(half.x, -half.y),
        DVec2::new(half.x, half.y),
        DVec2::new(-half.x, half.y),
        DVec2::new(-half.x, -half.y),
    ]
    .map(|corner| local_to_world(corner, state.heading_deg, state.position_global))
}

/// Half extents of the axis-aligned box around the rotated sprite.
pub fn rendered_half_extents(spec: &VehicleSpec, heading_deg: f64) -> DVec2 {
    let (sin, cos) = heading_deg.to_radians().sin_cos();
    let half_w = spec.width_px / 2.0;
    let half_h = spec.height_px / 2.0;
    DVec2::new(
        half_w * cos.abs() + half_h * sin.abs(),
        half_w * sin.abs() + half_h * cos.abs(),
    )
}
