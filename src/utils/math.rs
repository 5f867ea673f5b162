//! Angle helpers shared by the integrator and geometry.

/// Wraps an angle into `[0, 360)`, whatever the magnitude or sign of the input.
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Returns `value` when finite, `fallback` otherwise.
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
