use glam::DVec2;

use crate::utils::math::{finite_or, normalize_degrees};

/// Per-step heading change from the bicycle model, in degrees.
///
/// A stationary vehicle does not turn regardless of the steering angle.
pub fn heading_rate_deg(local_speed: f64, steering_angle_deg: f64, wheelbase_px: f64, dt: f64) -> f64 {
    if wheelbase_px.abs() < f64::EPSILON {
        return 0.0;
    }
    let rate_rad = local_speed * steering_angle_deg.to_radians().sin() / wheelbase_px * dt;
    finite_or(rate_rad.to_degrees(), 0.0)
}

pub fn integrate_heading(heading_deg: f64, rate_deg: f64) -> f64 {
    normalize_degrees(heading_deg + rate_deg)
}

/// Result of advancing the longitudinal speed by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedUpdate {
    pub speed: f64,
    pub accel: f64,
}

/// Integrates speed, clamping to `max_speed` and never letting a deceleration
/// carry a forward-moving vehicle into reverse.
pub fn integrate_speed(speed: f64, accel: f64, max_speed: f64, dt: f64) -> SpeedUpdate {
    let mut next = speed + accel * dt;
    let mut accel = accel;

    if next > max_speed {
        next = max_speed;
    }
    if speed >= 0.0 && next < 0.0 {
        next = 0.0;
        accel = 0.0;
    }

    SpeedUpdate {
        speed: finite_or(next, 0.0),
        accel,
    }
}

/// Projects a longitudinal quantity into screen space (Y grows downward).
pub fn project_to_global(magnitude: f64, heading_deg: f64) -> DVec2 {
    let theta = heading_deg.to_radians();
    DVec2::new(magnitude * theta.cos(), -magnitude * theta.sin())
}

pub fn integrate_position(position: DVec2, velocity: DVec2, dt: f64) -> DVec2 {
    let next = position + velocity * dt;
    if next.is_finite() {
        next
    } else {
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_wheels_do_not_turn() {
        assert_eq!(heading_rate_deg(200.0, 0.0, 70.0, 1.0 / 60.0), 0.0);
    }

    #[test]
    fn stationary_vehicle_does_not_turn() {
        assert_eq!(heading_rate_deg(0.0, 30.0, 70.0, 1.0 / 60.0), 0.0);
    }

    #[test]
    fn speed_never_overshoots_the_cap() {
        let update = integrate_speed(9.9, 100.0, 10.0, 1.0);
        assert_eq!(update.speed, 10.0);
    }

    #[test]
    fn deceleration_floors_at_zero() {
        let update = integrate_speed(0.1, -30.0, 10.0, 1.0 / 60.0);
        assert_eq!(update.speed, 0.0);
        assert_eq!(update.accel, 0.0);
    }

    #[test]
    fn projection_flips_screen_y() {
        let v = project_to_global(10.0, 90.0);
        assert!(v.x.abs() < 1e-9);
        assert!((v.y + 10.0).abs() < 1e-9);
    }
}
