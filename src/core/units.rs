//! Conversions from designer units (mph, seconds, g) into simulation units.
//!
//! Nothing here is cached: every function reads the [`VehicleSpec`] it is
//! handed, so live edits are visible immediately. Lengths move from feet to
//! pixels as `feet / pixels_per_foot`.

use super::spec::VehicleSpec;
use crate::config::{
    FEET_PER_MILE, G_FT_S2, SECONDS_PER_HOUR, SIXTY_MPH, TURNING_RADIUS_STRAIGHT_PX,
};

/// Converts miles per hour into feet per second.
pub fn mph_to_ft_s(mph: f64) -> f64 {
    mph * FEET_PER_MILE / SECONDS_PER_HOUR
}

/// Converts feet per second into miles per hour.
pub fn ft_s_to_mph(ft_s: f64) -> f64 {
    ft_s * SECONDS_PER_HOUR / FEET_PER_MILE
}

/// Rendered vehicle width divided by its assumed real length.
pub fn pixels_per_foot(spec: &VehicleSpec) -> f64 {
    spec.width_px / spec.vehicle_length_ft
}

fn feet_to_px(spec: &VehicleSpec, feet: f64) -> f64 {
    feet / pixels_per_foot(spec)
}

fn px_to_feet(spec: &VehicleSpec, px: f64) -> f64 {
    px * pixels_per_foot(spec)
}

/// Engine acceleration implied by the 0-60 time, in px/s².
pub fn max_accel_px_s2(spec: &VehicleSpec) -> f64 {
    feet_to_px(spec, mph_to_ft_s(SIXTY_MPH) / spec.zero_to_sixty_time_sec)
}

pub fn max_speed_px_s(spec: &VehicleSpec) -> f64 {
    feet_to_px(spec, mph_to_ft_s(spec.top_speed_mph))
}

/// Rolling friction as a (negative) longitudinal acceleration, in px/s².
pub fn friction_decel_px_s2(spec: &VehicleSpec) -> f64 {
    -feet_to_px(spec, spec.friction_decel_g * G_FT_S2)
}

/// Braking as a (negative) longitudinal acceleration, in px/s².
pub fn brake_decel_px_s2(spec: &VehicleSpec) -> f64 {
    -feet_to_px(spec, spec.brake_decel_g * G_FT_S2)
}

pub fn max_centripetal_accel_px_s2(spec: &VehicleSpec) -> f64 {
    feet_to_px(spec, spec.max_centripetal_accel_g * G_FT_S2)
}

/// Converts a simulation speed back into miles per hour.
pub fn speed_mph(spec: &VehicleSpec, speed_px_s: f64) -> f64 {
    ft_s_to_mph(px_to_feet(spec, speed_px_s))
}

/// Radius of the circle traced at a fixed steering angle.
///
/// A wheel pointed straight ahead reports [`TURNING_RADIUS_STRAIGHT_PX`]
/// instead of an infinite radius.
pub fn turning_radius_px(steering_angle_deg: f64, wheelbase_px: f64) -> f64 {
    let tan = steering_angle_deg.to_radians().tan();
    if tan.abs() < f64::EPSILON {
        return TURNING_RADIUS_STRAIGHT_PX;
    }
    let radius = wheelbase_px / tan;
    if radius.is_finite() {
        radius
    } else {
        TURNING_RADIUS_STRAIGHT_PX.copysign(radius)
    }
}

/// Largest steering angle whose centripetal acceleration `v² tan(δ) / wb`
/// stays within the configured budget, capped at full lock.
///
/// At a standstill there is no lateral load, so the configured maximum
/// steering angle is returned.
pub fn max_theoretical_steering_angle_rad(
    local_speed: f64,
    wheelbase_px: f64,
    max_centripetal_accel_px_s2: f64,
    max_steering_angle_deg: f64,
) -> f64 {
    let speed_sq = local_speed * local_speed;
    if speed_sq < f64::EPSILON {
        return max_steering_angle_deg.to_radians();
    }
    (wheelbase_px * max_centripetal_accel_px_s2 / speed_sq)
        .atan()
        .min(max_steering_angle_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mph_round_trip() {
        assert!((ft_s_to_mph(mph_to_ft_s(60.0)) - 60.0).abs() < 1e-12);
        assert!((mph_to_ft_s(60.0) - 88.0).abs() < 1e-12);
    }

    #[test]
    fn decelerations_are_negative() {
        let spec = VehicleSpec::default();
        assert!(friction_decel_px_s2(&spec) < 0.0);
        assert!(brake_decel_px_s2(&spec) < friction_decel_px_s2(&spec));
    }

    #[test]
    fn straight_wheels_report_sentinel_radius() {
        assert_eq!(turning_radius_px(0.0, 70.0), TURNING_RADIUS_STRAIGHT_PX);
        assert!(turning_radius_px(-0.0, 70.0).is_finite());
    }

    #[test]
    fn standstill_allows_full_lock() {
        let angle = max_theoretical_steering_angle_rad(0.0, 70.0, 6.0, 35.0);
        assert!((angle - 35.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn faster_speed_tightens_steering_limit() {
        let slow = max_theoretical_steering_angle_rad(10.0, 70.0, 6.0, 35.0);
        let fast = max_theoretical_steering_angle_rad(30.0, 70.0, 6.0, 35.0);
        assert!(fast < slow);
    }
}
