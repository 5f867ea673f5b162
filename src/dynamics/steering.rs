//! Steering-angle bookkeeping: driver increments, the centripetal clamp, and
//! self-centering once the wheel is released.

use crate::config::STEERING_SNAP_DEG;

/// Orthogonal steering sub-state of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SteeringMode {
    #[default]
    Straight,
    SteeringLeft,
    SteeringRight,
    Returning,
}

/// Adds one steering increment (positive = left) and clamps to full lock.
pub fn nudge(angle_deg: f64, delta_deg: f64, max_angle_deg: f64) -> f64 {
    (angle_deg + delta_deg).clamp(-max_angle_deg, max_angle_deg)
}

/// Limits the steering magnitude to `limit_rad`, preserving its sign.
pub fn clamp_to_limit(angle_deg: f64, limit_rad: f64) -> f64 {
    let limit_deg = limit_rad.to_degrees().abs();
    if angle_deg.abs() > limit_deg {
        limit_deg.copysign(angle_deg)
    } else {
        angle_deg
    }
}

/// Multiplier applied to the steering angle on one self-centering step.
///
/// At rest the wheel loses `return_rate` of its angle per step; at top speed
/// it loses half as much.
pub fn self_centering_factor(return_rate: f64, speed_ratio: f64) -> f64 {
    let ratio = if speed_ratio.is_finite() {
        speed_ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let rate = return_rate.clamp(0.0, 1.0);
    1.0 - rate * (1.0 - 0.5 * ratio)
}

/// One self-centering step; small angles snap to exactly zero.
pub fn return_to_center(angle_deg: f64, return_rate: f64, speed_ratio: f64) -> f64 {
    let next = angle_deg * self_centering_factor(return_rate, speed_ratio);
    if next.abs() < STEERING_SNAP_DEG {
        0.0
    } else {
        next
    }
}
