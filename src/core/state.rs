use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Position and orientation handed to the presentation layer after each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec2,
    pub heading_deg: f64,
}

/// Full kinematic state of one vehicle.
///
/// The `local_*` fields live in the vehicle frame (along its longitudinal
/// axis); the `*_global` fields are screen-space projections rebuilt on every
/// step and are read-only outside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position_global: DVec2,
    /// Degrees counter-clockwise from +X, kept in `[0, 360)`.
    pub heading_deg: f64,
    pub local_speed: f64,
    pub local_accel: f64,
    pub(crate) velocity_global: DVec2,
    pub(crate) accel_global: DVec2,
    pub steering_angle_deg: f64,
    pub(crate) heading_rate_deg_per_step: f64,
}

impl VehicleState {
    /// Vehicle at rest at `position`, pointing along +X.
    pub fn at(position: DVec2) -> Self {
        Self {
            position_global: position,
            heading_deg: 0.0,
            local_speed: 0.0,
            local_accel: 0.0,
            velocity_global: DVec2::ZERO,
            accel_global: DVec2::ZERO,
            steering_angle_deg: 0.0,
            heading_rate_deg_per_step: 0.0,
        }
    }

    pub fn velocity_global(&self) -> DVec2 {
        self.velocity_global
    }

    pub fn accel_global(&self) -> DVec2 {
        self.accel_global
    }

    pub fn heading_rate_deg_per_step(&self) -> f64 {
        self.heading_rate_deg_per_step
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position_global,
            heading_deg: self.heading_deg,
        }
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::at(DVec2::ZERO)
    }
}
