//! Read-only snapshot of a vehicle for HUD and debug overlays.

use std::fmt;

use glam::DVec2;
use serde::Serialize;

use crate::core::units;
use crate::dynamics::Vehicle;

/// Values an external HUD shows each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Telemetry {
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    pub heading_deg: f64,
    pub steering_angle_deg: f64,
    pub heading_rate_deg_per_step: f64,
    /// Signed; the straight-line sentinel when the wheels are centered.
    pub turning_radius_px: f64,
    pub speed_mph: f64,
}

impl Telemetry {
    pub fn capture(vehicle: &Vehicle) -> Self {
        let state = vehicle.state();
        Self {
            position: state.position_global,
            velocity: state.velocity_global(),
            acceleration: state.accel_global(),
            heading_deg: state.heading_deg,
            steering_angle_deg: state.steering_angle_deg,
            heading_rate_deg_per_step: state.heading_rate_deg_per_step(),
            turning_radius_px: units::turning_radius_px(
                state.steering_angle_deg,
                vehicle.spec().wheelbase_px,
            ),
            speed_mph: vehicle.speed_mph(),
        }
    }

    /// Magnitude of the screen-space velocity.
    pub fn global_speed(&self) -> f64 {
        self.velocity.length()
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "px: {:>10.2}, py: {:>5.2}", self.position.x, self.position.y)?;
        writeln!(f, "vx: {:>10.2}, vy: {:>5.2}", self.velocity.x, self.velocity.y)?;
        writeln!(f, "ax: {:>10.2}, ay: {:>5.2}", self.acceleration.x, self.acceleration.y)?;
        writeln!(f, "Angle: {:>10.2}", self.heading_deg)?;
        write!(
            f,
            "Steer: {:>10.2}, mph: {:>5.2}",
            self.steering_angle_deg, self.speed_mph
        )
    }
}
