use glam::DVec2;
use log::{debug, info};

use super::integrator::{
    heading_rate_deg, integrate_heading, integrate_position, integrate_speed, project_to_global,
};
use super::steering::{self, SteeringMode};
use crate::config::ACCEL_MATCH_EPSILON;
use crate::console::ConfigField;
use crate::core::{units, Pose, VehicleSpec, VehicleState};
use crate::error::Result;
use crate::geometry::{rendered_half_extents, wrap_position, Viewport};
use crate::utils::logging::ScopedTimer;
use crate::utils::math::{finite_or, normalize_degrees};

/// Longitudinal sub-state, read off the acceleration currently in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudinalMode {
    Idle,
    Accelerating,
    Coasting,
    Braking,
}

/// One driver-controlled vehicle advanced on a fixed time step.
///
/// Control calls only set the longitudinal acceleration or the steering
/// angle; all integration happens in [`Vehicle::step`], which must run
/// exactly once per frame after that frame's control calls.
#[derive(Debug, Clone)]
pub struct Vehicle {
    state: VehicleState,
    spec: VehicleSpec,
    viewport: Viewport,
    steering_mode: SteeringMode,
}

impl Vehicle {
    /// Places a vehicle at rest at `position`.
    pub fn new(position: DVec2, spec: VehicleSpec, viewport: Viewport) -> Result<Self> {
        Self::with_state(VehicleState::at(position), spec, viewport)
    }

    /// Resumes a vehicle from an existing kinematic state.
    ///
    /// The heading is normalized and speed and steering are pulled back
    /// within the limits of `spec`.
    pub fn with_state(
        mut state: VehicleState,
        spec: VehicleSpec,
        viewport: Viewport,
    ) -> Result<Self> {
        spec.validate()?;
        let incoming = state;
        let max_speed = units::max_speed_px_s(&spec);
        state.heading_deg = normalize_degrees(finite_or(state.heading_deg, 0.0));
        state.local_speed = finite_or(state.local_speed, 0.0).clamp(-max_speed, max_speed);
        state.steering_angle_deg = finite_or(state.steering_angle_deg, 0.0)
            .clamp(-spec.max_steering_angle_deg, spec.max_steering_angle_deg);
        if state != incoming {
            debug!(
                "initial state adjusted: heading {:.2} -> {:.2}, speed {:.2} -> {:.2}, steering {:.2} -> {:.2}",
                incoming.heading_deg,
                state.heading_deg,
                incoming.local_speed,
                state.local_speed,
                incoming.steering_angle_deg,
                state.steering_angle_deg
            );
        }
        info!(
            "vehicle ready at ({:.1}, {:.1}), top speed {:.2} px/s, {:.3} px/ft",
            state.position_global.x,
            state.position_global.y,
            units::max_speed_px_s(&spec),
            units::pixels_per_foot(&spec)
        );
        let mut vehicle = Self {
            state,
            spec,
            viewport,
            steering_mode: SteeringMode::Straight,
        };
        vehicle.refresh_global();
        Ok(vehicle)
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    /// Replaces the configuration; the old one stays on validation failure.
    pub fn set_spec(&mut self, spec: VehicleSpec) -> Result<()> {
        spec.validate()?;
        self.spec = spec;
        Ok(())
    }

    /// Applies a single named edit, as typed into the console.
    pub fn apply_edit(&mut self, field: &str, value: &str) -> Result<()> {
        let field: ConfigField = field.parse()?;
        self.spec.set_field(field, value)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn steering_mode(&self) -> SteeringMode {
        self.steering_mode
    }

    pub fn longitudinal_mode(&self) -> LongitudinalMode {
        let accel = self.state.local_accel;
        if accel > 0.0 {
            LongitudinalMode::Accelerating
        } else if accel == 0.0 {
            LongitudinalMode::Idle
        } else if (accel - units::brake_decel_px_s2(&self.spec)).abs() < ACCEL_MATCH_EPSILON {
            LongitudinalMode::Braking
        } else {
            LongitudinalMode::Coasting
        }
    }

    /// Current speed expressed in miles per hour.
    pub fn speed_mph(&self) -> f64 {
        units::speed_mph(&self.spec, self.state.local_speed)
    }

    pub fn accelerate(&mut self) {
        self.state.local_accel = units::max_accel_px_s2(&self.spec);
    }

    pub fn decelerate_frictionally(&mut self) {
        self.state.local_accel = units::friction_decel_px_s2(&self.spec);
    }

    /// Brakes while moving forward; at or below zero speed the vehicle is
    /// held at rest instead of creeping backwards.
    pub fn brake(&mut self) {
        if self.state.local_speed > 0.0 {
            self.state.local_accel = units::brake_decel_px_s2(&self.spec);
        } else {
            if self.state.local_speed != 0.0 || self.state.local_accel != 0.0 {
                debug!("brake held at standstill, zeroing speed");
            }
            self.state.local_accel = 0.0;
            self.state.local_speed = 0.0;
        }
    }

    pub fn steer_left(&mut self) {
        self.state.steering_angle_deg = steering::nudge(
            self.state.steering_angle_deg,
            self.spec.steering_step_deg,
            self.spec.max_steering_angle_deg,
        );
        self.steering_mode = SteeringMode::SteeringLeft;
    }

    pub fn steer_right(&mut self) {
        self.state.steering_angle_deg = steering::nudge(
            self.state.steering_angle_deg,
            -self.spec.steering_step_deg,
            self.spec.max_steering_angle_deg,
        );
        self.steering_mode = SteeringMode::SteeringRight;
    }

    /// Lets the wheel self-center; it returns faster at low speed.
    pub fn release_steering(&mut self) {
        let max_speed = units::max_speed_px_s(&self.spec);
        let ratio = if max_speed > 0.0 {
            self.state.local_speed.abs() / max_speed
        } else {
            0.0
        };
        self.state.steering_angle_deg = steering::return_to_center(
            self.state.steering_angle_deg,
            self.spec.steering_return_rate,
            ratio,
        );
        self.steering_mode = if self.state.steering_angle_deg == 0.0 {
            SteeringMode::Straight
        } else {
            SteeringMode::Returning
        };
    }

    /// Advances the vehicle by one fixed time step and returns its new pose.
    pub fn step(&mut self) -> Pose {
        let _timer = ScopedTimer::new("vehicle::step");
        let dt = self.spec.time_step_sec;

        self.check_auto_stop();
        self.apply_centripetal_limit();

        self.state.heading_rate_deg_per_step = heading_rate_deg(
            self.state.local_speed,
            self.state.steering_angle_deg,
            self.spec.wheelbase_px,
            dt,
        );
        self.state.heading_deg =
            integrate_heading(self.state.heading_deg, self.state.heading_rate_deg_per_step);

        let update = integrate_speed(
            self.state.local_speed,
            self.state.local_accel,
            units::max_speed_px_s(&self.spec),
            dt,
        );
        self.state.local_speed = update.speed;
        self.state.local_accel = update.accel;

        self.refresh_global();
        self.state.position_global =
            integrate_position(self.state.position_global, self.state.velocity_global, dt);

        if self.spec.screen_wrap_enabled {
            self.apply_screen_wrap();
        }

        self.state.pose()
    }

    fn check_auto_stop(&mut self) {
        let friction = units::friction_decel_px_s2(&self.spec);
        let coasting = (self.state.local_accel - friction).abs() < ACCEL_MATCH_EPSILON;
        if coasting && self.state.local_speed.abs() <= self.spec.auto_stop_speed_px_s {
            if self.state.local_speed != 0.0 {
                debug!("coasted to a stop at {:.3} px/s", self.state.local_speed);
            }
            self.state.local_accel = 0.0;
            self.state.local_speed = 0.0;
        }
    }

    fn apply_centripetal_limit(&mut self) {
        let limit = units::max_theoretical_steering_angle_rad(
            self.state.local_speed,
            self.spec.wheelbase_px,
            units::max_centripetal_accel_px_s2(&self.spec),
            self.spec.max_steering_angle_deg,
        );
        self.state.steering_angle_deg = steering::clamp_to_limit(self.state.steering_angle_deg, limit);
    }

    fn refresh_global(&mut self) {
        self.state.velocity_global = project_to_global(self.state.local_speed, self.state.heading_deg);
        self.state.accel_global = project_to_global(self.state.local_accel, self.state.heading_deg);
    }

    fn apply_screen_wrap(&mut self) {
        let half = rendered_half_extents(&self.spec, self.state.heading_deg);
        if let Some(wrapped) = wrap_position(self.state.position_global, half, &self.viewport) {
            debug!(
                "wrapped from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                self.state.position_global.x, self.state.position_global.y, wrapped.x, wrapped.y
            );
            self.state.position_global = wrapped;
        }
    }
}
