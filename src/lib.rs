//! Car Kinematics – a steerable ground vehicle for 2D real-time games.
//!
//! Designers describe a car in real-world units (mph, 0-60 time, g-forces);
//! the crate converts those into screen-pixel units and advances one vehicle
//! per fixed time step with a bicycle steering model, a centripetal steering
//! limit, rolling friction, braking, and optional screen wrapping.

pub mod config;
pub mod console;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod geometry;
pub mod input;
pub mod telemetry;
pub mod utils;

pub use glam::DVec2;

pub use console::{ConfigField, Console};
pub use crate::core::{units, Pose, VehicleSpec, VehicleState};
pub use dynamics::{LongitudinalMode, SteeringMode, Vehicle};
pub use error::{Result, SimError};
pub use geometry::{hitbox_polygon, Viewport};
pub use input::{FrameDriver, InputEvent, Key};
pub use telemetry::Telemetry;

use utils::logging::{warn_if_frame_budget_exceeded, ScopedTimer};

/// Everything the presentation layer needs after one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub pose: Pose,
    /// Present while the debug overlay is toggled on.
    pub telemetry: Option<Telemetry>,
    pub quit: bool,
}

/// High-level convenience wrapper that owns a [`Vehicle`], its input driver,
/// and the tuning console.
pub struct DrivingSession {
    vehicle: Vehicle,
    driver: FrameDriver,
    console: Console,
}

impl DrivingSession {
    /// Creates a session with the vehicle parked at the viewport center.
    pub fn new(spec: VehicleSpec, viewport: Viewport) -> Result<Self> {
        let vehicle = Vehicle::new(viewport.center(), spec, viewport)?;
        Ok(Self {
            vehicle,
            driver: FrameDriver::new(),
            console: Console::new(),
        })
    }

    /// Queues an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.driver.push(event);
    }

    /// Applies queued input and advances the vehicle by one time step.
    pub fn frame(&mut self) -> FrameOutput {
        let timer = ScopedTimer::new("session::frame");
        let pose = self.driver.drive_frame(&mut self.vehicle);

        if self.driver.console_open() != self.console.is_open() {
            self.console.toggle();
        }

        let budget_ms = self.vehicle.spec().time_step_sec * 1000.0;
        warn_if_frame_budget_exceeded(timer.elapsed(), budget_ms);

        FrameOutput {
            pose,
            telemetry: self
                .driver
                .debug_visible()
                .then(|| Telemetry::capture(&self.vehicle)),
            quit: self.driver.quit_requested(),
        }
    }

    /// Runs a console line against the live vehicle spec.
    ///
    /// Rejected lines leave the vehicle configuration untouched.
    pub fn submit_console_line(&mut self, line: &str) -> Result<String> {
        let mut spec = *self.vehicle.spec();
        let reply = self.console.execute(line, &mut spec)?;
        self.vehicle.set_spec(spec)?;
        Ok(reply)
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry::capture(&self.vehicle)
    }

    /// Debug-overlay polygon for the current pose.
    pub fn hitbox(&self) -> [DVec2; 4] {
        hitbox_polygon(self.vehicle.state(), self.vehicle.spec())
    }
}
