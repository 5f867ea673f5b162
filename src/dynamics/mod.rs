//! Vehicle dynamics: the per-step integrator, steering model, and the
//! kinematic state machine that drives them.

pub mod integrator;
pub mod steering;
pub mod vehicle;

pub use integrator::{heading_rate_deg, integrate_speed, project_to_global, SpeedUpdate};
pub use steering::SteeringMode;
pub use vehicle::{LongitudinalMode, Vehicle};
