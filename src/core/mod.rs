//! Core types describing the vehicle, its configuration, and unit conversions.

pub mod spec;
pub mod state;
pub mod units;

pub use spec::VehicleSpec;
pub use state::{Pose, VehicleState};
