//! Utility helpers: angle math and logging/timing.

pub mod logging;
pub mod math;

pub use math::*;
