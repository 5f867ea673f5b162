//! Global configuration constants for the Car Kinematics model.

/// Default integration timestep (in seconds), one frame at 120 FPS.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 120.0;

/// Default display width in pixels.
pub const DISPLAY_WIDTH: f64 = 700.0;

/// Default display height in pixels.
pub const DISPLAY_HEIGHT: f64 = 700.0;

/// Fraction of the display width taken up by the rendered vehicle sprite.
pub const VEHICLE_DISPLAY_FRACTION: f64 = 0.10;

/// Assumed real-world length of the vehicle, in feet.
pub const DEFAULT_VEHICLE_LENGTH_FT: f64 = 15.0;

/// Standard gravity in ft/s².
pub const G_FT_S2: f64 = 32.2;

pub const FEET_PER_MILE: f64 = 5280.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Reference speed used by the 0-60 time.
pub const SIXTY_MPH: f64 = 60.0;

/// Below this speed a coasting vehicle is brought to rest (px/s).
pub const DEFAULT_AUTO_STOP_SPEED: f64 = 5.0;

/// Steering angles smaller than this snap to zero while self-centering (degrees).
pub const STEERING_SNAP_DEG: f64 = 0.1;

/// Turning radius reported for a wheel pointed straight ahead (px).
pub const TURNING_RADIUS_STRAIGHT_PX: f64 = 1.0e9;

/// Hitbox shrink along the vehicle's longitudinal axis.
pub const HITBOX_LENGTH_SCALE: f64 = 0.95;

/// Hitbox shrink across the vehicle.
pub const HITBOX_WIDTH_SCALE: f64 = 0.92;

/// Tolerance when matching the current acceleration against a configured value.
pub const ACCEL_MATCH_EPSILON: f64 = 1e-9;
