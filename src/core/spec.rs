use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_AUTO_STOP_SPEED, DEFAULT_TIME_STEP, DEFAULT_VEHICLE_LENGTH_FT, DISPLAY_WIDTH,
    VEHICLE_DISPLAY_FRACTION,
};
use crate::error::{Result, SimError};

/// Designer-facing vehicle description.
///
/// Quantities are stored in real-world units (mph, seconds, g) apart from the
/// sprite geometry, which is already in pixels. Everything the integrator
/// needs in pixel units is derived on demand in [`crate::core::units`], so an
/// edit to any field takes effect on the next step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSpec {
    pub top_speed_mph: f64,
    pub zero_to_sixty_time_sec: f64,
    /// Rolling friction while coasting, in g (positive magnitude).
    pub friction_decel_g: f64,
    /// Braking deceleration, in g (positive magnitude).
    pub brake_decel_g: f64,
    /// Lateral acceleration budget limiting the steering angle, in g.
    pub max_centripetal_accel_g: f64,
    pub wheelbase_px: f64,
    pub max_steering_angle_deg: f64,
    /// Fraction of the steering angle removed per step while self-centering at rest.
    pub steering_return_rate: f64,
    /// Steering change applied by one `steer_left`/`steer_right` call.
    pub steering_step_deg: f64,
    /// Real-world length the sprite stands for.
    pub vehicle_length_ft: f64,
    /// Rendered sprite extent along the vehicle's heading.
    pub width_px: f64,
    /// Rendered sprite extent across the vehicle.
    pub height_px: f64,
    /// Coasting speed at which the vehicle is brought to rest (px/s).
    pub auto_stop_speed_px_s: f64,
    pub screen_wrap_enabled: bool,
    pub time_step_sec: f64,
}

impl Default for VehicleSpec {
    fn default() -> Self {
        let width_px = (VEHICLE_DISPLAY_FRACTION * DISPLAY_WIDTH).trunc();
        Self {
            top_speed_mph: 120.0,
            zero_to_sixty_time_sec: 4.0,
            friction_decel_g: 0.1,
            brake_decel_g: 0.8,
            max_centripetal_accel_g: 0.9,
            wheelbase_px: width_px,
            max_steering_angle_deg: 35.0,
            steering_return_rate: 0.2,
            steering_step_deg: 1.0,
            vehicle_length_ft: DEFAULT_VEHICLE_LENGTH_FT,
            width_px,
            height_px: (width_px / 2.0).trunc(),
            auto_stop_speed_px_s: DEFAULT_AUTO_STOP_SPEED,
            screen_wrap_enabled: true,
            time_step_sec: DEFAULT_TIME_STEP,
        }
    }
}

impl VehicleSpec {
    /// Sizes the vehicle from its sprite: the rendered width is a fraction of
    /// the display width and the height keeps the source aspect ratio.
    pub fn from_sprite(
        source_width: u32,
        source_height: u32,
        display_width: f64,
        display_fraction: f64,
    ) -> Result<Self> {
        if source_width == 0 {
            return Err(SimError::Configuration(
                "sprite has zero width".to_string(),
            ));
        }

        let width_px = (display_fraction * display_width).trunc();
        let height_px = (source_height as f64 / source_width as f64 * width_px).trunc();
        let spec = Self {
            width_px,
            height_px,
            wheelbase_px: width_px,
            ..Self::default()
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Parses a (possibly partial) TOML description on top of the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let spec: Self = toml::from_str(source)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|err| SimError::Deserialize(err.to_string()))
    }

    /// Checks that every derived quantity is finite and meaningful.
    pub fn validate(&self) -> Result<()> {
        let numeric = [
            ("top_speed_mph", self.top_speed_mph),
            ("zero_to_sixty_time_sec", self.zero_to_sixty_time_sec),
            ("friction_decel_g", self.friction_decel_g),
            ("brake_decel_g", self.brake_decel_g),
            ("max_centripetal_accel_g", self.max_centripetal_accel_g),
            ("wheelbase_px", self.wheelbase_px),
            ("max_steering_angle_deg", self.max_steering_angle_deg),
            ("steering_return_rate", self.steering_return_rate),
            ("steering_step_deg", self.steering_step_deg),
            ("vehicle_length_ft", self.vehicle_length_ft),
            ("width_px", self.width_px),
            ("height_px", self.height_px),
            ("auto_stop_speed_px_s", self.auto_stop_speed_px_s),
            ("time_step_sec", self.time_step_sec),
        ];
        if let Some((name, _)) = numeric.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimError::Configuration(format!("{name} must be finite")));
        }
        if let Some((name, _)) = numeric.iter().find(|(_, value)| *value < 0.0) {
            return Err(SimError::Configuration(format!(
                "{name} must not be negative"
            )));
        }

        let strictly_positive = [
            ("top_speed_mph", self.top_speed_mph),
            ("zero_to_sixty_time_sec", self.zero_to_sixty_time_sec),
            ("wheelbase_px", self.wheelbase_px),
            ("vehicle_length_ft", self.vehicle_length_ft),
            ("width_px", self.width_px),
            ("time_step_sec", self.time_step_sec),
        ];
        if let Some((name, _)) = strictly_positive.iter().find(|(_, value)| *value <= 0.0) {
            return Err(SimError::Configuration(format!("{name} must be positive")));
        }

        if self.max_steering_angle_deg <= 0.0 || self.max_steering_angle_deg >= 90.0 {
            return Err(SimError::Configuration(
                "max_steering_angle_deg must lie in (0, 90)".to_string(),
            ));
        }
        if self.steering_return_rate > 1.0 {
            return Err(SimError::Configuration(
                "steering_return_rate must lie in [0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}
