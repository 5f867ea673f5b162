//! Live tuning of a [`VehicleSpec`] from a text console.
//!
//! Edits go through a closed set of [`ConfigField`]s. A rejected edit leaves
//! the vehicle configuration exactly as it was.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::core::VehicleSpec;
use crate::error::{Result, SimError};

/// Every field of [`VehicleSpec`] that may be edited at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    TopSpeedMph,
    ZeroToSixtyTimeSec,
    FrictionDecelG,
    BrakeDecelG,
    MaxCentripetalAccelG,
    WheelbasePx,
    MaxSteeringAngleDeg,
    SteeringReturnRate,
    SteeringStepDeg,
    VehicleLengthFt,
    WidthPx,
    HeightPx,
    AutoStopSpeedPxS,
    ScreenWrapEnabled,
    TimeStepSec,
}

impl ConfigField {
    pub const ALL: [ConfigField; 15] = [
        Self::TopSpeedMph,
        Self::ZeroToSixtyTimeSec,
        Self::FrictionDecelG,
        Self::BrakeDecelG,
        Self::MaxCentripetalAccelG,
        Self::WheelbasePx,
        Self::MaxSteeringAngleDeg,
        Self::SteeringReturnRate,
        Self::SteeringStepDeg,
        Self::VehicleLengthFt,
        Self::WidthPx,
        Self::HeightPx,
        Self::AutoStopSpeedPxS,
        Self::ScreenWrapEnabled,
        Self::TimeStepSec,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TopSpeedMph => "top_speed_mph",
            Self::ZeroToSixtyTimeSec => "zero_to_sixty_time_sec",
            Self::FrictionDecelG => "friction_decel_g",
            Self::BrakeDecelG => "brake_decel_g",
            Self::MaxCentripetalAccelG => "max_centripetal_accel_g",
            Self::WheelbasePx => "wheelbase_px",
            Self::MaxSteeringAngleDeg => "max_steering_angle_deg",
            Self::SteeringReturnRate => "steering_return_rate",
            Self::SteeringStepDeg => "steering_step_deg",
            Self::VehicleLengthFt => "vehicle_length_ft",
            Self::WidthPx => "width_px",
            Self::HeightPx => "height_px",
            Self::AutoStopSpeedPxS => "auto_stop_speed_px_s",
            Self::ScreenWrapEnabled => "screen_wrap_enabled",
            Self::TimeStepSec => "time_step_sec",
        }
    }

    fn numeric_slot(self, spec: &mut VehicleSpec) -> Option<&mut f64> {
        let slot = match self {
            Self::TopSpeedMph => &mut spec.top_speed_mph,
            Self::ZeroToSixtyTimeSec => &mut spec.zero_to_sixty_time_sec,
            Self::FrictionDecelG => &mut spec.friction_decel_g,
            Self::BrakeDecelG => &mut spec.brake_decel_g,
            Self::MaxCentripetalAccelG => &mut spec.max_centripetal_accel_g,
            Self::WheelbasePx => &mut spec.wheelbase_px,
            Self::MaxSteeringAngleDeg => &mut spec.max_steering_angle_deg,
            Self::SteeringReturnRate => &mut spec.steering_return_rate,
            Self::SteeringStepDeg => &mut spec.steering_step_deg,
            Self::VehicleLengthFt => &mut spec.vehicle_length_ft,
            Self::WidthPx => &mut spec.width_px,
            Self::HeightPx => &mut spec.height_px,
            Self::AutoStopSpeedPxS => &mut spec.auto_stop_speed_px_s,
            Self::TimeStepSec => &mut spec.time_step_sec,
            Self::ScreenWrapEnabled => return None,
        };
        Some(slot)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigField {
    type Err = SimError;

    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| SimError::UnknownField(name.to_string()))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl VehicleSpec {
    /// Parses `raw` for `field` and commits it only if the edited spec validates.
    pub fn set_field(&mut self, field: ConfigField, raw: &str) -> Result<()> {
        let raw = raw.trim();
        let invalid = || SimError::InvalidValue {
            field: field.name().to_string(),
            value: raw.to_string(),
        };

        let mut edited = *self;
        match field.numeric_slot(&mut edited) {
            Some(slot) => *slot = raw.parse::<f64>().map_err(|_| invalid())?,
            None => edited.screen_wrap_enabled = parse_bool(raw).ok_or_else(invalid)?,
        }
        edited.validate()?;

        *self = edited;
        Ok(())
    }

    pub fn get_field(&self, field: ConfigField) -> String {
        let mut copy = *self;
        match field.numeric_slot(&mut copy) {
            Some(slot) => slot.to_string(),
            None => self.screen_wrap_enabled.to_string(),
        }
    }
}

/// Non-blocking console state; the frame driver keeps stepping physics while
/// it is open.
#[derive(Debug, Clone, Default)]
pub struct Console {
    open: bool,
    history: Vec<String>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Lines accepted so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Runs one console line against `spec`.
    ///
    /// Supported commands: `set <field> <value>`, `get <field>`, `list`.
    pub fn execute(&mut self, line: &str, spec: &mut VehicleSpec) -> Result<String> {
        let result = Self::interpret(line, spec);
        match &result {
            Ok(reply) => {
                debug!("console: {line} -> {reply}");
                self.history.push(line.trim().to_string());
            }
            Err(err) => warn!("console rejected {line:?}: {err}"),
        }
        result
    }

    fn interpret(line: &str, spec: &mut VehicleSpec) -> Result<String> {
        let mut words = line.split_whitespace();
        let verb = words.next();
        let field = words.next();
        let value = words.next();
        let extra = words.next();

        match (verb, field, value, extra) {
            (Some("set"), Some(field), Some(value), None) => {
                let field: ConfigField = field.parse()?;
                spec.set_field(field, value)?;
                Ok(format!("{field} = {}", spec.get_field(field)))
            }
            (Some("get"), Some(field), None, None) => {
                let field: ConfigField = field.parse()?;
                Ok(format!("{field} = {}", spec.get_field(field)))
            }
            (Some("list"), None, None, None) => Ok(ConfigField::ALL
                .iter()
                .map(|field| format!("{field} = {}", spec.get_field(*field)))
                .collect::<Vec<_>>()
                .join("\n")),
            _ => Err(SimError::MalformedCommand(line.trim().to_string())),
        }
    }
}
