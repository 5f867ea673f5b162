//! Error types for the vehicle model.
//!
//! This module provides a unified error type [`SimError`] and a convenient [`Result`] alias.

use std::fmt;

/// Main error type for the crate.
///
/// Numeric degeneracies inside the integrator never surface here; they are
/// replaced by finite fallbacks where they occur.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The vehicle description cannot be simulated.
    Configuration(String),
    /// A console edit named a field outside the tunable set.
    UnknownField(String),
    /// A console edit supplied a value that does not parse for its field.
    InvalidValue { field: String, value: String },
    /// A console line did not match any known command.
    MalformedCommand(String),
    /// A serialized vehicle description failed to parse.
    Deserialize(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            Self::UnknownField(name) => write!(f, "Unknown field: {name}"),
            Self::InvalidValue { field, value } => {
                write!(f, "Invalid value for {field}: {value:?}")
            }
            Self::MalformedCommand(line) => write!(f, "Malformed command: {line:?}"),
            Self::Deserialize(msg) => write!(f, "Deserialize error: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenient Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::Configuration("zero-width sprite".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_invalid_value_display_names_field() {
        let err = SimError::InvalidValue {
            field: "wheelbase_px".to_string(),
            value: "abc".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("wheelbase_px"));
        assert!(text.contains("abc"));
    }
}
