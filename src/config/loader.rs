//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_direct::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.turntable]
name = "Turntable"
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("turntable").unwrap();
        // Defaults: pins 0..=3, 1.8 deg, 1000 us, 8 subdivisions
        assert_eq!(motor.pins.pins(), [0, 1, 2, 3]);
        assert_eq!(motor.step_duration.value(), 1000);
        assert_eq!(motor.microsteps.value(), 8);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[motors.turntable]
name = "Turntable"
step_angle_deg = 18.0
step_duration_us = 8000
microsteps = 32
microstep_curve = "linear"
drive_strength_ma = 8

[motors.turntable.pins]
positive_a = 10
negative_a = 11
positive_b = 12
negative_b = 13
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("turntable").unwrap();
        assert_eq!(motor.pins.pins(), [10, 11, 12, 13]);
        assert_eq!(motor.microsteps.value(), 32);
    }

    #[test]
    fn test_parse_rejects_duplicate_pins() {
        let toml = r#"
[motors.bad]
name = "Bad"

[motors.bad.pins]
positive_a = 5
negative_a = 5
positive_b = 6
negative_b = 7
"#;

        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_rejects_zero_subdivisions() {
        let toml = r#"
[motors.bad]
name = "Bad"
microsteps = 0
"#;

        assert!(parse_config(toml).is_err());
    }
}
