//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Valid output drive strengths in milliamps.
const VALID_DRIVE_STRENGTHS: [u8; 4] = [2, 4, 8, 12];

/// Validate a system configuration.
///
/// Checks:
/// - Pin identifiers within each motor are distinct
/// - Step angle is positive
/// - Drive strength is one of the hardware-supported values
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, motor) in config.motors.iter() {
        validate_motor(name.as_str(), motor)?;
    }

    Ok(())
}

fn validate_motor(_name: &str, config: &super::MotorConfig) -> Result<()> {
    // A pin wired to two terminals shorts a coil; catch it before any drive
    config.pins.check_distinct().map_err(Error::Config)?;

    // Step angle must be positive
    if config.step_angle.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidStepAngle(
            config.step_angle.0,
        )));
    }

    // Drive strength must be a value the pads support
    if !VALID_DRIVE_STRENGTHS.contains(&config.drive_strength_ma) {
        return Err(Error::Config(ConfigError::InvalidDriveStrength(
            config.drive_strength_ma,
        )));
    }

    Ok(())
}
