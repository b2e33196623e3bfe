//! Unit tests for configuration validation.

use stepper_direct::error::{ConfigError, Error};
use stepper_direct::{validate_config, SystemConfig};

fn parse(toml_str: &str) -> SystemConfig {
    toml::from_str(toml_str).expect("config should parse")
}

#[test]
fn valid_config_passes() {
    let config = parse(
        r#"
[motors.ok]
name = "Motor"
drive_strength_ma = 8

[motors.ok.pins]
positive_a = 2
negative_a = 3
positive_b = 4
negative_b = 5
"#,
    );

    assert!(validate_config(&config).is_ok());
}

#[test]
fn duplicate_pin_fails_validation() {
    let config = parse(
        r#"
[motors.shorted]
name = "Motor"

[motors.shorted.pins]
positive_a = 7
negative_a = 8
positive_b = 7
negative_b = 9
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::DuplicatePin(7)))
    ));
}

#[test]
fn zero_step_angle_fails_validation() {
    let config = parse(
        r#"
[motors.flat]
name = "Motor"
step_angle_deg = 0.0
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidStepAngle(_)))
    ));
}

#[test]
fn unsupported_drive_strength_fails_validation() {
    let config = parse(
        r#"
[motors.hot]
name = "Motor"
drive_strength_ma = 20
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidDriveStrength(20)))
    ));
}
