//! Unit tests for TOML configuration parsing.

use stepper_direct::{MicrostepCurve, SystemConfig};

const MINIMAL_CONFIG: &str = r#"
[motors.test_motor]
name = "Test Motor"
"#;

const FULL_CONFIG: &str = r#"
[motors.turntable]
name = "Turntable"
step_angle_deg = 18.0
step_duration_us = 8000
microsteps = 16
microstep_curve = "linear"
drive_strength_ma = 4

[motors.turntable.pins]
positive_a = 10
negative_a = 11
positive_b = 12
negative_b = 13
"#;

// Helper to parse config using the toml crate directly
fn parse(toml_str: &str) -> Result<SystemConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

#[test]
fn parse_minimal_motor_config_applies_defaults() {
    let config = parse(MINIMAL_CONFIG).expect("Should parse minimal config");

    let motor = config.motor("test_motor").expect("Motor should exist");
    assert_eq!(motor.name.as_str(), "Test Motor");
    assert_eq!(motor.pins.pins(), [0, 1, 2, 3]);
    assert!((motor.step_angle.value() - 1.8).abs() < 0.001);
    assert_eq!(motor.step_duration.value(), 1000);
    assert_eq!(motor.microsteps.value(), 8);
    assert_eq!(motor.microstep_curve, MicrostepCurve::Sine);
    assert_eq!(motor.drive_strength_ma, 12);
}

#[test]
fn parse_full_motor_config() {
    let config = parse(FULL_CONFIG).expect("Should parse full config");

    let motor = config.motor("turntable").expect("Motor should exist");
    assert_eq!(motor.name.as_str(), "Turntable");
    assert_eq!(motor.pins.pins(), [10, 11, 12, 13]);
    assert!((motor.step_angle.value() - 18.0).abs() < 0.001);
    assert_eq!(motor.step_duration.value(), 8000);
    assert_eq!(motor.microsteps.value(), 16);
    assert_eq!(motor.microstep_curve, MicrostepCurve::Linear);
    assert_eq!(motor.drive_strength_ma, 4);
}

#[test]
fn parse_rejects_zero_subdivisions() {
    let toml = r#"
[motors.m1]
name = "Motor"
microsteps = 0
"#;

    assert!(parse(toml).is_err());
}

#[test]
fn parse_rejects_unknown_curve() {
    let toml = r#"
[motors.m1]
name = "Motor"
microstep_curve = "cubic"
"#;

    assert!(parse(toml).is_err());
}

#[test]
fn motor_names_are_enumerable() {
    let config = parse(FULL_CONFIG).unwrap();

    let names: Vec<_> = config.motor_names().collect();
    assert_eq!(names, vec!["turntable"]);
    assert!(config.motor("nonexistent").is_none());
}

#[test]
fn derived_timing_values() {
    let config = parse(FULL_CONFIG).unwrap();
    let motor = config.motor("turntable").unwrap();

    // 18 deg per step -> 40 half-steps per revolution
    assert_eq!(motor.half_steps_per_revolution(), 40);

    // 8000 us * 8 half-steps / 16 subdivisions = 4000 us
    assert_eq!(motor.microstep_duration().value(), 4000);
}
