//! Microstepping example.
//!
//! Builds a motor from TOML configuration on four PWM channels, switches it
//! into microstepping mode, sweeps a few electrical cycles each way, and
//! drops back to binary half-stepping.
//!
//! Uses mock PWM channels so it runs on a host without real hardware.

use stepper_direct::{MotorSystem, PwmCoils, SystemConfig};

/// Mock delay provider that sleeps 1/1000th of the requested time.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64 / 1000));
    }
}

/// Mock PWM channel with the classic 8-bit duty range.
struct MockPwmChannel {
    label: &'static str,
    duty: u16,
}

impl MockPwmChannel {
    const WRAP: u16 = 255;

    fn new(label: &'static str) -> Self {
        Self { label, duty: 0 }
    }
}

impl embedded_hal::pwm::ErrorType for MockPwmChannel {
    type Error = core::convert::Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for MockPwmChannel {
    fn max_duty_cycle(&self) -> u16 {
        Self::WRAP
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if duty != self.duty && duty > 0 {
            println!("  {} duty {}/{}", self.label, duty, Self::WRAP);
        }
        self.duty = duty;
        Ok(())
    }
}

const CONFIG_TOML: &str = r#"
[motors.scanner]
name = "scanner"
step_angle_deg = 1.8
step_duration_us = 2000
microsteps = 8
microstep_curve = "sine"

[motors.scanner.pins]
positive_a = 10
negative_a = 11
positive_b = 12
negative_b = 13
"#;

fn main() {
    println!("=== Microstepping Example ===\n");

    let config: SystemConfig = toml::from_str(CONFIG_TOML).expect("Failed to parse config");
    stepper_direct::validate_config(&config).expect("Configuration validation failed");

    let mut system = MotorSystem::from_config(config);
    println!(
        "Loaded configuration with {} motor(s)",
        system.motor_names().count()
    );

    let coils = PwmCoils::new(
        MockPwmChannel::new("A+"),
        MockPwmChannel::new("A-"),
        MockPwmChannel::new("B+"),
        MockPwmChannel::new("B-"),
    );

    let motor = system
        .register_motor("scanner", coils, MockDelay)
        .expect("Failed to build motor");

    println!(
        "Motor '{}' in {} mode, {} subdivisions per cycle\n",
        motor.name(),
        motor.mode_name(),
        motor.subdivisions().value()
    );

    // Binary stepping works on PWM channels too (fully on / fully off)
    let mut motor = motor;
    motor.full_step(4).expect("full step failed");

    // Switch the terminals to magnitude output
    let mut motor = match motor.into_microstepping() {
        Ok(m) => m,
        Err((_, e)) => panic!("Mode switch failed: {}", e),
    };
    println!(
        "\nNow in {} mode, {} us per phase",
        motor.mode_name(),
        motor.microstep_interval().value()
    );

    println!("\nTwo electrical cycles forward:");
    motor.micro_step(2).expect("micro step failed");

    println!("\nOne cycle back:");
    motor.micro_step(-1).expect("micro step failed");

    println!(
        "\nPosition: {} half-steps ({:.2} degrees)",
        motor.position_half_steps(),
        motor.position_degrees().value()
    );

    // Back to binary mode; terminals are forced off in the transition
    let mut motor = match motor.into_binary() {
        Ok(m) => m,
        Err((_, e)) => panic!("Mode switch failed: {}", e),
    };
    println!("\nBack in {} mode", motor.mode_name());

    motor.half_step(8).expect("half step failed");
    motor.off().expect("off failed");

    println!("\n=== Example Complete ===");
}
