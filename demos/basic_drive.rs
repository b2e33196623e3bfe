//! Basic coil drive example.
//!
//! Mirrors the canonical demo loop for a small direct-wired motor: a full
//! revolution forward in full steps, a pause, then back in half steps.
//!
//! Uses mock pins so it runs on a host without real hardware.

use stepper_direct::{CoilStepper, Degrees, GpioCoils, Microseconds, StepVariant};

/// Mock delay provider for demonstration.
///
/// Sleeps 1/1000th of the requested time so the demo finishes quickly.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64 / 1000));
    }
}

/// Mock output pin for demonstration.
struct MockPin {
    label: &'static str,
    state: bool,
}

impl MockPin {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            state: false,
        }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.state {
            println!("  {} -> high", self.label);
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

fn main() {
    println!("=== Basic Coil Drive Example ===\n");

    // Four terminals: A+, A-, B+, B-
    let coils = GpioCoils::new(
        MockPin::new("A+"),
        MockPin::new("A-"),
        MockPin::new("B+"),
        MockPin::new("B-"),
    );

    // Assume one step = 18 degrees (for larger motors it is usually 1.8)
    // 20 steps = half circle, 40 = full circle
    let mut motor = CoilStepper::builder()
        .actuator(coils)
        .delay(MockDelay)
        .name("demo_motor")
        .step_angle(Degrees(18.0))
        .step_duration(Microseconds(8000))
        .build()
        .expect("Failed to build motor");

    println!("Motor created: {}", motor.name());
    println!("Mode: {}", motor.mode_name());
    println!(
        "Initial position: {} half-steps ({} degrees)\n",
        motor.position_half_steps(),
        motor.position_degrees().value()
    );

    println!("Full circle forward, two-phase full steps:");
    motor.full_step(40).expect("full step failed");
    println!(
        "Position: {} degrees, cursor {}\n",
        motor.position_degrees().value(),
        motor.sequence_position(StepVariant::Full)
    );

    std::thread::sleep(std::time::Duration::from_millis(100));

    println!("Back again, smoother half steps:");
    motor.half_step(-80).expect("half step failed");
    println!(
        "Position: {} degrees, cursor {}\n",
        motor.position_degrees().value(),
        motor.sequence_position(StepVariant::Half)
    );

    println!("Wave drive (single phase), quarter circle:");
    motor
        .full_step_single_phase(10)
        .expect("single phase step failed");
    println!("Position: {} degrees\n", motor.position_degrees().value());

    motor.off().expect("off failed");
    println!("Coils released.");
    println!("\n=== Example Complete ===");
}
