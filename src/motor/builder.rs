//! Builder pattern for CoilStepper.

use embedded_hal::delay::DelayNs;

use crate::config::units::{Degrees, Microseconds, Subdivisions};
use crate::config::{MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::microstep::MicrostepCurve;

use super::actuator::CoilActuator;
use super::driver::CoilStepper;
use super::state::Binary;

/// Builder for creating CoilStepper instances.
pub struct CoilStepperBuilder<A, DELAY>
where
    A: CoilActuator,
    DELAY: DelayNs,
{
    actuator: Option<A>,
    delay: Option<DELAY>,
    name: Option<heapless::String<32>>,
    step_angle: Degrees,
    step_duration: Microseconds,
    subdivisions: Subdivisions,
    curve: MicrostepCurve,
}

impl<A, DELAY> Default for CoilStepperBuilder<A, DELAY>
where
    A: CoilActuator,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, DELAY> CoilStepperBuilder<A, DELAY>
where
    A: CoilActuator,
    DELAY: DelayNs,
{
    /// Create a new builder with the standard defaults (1.8° step angle,
    /// 1000 µs half-step duration, 8 subdivisions, sine curve).
    pub fn new() -> Self {
        Self {
            actuator: None,
            delay: None,
            name: None,
            step_angle: Degrees(1.8),
            step_duration: Microseconds(1000),
            subdivisions: Subdivisions::DEFAULT,
            curve: MicrostepCurve::Sine,
        }
    }

    /// Set the coil actuator.
    pub fn actuator(mut self, actuator: A) -> Self {
        self.actuator = Some(actuator);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the mechanical step angle (informational).
    pub fn step_angle(mut self, angle: Degrees) -> Self {
        self.step_angle = angle;
        self
    }

    /// Set the half-step duration.
    pub fn step_duration(mut self, duration: Microseconds) -> Self {
        self.step_duration = duration;
        self
    }

    /// Set the microstep subdivision count.
    pub fn subdivisions(mut self, subdivisions: Subdivisions) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Set the microstep magnitude curve.
    pub fn curve(mut self, curve: MicrostepCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Configure from a MotorConfig.
    ///
    /// The pin assignment in the config is wiring documentation; the
    /// actuator already owns the physical pins.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.step_angle = config.step_angle;
        self.step_duration = config.step_duration;
        self.subdivisions = config.microsteps;
        self.curve = config.microstep_curve;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the CoilStepper in binary mode.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<CoilStepper<A, DELAY, Binary>> {
        let actuator = self.actuator.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("actuator is required").unwrap(),
            ))
        })?;

        let delay = self.delay.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("delay is required").unwrap(),
            ))
        })?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("motor").unwrap());

        Ok(CoilStepper::new(
            actuator,
            delay,
            self.step_duration,
            self.subdivisions,
            self.curve,
            self.step_angle,
            name,
        ))
    }
}
