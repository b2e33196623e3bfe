//! Motor system facade for multi-motor configuration.
//!
//! Provides a high-level API for building multiple independent motors from
//! a single configuration. Each built motor owns its own sequencer, so two
//! motors never share cursor state.

use embedded_hal::delay::DelayNs;
use heapless::{FnvIndexMap, String};

use crate::config::{MotorConfig, PinAssignment, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::motor::state::Binary;
use crate::motor::{CoilActuator, CoilStepper, CoilStepperBuilder};

/// A facade for managing multiple stepper motors from configuration.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_direct::MotorSystem;
///
/// let config: SystemConfig = toml::from_str(CONFIG_TOML)?;
/// let mut system = MotorSystem::from_config(config);
///
/// // Register motors with their hardware actuators
/// let mut pan = system.register_motor("pan", pan_coils, pan_delay)?;
/// let mut tilt = system.register_motor("tilt", tilt_coils, tilt_delay)?;
/// ```
pub struct MotorSystem {
    /// The system configuration.
    config: SystemConfig,
    /// Pin assignments of registered motors (for cross-motor conflict checks).
    registered_pins: FnvIndexMap<String<32>, PinAssignment, 8>,
}

impl MotorSystem {
    /// Create a new motor system from configuration.
    ///
    /// This does not create any motors; register them individually with
    /// [`register_motor`](MotorSystem::register_motor) or build unregistered
    /// ones with [`build_motor`](MotorSystem::build_motor).
    pub fn from_config(config: SystemConfig) -> Self {
        Self {
            config,
            registered_pins: FnvIndexMap::new(),
        }
    }

    /// Get the system configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Get a motor configuration by name.
    pub fn motor_config(&self, name: &str) -> Option<&MotorConfig> {
        self.config.motor(name)
    }

    /// Check if a motor name exists in the configuration.
    pub fn has_motor(&self, name: &str) -> bool {
        self.config.motor(name).is_some()
    }

    /// List all configured motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.config.motor_names()
    }

    /// Register a motor as active and build its driver.
    ///
    /// Registration records the motor's pin assignment and rejects a motor
    /// whose pins collide with an already-registered one - two motors on a
    /// shared pin would fight over the same coil terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the motor name doesn't exist in the
    /// configuration or its pins overlap a registered motor.
    pub fn register_motor<A, DELAY>(
        &mut self,
        name: &str,
        actuator: A,
        delay: DELAY,
    ) -> Result<CoilStepper<A, DELAY, Binary>>
    where
        A: CoilActuator,
        DELAY: DelayNs,
    {
        let motor_config = self.config.motor(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;

        // Reject pins already claimed by another registered motor
        for pin in motor_config.pins.pins() {
            for (_, assigned) in self.registered_pins.iter() {
                if assigned.pins().contains(&pin) {
                    return Err(Error::Config(ConfigError::DuplicatePin(pin)));
                }
            }
        }

        let motor_name: String<32> = String::try_from(name).unwrap_or_default();
        let _ = self.registered_pins.insert(motor_name, motor_config.pins);

        CoilStepperBuilder::new()
            .actuator(actuator)
            .delay(delay)
            .from_motor_config(motor_config)
            .build()
    }

    /// Build a motor from configuration without registering it.
    ///
    /// Use this when you need a motor but don't need system-level pin
    /// conflict tracking.
    ///
    /// # Errors
    ///
    /// Returns an error if the motor name doesn't exist or building fails.
    pub fn build_motor<A, DELAY>(
        &self,
        name: &str,
        actuator: A,
        delay: DELAY,
    ) -> Result<CoilStepper<A, DELAY, Binary>>
    where
        A: CoilActuator,
        DELAY: DelayNs,
    {
        let motor_config = self.config.motor(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;

        CoilStepperBuilder::new()
            .actuator(actuator)
            .delay(delay)
            .from_motor_config(motor_config)
            .build()
    }

    /// Check if a motor has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.registered_pins
            .iter()
            .any(|(k, _)| k.as_str() == name)
    }

    /// Get the number of registered motors.
    pub fn registered_count(&self) -> usize {
        self.registered_pins.len()
    }
}
