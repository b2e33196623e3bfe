//! Configuration module for stepper-direct.
//!
//! Provides types for loading and validating motor configurations from TOML
//! files (with `std` feature) or pre-parsed data.

#[cfg(feature = "std")]
mod loader;
mod motor;
mod pins;
mod system;
pub mod units;
mod validation;

pub use motor::MotorConfig;
pub use pins::PinAssignment;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Microseconds, Subdivisions};
