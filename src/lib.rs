//! # stepper-direct
//!
//! Direct-drive bipolar stepper motor control with embedded-hal 1.0 support.
//!
//! Drives a two-coil stepper through four coil terminals (A+, A−, B+, B−)
//! by walking cyclic coil-polarity tables, or — in microstepping mode — by
//! decomposing a continuous phase angle into four PWM magnitudes.
//!
//! ## Features
//!
//! - **Direct coil drive**: full-step (two-phase and single-phase) and
//!   half-step sequences over four GPIO terminals
//! - **Microstepping**: sine/cosine phase decomposition into four unipolar
//!   PWM magnitudes, with a selectable magnitude curve
//! - **embedded-hal 1.0**: `OutputPin` for binary terminals, `SetDutyCycle`
//!   for PWM terminals, `DelayNs` for step timing
//! - **no_std compatible**: core library works without the standard library
//! - **Type-state modes**: binary stepping and microstepping are separate
//!   driver states; calling the wrong operation is a compile error
//! - **Configuration-driven**: define motors (pins, timing, subdivisions)
//!   in TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_direct::{CoilStepper, GpioCoils, Microseconds};
//!
//! let coils = GpioCoils::new(a_pos, a_neg, b_pos, b_neg);
//! let mut motor = CoilStepper::builder()
//!     .actuator(coils)
//!     .delay(delay)
//!     .step_duration(Microseconds(1000))
//!     .build()?;
//!
//! // One full electrical revolution forward, then back in half steps
//! motor.full_step(4)?;
//! motor.half_step(-8)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod microstep;
pub mod motor;
pub mod sequence;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, PinAssignment, SystemConfig};
pub use error::{Error, Result};
pub use microstep::{MicrostepCurve, PhaseMagnitudes};
pub use motor::{
    state, Coil, CoilActuator, CoilStepper, GpioCoils, MicrostepActuator, MotorSystem, PwmCoils,
    Terminal,
};
pub use sequence::{
    CoilDrive, CoilState, Sequencer, StepDirection, StepTable, StepVariant, FULL_STEP,
    FULL_STEP_SINGLE_PHASE, HALF_STEP,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Degrees, Microseconds, Subdivisions};
