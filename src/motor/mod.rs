//! Motor module for stepper-direct.
//!
//! Provides the coil actuator boundary, the type-state stepper driver, and
//! position tracking.

mod actuator;
mod builder;
mod driver;
mod position;
pub mod state;
mod system;

pub use actuator::{Coil, CoilActuator, GpioCoils, MicrostepActuator, PwmCoils, Terminal};
pub use builder::CoilStepperBuilder;
pub use driver::CoilStepper;
pub use position::Position;
pub use state::{Binary, DriveMode, Microstep, ModeName};
pub use system::MotorSystem;
