//! Drive-mode type-state markers.
//!
//! Binary stepping and microstepping are mutually exclusive; encoding the
//! mode in the type makes a wrong-mode call a compile error instead of a
//! silent no-op.

/// Coil terminals are binary outputs; full- and half-step sequences apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

/// Coil terminals are PWM magnitude outputs; microstepping applies.
#[derive(Debug, Clone, Copy)]
pub struct Microstep;

/// Trait for drive modes.
pub trait DriveMode: private::Sealed {}

impl DriveMode for Binary {}
impl DriveMode for Microstep {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Binary {}
    impl Sealed for super::Microstep {}
}

/// Mode name for display/debugging.
pub trait ModeName {
    /// Get the mode name as a static string.
    fn name() -> &'static str;
}

impl ModeName for Binary {
    fn name() -> &'static str {
        "Binary"
    }
}

impl ModeName for Microstep {
    fn name() -> &'static str {
        "Microstep"
    }
}
