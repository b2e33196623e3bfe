//! Coil actuator boundary.
//!
//! The sequencer and phase generator are write-only toward the hardware:
//! they hand coil states and terminal magnitudes to a [`CoilActuator`] and
//! never read anything back. Implementations own the four terminal pins and
//! force them off when dropped.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::sequence::CoilDrive;

/// One of the two motor windings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Coil {
    /// Winding A, driven by the A+ / A− terminal pair.
    A,
    /// Winding B, driven by the B+ / B− terminal pair.
    B,
}

/// A single coil terminal (pin role).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Terminal {
    /// Coil A positive terminal.
    PositiveA,
    /// Coil A negative terminal.
    NegativeA,
    /// Coil B positive terminal.
    PositiveB,
    /// Coil B negative terminal.
    NegativeB,
}

impl Terminal {
    /// All four terminals in canonical order.
    pub const ALL: [Terminal; 4] = [
        Terminal::PositiveA,
        Terminal::NegativeA,
        Terminal::PositiveB,
        Terminal::NegativeB,
    ];

    /// The winding this terminal belongs to.
    pub const fn coil(self) -> Coil {
        match self {
            Terminal::PositiveA | Terminal::NegativeA => Coil::A,
            Terminal::PositiveB | Terminal::NegativeB => Coil::B,
        }
    }
}

/// Write-only boundary to the coil hardware in binary mode.
///
/// `Forward` drives the positive terminal high and the negative low,
/// `Reverse` the converse, `Off` both low. Calls are assumed synchronous:
/// each takes effect before the caller's next inter-step wait begins.
pub trait CoilActuator {
    /// Error produced by the underlying pin operations.
    type Error;

    /// Drive one coil to a polarity.
    fn set_coil(&mut self, coil: Coil, drive: CoilDrive) -> Result<(), Self::Error>;

    /// Force both coils to the de-energized state, regardless of the
    /// active mode. Must be idempotent.
    fn coils_off(&mut self) -> Result<(), Self::Error>;
}

/// Actuator extension for proportional (PWM) terminal drive.
///
/// Hardware whose terminals can only be switched digitally simply does not
/// implement this, and the driver's microstepping state is unreachable for
/// it.
pub trait MicrostepActuator: CoilActuator {
    /// Drive one terminal at a fractional magnitude.
    ///
    /// The caller computes magnitudes in `[0, 1]`; scaling to the hardware
    /// duty range is this method's concern, including wraparound of
    /// out-of-range inputs.
    fn set_magnitude(&mut self, terminal: Terminal, magnitude: f32) -> Result<(), Self::Error>;

    /// Reconfigure the four terminals for magnitude output. Idempotent;
    /// outputs hold their last level until the next magnitude write.
    fn enter_microstep(&mut self) -> Result<(), Self::Error>;

    /// Reconfigure the terminals back to binary output, forcing all four
    /// off. Idempotent and safe to call from the off state.
    fn leave_microstep(&mut self) -> Result<(), Self::Error>;
}

/// Four push-pull GPIO pins driving the coil terminals directly.
///
/// Binary drive only. Releases the motor (all terminals low) on drop.
pub struct GpioCoils<P: OutputPin> {
    positive_a: P,
    negative_a: P,
    positive_b: P,
    negative_b: P,
}

impl<P: OutputPin> GpioCoils<P> {
    /// Take ownership of the four terminal pins.
    ///
    /// Pin order is A+, A−, B+, B−. The pins must already be configured as
    /// outputs; drive strength and pad setup are the HAL's concern.
    pub fn new(positive_a: P, negative_a: P, positive_b: P, negative_b: P) -> Self {
        Self {
            positive_a,
            negative_a,
            positive_b,
            negative_b,
        }
    }

    fn pair_mut(&mut self, coil: Coil) -> (&mut P, &mut P) {
        match coil {
            Coil::A => (&mut self.positive_a, &mut self.negative_a),
            Coil::B => (&mut self.positive_b, &mut self.negative_b),
        }
    }
}

impl<P: OutputPin> CoilActuator for GpioCoils<P> {
    type Error = P::Error;

    fn set_coil(&mut self, coil: Coil, drive: CoilDrive) -> Result<(), Self::Error> {
        let (positive, negative) = self.pair_mut(coil);
        match drive {
            CoilDrive::Forward => {
                positive.set_high()?;
                negative.set_low()
            }
            CoilDrive::Reverse => {
                positive.set_low()?;
                negative.set_high()
            }
            CoilDrive::Off => {
                positive.set_low()?;
                negative.set_low()
            }
        }
    }

    fn coils_off(&mut self) -> Result<(), Self::Error> {
        self.set_coil(Coil::A, CoilDrive::Off)?;
        self.set_coil(Coil::B, CoilDrive::Off)
    }
}

impl<P: OutputPin> Drop for GpioCoils<P> {
    fn drop(&mut self) {
        // Leaving a winding energized past the owner's lifetime cooks the
        // coil; errors are unreportable here
        let _ = self.coils_off();
    }
}

/// Four PWM channels driving the coil terminals.
///
/// Supports both binary drive (fully-on/fully-off duty) and microstepping
/// magnitudes, so a device built on this actuator can move between modes.
/// Releases the motor (all duties zero) on drop.
pub struct PwmCoils<P: SetDutyCycle> {
    positive_a: P,
    negative_a: P,
    positive_b: P,
    negative_b: P,
}

impl<P: SetDutyCycle> PwmCoils<P> {
    /// Take ownership of the four terminal channels, in A+, A−, B+, B− order.
    pub fn new(positive_a: P, negative_a: P, positive_b: P, negative_b: P) -> Self {
        Self {
            positive_a,
            negative_a,
            positive_b,
            negative_b,
        }
    }

    fn channel_mut(&mut self, terminal: Terminal) -> &mut P {
        match terminal {
            Terminal::PositiveA => &mut self.positive_a,
            Terminal::NegativeA => &mut self.negative_a,
            Terminal::PositiveB => &mut self.positive_b,
            Terminal::NegativeB => &mut self.negative_b,
        }
    }

    fn pair_mut(&mut self, coil: Coil) -> (&mut P, &mut P) {
        match coil {
            Coil::A => (&mut self.positive_a, &mut self.negative_a),
            Coil::B => (&mut self.positive_b, &mut self.negative_b),
        }
    }

    fn all_off(&mut self) -> Result<(), P::Error> {
        self.positive_a.set_duty_cycle_fully_off()?;
        self.negative_a.set_duty_cycle_fully_off()?;
        self.positive_b.set_duty_cycle_fully_off()?;
        self.negative_b.set_duty_cycle_fully_off()
    }
}

/// Scale a fractional magnitude to a duty level in `[0, wrap]`.
///
/// In-range magnitudes scale directly; out-of-range inputs take their
/// absolute value and wrap modulo the duty range.
fn duty_for(wrap: u16, magnitude: f32) -> u16 {
    if wrap == 0 {
        return 0;
    }
    let level = (libm::fabsf(magnitude) * wrap as f32) as u32;
    if level > wrap as u32 {
        (level % wrap as u32) as u16
    } else {
        level as u16
    }
}

impl<P: SetDutyCycle> CoilActuator for PwmCoils<P> {
    type Error = P::Error;

    fn set_coil(&mut self, coil: Coil, drive: CoilDrive) -> Result<(), Self::Error> {
        let (positive, negative) = self.pair_mut(coil);
        match drive {
            CoilDrive::Forward => {
                positive.set_duty_cycle_fully_on()?;
                negative.set_duty_cycle_fully_off()
            }
            CoilDrive::Reverse => {
                positive.set_duty_cycle_fully_off()?;
                negative.set_duty_cycle_fully_on()
            }
            CoilDrive::Off => {
                positive.set_duty_cycle_fully_off()?;
                negative.set_duty_cycle_fully_off()
            }
        }
    }

    fn coils_off(&mut self) -> Result<(), Self::Error> {
        self.all_off()
    }
}

impl<P: SetDutyCycle> MicrostepActuator for PwmCoils<P> {
    fn set_magnitude(&mut self, terminal: Terminal, magnitude: f32) -> Result<(), Self::Error> {
        let channel = self.channel_mut(terminal);
        let duty = duty_for(channel.max_duty_cycle(), magnitude);
        channel.set_duty_cycle(duty)
    }

    fn enter_microstep(&mut self) -> Result<(), Self::Error> {
        // Levels hold until the first set_phase; start from a known zero
        self.all_off()
    }

    fn leave_microstep(&mut self) -> Result<(), Self::Error> {
        self.all_off()
    }
}

impl<P: SetDutyCycle> Drop for PwmCoils<P> {
    fn drop(&mut self) {
        let _ = self.all_off();
    }
}
