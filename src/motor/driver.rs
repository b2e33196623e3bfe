//! Stepper driver.
//!
//! Generic over the coil actuator and delay provider, with the drive mode
//! (binary stepping vs. microstepping) tracked as a type-state.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;

use crate::config::units::{Degrees, Microseconds, Subdivisions};
use crate::error::{DriveError, Error, Result};
use crate::microstep::{microstep_interval, MicrostepCurve, PhaseMagnitudes, HALF_STEPS_PER_CYCLE};
use crate::sequence::{CoilState, Sequencer, StepDirection, StepVariant};

use super::actuator::{Coil, CoilActuator, MicrostepActuator};
use super::position::Position;
use super::state::{Binary, DriveMode, Microstep, ModeName};

/// Direct-drive stepper motor driver.
///
/// Generic over:
/// - `A`: coil actuator (must implement [`CoilActuator`]; microstepping
///   additionally requires [`MicrostepActuator`])
/// - `DELAY`: delay provider (must implement `DelayNs`)
/// - `MODE`: drive-mode type-state (defaults to [`Binary`])
///
/// All stepping operations are blocking: they run to completion of the
/// requested count, sleeping the derived quantum between coil updates.
pub struct CoilStepper<A, DELAY, MODE = Binary>
where
    A: CoilActuator,
    DELAY: DelayNs,
    MODE: DriveMode,
{
    /// Coil actuator owning the four terminal pins.
    actuator: A,

    /// Delay provider for inter-step waits.
    delay: DELAY,

    /// Per-table cyclic cursors; persist across calls.
    sequencer: Sequencer,

    /// Commanded shaft position (open loop).
    position: Position,

    /// Duration of one half-step.
    step_duration: Microseconds,

    /// Microstep subdivisions per electrical cycle.
    subdivisions: Subdivisions,

    /// Magnitude curve for microstepping.
    curve: MicrostepCurve,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Type-state marker.
    _mode: PhantomData<MODE>,
}

impl<A, DELAY, MODE> CoilStepper<A, DELAY, MODE>
where
    A: CoilActuator,
    DELAY: DelayNs,
    MODE: DriveMode + ModeName,
{
    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current mode name.
    #[inline]
    pub fn mode_name(&self) -> &'static str {
        MODE::name()
    }

    /// Current cursor position for a step-table variant.
    #[inline]
    pub fn sequence_position(&self, variant: StepVariant) -> usize {
        self.sequencer.position(variant)
    }

    /// Commanded position in half-steps from the origin.
    #[inline]
    pub fn position_half_steps(&self) -> i64 {
        self.position.half_steps()
    }

    /// Commanded position in degrees, from the step-angle hint.
    #[inline]
    pub fn position_degrees(&self) -> Degrees {
        self.position.degrees()
    }

    /// The configured half-step duration.
    #[inline]
    pub fn step_duration(&self) -> Microseconds {
        self.step_duration
    }

    /// The configured subdivision count.
    #[inline]
    pub fn subdivisions(&self) -> Subdivisions {
        self.subdivisions
    }

    /// The configured microstep magnitude curve.
    #[inline]
    pub fn curve(&self) -> MicrostepCurve {
        self.curve
    }

    /// Declare the current position the origin.
    pub fn set_origin(&mut self) {
        self.position.set_origin();
    }

    /// Force both coils to the zero state, regardless of mode.
    ///
    /// Idempotent; the sequence cursors are untouched, so a later stepping
    /// call resumes from the last commanded entry.
    pub fn off(&mut self) -> Result<()> {
        self.actuator.coils_off().map_err(|_| DriveError::PinError)?;
        Ok(())
    }
}

impl<A, DELAY> CoilStepper<A, DELAY, Binary>
where
    A: CoilActuator,
    DELAY: DelayNs,
{
    /// Create a builder for a new driver.
    pub fn builder() -> super::builder::CoilStepperBuilder<A, DELAY> {
        super::builder::CoilStepperBuilder::new()
    }

    /// Create a new driver in binary mode.
    pub(crate) fn new(
        actuator: A,
        delay: DELAY,
        step_duration: Microseconds,
        subdivisions: Subdivisions,
        curve: MicrostepCurve,
        step_angle: Degrees,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            actuator,
            delay,
            sequencer: Sequencer::new(),
            position: Position::new(step_angle),
            step_duration,
            subdivisions,
            curve,
            name,
            _mode: PhantomData,
        }
    }

    /// Walk a step table by a signed number of entries.
    ///
    /// Emits exactly `|count|` coil updates: each iteration applies the
    /// entry at the current cursor, moves the cursor one entry in the sign's
    /// direction, and sleeps the table's quantum. Zero is a true no-op.
    pub fn step(&mut self, variant: StepVariant, count: i32) -> Result<()> {
        let table = variant.table();
        let direction = StepDirection::from_steps(count);
        let wait = self
            .step_duration
            .scaled(table.quantum_multiplier())
            .at_least_one();

        for _ in 0..count.unsigned_abs() {
            let state = self.sequencer.advance(variant, direction);
            self.apply_state(state)?;
            self.position
                .advance(direction.sign() * table.half_steps_per_entry());
            self.delay.delay_us(wait.value());
        }

        Ok(())
    }

    /// Two-phase full-step sequence. Jaggy and less smooth, but fast with
    /// full torque.
    pub fn full_step(&mut self, steps: i32) -> Result<()> {
        self.step(StepVariant::Full, steps)
    }

    /// Single-phase (wave drive) full-step sequence. Lowest power draw.
    pub fn full_step_single_phase(&mut self, steps: i32) -> Result<()> {
        self.step(StepVariant::FullSinglePhase, steps)
    }

    /// Half-step sequence for smoother motion.
    pub fn half_step(&mut self, steps: i32) -> Result<()> {
        self.step(StepVariant::Half, steps)
    }

    /// Switch the device into microstepping mode.
    ///
    /// The actuator reconfigures the four terminals for magnitude output;
    /// levels hold until the first [`set_phase`](CoilStepper::set_phase).
    /// On actuator failure the driver is returned unchanged.
    pub fn into_microstepping(
        mut self,
    ) -> core::result::Result<CoilStepper<A, DELAY, Microstep>, (Self, Error)>
    where
        A: MicrostepActuator,
    {
        if self.actuator.enter_microstep().is_err() {
            return Err((self, Error::Drive(DriveError::PwmError)));
        }

        Ok(CoilStepper {
            actuator: self.actuator,
            delay: self.delay,
            sequencer: self.sequencer,
            position: self.position,
            step_duration: self.step_duration,
            subdivisions: self.subdivisions,
            curve: self.curve,
            name: self.name,
            _mode: PhantomData,
        })
    }

    fn apply_state(&mut self, state: CoilState) -> Result<()> {
        self.actuator
            .set_coil(Coil::A, state.a)
            .map_err(|_| DriveError::PinError)?;
        self.actuator
            .set_coil(Coil::B, state.b)
            .map_err(|_| DriveError::PinError)?;
        Ok(())
    }
}

impl<A, DELAY> CoilStepper<A, DELAY, Microstep>
where
    A: MicrostepActuator,
    DELAY: DelayNs,
{
    /// Drive the four terminals to the magnitudes of one subdivision index.
    ///
    /// Within each terminal pair one side is always exactly zero, so the
    /// two pins of a coil are never driven against each other.
    pub fn set_phase(&mut self, index: u32) -> Result<()> {
        let magnitudes = PhaseMagnitudes::at(index, self.subdivisions, self.curve);
        for (terminal, value) in magnitudes.per_terminal() {
            self.actuator
                .set_magnitude(terminal, value)
                .map_err(|_| DriveError::PwmError)?;
        }
        Ok(())
    }

    /// Sweep whole electrical cycles of microsteps.
    ///
    /// Per unit of `|cycles|` the subdivision index sweeps once through the
    /// cycle - ascending for positive counts, descending for negative -
    /// visiting every index exactly once per pass, including index 0 on the
    /// reverse sweep. Sleeps the derived microstep quantum between phases.
    pub fn micro_step(&mut self, cycles: i32) -> Result<()> {
        let subs = self.subdivisions.value() as u32;
        let direction = StepDirection::from_steps(cycles);
        let wait = self.microstep_interval();

        for _ in 0..cycles.unsigned_abs() {
            match direction {
                StepDirection::Forward => {
                    for index in 0..subs {
                        self.set_phase(index)?;
                        self.delay.delay_us(wait.value());
                    }
                }
                StepDirection::Reverse => {
                    for index in (0..subs).rev() {
                        self.set_phase(index)?;
                        self.delay.delay_us(wait.value());
                    }
                }
            }
            self.position
                .advance(direction.sign() * HALF_STEPS_PER_CYCLE as i64);
        }

        Ok(())
    }

    /// The derived wait between microstep phase updates.
    #[inline]
    pub fn microstep_interval(&self) -> Microseconds {
        microstep_interval(self.step_duration, self.subdivisions)
    }

    /// Switch the device back to binary mode.
    ///
    /// The actuator reconfigures the terminals for binary output and forces
    /// all four off. On actuator failure the driver is returned unchanged.
    pub fn into_binary(
        mut self,
    ) -> core::result::Result<CoilStepper<A, DELAY, Binary>, (Self, Error)> {
        if self.actuator.leave_microstep().is_err() {
            return Err((self, Error::Drive(DriveError::PinError)));
        }

        Ok(CoilStepper {
            actuator: self.actuator,
            delay: self.delay,
            sequencer: self.sequencer,
            position: self.position,
            step_duration: self.step_duration,
            subdivisions: self.subdivisions,
            curve: self.curve,
            name: self.name,
            _mode: PhantomData,
        })
    }
}
