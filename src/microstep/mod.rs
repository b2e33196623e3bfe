//! Microstepping phase generation.
//!
//! Provides the phase-angle decomposition used in microstepping mode and
//! the derived per-phase timing.

mod phase;

pub use phase::{MicrostepCurve, PhaseMagnitudes};

use crate::config::units::{Microseconds, Subdivisions};
use crate::sequence::HALF_STEP;

/// Half-steps' worth of shaft travel in one electrical cycle.
pub const HALF_STEPS_PER_CYCLE: u32 = HALF_STEP.len() as u32;

/// Derive the wait between microstep phase updates.
///
/// The device's step duration is defined relative to half-stepping; one
/// electrical cycle spans [`HALF_STEPS_PER_CYCLE`] half-steps, spread over
/// `subdivisions` phases. Clamped to at least one microsecond so a zero
/// duration never degenerates into a zero-delay busy loop.
pub fn microstep_interval(step_duration: Microseconds, subdivisions: Subdivisions) -> Microseconds {
    let cycle = step_duration.scaled(HALF_STEPS_PER_CYCLE);
    Microseconds(cycle.value() / subdivisions.value() as u32).at_least_one()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(n: u16) -> Subdivisions {
        Subdivisions::new(n).unwrap()
    }

    #[test]
    fn test_interval_spreads_cycle_over_subdivisions() {
        // 1000 us half-step, 8 subdivisions: 1000 * 8 / 8 = 1000 us
        assert_eq!(
            microstep_interval(Microseconds(1000), subs(8)).value(),
            1000
        );
        // 64 subdivisions: 1000 * 8 / 64 = 125 us
        assert_eq!(microstep_interval(Microseconds(1000), subs(64)).value(), 125);
    }

    #[test]
    fn test_interval_clamps_to_one() {
        assert_eq!(microstep_interval(Microseconds(0), subs(8)).value(), 1);
        // Division underflow also clamps
        assert_eq!(
            microstep_interval(Microseconds(1), subs(1000)).value(),
            1
        );
    }
}
