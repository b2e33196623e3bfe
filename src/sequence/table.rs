//! Coil-polarity step tables.
//!
//! Each table is an immutable cyclic sequence of per-coil drive states. The
//! cursor into a table lives on the device ([`super::Sequencer`]); the
//! tables themselves are shared, compile-time constants.

/// Direction a single coil winding is driven in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoilDrive {
    /// Current flows positive-to-negative (positive terminal high).
    Forward,
    /// Coil de-energized (both terminals low).
    Off,
    /// Current flows negative-to-positive (negative terminal high).
    Reverse,
}

impl CoilDrive {
    /// Whether the coil carries current in this state.
    #[inline]
    pub const fn is_energized(self) -> bool {
        !matches!(self, CoilDrive::Off)
    }
}

/// One step-table entry: the drive state of both coils.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilState {
    /// Coil A drive.
    pub a: CoilDrive,
    /// Coil B drive.
    pub b: CoilDrive,
}

impl CoilState {
    /// Create a new coil state.
    pub const fn new(a: CoilDrive, b: CoilDrive) -> Self {
        Self { a, b }
    }

    /// Number of energized coils in this state (0, 1 or 2).
    pub const fn energized_coils(self) -> u8 {
        self.a.is_energized() as u8 + self.b.is_energized() as u8
    }
}

/// An immutable coil-polarity step table with its timing weight.
///
/// The quantum multiplier scales the device's half-step duration so that
/// switching table granularity preserves angular velocity: a full-step
/// entry moves the shaft twice as far as a half-step entry, so it waits
/// twice as long.
#[derive(Debug, Clone, Copy)]
pub struct StepTable {
    entries: &'static [CoilState],
    quantum_multiplier: u32,
    half_steps_per_entry: i64,
}

impl StepTable {
    /// Number of entries in the cycle.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries. Always false for the built-in tables.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at a cursor position.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`. Cursor arithmetic keeps positions in
    /// bounds, so this indicates a logic error.
    #[inline]
    pub fn entry(&self, position: usize) -> CoilState {
        self.entries[position]
    }

    /// All entries in cycle order.
    #[inline]
    pub const fn entries(&self) -> &'static [CoilState] {
        self.entries
    }

    /// Half-step duration multiplier for the inter-step wait.
    #[inline]
    pub const fn quantum_multiplier(&self) -> u32 {
        self.quantum_multiplier
    }

    /// Shaft displacement of one entry, in half-step units.
    #[inline]
    pub const fn half_steps_per_entry(&self) -> i64 {
        self.half_steps_per_entry
    }
}

use CoilDrive::{Forward, Off, Reverse};

/// Two-phase full-step table: both coils energized at every position.
/// Jaggier than half-stepping but fastest, with the most torque.
pub const FULL_STEP: StepTable = StepTable {
    entries: &[
        CoilState::new(Forward, Forward),
        CoilState::new(Reverse, Forward),
        CoilState::new(Reverse, Reverse),
        CoilState::new(Forward, Reverse),
    ],
    quantum_multiplier: 2,
    half_steps_per_entry: 2,
};

/// Single-phase (wave drive) full-step table: one coil at a time.
/// Lowest power draw, reduced torque.
pub const FULL_STEP_SINGLE_PHASE: StepTable = StepTable {
    entries: &[
        CoilState::new(Forward, Off),
        CoilState::new(Off, Forward),
        CoilState::new(Reverse, Off),
        CoilState::new(Off, Reverse),
    ],
    quantum_multiplier: 2,
    half_steps_per_entry: 2,
};

/// Half-step table: interleaves single- and dual-phase positions for
/// smoother motion at half the angular step.
pub const HALF_STEP: StepTable = StepTable {
    entries: &[
        CoilState::new(Forward, Off),
        CoilState::new(Forward, Forward),
        CoilState::new(Off, Forward),
        CoilState::new(Reverse, Forward),
        CoilState::new(Reverse, Off),
        CoilState::new(Reverse, Reverse),
        CoilState::new(Off, Reverse),
        CoilState::new(Forward, Reverse),
    ],
    quantum_multiplier: 1,
    half_steps_per_entry: 1,
};

/// Which step table a stepping operation walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepVariant {
    /// Two-phase full step ([`FULL_STEP`]).
    Full,
    /// Single-phase full step ([`FULL_STEP_SINGLE_PHASE`]).
    FullSinglePhase,
    /// Half step ([`HALF_STEP`]).
    Half,
}

impl StepVariant {
    /// The table this variant walks.
    #[inline]
    pub const fn table(self) -> &'static StepTable {
        match self {
            StepVariant::Full => &FULL_STEP,
            StepVariant::FullSinglePhase => &FULL_STEP_SINGLE_PHASE,
            StepVariant::Half => &HALF_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_step_is_two_phase() {
        for entry in FULL_STEP.entries() {
            assert_eq!(entry.energized_coils(), 2);
        }
    }

    #[test]
    fn test_single_phase_energizes_one_coil() {
        for entry in FULL_STEP_SINGLE_PHASE.entries() {
            assert_eq!(entry.energized_coils(), 1);
        }
    }

    #[test]
    fn test_half_step_alternates_phase_count() {
        for (i, entry) in HALF_STEP.entries().iter().enumerate() {
            let expected = if i % 2 == 0 { 1 } else { 2 };
            assert_eq!(entry.energized_coils(), expected, "entry {}", i);
        }
    }

    #[test]
    fn test_table_lengths() {
        assert_eq!(FULL_STEP.len(), 4);
        assert_eq!(FULL_STEP_SINGLE_PHASE.len(), 4);
        assert_eq!(HALF_STEP.len(), 8);
    }

    #[test]
    fn test_timing_weights() {
        assert_eq!(FULL_STEP.quantum_multiplier(), 2);
        assert_eq!(FULL_STEP_SINGLE_PHASE.quantum_multiplier(), 2);
        assert_eq!(HALF_STEP.quantum_multiplier(), 1);
    }

    #[test]
    fn test_full_step_cycle_order() {
        // (F,F), (R,F), (R,R), (F,R) - a rotating field
        let e = FULL_STEP.entries();
        assert_eq!(e[0], CoilState::new(Forward, Forward));
        assert_eq!(e[1], CoilState::new(Reverse, Forward));
        assert_eq!(e[2], CoilState::new(Reverse, Reverse));
        assert_eq!(e[3], CoilState::new(Forward, Reverse));
    }
}
