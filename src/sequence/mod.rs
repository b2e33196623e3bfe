//! Step-sequence generation.
//!
//! Pure sequencing logic: cyclic coil-polarity tables and the per-device
//! cursors that walk them. Hardware actuation and timing live in
//! [`crate::motor`]; everything here is testable without pins.

mod cursor;
mod table;

pub use cursor::{SequenceCursor, StepDirection};
pub use table::{
    CoilDrive, CoilState, StepTable, StepVariant, FULL_STEP, FULL_STEP_SINGLE_PHASE, HALF_STEP,
};

/// Per-device step sequencer.
///
/// Owns one cursor per table variant, so interleaving full- and half-step
/// moves never corrupts either cycle. Two devices each own their own
/// `Sequencer`; there is no shared cursor state anywhere in the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequencer {
    full: SequenceCursor,
    single_phase: SequenceCursor,
    half: SequenceCursor,
}

impl Sequencer {
    /// Create a sequencer with all cursors at position 0.
    pub const fn new() -> Self {
        Self {
            full: SequenceCursor::new(),
            single_phase: SequenceCursor::new(),
            half: SequenceCursor::new(),
        }
    }

    /// Current cursor position for a table variant.
    pub fn position(&self, variant: StepVariant) -> usize {
        self.cursor(variant).index()
    }

    /// Emit the coil state at the current position, then move the cursor
    /// one entry in `direction` (wrapping).
    ///
    /// The state is returned for the caller to apply to the hardware; the
    /// sequencer itself never touches pins.
    pub fn advance(&mut self, variant: StepVariant, direction: StepDirection) -> CoilState {
        let table = variant.table();
        let cursor = self.cursor_mut(variant);
        let state = table.entry(cursor.index());
        cursor.advance(direction, table.len());
        state
    }

    fn cursor(&self, variant: StepVariant) -> &SequenceCursor {
        match variant {
            StepVariant::Full => &self.full,
            StepVariant::FullSinglePhase => &self.single_phase,
            StepVariant::Half => &self.half,
        }
    }

    fn cursor_mut(&mut self, variant: StepVariant) -> &mut SequenceCursor {
        match variant {
            StepVariant::Full => &mut self.full,
            StepVariant::FullSinglePhase => &mut self.single_phase,
            StepVariant::Half => &mut self.half,
        }
    }
}
