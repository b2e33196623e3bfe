//! Absolute position tracking.
//!
//! Open-loop bookkeeping of the commanded shaft position in half-step
//! units, with a degrees conversion derived from the step-angle hint. The
//! sequencer never consults this; it exists for the caller.

use crate::config::units::Degrees;

/// Commanded shaft position tracker.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    /// Position in half-steps from the origin.
    half_steps: i64,
    /// Mechanical angle of one full step.
    step_angle: Degrees,
}

impl Position {
    /// Create a position tracker at the origin.
    #[inline]
    pub fn new(step_angle: Degrees) -> Self {
        Self {
            half_steps: 0,
            step_angle,
        }
    }

    /// Current position in half-steps.
    #[inline]
    pub fn half_steps(&self) -> i64 {
        self.half_steps
    }

    /// Current position in degrees.
    #[inline]
    pub fn degrees(&self) -> Degrees {
        Degrees(self.half_steps as f32 * self.step_angle.0 / 2.0)
    }

    /// The step-angle hint used for conversion.
    #[inline]
    pub fn step_angle(&self) -> Degrees {
        self.step_angle
    }

    /// Move by a number of half-steps.
    #[inline]
    pub fn advance(&mut self, delta_half_steps: i64) {
        self.half_steps += delta_half_steps;
    }

    /// Declare the current position the origin.
    #[inline]
    pub fn set_origin(&mut self) {
        self.half_steps = 0;
    }
}
