//! Microstep phase decomposition.
//!
//! Turns a subdivision index into four unipolar coil-terminal magnitudes by
//! half-wave rectifying a cosine (coil A) and sine (coil B) pair. The
//! rectification guarantees that within each terminal pair one side is
//! always exactly zero, so the two pins of a coil are never driven against
//! each other.

use libm::{cosf, sinf};
use serde::Deserialize;

use crate::config::units::Subdivisions;
use crate::motor::Terminal;

/// Curve shaping the coil magnitudes across one electrical cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MicrostepCurve {
    /// Trigonometric sine/cosine magnitudes (constant field strength).
    #[default]
    Sine,
    /// Piecewise-linear ramp with the same zero crossings and peaks.
    /// Cheaper per phase, slightly uneven torque.
    Linear,
}

/// Four non-negative coil-terminal magnitudes, each in `[0, 1]`.
///
/// Ephemeral: recomputed per microstep, never stored on the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseMagnitudes {
    /// Coil A positive terminal.
    pub positive_a: f32,
    /// Coil A negative terminal.
    pub negative_a: f32,
    /// Coil B positive terminal.
    pub positive_b: f32,
    /// Coil B negative terminal.
    pub negative_b: f32,
}

impl PhaseMagnitudes {
    /// Compute the magnitudes for one subdivision index.
    ///
    /// The phase angle is `2π · index / subdivisions`; indices beyond one
    /// cycle wrap. This is an electrical phase angle, not the shaft angle.
    pub fn at(index: u32, subdivisions: Subdivisions, curve: MicrostepCurve) -> Self {
        let subs = subdivisions.value() as u32;
        let turn = (index % subs) as f32 / subs as f32;

        let (cos_c, sin_c) = match curve {
            MicrostepCurve::Sine => {
                let angle = 2.0 * core::f32::consts::PI * turn;
                (cosf(angle), sinf(angle))
            }
            MicrostepCurve::Linear => (triangle_wave(turn), triangle_wave(wrap_turn(turn - 0.25))),
        };

        Self::rectify(cos_c, sin_c)
    }

    /// Half-wave rectify a bipolar component pair into four unipolar
    /// magnitudes.
    fn rectify(cos_c: f32, sin_c: f32) -> Self {
        Self {
            positive_a: cos_c.max(0.0),
            negative_a: (-cos_c).max(0.0),
            positive_b: sin_c.max(0.0),
            negative_b: (-sin_c).max(0.0),
        }
    }

    /// Magnitude for a single terminal.
    pub fn terminal(&self, terminal: Terminal) -> f32 {
        match terminal {
            Terminal::PositiveA => self.positive_a,
            Terminal::NegativeA => self.negative_a,
            Terminal::PositiveB => self.positive_b,
            Terminal::NegativeB => self.negative_b,
        }
    }

    /// All four magnitudes in terminal order.
    pub fn per_terminal(&self) -> [(Terminal, f32); 4] {
        Terminal::ALL.map(|t| (t, self.terminal(t)))
    }
}

/// Cosine-shaped triangle wave over one turn: 1 at 0, −1 at half a turn.
fn triangle_wave(turn: f32) -> f32 {
    if turn <= 0.5 {
        1.0 - 4.0 * turn
    } else {
        4.0 * turn - 3.0
    }
}

/// Wrap a fractional turn into `[0, 1)`.
fn wrap_turn(turn: f32) -> f32 {
    if turn < 0.0 {
        turn + 1.0
    } else {
        turn
    }
}
