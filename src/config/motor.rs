//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::microstep::MicrostepCurve;

use super::pins::PinAssignment;
use super::units::{Degrees, Microseconds, Subdivisions};

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Coil terminal pin assignment. Defaults to pins 0..=3.
    #[serde(default)]
    pub pins: PinAssignment,

    /// Mechanical step angle in degrees (typically 1.8° per full step).
    /// Informational; used only for position reporting.
    #[serde(rename = "step_angle_deg", default = "default_step_angle")]
    pub step_angle: Degrees,

    /// Duration of one half-step, in microseconds.
    #[serde(rename = "step_duration_us", default = "default_step_duration")]
    pub step_duration: Microseconds,

    /// Microstep subdivisions per electrical cycle.
    #[serde(default)]
    pub microsteps: Subdivisions,

    /// Magnitude curve used when microstepping.
    #[serde(default)]
    pub microstep_curve: MicrostepCurve,

    /// Output drive strength in milliamps, applied once at pin setup.
    /// Informational; 12 mA allows driving small motors directly.
    #[serde(default = "default_drive_strength")]
    pub drive_strength_ma: u8,
}

fn default_step_angle() -> Degrees {
    Degrees(1.8)
}

fn default_step_duration() -> Microseconds {
    Microseconds(1000)
}

fn default_drive_strength() -> u8 {
    12
}

impl MotorConfig {
    /// Half-steps per mechanical revolution, from the step-angle hint.
    pub fn half_steps_per_revolution(&self) -> u32 {
        (2.0 * 360.0 / self.step_angle.0) as u32
    }

    /// Derived wait between microstep phase updates.
    ///
    /// One electrical cycle covers eight half-steps' worth of shaft travel,
    /// so the per-phase wait is `step_duration * 8 / microsteps`, clamped to
    /// at least one microsecond.
    pub fn microstep_duration(&self) -> Microseconds {
        crate::microstep::microstep_interval(self.step_duration, self.microsteps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(step_angle: f32, duration_us: u32, microsteps: u16) -> MotorConfig {
        MotorConfig {
            name: String::try_from("test").unwrap(),
            pins: PinAssignment::default(),
            step_angle: Degrees(step_angle),
            step_duration: Microseconds(duration_us),
            microsteps: Subdivisions::new(microsteps).unwrap(),
            microstep_curve: MicrostepCurve::default(),
            drive_strength_ma: 12,
        }
    }

    #[test]
    fn test_half_steps_per_revolution() {
        // 1.8° per full step -> 200 full steps -> 400 half steps
        assert_eq!(make_config(1.8, 1000, 8).half_steps_per_revolution(), 400);
        // 18° demo motor -> 40 half steps
        assert_eq!(make_config(18.0, 1000, 8).half_steps_per_revolution(), 40);
    }

    #[test]
    fn test_microstep_duration() {
        // 1000 us * 8 / 8 = 1000 us
        assert_eq!(make_config(1.8, 1000, 8).microstep_duration().value(), 1000);
        // 1000 us * 8 / 32 = 250 us
        assert_eq!(make_config(1.8, 1000, 32).microstep_duration().value(), 250);
    }
}
