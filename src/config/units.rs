//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles, durations and microstep
//! subdivision counts to prevent unit confusion at compile time.

use core::ops::{Add, Mul, Sub};

use serde::Deserialize;

use crate::error::ConfigError;

/// Angular quantity in degrees.
///
/// Used for the step-angle hint and for position reporting. The sequencer
/// itself never consumes it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Duration in microseconds.
///
/// The step-duration quantum: the wait after one half-step table entry.
/// Full-step entries wait twice this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Create a new Microseconds value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Scale by an integer factor, saturating on overflow.
    #[inline]
    pub const fn scaled(self, factor: u32) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Clamp to at least one microsecond.
    ///
    /// Inter-step waits derived from a zero duration must not collapse to a
    /// zero-delay busy loop.
    #[inline]
    pub fn at_least_one(self) -> Self {
        Self(self.0.max(1))
    }
}

impl Mul<u32> for Microseconds {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        self.scaled(rhs)
    }
}

/// Microstep subdivision count per electrical cycle.
///
/// Validated at construction to be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivisions(u16);

impl Subdivisions {
    /// Default subdivision count.
    pub const DEFAULT: Self = Self(8);

    /// Create a new Subdivisions value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSubdivisions` if the value is zero.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidSubdivisions(value))
        }
    }

    /// Get the raw subdivision count.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for Subdivisions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for Subdivisions {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Subdivisions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u16::deserialize(deserializer)?;
        Subdivisions::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
