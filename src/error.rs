//! Error types for stepper-direct library.
//!
//! Provides unified error handling across configuration and coil drive.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-direct operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Coil drive error
    Drive(DriveError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep subdivision count (must be >= 1)
    InvalidSubdivisions(u16),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// The same pin identifier is assigned to more than one coil terminal
    DuplicatePin(u8),
    /// Invalid step angle (must be > 0 degrees)
    InvalidStepAngle(f32),
    /// Invalid drive strength (must be 2, 4, 8 or 12 mA)
    InvalidDriveStrength(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Coil drive errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    /// GPIO pin write failed
    PinError,
    /// PWM duty-cycle update failed
    PwmError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSubdivisions(v) => {
                write!(f, "Invalid subdivisions: {}. Must be >= 1", v)
            }
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::DuplicatePin(pin) => {
                write!(f, "Pin {} is assigned to more than one coil terminal", pin)
            }
            ConfigError::InvalidStepAngle(v) => {
                write!(f, "Invalid step angle: {}. Must be > 0", v)
            }
            ConfigError::InvalidDriveStrength(v) => {
                write!(f, "Invalid drive strength: {} mA. Valid values: 2, 4, 8, 12", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::PinError => write!(f, "GPIO pin operation failed"),
            DriveError::PwmError => write!(f, "PWM duty-cycle operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}
