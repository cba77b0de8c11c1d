//! Error types for altaz-tracker.
//!
//! Provides unified error handling across configuration and motor control.
//! A rotation stopped by a soft limit is not an error; see
//! [`RotationOutcome`](crate::motor::RotationOutcome).

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all altaz-tracker operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep mode (must be 1, 2, 4 or 8)
    InvalidMicrostepMode(u8),
    /// Invalid gear ratio (must be > 0 and leave at least one microstep per revolution)
    InvalidGearRatio(f32),
    /// Invalid steps per revolution (must be > 0)
    InvalidStepsPerRevolution(u16),
    /// Invalid step pulse delay (must be > 0)
    InvalidPulseTiming(u32),
    /// Soft limit outside [0, 360] degrees
    InvalidLimit(f32),
    /// The same GPIO pin is assigned to more than one line
    PinConflict(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin operation failed at the actuation boundary
    PinError,
    /// Requested microstep mode is not one of 1, 2, 4, 8
    InvalidMicrostepMode(u8),
    /// Requested direction is not clockwise or counter-clockwise
    InvalidDirection(heapless::String<8>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMicrostepMode(v) => {
                write!(f, "Invalid microstep mode: {}. Valid values: 1, 2, 4, 8", v)
            }
            ConfigError::InvalidGearRatio(v) => write!(f, "Invalid gear ratio: {}. Must be > 0", v),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidPulseTiming(v) => {
                write!(f, "Invalid pulse delay: {} us. Must be > 0", v)
            }
            ConfigError::InvalidLimit(v) => {
                write!(f, "Invalid soft limit: {} degrees. Must be within [0, 360]", v)
            }
            ConfigError::PinConflict(pin) => write!(f, "Pin {} is assigned more than once", pin),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::InvalidMicrostepMode(v) => {
                write!(f, "Invalid microstep mode: {}. Valid values: 1, 2, 4, 8", v)
            }
            MotorError::InvalidDirection(v) => {
                write!(f, "Invalid direction: '{}'. Must be CW or CC", v)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
