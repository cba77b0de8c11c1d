//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles and microstep modes to
//! prevent unit confusion at compile time.

use serde::Deserialize;

use crate::error::{ConfigError, MotorError};

/// Angular position in degrees.
///
/// Used for configuration and user-facing API. Internally converted to microsteps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Wrap into `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> Self {
        let wrapped = libm::fmodf(self.0, 360.0);
        if wrapped < 0.0 {
            // -1e-8 + 360.0 rounds to 360.0 in f32
            let lifted = wrapped + 360.0;
            Self(if lifted >= 360.0 { 0.0 } else { lifted })
        } else {
            Self(wrapped)
        }
    }

    /// Create from radians.
    #[inline]
    pub fn from_radians(radians: f32) -> Self {
        Self(radians.to_degrees())
    }
}

/// Microstep divisor supported by the driver's two mode-select lines.
///
/// ```text
/// MS1   MS2   Mode
/// Low   Low   [1] Full step
/// High  Low   [2] Half step
/// Low   High  [4] Quarter step
/// High  High  [8] Eighth step
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MicrostepMode(u8);

impl MicrostepMode {
    /// Full step (no microstepping).
    pub const FULL: Self = Self(1);
    /// Half step.
    pub const HALF: Self = Self(2);
    /// Quarter step.
    pub const QUARTER: Self = Self(4);
    /// Eighth step (maximum resolution).
    pub const EIGHTH: Self = Self(8);

    /// Valid mode values.
    pub const VALID_VALUES: [u8; 4] = [1, 2, 4, 8];

    /// Create a new mode with validation.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidMicrostepMode` if the value is not 1, 2, 4 or 8.
    pub fn new(value: u8) -> Result<Self, MotorError> {
        if Self::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(MotorError::InvalidMicrostepMode(value))
        }
    }

    /// Get the raw divisor value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if a value is valid.
    #[inline]
    pub fn is_valid(value: u8) -> bool {
        Self::VALID_VALUES.contains(&value)
    }

    /// Logic levels for the (MS1, MS2) lines, `true` = high.
    #[inline]
    pub const fn line_levels(self) -> (bool, bool) {
        match self.0 {
            2 => (true, false),
            4 => (false, true),
            8 => (true, true),
            _ => (false, false),
        }
    }
}

impl Default for MicrostepMode {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u8> for MicrostepMode {
    type Error = MotorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::fmt::Display for MicrostepMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0 == 1 {
            write!(f, "full step")
        } else {
            write!(f, "1/{} step", self.0)
        }
    }
}

impl<'de> Deserialize<'de> for MicrostepMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        MicrostepMode::new(value).map_err(|_| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", ConfigError::InvalidMicrostepMode(value));
            serde::de::Error::custom(buf.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microstep_valid_values() {
        for &v in &MicrostepMode::VALID_VALUES {
            assert!(MicrostepMode::new(v).is_ok());
        }
    }

    #[test]
    fn test_microstep_invalid_values() {
        assert_eq!(MicrostepMode::new(0), Err(MotorError::InvalidMicrostepMode(0)));
        assert!(MicrostepMode::new(3).is_err());
        assert!(MicrostepMode::new(16).is_err());
    }

    #[test]
    fn test_mode_line_table() {
        assert_eq!(MicrostepMode::FULL.line_levels(), (false, false));
        assert_eq!(MicrostepMode::HALF.line_levels(), (true, false));
        assert_eq!(MicrostepMode::QUARTER.line_levels(), (false, true));
        assert_eq!(MicrostepMode::EIGHTH.line_levels(), (true, true));
    }

    #[test]
    fn test_degrees_normalized() {
        assert_eq!(Degrees(370.0).normalized(), Degrees(10.0));
        assert_eq!(Degrees(-90.0).normalized(), Degrees(270.0));
        assert_eq!(Degrees(360.0).normalized(), Degrees(0.0));
        assert_eq!(Degrees(359.5).normalized(), Degrees(359.5));
    }

    #[test]
    fn test_degrees_from_radians() {
        let d = Degrees::from_radians(core::f32::consts::FRAC_PI_2);
        assert!((d.0 - 90.0).abs() < 0.0001);
    }
}
