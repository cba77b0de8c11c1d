//! Rotation direction.

use core::fmt;
use core::str::FromStr;

use crate::error::MotorError;

/// Direction of motor rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (increasing position).
    #[default]
    Clockwise,
    /// Counter-clockwise (decreasing position).
    CounterClockwise,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// Short label, `"CW"` or `"CC"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Clockwise => "CW",
            Direction::CounterClockwise => "CC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MotorError;

    /// Accepts `CW`, `CC` and `CCW` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("cw") {
            Ok(Direction::Clockwise)
        } else if s.eq_ignore_ascii_case("cc") || s.eq_ignore_ascii_case("ccw") {
            Ok(Direction::CounterClockwise)
        } else {
            let mut value = heapless::String::new();
            for c in s.chars() {
                if value.push(c).is_err() {
                    break;
                }
            }
            Err(MotorError::InvalidDirection(value))
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = MotorError;

    fn try_from(sign: i8) -> Result<Self, Self::Error> {
        use core::fmt::Write;
        match sign {
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            other => {
                let mut value = heapless::String::new();
                let _ = write!(value, "{}", other);
                Err(MotorError::InvalidDirection(value))
            }
        }
    }
}
