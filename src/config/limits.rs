//! Soft limit configuration and types.

use serde::Deserialize;

use super::units::Degrees;
use crate::motor::Direction;

/// Which shaft an angle is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum ReferenceFrame {
    /// Angle of the motor shaft itself.
    Motor,
    /// Angle of the geared output (the telescope axis).
    #[default]
    Output,
}

/// The side of travel a limit guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitSide {
    /// Counter-clockwise (decreasing position) bound.
    CounterClockwise,
    /// Clockwise (increasing position) bound.
    Clockwise,
}

/// Inclusive soft limits in degrees (from configuration or per command).
///
/// Either side may be absent, leaving travel unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct RotationLimits {
    /// Lowest position counter-clockwise travel may reach.
    #[serde(default, rename = "ccw_degrees")]
    pub ccw: Option<Degrees>,

    /// Highest position clockwise travel may reach.
    #[serde(default, rename = "cw_degrees")]
    pub cw: Option<Degrees>,
}

impl RotationLimits {
    /// No limits in either direction.
    pub const fn none() -> Self {
        Self { ccw: None, cw: None }
    }

    /// Create new soft limits.
    pub const fn new(ccw: Option<Degrees>, cw: Option<Degrees>) -> Self {
        Self { ccw, cw }
    }

    /// Only a counter-clockwise bound.
    pub const fn ccw(limit: Degrees) -> Self {
        Self { ccw: Some(limit), cw: None }
    }

    /// Only a clockwise bound.
    pub const fn cw(limit: Degrees) -> Self {
        Self { ccw: None, cw: Some(limit) }
    }

    /// Iterate over the configured bounds.
    pub fn iter(&self) -> impl Iterator<Item = Degrees> {
        self.ccw.into_iter().chain(self.cw)
    }
}

/// Soft limits converted to microsteps (for runtime use).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepLimits {
    /// Counter-clockwise bound in microsteps.
    pub ccw: Option<i64>,
    /// Clockwise bound in microsteps.
    pub cw: Option<i64>,
}

impl StepLimits {
    /// Check whether moving to `next` in `direction` would pass a bound.
    ///
    /// Bounds are inclusive: the position may land on a limit, never beyond it.
    pub fn blocks(&self, next: i64, direction: Direction) -> Option<LimitSide> {
        match direction {
            Direction::CounterClockwise => self
                .ccw
                .filter(|&limit| next < limit)
                .map(|_| LimitSide::CounterClockwise),
            Direction::Clockwise => self
                .cw
                .filter(|&limit| next > limit)
                .map(|_| LimitSide::Clockwise),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_limits_inclusive() {
        let limits = StepLimits { ccw: Some(10), cw: Some(50) };

        assert_eq!(limits.blocks(10, Direction::CounterClockwise), None);
        assert_eq!(
            limits.blocks(9, Direction::CounterClockwise),
            Some(LimitSide::CounterClockwise)
        );
        assert_eq!(limits.blocks(50, Direction::Clockwise), None);
        assert_eq!(limits.blocks(51, Direction::Clockwise), Some(LimitSide::Clockwise));
    }

    #[test]
    fn test_limits_only_guard_their_side() {
        let limits = StepLimits { ccw: Some(10), cw: None };

        assert_eq!(limits.blocks(1_000_000, Direction::Clockwise), None);
        assert_eq!(limits.blocks(9, Direction::Clockwise), None);
    }

    #[test]
    fn test_rotation_limits_iter() {
        let limits = RotationLimits::new(Some(Degrees(0.0)), Some(Degrees(90.0)));
        let bounds: heapless::Vec<Degrees, 2> = limits.iter().collect();
        assert_eq!(bounds.as_slice(), &[Degrees(0.0), Degrees(90.0)]);

        assert_eq!(RotationLimits::none().iter().count(), 0);
    }
}
