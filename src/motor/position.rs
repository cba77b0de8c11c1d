//! Position tracking for stepper motors.
//!
//! Tracks the absolute position of one axis in microsteps of the current
//! microstep mode, wrapped into one revolution of the geared output.

use crate::config::units::{Degrees, MicrostepMode};
use crate::config::ReferenceFrame;

use super::circular::{closest_loop_diff, loop_size};
use super::direction::Direction;

/// Motor position tracker.
///
/// `units` always lies in `[0, loop_size())`. Only single steps and microstep
/// mode changes move it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorPosition {
    /// Current position in microsteps of `mode`.
    units: i64,
    /// Current microstep mode.
    mode: MicrostepMode,
    /// Last commanded direction.
    direction: Direction,
    /// Full motor steps per motor revolution.
    steps_per_revolution: u16,
    /// Motor turns per output turn.
    gear_ratio: f32,
}

impl MotorPosition {
    /// Create a tracker at home (0) in full-step mode.
    pub fn new(steps_per_revolution: u16, gear_ratio: f32) -> Self {
        Self {
            units: 0,
            mode: MicrostepMode::FULL,
            direction: Direction::Clockwise,
            steps_per_revolution,
            gear_ratio,
        }
    }

    /// Position in microsteps of the current mode.
    #[inline]
    pub fn microsteps(&self) -> i64 {
        self.units
    }

    /// Position in whole full steps.
    #[inline]
    pub fn full_steps(&self) -> i64 {
        self.units / self.mode.value() as i64
    }

    /// Motor shaft angle. Exceeds 360 on geared axes, one motor turn per 360.
    #[inline]
    pub fn degrees(&self) -> Degrees {
        self.microsteps_to_degrees(self.units, ReferenceFrame::Motor)
    }

    /// Output shaft angle.
    #[inline]
    pub fn output_degrees(&self) -> Degrees {
        self.microsteps_to_degrees(self.units, ReferenceFrame::Output)
    }

    /// Current microstep mode.
    #[inline]
    pub fn mode(&self) -> MicrostepMode {
        self.mode
    }

    /// Last commanded direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Full motor steps per motor revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u16 {
        self.steps_per_revolution
    }

    /// Motor turns per output turn.
    #[inline]
    pub fn gear_ratio(&self) -> f32 {
        self.gear_ratio
    }

    /// Microsteps per output revolution at the current mode.
    #[inline]
    pub fn loop_size(&self) -> i64 {
        loop_size(self.steps_per_revolution, self.mode, self.gear_ratio)
    }

    /// Microsteps per motor revolution at the current mode.
    #[inline]
    pub fn motor_loop_size(&self) -> i64 {
        self.steps_per_revolution as i64 * self.mode.value() as i64
    }

    /// Convert an angle to microsteps of the current mode, truncating toward zero.
    pub fn degrees_to_microsteps(&self, degrees: Degrees, frame: ReferenceFrame) -> i64 {
        (degrees.0 as f64 * self.microsteps_per_turn(frame) / 360.0) as i64
    }

    /// Convert microsteps of the current mode to an angle.
    pub fn microsteps_to_degrees(&self, microsteps: i64, frame: ReferenceFrame) -> Degrees {
        Degrees((microsteps as f64 * 360.0 / self.microsteps_per_turn(frame)) as f32)
    }

    fn microsteps_per_turn(&self, frame: ReferenceFrame) -> f64 {
        let motor = self.steps_per_revolution as f64 * self.mode.value() as f64;
        match frame {
            ReferenceFrame::Motor => motor,
            ReferenceFrame::Output => motor * self.gear_ratio as f64,
        }
    }

    /// Move one microstep in the cached direction.
    pub(crate) fn advance(&mut self) {
        self.units = (self.units + self.direction.sign()).rem_euclid(self.loop_size());
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Overwrite the position (re-homing), wrapped into range.
    pub(crate) fn set_microsteps(&mut self, microsteps: i64) {
        self.units = microsteps.rem_euclid(self.loop_size());
    }

    /// Re-express the position in `new_mode` units.
    ///
    /// Moving to a coarser mode first snaps to the nearest position the
    /// coarser mode can represent (half-way rounds clockwise). Moving to a
    /// finer mode is exact.
    pub(crate) fn rescale(&mut self, new_mode: MicrostepMode) {
        let old = self.mode.value() as i64;
        let new = new_mode.value() as i64;
        if old == new {
            return;
        }

        let mut units = self.units;
        if old > new {
            let ratio = old / new;
            units = (units + closest_loop_diff(units, 0, ratio)).rem_euclid(self.loop_size());
        }

        self.mode = new_mode;
        self.units = (units * new / old).rem_euclid(self.loop_size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(units: i64, mode: MicrostepMode) -> MotorPosition {
        let mut pos = MotorPosition::new(200, 1.0);
        pos.mode = mode;
        pos.set_microsteps(units);
        pos
    }

    #[test]
    fn test_home_position() {
        let pos = MotorPosition::new(200, 3.0);

        assert_eq!(pos.microsteps(), 0);
        assert_eq!(pos.mode(), MicrostepMode::FULL);
        assert_eq!(pos.direction(), Direction::Clockwise);
        assert_eq!(pos.loop_size(), 600);
        assert_eq!(pos.motor_loop_size(), 200);
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        let mut pos = at(199, MicrostepMode::FULL);
        pos.advance();
        assert_eq!(pos.microsteps(), 0);

        pos.set_direction(Direction::CounterClockwise);
        pos.advance();
        assert_eq!(pos.microsteps(), 199);
    }

    #[test]
    fn test_degree_conversions() {
        let pos = MotorPosition::new(200, 2.0);

        assert_eq!(pos.degrees_to_microsteps(Degrees(90.0), ReferenceFrame::Motor), 50);
        assert_eq!(pos.degrees_to_microsteps(Degrees(90.0), ReferenceFrame::Output), 100);
        assert_eq!(pos.degrees_to_microsteps(Degrees(-5.0), ReferenceFrame::Motor), -2);
        assert_eq!(pos.microsteps_to_degrees(100, ReferenceFrame::Output), Degrees(90.0));
        assert_eq!(pos.microsteps_to_degrees(100, ReferenceFrame::Motor), Degrees(180.0));
    }

    #[test]
    fn test_views() {
        let mut pos = MotorPosition::new(200, 2.0);
        pos.mode = MicrostepMode::QUARTER;
        pos.set_microsteps(1000);

        assert_eq!(pos.full_steps(), 250);
        assert_eq!(pos.degrees(), Degrees(450.0));
        assert_eq!(pos.output_degrees(), Degrees(225.0));
    }

    #[test]
    fn test_rescale_to_finer_mode_is_exact() {
        let mut pos = at(50, MicrostepMode::FULL);
        pos.rescale(MicrostepMode::EIGHTH);

        assert_eq!(pos.microsteps(), 400);
        assert_eq!(pos.mode(), MicrostepMode::EIGHTH);
    }

    #[test]
    fn test_rescale_to_coarser_mode_snaps() {
        // 403 eighths = 50.375 full steps
        let mut pos = at(403, MicrostepMode::EIGHTH);
        pos.rescale(MicrostepMode::FULL);
        assert_eq!(pos.microsteps(), 50);

        // 405 eighths = 50.625 full steps
        let mut pos = at(405, MicrostepMode::EIGHTH);
        pos.rescale(MicrostepMode::FULL);
        assert_eq!(pos.microsteps(), 51);

        // Half-way rounds clockwise
        let mut pos = at(404, MicrostepMode::EIGHTH);
        pos.rescale(MicrostepMode::FULL);
        assert_eq!(pos.microsteps(), 51);
    }

    #[test]
    fn test_rescale_snap_wraps_at_end_of_loop() {
        let mut pos = at(1599, MicrostepMode::EIGHTH);
        pos.rescale(MicrostepMode::FULL);

        assert_eq!(pos.microsteps(), 0);
    }

    #[test]
    fn test_rescale_same_mode_is_noop() {
        let mut pos = at(403, MicrostepMode::EIGHTH);
        pos.rescale(MicrostepMode::EIGHTH);

        assert_eq!(pos.microsteps(), 403);
    }
}
