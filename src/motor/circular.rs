//! Shortest movement in a wrapping position space.

use crate::config::units::MicrostepMode;

/// Signed shortest movement from `current` to `target` in a loop of `loop_size`.
///
/// Both positions are wrapped into `[0, loop_size)` first. Positive results
/// move clockwise (increasing position), negative counter-clockwise. When the
/// target is exactly half a loop away the clockwise movement is returned.
///
/// A non-positive `loop_size` has no positions to move between and yields 0.
pub fn closest_loop_diff(current: i64, target: i64, loop_size: i64) -> i64 {
    if loop_size <= 0 {
        return 0;
    }

    let current = current.rem_euclid(loop_size);
    let target = target.rem_euclid(loop_size);
    if current == target {
        return 0;
    }

    let (upper, lower) = if target < current {
        (target + loop_size, target)
    } else {
        (target, target - loop_size)
    };

    let up = upper - current;
    let down = current - lower;
    if down < up {
        -down
    } else {
        up
    }
}

/// Microsteps per output revolution, truncated to a whole microstep.
#[inline]
pub fn loop_size(steps_per_revolution: u16, mode: MicrostepMode, gear_ratio: f32) -> i64 {
    (steps_per_revolution as f64 * mode.value() as f64 * gear_ratio as f64) as i64
}
