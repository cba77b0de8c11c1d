//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::units::MicrostepMode;
use super::{AxisConfig, TrackerConfig};

/// Validate a tracker configuration.
///
/// Checks:
/// - Steps per revolution and gear ratio are positive
/// - Every microstep mode leaves at least one microstep per output revolution
/// - Pulse delay is non-zero
/// - Soft limits lie within [0, 360] degrees
/// - No GPIO pin is assigned twice
pub fn validate_config(config: &TrackerConfig) -> Result<()> {
    for axis in config.axes() {
        validate_axis(axis)?;
    }

    if config.pulse_delay_us == 0 {
        return Err(Error::Config(ConfigError::InvalidPulseTiming(0)));
    }

    let pins = config.pins();
    for (i, pin) in pins.iter().enumerate() {
        if pins[i + 1..].contains(pin) {
            return Err(Error::Config(ConfigError::PinConflict(*pin)));
        }
    }

    Ok(())
}

fn validate_axis(axis: &AxisConfig) -> Result<()> {
    if axis.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)));
    }

    if axis.gear_ratio.is_nan() || axis.gear_ratio <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidGearRatio(axis.gear_ratio)));
    }

    // Full step gives the smallest loop
    if axis.loop_size(MicrostepMode::FULL) < 1 {
        return Err(Error::Config(ConfigError::InvalidGearRatio(axis.gear_ratio)));
    }

    for limit in axis.limits.iter() {
        if !(0.0..=360.0).contains(&limit.0) {
            return Err(Error::Config(ConfigError::InvalidLimit(limit.0)));
        }
    }

    Ok(())
}
