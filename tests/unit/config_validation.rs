//! Unit tests for configuration validation.

use altaz_tracker::config::{validate_config, TrackerConfig};
use altaz_tracker::error::{ConfigError, Error};

const BASE: &str = r#"
[azimuth]
name = "Az"
step_pin = 17
dir_pin = 27
steps_per_revolution = 200

[altitude]
name = "Alt"
step_pin = 22
dir_pin = 23
steps_per_revolution = 200
"#;

fn base() -> TrackerConfig {
    toml::from_str(BASE).expect("Failed to parse TOML")
}

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    assert!(validate_config(&base()).is_ok());
}

/// Test validation fails for a zero pulse delay.
#[test]
fn test_zero_pulse_delay() {
    let mut config = base();
    config.pulse_delay_us = 0;

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPulseTiming(0)))
    );
}

/// Test validation fails when a mode line reuses an axis pin.
#[test]
fn test_mode_pin_conflict() {
    let toml_str = format!("[mode_pins]\nms1 = 5\nms2 = 22\n{}", BASE);
    let config: TrackerConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::PinConflict(22)))
    );
}

/// Test validation fails for a negative gear ratio.
#[test]
fn test_negative_gear_ratio() {
    let mut config = base();
    config.altitude.gear_ratio = -2.0;

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidGearRatio(_)))
    ));
}

/// Test validation fails for limits outside one revolution.
#[test]
fn test_negative_limit() {
    let toml_str = format!("{}\n[azimuth.limits]\nccw_degrees = -10.0\n", BASE);
    let config: TrackerConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidLimit(-10.0)))
    );
}
