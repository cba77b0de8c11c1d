//! Unit tests for TOML configuration parsing.

use std::io::Write;

use altaz_tracker::config::{load_config, parse_config, ModePins, TrackerConfig};
use altaz_tracker::error::{ConfigError, Error};
use altaz_tracker::{Degrees, MicrostepMode, ReferenceFrame};

/// Test parsing a full tracker configuration from TOML.
#[test]
fn test_parse_tracker_config() {
    let toml_str = r#"
microstep_mode = 4
pulse_delay_us = 250
poll_interval_ms = 50
reference_frame = "motor"

[mode_pins]
ms1 = 5
ms2 = 6

[azimuth]
name = "Azimuth"
step_pin = 17
dir_pin = 27
steps_per_revolution = 200
gear_ratio = 2.5
invert_direction = true

[altitude]
name = "Altitude"
step_pin = 22
dir_pin = 23
steps_per_revolution = 400

[altitude.limits]
ccw_degrees = 10.0
cw_degrees = 80.0
"#;

    let config: TrackerConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.microstep_mode, MicrostepMode::QUARTER);
    assert_eq!(config.pulse_timing().high_ns, 250_000);
    assert_eq!(config.poll_interval_ms, 50);
    assert_eq!(config.reference_frame, ReferenceFrame::Motor);
    assert_eq!(config.mode_pins, Some(ModePins { ms1: 5, ms2: 6 }));

    assert_eq!(config.azimuth.gear_ratio, 2.5);
    assert!(config.azimuth.invert_direction);
    assert_eq!(config.azimuth.limits.iter().count(), 0);
    assert_eq!(config.azimuth.loop_size(MicrostepMode::QUARTER), 2000);

    assert_eq!(config.altitude.steps_per_revolution, 400);
    assert_eq!(config.altitude.limits.ccw, Some(Degrees(10.0)));
    assert_eq!(config.altitude.limits.cw, Some(Degrees(80.0)));
    assert_eq!(config.pins().len(), 6);
}

/// Test defaults applied to omitted fields.
#[test]
fn test_defaults() {
    let toml_str = r#"
[azimuth]
name = "Az"
step_pin = 1
dir_pin = 2
steps_per_revolution = 200

[altitude]
name = "Alt"
step_pin = 3
dir_pin = 4
steps_per_revolution = 200
"#;

    let config = parse_config(toml_str).expect("Defaults should validate");

    assert_eq!(config.microstep_mode, MicrostepMode::FULL);
    assert_eq!(config.reference_frame, ReferenceFrame::Output);
    assert!(!config.altitude.invert_direction);
    assert_eq!(config.pins().as_slice(), &[1, 2, 3, 4]);
}

/// Test that a missing axis is a parse error.
#[test]
fn test_missing_axis() {
    let toml_str = r#"
[azimuth]
name = "Az"
step_pin = 1
dir_pin = 2
steps_per_revolution = 200
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test loading from disk, and the error for a missing file.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("altaz-tracker-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    write!(
        file,
        r#"
[azimuth]
name = "Az"
step_pin = 1
dir_pin = 2
steps_per_revolution = 200

[altitude]
name = "Alt"
step_pin = 3
dir_pin = 4
steps_per_revolution = 200
"#
    )
    .expect("Failed to write temp file");

    let config = load_config(&path).expect("Should load");
    assert_eq!(config.altitude.name.as_str(), "Alt");
    let _ = std::fs::remove_file(&path);

    let missing = load_config(std::env::temp_dir().join("altaz-tracker-does-not-exist.toml"));
    assert!(matches!(missing, Err(Error::Config(ConfigError::IoError(_)))));
}
