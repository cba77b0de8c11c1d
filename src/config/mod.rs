//! Configuration module for altaz-tracker.
//!
//! Provides types for loading and validating axis and tracker configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod axis;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
mod validation;

pub use axis::AxisConfig;
pub use limits::{LimitSide, ReferenceFrame, RotationLimits, StepLimits};
pub use system::{ModePins, TrackerConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, MicrostepMode};
