//! # altaz-tracker
//!
//! Stepper motor position control for a two-axis (azimuth/altitude) tracking mount.
//!
//! ## Features
//!
//! - **Circular positioning**: shortest-path rotation in a wrapping microstep space
//! - **Microstep modes**: full/half/quarter/eighth stepping with position recalibration
//! - **Soft limits**: inclusive clockwise/counter-clockwise bounds, halted never overshot
//! - **embedded-hal 1.0**: `OutputPin` for STEP/DIR/MS lines, async `DelayNs` for pulse timing
//! - **Cooperative axes**: both axes step concurrently on a single-threaded executor
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use altaz_tracker::{MotorController, RotationLimits, ReferenceFrame, Degrees};
//!
//! let mut motor = MotorController::builder()
//!     .name("Azimuth")
//!     .steps_per_revolution(200)
//!     .gear_ratio(3.0)
//!     .actuator(PinActuator::new(step_pin, dir_pin, delay))
//!     .build()?;
//!
//! let outcome = motor
//!     .rotate_to(Degrees(90.0), &RotationLimits::none(), ReferenceFrame::Output)
//!     .await?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and `tracing` logs
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod motor;
pub mod tracking;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, ReferenceFrame, RotationLimits, TrackerConfig};
pub use error::{Error, Result};
pub use motor::{
    closest_loop_diff, Direction, MotorController, MotorPosition, RotationCommand, RotationOutcome,
    RotationState, StepActuator, Target,
};
pub use tracking::{DualAxisCoordinator, HorizontalTarget};

#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Degrees, MicrostepMode};
