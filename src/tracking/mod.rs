//! Tracking module for altaz-tracker.
//!
//! Turns sky targets into concurrent azimuth/altitude rotations.

mod coordinator;
mod target;

pub use coordinator::{CycleReport, DualAxisCoordinator};
pub use target::HorizontalTarget;
