//! Unit test harness for altaz-tracker.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod position_properties;
