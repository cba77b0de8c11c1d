//! Per-axis motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::limits::RotationLimits;
use super::units::MicrostepMode;
use crate::motor::loop_size;

/// Complete configuration of one mount axis.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// GPIO number of the STEP line.
    pub step_pin: u8,

    /// GPIO number of the DIR line.
    pub dir_pin: u8,

    /// Full motor steps per revolution (typically 200 for 1.8° motors).
    pub steps_per_revolution: u16,

    /// Gear ratio between motor shaft and output (3.0 means three motor turns per output turn).
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f32,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Soft limits applied to every tracking command on this axis.
    #[serde(default)]
    pub limits: RotationLimits,
}

fn default_gear_ratio() -> f32 {
    1.0
}

impl AxisConfig {
    /// Microsteps per output revolution at the given mode.
    pub fn loop_size(&self, mode: MicrostepMode) -> i64 {
        loop_size(self.steps_per_revolution, mode, self.gear_ratio)
    }
}
