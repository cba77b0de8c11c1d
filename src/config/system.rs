//! Tracker configuration - root configuration structure.

use serde::Deserialize;

use super::axis::AxisConfig;
use super::limits::ReferenceFrame;
use super::units::MicrostepMode;
use crate::motor::PulseTiming;

/// GPIO numbers of the microstep mode-select lines shared by both drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ModePins {
    /// MS1 line.
    pub ms1: u8,
    /// MS2 line.
    pub ms2: u8,
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Microstep mode selected at startup.
    #[serde(default)]
    pub microstep_mode: MicrostepMode,

    /// Hold time of each step pulse phase in microseconds.
    #[serde(default = "default_pulse_delay_us")]
    pub pulse_delay_us: u32,

    /// Target polling period of the surrounding loop in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,

    /// Frame tracking targets and limits are expressed in.
    #[serde(default)]
    pub reference_frame: ReferenceFrame,

    /// Shared mode-select lines, absent when the drivers are hard-wired.
    #[serde(default)]
    pub mode_pins: Option<ModePins>,

    /// Azimuth axis.
    pub azimuth: AxisConfig,

    /// Altitude axis.
    pub altitude: AxisConfig,
}

fn default_pulse_delay_us() -> u32 {
    1_000
}

fn default_poll_interval_ms() -> u32 {
    100
}

impl TrackerConfig {
    /// Step pulse timing derived from `pulse_delay_us`.
    pub fn pulse_timing(&self) -> PulseTiming {
        PulseTiming::symmetric_us(self.pulse_delay_us)
    }

    /// Both axes, azimuth first.
    pub fn axes(&self) -> [&AxisConfig; 2] {
        [&self.azimuth, &self.altitude]
    }

    /// Every GPIO number the configuration claims.
    pub fn pins(&self) -> heapless::Vec<u8, 6> {
        let mut pins = heapless::Vec::new();
        for axis in self.axes() {
            let _ = pins.push(axis.step_pin);
            let _ = pins.push(axis.dir_pin);
        }
        if let Some(mode_pins) = self.mode_pins {
            let _ = pins.push(mode_pins.ms1);
            let _ = pins.push(mode_pins.ms2);
        }
        pins
    }
}
