//! Microstep mode-select lines.

use embedded_hal::digital::OutputPin;

use crate::config::units::MicrostepMode;
use crate::error::MotorError;

/// Drives the mode-select lines of one or more stepper drivers.
pub trait ModeSelect {
    /// Put the lines into the state for `mode`.
    fn select(&mut self, mode: MicrostepMode) -> Result<(), MotorError>;
}

impl<T: ModeSelect> ModeSelect for &mut T {
    fn select(&mut self, mode: MicrostepMode) -> Result<(), MotorError> {
        T::select(self, mode)
    }
}

/// MS1/MS2 lines over embedded-hal pins.
pub struct MicrostepPins<MS1, MS2>
where
    MS1: OutputPin,
    MS2: OutputPin,
{
    ms1: MS1,
    ms2: MS2,
}

impl<MS1, MS2> MicrostepPins<MS1, MS2>
where
    MS1: OutputPin,
    MS2: OutputPin,
{
    /// Wrap the two mode lines.
    pub fn new(ms1: MS1, ms2: MS2) -> Self {
        Self { ms1, ms2 }
    }

    /// Give the pins back.
    pub fn release(self) -> (MS1, MS2) {
        (self.ms1, self.ms2)
    }
}

impl<MS1, MS2> ModeSelect for MicrostepPins<MS1, MS2>
where
    MS1: OutputPin,
    MS2: OutputPin,
{
    fn select(&mut self, mode: MicrostepMode) -> Result<(), MotorError> {
        let (ms1_high, ms2_high) = mode.line_levels();
        drive(&mut self.ms1, ms1_high)?;
        drive(&mut self.ms2, ms2_high)
    }
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), MotorError> {
    if high {
        pin.set_high().map_err(|_| MotorError::PinError)
    } else {
        pin.set_low().map_err(|_| MotorError::PinError)
    }
}

/// Driver with hard-wired mode lines; every mode is accepted silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModeLines;

impl ModeSelect for NoModeLines {
    fn select(&mut self, _mode: MicrostepMode) -> Result<(), MotorError> {
        Ok(())
    }
}
