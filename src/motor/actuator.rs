//! Step actuation boundary.
//!
//! A [`StepActuator`] owns the STEP and DIR lines of one axis. The pulse
//! holds are the only points where a rotation awaits, so a cooperative
//! executor can interleave both axes inside those windows.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::AxisConfig;
use crate::error::MotorError;

use super::direction::Direction;

/// Hardware boundary driving one axis's STEP and DIR lines.
#[allow(async_fn_in_trait)]
pub trait StepActuator {
    /// Drive the direction line. Settles before the next pulse.
    fn set_direction(&mut self, direction: Direction) -> Result<(), MotorError>;

    /// Emit one step pulse: STEP high, hold, STEP low, hold.
    async fn pulse(&mut self) -> Result<(), MotorError>;

    /// Take on an axis's direction inversion and the pulse timing.
    ///
    /// Actuators without real lines ignore it.
    fn configure(&mut self, _axis: &AxisConfig, _timing: PulseTiming) {}
}

impl<T: StepActuator> StepActuator for &mut T {
    fn set_direction(&mut self, direction: Direction) -> Result<(), MotorError> {
        T::set_direction(self, direction)
    }

    async fn pulse(&mut self) -> Result<(), MotorError> {
        T::pulse(self).await
    }

    fn configure(&mut self, axis: &AxisConfig, timing: PulseTiming) {
        T::configure(self, axis, timing)
    }
}

/// Hold times of the two step pulse phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    /// STEP high hold in nanoseconds.
    pub high_ns: u32,
    /// STEP low hold in nanoseconds.
    pub low_ns: u32,
}

impl PulseTiming {
    /// Same hold for both phases, in microseconds.
    pub const fn symmetric_us(us: u32) -> Self {
        let ns = us.saturating_mul(1_000);
        Self { high_ns: ns, low_ns: ns }
    }

    /// Length of one full pulse in nanoseconds.
    pub const fn period_ns(&self) -> u64 {
        self.high_ns as u64 + self.low_ns as u64
    }
}

impl Default for PulseTiming {
    /// 1 ms per phase, slow enough for common hobby drivers.
    fn default() -> Self {
        Self::symmetric_us(1_000)
    }
}

/// Step actuator over embedded-hal pins.
///
/// Direction line: clockwise = low, counter-clockwise = high, swapped when
/// `invert_direction` is set.
pub struct PinActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    step_pin: STEP,
    dir_pin: DIR,
    delay: DELAY,
    timing: PulseTiming,
    invert_direction: bool,
}

impl<STEP, DIR, DELAY> PinActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create an actuator with default timing.
    pub fn new(step_pin: STEP, dir_pin: DIR, delay: DELAY) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            timing: PulseTiming::default(),
            invert_direction: false,
        }
    }

    /// Create an actuator wired for `axis`.
    pub fn from_axis_config(
        step_pin: STEP,
        dir_pin: DIR,
        delay: DELAY,
        axis: &AxisConfig,
        timing: PulseTiming,
    ) -> Self {
        let mut actuator = Self::new(step_pin, dir_pin, delay);
        actuator.configure(axis, timing);
        actuator
    }

    /// Set the pulse timing.
    pub fn with_timing(mut self, timing: PulseTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Current pulse timing.
    pub fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Give the pins and delay back.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }
}

impl<STEP, DIR, DELAY> StepActuator for PinActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn set_direction(&mut self, direction: Direction) -> Result<(), MotorError> {
        let pin_high = match direction {
            Direction::Clockwise => self.invert_direction,
            Direction::CounterClockwise => !self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)
        }
    }

    async fn pulse(&mut self) -> Result<(), MotorError> {
        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_ns(self.timing.high_ns).await;
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
        self.delay.delay_ns(self.timing.low_ns).await;
        Ok(())
    }

    fn configure(&mut self, axis: &AxisConfig, timing: PulseTiming) {
        self.invert_direction = axis.invert_direction;
        self.timing = timing;
    }
}

/// Runs a blocking delay provider behind the async delay interface.
///
/// Every pulse hold then occupies the calling thread, giving fully
/// synchronous stepping. Axes joined on one executor step one after another.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingDelay<D>(pub D);

impl<D: embedded_hal::delay::DelayNs> DelayNs for BlockingDelay<D> {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.delay_ns(ns);
    }
}
