//! Simulated actuation for dry runs without driver hardware.

use embassy_futures::yield_now;

use crate::error::MotorError;

use super::actuator::StepActuator;
use super::direction::Direction;

/// Step actuator that drives no hardware.
///
/// Records what the lines would have done and yields to the executor at
/// each pulse phase, so simulated axes interleave like real ones.
#[derive(Debug, Clone, Default)]
pub struct SimulatedActuator {
    pulses: u32,
    direction_writes: u32,
    direction: Option<Direction>,
    step_high: bool,
}

impl SimulatedActuator {
    /// Create a fresh simulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of complete pulses emitted.
    pub fn pulses(&self) -> u32 {
        self.pulses
    }

    /// Number of direction line writes.
    pub fn direction_writes(&self) -> u32 {
        self.direction_writes
    }

    /// Direction the line was last driven to.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Whether the step line is currently high.
    pub fn step_high(&self) -> bool {
        self.step_high
    }
}

impl StepActuator for SimulatedActuator {
    fn set_direction(&mut self, direction: Direction) -> Result<(), MotorError> {
        self.direction = Some(direction);
        self.direction_writes += 1;
        Ok(())
    }

    async fn pulse(&mut self) -> Result<(), MotorError> {
        self.step_high = true;
        yield_now().await;
        self.step_high = false;
        yield_now().await;
        self.pulses += 1;
        Ok(())
    }
}
