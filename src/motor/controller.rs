//! Rotation controller.
//!
//! Owns one axis: its position, its step actuator, and the rotation state
//! machine that turns targets into limit-checked step sequences.

use core::fmt;

use heapless::String;

use crate::config::units::{Degrees, MicrostepMode};
use crate::config::{ReferenceFrame, RotationLimits, StepLimits};
use crate::error::Result;

use super::actuator::StepActuator;
use super::builder::MotorControllerBuilder;
use super::circular::closest_loop_diff;
use super::direction::Direction;
use super::mode::ModeSelect;
use super::position::MotorPosition;
use super::state::{RotationOutcome, RotationState};

/// Where a rotation should end up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Absolute angle, taken modulo 360 and reached by the shortest path.
    Absolute(Degrees),
    /// Signed microstep count (positive = clockwise).
    RelativeMicrosteps(i64),
    /// Signed angle (positive = clockwise), truncated to whole microsteps.
    RelativeDegrees(Degrees),
}

/// A complete rotation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationCommand {
    /// Where to go.
    pub target: Target,
    /// Soft limits for this command.
    pub limits: RotationLimits,
    /// Frame for degree targets and limits.
    pub frame: ReferenceFrame,
}

impl RotationCommand {
    /// Rotate to an absolute angle, unlimited, in the output frame.
    pub fn absolute(target: Degrees) -> Self {
        Self::new(Target::Absolute(target))
    }

    /// Rotate by a signed microstep count, unlimited.
    pub fn relative_microsteps(microsteps: i64) -> Self {
        Self::new(Target::RelativeMicrosteps(microsteps))
    }

    /// Rotate by a signed angle, unlimited, in the output frame.
    pub fn relative_degrees(delta: Degrees) -> Self {
        Self::new(Target::RelativeDegrees(delta))
    }

    fn new(target: Target) -> Self {
        Self {
            target,
            limits: RotationLimits::none(),
            frame: ReferenceFrame::Output,
        }
    }

    /// Set the soft limits.
    pub fn with_limits(mut self, limits: RotationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the reference frame.
    pub fn in_frame(mut self, frame: ReferenceFrame) -> Self {
        self.frame = frame;
        self
    }
}

/// Read-only snapshot of an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    /// Axis name.
    pub name: String<32>,
    /// Last commanded direction.
    pub direction: Direction,
    /// Current microstep mode.
    pub mode: MicrostepMode,
    /// Position in microsteps.
    pub microsteps: i64,
    /// Position in full steps.
    pub full_steps: i64,
    /// Microsteps per motor revolution.
    pub motor_loop_size: i64,
    /// Microsteps per output revolution.
    pub output_loop_size: i64,
    /// Motor shaft angle.
    pub motor_degrees: Degrees,
    /// Output shaft angle.
    pub output_degrees: Degrees,
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} STATUS", self.name)?;
        writeln!(f, "Direction: {}", self.direction)?;
        writeln!(f, "Mode: {}", self.mode)?;
        writeln!(
            f,
            "Motor position: {} of {} microsteps",
            self.microsteps.rem_euclid(self.motor_loop_size.max(1)),
            self.motor_loop_size
        )?;
        writeln!(
            f,
            "Output position: {} of {} microsteps",
            self.microsteps, self.output_loop_size
        )?;
        writeln!(f, "Motor degree position: {}", self.motor_degrees.0)?;
        write!(f, "Output degree position: {}", self.output_degrees.0)
    }
}

/// Stepper motor controller for one axis.
///
/// Generic over the [`StepActuator`] so real pins, simulated hardware,
/// blocking and cooperative timing all share the same control logic.
pub struct MotorController<A: StepActuator> {
    /// Axis name for logging/debugging.
    name: String<32>,
    /// Absolute position, mode and direction.
    position: MotorPosition,
    /// STEP/DIR line driver.
    actuator: A,
    /// Whether the direction line has been driven since construction.
    direction_driven: bool,
    /// Outcome of the most recent rotation command.
    last_outcome: Option<RotationOutcome>,
}

impl<A: StepActuator> MotorController<A> {
    /// Start building a controller.
    pub fn builder() -> MotorControllerBuilder<A> {
        MotorControllerBuilder::new()
    }

    pub(crate) fn new(name: String<32>, position: MotorPosition, actuator: A) -> Self {
        Self {
            name,
            position,
            actuator,
            direction_driven: false,
            last_outcome: None,
        }
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the position tracker.
    #[inline]
    pub fn position(&self) -> &MotorPosition {
        &self.position
    }

    /// Outcome of the most recent rotation command, if one finished.
    ///
    /// A command aborted by a pin failure clears it.
    #[inline]
    pub fn last_outcome(&self) -> Option<RotationOutcome> {
        self.last_outcome
    }

    /// Get the actuator.
    #[inline]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Consume the controller and return its actuator.
    pub fn release(self) -> A {
        self.actuator
    }

    /// Snapshot of position, mode and direction.
    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            name: self.name.clone(),
            direction: self.position.direction(),
            mode: self.position.mode(),
            microsteps: self.position.microsteps(),
            full_steps: self.position.full_steps(),
            motor_loop_size: self.position.motor_loop_size(),
            output_loop_size: self.position.loop_size(),
            motor_degrees: self.position.degrees(),
            output_degrees: self.position.output_degrees(),
        }
    }

    /// Declare the current physical position as home (0).
    pub fn set_origin(&mut self) {
        self.position.set_microsteps(0);
    }

    /// Declare the current physical position, in microsteps of the current mode.
    pub fn set_position(&mut self, microsteps: i64) {
        self.position.set_microsteps(microsteps);
    }

    /// Drive the direction line and cache the direction.
    ///
    /// Does nothing when `direction` is already the driven direction.
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.direction_driven && self.position.direction() == direction {
            return Ok(());
        }

        self.actuator.set_direction(direction)?;
        self.position.set_direction(direction);
        self.direction_driven = true;
        trace!("{}: direction {}", self.name.as_str(), direction.as_str());
        Ok(())
    }

    /// Switch microstep mode: drive the mode lines, then re-express the
    /// position in the new mode's units.
    ///
    /// Nothing changes if the mode lines fail.
    pub fn set_microstep_mode<L: ModeSelect>(
        &mut self,
        lines: &mut L,
        mode: MicrostepMode,
    ) -> Result<()> {
        lines.select(mode)?;
        self.recalibrate(mode);
        Ok(())
    }

    /// Re-express the position in `mode` units after the lines were driven.
    pub(crate) fn recalibrate(&mut self, mode: MicrostepMode) {
        let old_mode = self.position.mode();
        let old_units = self.position.microsteps();
        self.position.rescale(mode);
        debug!(
            "{}: mode {} -> {}, position {} -> {}",
            self.name.as_str(),
            old_mode.value(),
            mode.value(),
            old_units,
            self.position.microsteps()
        );
    }

    /// Emit one step pulse and move the tracked position with it.
    pub async fn step(&mut self) -> Result<()> {
        self.actuator.pulse().await?;
        self.position.advance();
        Ok(())
    }

    /// Signed microsteps `target` requires from the current position.
    pub fn relative_microsteps(&self, target: Target, frame: ReferenceFrame) -> i64 {
        match target {
            Target::Absolute(degrees) | Target::RelativeDegrees(degrees)
                if !degrees.0.is_finite() =>
            {
                warn!("{}: ignoring non-finite target", self.name.as_str());
                0
            }
            Target::Absolute(degrees) => closest_loop_diff(
                self.position.microsteps(),
                self.position.degrees_to_microsteps(degrees.normalized(), frame),
                self.position.loop_size(),
            ),
            Target::RelativeMicrosteps(microsteps) => microsteps,
            Target::RelativeDegrees(delta) => self.position.degrees_to_microsteps(delta, frame),
        }
    }

    /// Run a rotation command to completion or to a soft limit.
    ///
    /// The position is left wherever stepping stopped. Pin failures abort the
    /// command and are returned as errors.
    pub async fn rotate(&mut self, command: &RotationCommand) -> Result<RotationOutcome> {
        self.enter(RotationState::Computing);
        let relative = self.relative_microsteps(command.target, command.frame);

        let result = if relative == 0 {
            Ok(RotationOutcome::Completed { steps: 0 })
        } else {
            self.run_steps(relative, command).await
        };

        match &result {
            Ok(outcome) => {
                self.enter(outcome.state());
                match *outcome {
                    RotationOutcome::Completed { steps } if steps > 0 => info!(
                        "{}: rotation complete, {} steps, now {} deg",
                        self.name.as_str(),
                        steps,
                        self.position.output_degrees().0
                    ),
                    RotationOutcome::LimitHalted { steps, .. } => warn!(
                        "{}: limit reached after {} of {} steps",
                        self.name.as_str(),
                        steps,
                        relative.unsigned_abs()
                    ),
                    _ => {}
                }
            }
            Err(_) => warn!("{}: rotation aborted by pin failure", self.name.as_str()),
        }

        self.last_outcome = result.as_ref().ok().copied();
        self.enter(RotationState::Idle);
        result
    }

    fn enter(&self, state: RotationState) {
        trace!("{}: {}", self.name.as_str(), state.name());
    }

    async fn run_steps(
        &mut self,
        relative: i64,
        command: &RotationCommand,
    ) -> Result<RotationOutcome> {
        let direction = Direction::from_steps(relative);
        let limits = self.step_limits(&command.limits, command.frame);
        debug!(
            "{}: rotating {} microsteps {}",
            self.name.as_str(),
            relative,
            direction.as_str()
        );

        self.enter(RotationState::Stepping);
        self.set_direction(direction)?;

        let total = relative.unsigned_abs();
        let mut taken: u32 = 0;
        while u64::from(taken) < total {
            let next = self.position.microsteps() + direction.sign();
            if let Some(limit) = limits.blocks(next, direction) {
                return Ok(RotationOutcome::LimitHalted { steps: taken, limit });
            }
            self.step().await?;
            taken += 1;
        }

        Ok(RotationOutcome::Completed { steps: taken })
    }

    fn step_limits(&self, limits: &RotationLimits, frame: ReferenceFrame) -> StepLimits {
        StepLimits {
            ccw: limits
                .ccw
                .filter(|d| d.0.is_finite())
                .map(|d| self.position.degrees_to_microsteps(d, frame)),
            cw: limits
                .cw
                .filter(|d| d.0.is_finite())
                .map(|d| self.position.degrees_to_microsteps(d, frame)),
        }
    }

    /// Rotate to an absolute angle by the shortest path.
    pub async fn rotate_to(
        &mut self,
        target: Degrees,
        limits: &RotationLimits,
        frame: ReferenceFrame,
    ) -> Result<RotationOutcome> {
        let command = RotationCommand::absolute(target)
            .with_limits(*limits)
            .in_frame(frame);
        self.rotate(&command).await
    }

    /// Rotate by a signed microstep count.
    pub async fn rotate_by(
        &mut self,
        microsteps: i64,
        limits: &RotationLimits,
        frame: ReferenceFrame,
    ) -> Result<RotationOutcome> {
        let command = RotationCommand::relative_microsteps(microsteps)
            .with_limits(*limits)
            .in_frame(frame);
        self.rotate(&command).await
    }
}
