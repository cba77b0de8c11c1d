//! Dual-axis coordinator.
//!
//! Runs the azimuth and altitude controllers side by side for each tracking
//! cycle and owns the mode-select lines both drivers share.

use embassy_futures::join::join;

use crate::config::units::MicrostepMode;
use crate::config::{ReferenceFrame, RotationLimits, TrackerConfig};
use crate::error::Result;
use crate::motor::{
    ModeSelect, MotorController, MotorControllerBuilder, RotationCommand, RotationOutcome,
    StepActuator,
};

use super::target::HorizontalTarget;

/// Result of one tracking cycle, one entry per axis.
///
/// Each axis reports independently: a limit halt or pin failure on one axis
/// says nothing about the other.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// Azimuth outcome.
    pub azimuth: Result<RotationOutcome>,
    /// Altitude outcome.
    pub altitude: Result<RotationOutcome>,
}

impl CycleReport {
    /// Both axes reached their targets.
    pub fn is_complete(&self) -> bool {
        matches!(&self.azimuth, Ok(o) if o.is_success())
            && matches!(&self.altitude, Ok(o) if o.is_success())
    }

    /// At least one axis stopped on a soft limit.
    pub fn any_limit_halted(&self) -> bool {
        [&self.azimuth, &self.altitude]
            .into_iter()
            .any(|r| matches!(r, Ok(o) if !o.is_success()))
    }

    /// At least one axis failed at the actuation boundary.
    pub fn any_error(&self) -> bool {
        self.azimuth.is_err() || self.altitude.is_err()
    }
}

/// Drives an alt-azimuth mount: two independent controllers plus the
/// mode-select lines their drivers share.
///
/// Mode changes only go through the coordinator, so both axes always track
/// the mode the shared lines are actually in.
pub struct DualAxisCoordinator<AZ, ALT, M>
where
    AZ: StepActuator,
    ALT: StepActuator,
    M: ModeSelect,
{
    azimuth: MotorController<AZ>,
    altitude: MotorController<ALT>,
    mode_lines: M,
    azimuth_limits: RotationLimits,
    altitude_limits: RotationLimits,
    frame: ReferenceFrame,
    cycles: u32,
}

impl<AZ, ALT, M> DualAxisCoordinator<AZ, ALT, M>
where
    AZ: StepActuator,
    ALT: StepActuator,
    M: ModeSelect,
{
    /// Combine two controllers and the shared mode lines.
    ///
    /// The controllers should still be in their initial full-step mode; call
    /// [`set_microstep_mode`](Self::set_microstep_mode) to change it.
    pub fn new(azimuth: MotorController<AZ>, altitude: MotorController<ALT>, mode_lines: M) -> Self {
        Self {
            azimuth,
            altitude,
            mode_lines,
            azimuth_limits: RotationLimits::none(),
            altitude_limits: RotationLimits::none(),
            frame: ReferenceFrame::Output,
            cycles: 0,
        }
    }

    /// Build both controllers from configuration and apply its microstep mode.
    ///
    /// Each actuator is given its axis's direction inversion and the
    /// configured pulse timing.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is invalid or the mode lines fail.
    pub fn from_config(
        config: &TrackerConfig,
        mut azimuth: AZ,
        mut altitude: ALT,
        mode_lines: M,
    ) -> Result<Self> {
        let timing = config.pulse_timing();
        azimuth.configure(&config.azimuth, timing);
        altitude.configure(&config.altitude, timing);

        let azimuth = MotorControllerBuilder::new()
            .from_axis_config(&config.azimuth)
            .actuator(azimuth)
            .build()?;
        let altitude = MotorControllerBuilder::new()
            .from_axis_config(&config.altitude)
            .actuator(altitude)
            .build()?;

        let mut coordinator = Self::new(azimuth, altitude, mode_lines)
            .with_limits(config.azimuth.limits, config.altitude.limits)
            .with_frame(config.reference_frame);
        coordinator.set_microstep_mode(config.microstep_mode)?;
        Ok(coordinator)
    }

    /// Set the soft limits applied to every cycle.
    pub fn with_limits(mut self, azimuth: RotationLimits, altitude: RotationLimits) -> Self {
        self.azimuth_limits = azimuth;
        self.altitude_limits = altitude;
        self
    }

    /// Set the frame targets and limits are expressed in.
    pub fn with_frame(mut self, frame: ReferenceFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Azimuth controller.
    pub fn azimuth(&self) -> &MotorController<AZ> {
        &self.azimuth
    }

    /// Altitude controller.
    pub fn altitude(&self) -> &MotorController<ALT> {
        &self.altitude
    }

    /// Azimuth soft limits.
    pub fn azimuth_limits(&self) -> &RotationLimits {
        &self.azimuth_limits
    }

    /// Altitude soft limits.
    pub fn altitude_limits(&self) -> &RotationLimits {
        &self.altitude_limits
    }

    /// Reference frame for targets and limits.
    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Microstep mode of the shared lines.
    pub fn microstep_mode(&self) -> MicrostepMode {
        self.azimuth.position().mode()
    }

    /// Number of tracking cycles run.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Drive the shared mode lines once, then recalibrate both axes.
    ///
    /// If the lines fail neither axis changes.
    pub fn set_microstep_mode(&mut self, mode: MicrostepMode) -> Result<()> {
        self.mode_lines.select(mode)?;
        self.azimuth.recalibrate(mode);
        self.altitude.recalibrate(mode);
        Ok(())
    }

    /// Rotate both axes toward `target` concurrently.
    ///
    /// Returns once both axes have completed, halted on a limit, or failed.
    pub async fn track(&mut self, target: HorizontalTarget) -> CycleReport {
        let azimuth = RotationCommand::absolute(target.azimuth)
            .with_limits(self.azimuth_limits)
            .in_frame(self.frame);
        let altitude = RotationCommand::absolute(target.altitude)
            .with_limits(self.altitude_limits)
            .in_frame(self.frame);
        debug!(
            "Tracking cycle {}: az {} alt {}",
            self.cycles + 1,
            target.azimuth.0,
            target.altitude.0
        );
        self.run_cycle(&azimuth, &altitude).await
    }

    /// Run one command per axis concurrently.
    pub async fn run_cycle(
        &mut self,
        azimuth: &RotationCommand,
        altitude: &RotationCommand,
    ) -> CycleReport {
        let (azimuth, altitude) =
            join(self.azimuth.rotate(azimuth), self.altitude.rotate(altitude)).await;
        self.cycles = self.cycles.wrapping_add(1);

        let report = CycleReport { azimuth, altitude };
        if !report.is_complete() {
            warn!(
                "Cycle {} incomplete (limit halt: {}, error: {})",
                self.cycles,
                report.any_limit_halted(),
                report.any_error()
            );
        }
        report
    }

    /// Consume the coordinator and return its parts.
    pub fn release(self) -> (MotorController<AZ>, MotorController<ALT>, M) {
        (self.azimuth, self.altitude, self.mode_lines)
    }
}
