//! Rotation state machine states and outcomes.

use crate::config::LimitSide;

/// Where a controller is in handling a rotation command.
///
/// `Idle -> Computing -> Stepping -> {Completed | LimitHalted} -> Idle`.
/// Between commands a controller is `Idle`; the terminal state of the last
/// command is kept as its [`RotationOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationState {
    /// Ready for a command.
    #[default]
    Idle,
    /// Working out the relative movement.
    Computing,
    /// Emitting step pulses.
    Stepping,
    /// Every requested step was taken.
    Completed,
    /// Stopped on a soft limit.
    LimitHalted,
}

impl RotationState {
    /// Get the state name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            RotationState::Idle => "Idle",
            RotationState::Computing => "Computing",
            RotationState::Stepping => "Stepping",
            RotationState::Completed => "Completed",
            RotationState::LimitHalted => "LimitHalted",
        }
    }
}

/// Result of a rotation command that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationOutcome {
    /// Target reached, or no movement was needed (`steps == 0`).
    Completed {
        /// Microsteps taken.
        steps: u32,
    },
    /// The next step would have passed a soft limit.
    LimitHalted {
        /// Microsteps taken before halting.
        steps: u32,
        /// Which limit stopped the rotation.
        limit: LimitSide,
    },
}

impl RotationOutcome {
    /// Whether the whole movement was carried out.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, RotationOutcome::Completed { .. })
    }

    /// Microsteps actually taken.
    #[inline]
    pub fn steps(&self) -> u32 {
        match *self {
            RotationOutcome::Completed { steps } | RotationOutcome::LimitHalted { steps, .. } => steps,
        }
    }

    /// The terminal state this outcome corresponds to.
    #[inline]
    pub fn state(&self) -> RotationState {
        match self {
            RotationOutcome::Completed { .. } => RotationState::Completed,
            RotationOutcome::LimitHalted { .. } => RotationState::LimitHalted,
        }
    }
}
