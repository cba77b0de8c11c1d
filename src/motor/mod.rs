//! Motor module for altaz-tracker.
//!
//! Provides circular position math, position tracking, step actuation and
//! the per-axis rotation controller.

mod actuator;
mod builder;
mod circular;
mod controller;
mod direction;
mod mode;
mod position;
mod sim;
pub mod state;

pub use actuator::{BlockingDelay, PinActuator, PulseTiming, StepActuator};
pub use builder::{default_name, MotorControllerBuilder, NameAllocator};
pub use circular::{closest_loop_diff, loop_size};
pub use controller::{MotorController, RotationCommand, Target, Telemetry};
pub use direction::Direction;
pub use mode::{MicrostepPins, ModeSelect, NoModeLines};
pub use position::MotorPosition;
pub use sim::SimulatedActuator;
pub use state::{RotationOutcome, RotationState};
