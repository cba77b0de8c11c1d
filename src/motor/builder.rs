//! Builder pattern for MotorController.

use core::fmt::Write;

use heapless::String;

use crate::config::AxisConfig;
use crate::error::{ConfigError, Error, Result};

use super::actuator::StepActuator;
use super::circular::loop_size;
use super::controller::MotorController;
use super::position::MotorPosition;
use crate::config::units::MicrostepMode;

/// Default name for the controller with the given id.
///
/// Pure, so callers decide where ids come from; see [`NameAllocator`].
pub fn default_name(id: u32) -> String<32> {
    let mut name = String::new();
    let _ = write!(name, "Motor Controller {}", id);
    name
}

/// Hands out sequential default names, starting at 1.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    next: u32,
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAllocator {
    /// Create an allocator whose first name uses id 1.
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next name.
    pub fn allocate(&mut self) -> String<32> {
        let name = default_name(self.next);
        self.next += 1;
        name
    }
}

/// Builder for creating MotorController instances.
pub struct MotorControllerBuilder<A: StepActuator> {
    actuator: Option<A>,
    name: Option<String<32>>,
    steps_per_revolution: Option<u16>,
    gear_ratio: f32,
}

impl<A: StepActuator> Default for MotorControllerBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: StepActuator> MotorControllerBuilder<A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            actuator: None,
            name: None,
            steps_per_revolution: None,
            gear_ratio: 1.0,
        }
    }

    /// Set the step actuator.
    pub fn actuator(mut self, actuator: A) -> Self {
        self.actuator = Some(actuator);
        self
    }

    /// Set the axis name (truncated to 32 bytes).
    pub fn name(mut self, name: &str) -> Self {
        let mut owned = String::new();
        for c in name.chars() {
            if owned.push(c).is_err() {
                break;
            }
        }
        self.name = Some(owned);
        self
    }

    /// Take the next default name from `names`.
    pub fn auto_name(mut self, names: &mut NameAllocator) -> Self {
        self.name = Some(names.allocate());
        self
    }

    /// Set full steps per motor revolution.
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Set gear ratio (motor turns per output turn, default 1).
    pub fn gear_ratio(mut self, ratio: f32) -> Self {
        self.gear_ratio = ratio;
        self
    }

    /// Configure name, steps and gearing from an axis configuration.
    pub fn from_axis_config(mut self, config: &AxisConfig) -> Self {
        self.name = Some(config.name.clone());
        self.steps_per_revolution = Some(config.steps_per_revolution);
        self.gear_ratio = config.gear_ratio;
        self
    }

    /// Build the MotorController, at home in full-step mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the actuator or steps per revolution are missing,
    /// or the geometry leaves no whole microstep per output revolution.
    pub fn build(self) -> Result<MotorController<A>> {
        let actuator = self.actuator.ok_or_else(|| missing("actuator is required"))?;

        let steps = self
            .steps_per_revolution
            .ok_or_else(|| missing("steps_per_revolution is required"))?;
        if steps == 0 {
            return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)));
        }

        if self.gear_ratio.is_nan()
            || self.gear_ratio <= 0.0
            || loop_size(steps, MicrostepMode::FULL, self.gear_ratio) < 1
        {
            return Err(Error::Config(ConfigError::InvalidGearRatio(self.gear_ratio)));
        }

        let name = self.name.unwrap_or_else(|| default_name(0));

        Ok(MotorController::new(
            name,
            MotorPosition::new(steps, self.gear_ratio),
            actuator,
        ))
    }
}

fn missing(msg: &str) -> Error {
    Error::Config(ConfigError::ParseError(
        String::try_from(msg).unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::SimulatedActuator;

    #[test]
    fn test_allocator_is_sequential() {
        let mut names = NameAllocator::new();

        assert_eq!(names.allocate().as_str(), "Motor Controller 1");
        assert_eq!(names.allocate().as_str(), "Motor Controller 2");
        assert_eq!(default_name(7).as_str(), "Motor Controller 7");
    }

    #[test]
    fn test_build_with_defaults() {
        let mut names = NameAllocator::new();
        let motor = MotorControllerBuilder::new()
            .actuator(SimulatedActuator::new())
            .steps_per_revolution(200)
            .auto_name(&mut names)
            .build()
            .unwrap();

        assert_eq!(motor.name(), "Motor Controller 1");
        assert_eq!(motor.position().microsteps(), 0);
        assert_eq!(motor.position().gear_ratio(), 1.0);
    }

    #[test]
    fn test_missing_actuator() {
        let result = MotorControllerBuilder::<SimulatedActuator>::new()
            .steps_per_revolution(200)
            .build();

        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let result = MotorControllerBuilder::new()
            .actuator(SimulatedActuator::new())
            .steps_per_revolution(200)
            .gear_ratio(0.0)
            .build();
        assert!(matches!(result, Err(Error::Config(ConfigError::InvalidGearRatio(_)))));

        let result = MotorControllerBuilder::new()
            .actuator(SimulatedActuator::new())
            .steps_per_revolution(0)
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        ));
    }

    #[test]
    fn test_long_name_truncated() {
        let motor = MotorControllerBuilder::new()
            .actuator(SimulatedActuator::new())
            .steps_per_revolution(200)
            .name("An axis name that is far longer than thirty-two bytes")
            .build()
            .unwrap();

        assert_eq!(motor.name().len(), 32);
    }
}
