//! Property tests for circular position math.

use altaz_tracker::motor::{NoModeLines, SimulatedActuator};
use altaz_tracker::{
    closest_loop_diff, MicrostepMode, MotorController, MotorPosition, ReferenceFrame,
};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = MicrostepMode> {
    prop::sample::select(vec![
        MicrostepMode::FULL,
        MicrostepMode::HALF,
        MicrostepMode::QUARTER,
        MicrostepMode::EIGHTH,
    ])
}

fn motor(steps: u16) -> MotorController<SimulatedActuator> {
    MotorController::builder()
        .steps_per_revolution(steps)
        .actuator(SimulatedActuator::new())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn diff_is_shortest(c in -1_000_000i64..1_000_000, t in -1_000_000i64..1_000_000, l in 1i64..20_000) {
        let d = closest_loop_diff(c, t, l);
        prop_assert!(2 * d.abs() <= l);
    }

    #[test]
    fn diff_lands_on_target(c in -1_000_000i64..1_000_000, t in -1_000_000i64..1_000_000, l in 1i64..20_000) {
        let d = closest_loop_diff(c, t, l);
        prop_assert_eq!((c + d).rem_euclid(l), t.rem_euclid(l));
    }

    #[test]
    fn diff_to_self_is_zero(x in -1_000_000i64..1_000_000, l in 1i64..20_000) {
        prop_assert_eq!(closest_loop_diff(x, x, l), 0);
    }

    #[test]
    fn degrees_round_trip_within_one_microstep(units in 0i64..1_200, gear in 1u8..4) {
        let pos = MotorPosition::new(400, f32::from(gear));
        prop_assume!(units < pos.loop_size());

        let degrees = pos.microsteps_to_degrees(units, ReferenceFrame::Output);
        let back = pos.degrees_to_microsteps(degrees, ReferenceFrame::Output);
        prop_assert!((back - units).abs() <= 1);
    }

    #[test]
    fn mode_change_is_idempotent(units in 0i64..200, target in mode()) {
        let mut m = motor(200);
        m.set_position(units);

        m.set_microstep_mode(&mut NoModeLines, target).unwrap();
        let once = *m.position();
        m.set_microstep_mode(&mut NoModeLines, target).unwrap();

        prop_assert_eq!(*m.position(), once);
    }

    #[test]
    fn finer_mode_and_back_is_lossless(units in 0i64..200, target in mode()) {
        let mut m = motor(200);
        m.set_position(units);

        m.set_microstep_mode(&mut NoModeLines, target).unwrap();
        prop_assert_eq!(m.position().microsteps(), units * i64::from(target.value()));
        m.set_microstep_mode(&mut NoModeLines, MicrostepMode::FULL).unwrap();

        prop_assert_eq!(m.position().microsteps(), units);
    }
}
