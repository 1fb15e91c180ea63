//! Property tests for the position estimator.

use std::cell::Cell;
use std::rc::Rc;

use blinds_motion::error::ActuatorError;
use blinds_motion::{Actuator, BlindController, Clock, Instant, Millis, MotionState, Percent, Relay};
use proptest::prelude::*;

#[derive(Clone, Default)]
struct ManualClock(Rc<Cell<u64>>);

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.0.get())
    }
}

#[derive(Default)]
struct PulseLog(Vec<Relay>);

impl Actuator for PulseLog {
    fn pulse(&mut self, relay: Relay, _now: Instant) -> Result<(), ActuatorError> {
        self.0.push(relay);
        Ok(())
    }
}

type TestBlind = BlindController<PulseLog, ManualClock>;

const PERIOD_MS: u64 = 100;

fn blind(lag_ms: u32) -> (TestBlind, ManualClock) {
    let clock = ManualClock::default();
    let blind = BlindController::builder()
        .actuator(PulseLog::default())
        .clock(clock.clone())
        .motion_time(Millis(10_000))
        .motion_lag(Millis(lag_ms))
        .preset(Percent::new(40).unwrap())
        .build()
        .unwrap();
    (blind, clock)
}

fn step(blind: &mut TestBlind, clock: &ManualClock, ms: u64) {
    clock.0.set(clock.0.get() + ms);
    blind.poll();
}

#[derive(Debug, Clone)]
enum Command {
    Target(u8),
    Stop,
    Wait(u64),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0u8..=100).prop_map(Command::Target),
        Just(Command::Stop),
        (0u64..3_000).prop_map(Command::Wait),
    ]
}

proptest! {
    #[test]
    fn any_target_is_reached(target in 0u8..=100, lag in 0u32..1_000) {
        let (mut blind, clock) = blind(lag);
        let target = Percent::new(target).unwrap();

        blind.set_target_position(target);
        // Full travel plus the lag window, with one tick to spare
        let ticks = 101 + (lag as u64 + PERIOD_MS - 1) / PERIOD_MS;
        for _ in 0..ticks {
            step(&mut blind, &clock, PERIOD_MS);
        }

        prop_assert_eq!(blind.current_position(), target);
        prop_assert_eq!(blind.motion_state(), MotionState::Stopped);
        prop_assert!(!blind.is_tick_timer_active());
    }

    #[test]
    fn estimate_moves_monotonically(start in 0u8..=100, target in 0u8..=100) {
        let (mut blind, clock) = blind(0);
        blind.set_target_position(Percent::new(start).unwrap());
        step(&mut blind, &clock, 101 * PERIOD_MS);

        blind.set_target_position(Percent::new(target).unwrap());
        let direction = blind.motion_state();
        let mut last = blind.current_position();

        while blind.motion_state().is_moving() {
            step(&mut blind, &clock, PERIOD_MS);
            let now = blind.current_position();
            match direction {
                MotionState::Opening => prop_assert!(now >= last),
                MotionState::Closing => prop_assert!(now <= last),
                MotionState::Stopped => prop_assert_eq!(now, last),
            }
            last = now;
        }

        prop_assert_eq!(blind.current_position().value(), target);
    }

    #[test]
    fn tick_timer_runs_only_while_moving(
        commands in prop::collection::vec(command(), 1..40),
        lag in 0u32..500,
    ) {
        let (mut blind, clock) = blind(lag);

        for command in commands {
            match command {
                Command::Target(v) => blind.set_target_position(Percent::new(v).unwrap()),
                Command::Stop => blind.stop(),
                Command::Wait(ms) => step(&mut blind, &clock, ms),
            }
            prop_assert_eq!(blind.is_tick_timer_active(), blind.motion_state().is_moving());
        }
    }

    #[test]
    fn repeating_target_while_moving_sends_nothing(target in 0u8..=98) {
        let (mut blind, clock) = blind(0);
        let target = Percent::new(target).unwrap();
        blind.set_target_position(target);
        prop_assume!(blind.motion_state().is_moving());
        step(&mut blind, &clock, PERIOD_MS);

        let pulses = blind.actuator().0.len();
        blind.set_target_position(target);

        prop_assert_eq!(blind.actuator().0.len(), pulses);
        prop_assert!(blind.is_tick_timer_active());
    }
}
