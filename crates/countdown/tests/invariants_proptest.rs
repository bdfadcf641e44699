//! Property-based tests for the countdown state machine.
//! Verifies invariants hold for ALL tick/press sequences, not just fixed examples.

#![allow(clippy::arithmetic_side_effects)]

use countdown::{
    ButtonEvent, ButtonLevels, EventSet, InputDispatcher, Score, TimerConfig, TimerState,
    TimerStateMachine,
};
use proptest::prelude::*;

/// One simulated tick: how much time passed and what was held.
#[derive(Debug, Clone, Copy)]
struct Step {
    dt_ms: u64,
    levels: ButtonLevels,
}

fn levels() -> impl Strategy<Value = ButtonLevels> {
    // Mostly nothing held, so countdowns get a chance to run.
    prop_oneof![
        6 => Just(ButtonLevels::RELEASED),
        1 => Just(ButtonLevels::primary()),
        1 => Just(ButtonLevels::power_chord()),
        1 => Just(ButtonLevels::secondary()),
        1 => (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(primary, secondary, power_chord)| ButtonLevels { primary, secondary, power_chord }
        ),
    ]
}

fn steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        (0u64..2_500, levels()).prop_map(|(dt_ms, levels)| Step { dt_ms, levels }),
        1..200,
    )
}

fn timer(long: u32, short: u32) -> TimerStateMachine<'static> {
    let config = TimerConfig::new(long, short, 10).unwrap_or_default();
    TimerStateMachine::new(config, Score::alarm())
}

proptest! {
    /// 0 <= remaining <= total after every tick.
    #[test]
    fn remaining_never_exceeds_total(long in 0u32..20, short in 0u32..20, steps in steps()) {
        let mut t = timer(long, short);
        let mut dispatcher = InputDispatcher::new();
        let mut now = 0u64;
        for step in steps {
            now += step.dt_ms;
            t.tick(now, dispatcher.dispatch(step.levels));
            prop_assert!(t.remaining_secs() <= t.total_secs());
        }
    }

    /// SecondaryPressed always lands in Idle with nothing remaining.
    #[test]
    fn secondary_always_clears(long in 0u32..20, short in 0u32..20, steps in steps(), extra in any::<bool>()) {
        let mut t = timer(long, short);
        let mut dispatcher = InputDispatcher::new();
        let mut now = 0u64;
        for step in steps {
            now += step.dt_ms;
            t.tick(now, dispatcher.dispatch(step.levels));
        }
        let mut events = EventSet::from(ButtonEvent::SecondaryPressed);
        if extra {
            events.insert(ButtonEvent::PrimaryPressed);
        }
        t.tick(now, events);
        prop_assert_eq!(t.state(), TimerState::Idle);
        prop_assert_eq!(t.remaining_secs(), 0);
        prop_assert_eq!(t.melody_cursor(), None);
    }

    /// While paused, no amount of elapsed time changes the remaining seconds.
    #[test]
    fn pause_freezes_remaining(warmup_ms in 0u64..9_000, idle in prop::collection::vec(0u64..5_000, 1..50)) {
        let mut t = timer(10, 10);
        t.tick(0, EventSet::from(ButtonEvent::PrimaryPressed));
        t.tick(warmup_ms, EventSet::EMPTY);
        t.tick(warmup_ms, EventSet::from(ButtonEvent::PrimaryPressed));
        prop_assume!(t.state() == TimerState::Paused);

        let frozen = t.remaining_secs();
        let mut now = warmup_ms;
        for dt in idle {
            now += dt;
            let out = t.tick(now, EventSet::EMPTY);
            prop_assert!(!out.render);
            prop_assert_eq!(t.remaining_secs(), frozen);
        }
    }

    /// The melody cursor stays within 0..=len and at most one command per tick.
    #[test]
    fn melody_cursor_in_bounds(dts in prop::collection::vec(0u64..400, 1..300)) {
        let mut t = timer(60, 0);
        t.tick(0, EventSet::from(ButtonEvent::PowerChordPressed));
        prop_assert_eq!(t.state(), TimerState::Finished);
        let len = Score::alarm().len();
        let mut now = 0u64;
        for dt in dts {
            now += dt;
            t.tick(now, EventSet::EMPTY);
            let cursor = t.melody_cursor().unwrap_or(usize::MAX);
            prop_assert!(cursor <= len);
        }
    }

    /// A countdown of N seconds at any sub-second cadence finishes after N seconds.
    #[test]
    fn countdown_takes_total_seconds(total in 1u32..30, cadence in 1u64..1_000) {
        let mut t = timer(total, 10);
        t.tick(0, EventSet::from(ButtonEvent::PrimaryPressed));
        let mut now = 0u64;
        while t.state() == TimerState::Counting {
            now += cadence;
            t.tick(now, EventSet::EMPTY);
        }
        prop_assert_eq!(t.state(), TimerState::Finished);
        prop_assert!(now >= u64::from(total) * 1_000);
        // each second is measured from the tick that closed the previous one
        prop_assert!(now <= u64::from(total) * (1_000 + cadence));
    }
}
