//! Capability-trait contract tests, using local test doubles.
// Integration test file: expect/unwrap are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::arithmetic_side_effects
)]
//!
//! Run with: cargo test -p platform --test capabilities

use std::cell::Cell;

use platform::{
    AudioCommand, AudioDriver, ButtonEvent, ButtonLevels, Clock, EmbassyClock, TimerSnapshot,
    TimerState,
};
use proptest::prelude::*;

/// Records which trait method `apply` routed to.
#[derive(Default)]
struct Recorder {
    tones: Vec<(u32, u32)>,
    mutes: usize,
}

impl AudioDriver for Recorder {
    type Error = ();

    fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), Self::Error> {
        self.tones.push((freq_hz, duration_ms));
        Ok(())
    }

    fn mute(&mut self) -> Result<(), Self::Error> {
        self.mutes = self.mutes.saturating_add(1);
        Ok(())
    }
}

struct FixedClock(Cell<u64>);

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

#[test]
fn apply_routes_commands() {
    let mut audio = Recorder::default();
    audio
        .apply(AudioCommand::PlayTone {
            freq_hz: 392,
            duration_ms: 100,
        })
        .unwrap();
    audio.apply(AudioCommand::Mute).unwrap();
    assert_eq!(audio.tones, vec![(392, 100)]);
    assert_eq!(audio.mutes, 1);
}

#[test]
fn borrowed_clock_reads_through() {
    let clock = FixedClock(Cell::new(42));
    let by_ref: &dyn Clock = &clock;
    assert_eq!((&clock).now_ms(), 42);
    clock.0.set(43);
    assert_eq!(by_ref.now_ms(), 43);
}

#[test]
fn embassy_clock_is_monotonic() {
    let clock = EmbassyClock::new();
    let a = clock.now_ms();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let b = clock.now_ms();
    assert!(b >= a.saturating_add(5));
}

#[test]
fn idle_snapshot_is_the_default() {
    assert_eq!(TimerSnapshot::default(), TimerSnapshot::IDLE);
    assert_eq!(TimerState::default(), TimerState::Idle);
}

#[test]
fn labels_are_distinct() {
    let states = [
        TimerState::Idle,
        TimerState::Counting,
        TimerState::Paused,
        TimerState::Finished,
    ];
    for (i, a) in states.iter().enumerate() {
        for b in states.iter().skip(i.saturating_add(1)) {
            assert_ne!(a.label(), b.label());
        }
    }
    assert_ne!(AudioCommand::Mute.label(), AudioCommand::PlayTone { freq_hz: 1, duration_ms: 1 }.label());
}

proptest! {
    /// `is_held` reads exactly the field behind each event.
    #[test]
    fn is_held_matches_fields(primary in any::<bool>(), secondary in any::<bool>(), power_chord in any::<bool>()) {
        let levels = ButtonLevels { primary, secondary, power_chord };
        prop_assert_eq!(levels.is_held(ButtonEvent::PrimaryPressed), primary);
        prop_assert_eq!(levels.is_held(ButtonEvent::SecondaryPressed), secondary);
        prop_assert_eq!(levels.is_held(ButtonEvent::PowerChordPressed), power_chord);
        let held = ButtonEvent::ALL.iter().filter(|e| levels.is_held(**e)).count();
        prop_assert_eq!(held, usize::from(primary) + usize::from(secondary) + usize::from(power_chord));
    }
}
