//! Countdown state machine.
//!
//! `TimerStateMachine` is a pure, `no_std`, allocation-free state machine.
//! It has no I/O: each tick it is handed the clock reading and the press
//! events, and it returns a [`TickOutcome`] saying whether the face needs a
//! redraw and which audio command (if any) to issue. The firmware controller
//! carries those out.
//!
//! ```text
//!            primary / chord                 primary / chord
//!   ┌──────┐ ───────────────▶ ┌──────────┐ ◀────────────────▶ ┌────────┐
//!   │ Idle │                  │ Counting │                    │ Paused │
//!   └──────┘ ◀─┐              └──────────┘                    └────────┘
//!      ▲       │ primary/chord      │ remaining == 0
//!      │       │             ┌──────▼───┐
//!      │       └──────────── │ Finished │
//!      │                     └──────────┘
//!      └──── secondary (from any state)
//! ```
//!
//! Time is measured, not counted: a decrement happens when at least
//! [`SECOND_MS`] has elapsed since the previous one, however many ticks that
//! took. At most one second is consumed per tick; if the loop was starved for
//! longer, the surplus is dropped rather than caught up.

use platform::{AudioCommand, ButtonEvent, TimerSnapshot, TimerState};

use crate::config::{TimerConfig, SECOND_MS};
use crate::dispatcher::EventSet;
use crate::melody::{MelodyScheduler, Score};

/// Remaining-time bookkeeping for one countdown session.
///
/// Invariant: `remaining_secs <= total_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownContext {
    total_secs: u32,
    remaining_secs: u32,
    last_tick_ms: u64,
}

impl CountdownContext {
    fn start(&mut self, total_secs: u32, now_ms: u64) {
        self.total_secs = total_secs;
        self.remaining_secs = total_secs;
        self.last_tick_ms = now_ms;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Duration chosen at start.
    pub const fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// Seconds still to count.
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Clock reading of the last second-boundary decrement (or start/resume).
    /// Only meaningful while counting.
    pub const fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }
}

/// What the caller must do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Redraw the face from [`TimerStateMachine::snapshot`]
    pub render: bool,
    /// Send this to the audio driver
    pub audio: Option<AudioCommand>,
}

/// The timer.
#[derive(Debug, Clone)]
pub struct TimerStateMachine<'a> {
    config: TimerConfig,
    score: Score<'a>,
    state: TimerState,
    countdown: CountdownContext,
    melody: Option<MelodyScheduler<'a>>,
}

impl<'a> TimerStateMachine<'a> {
    /// Create a timer in [`TimerState::Idle`].
    pub fn new(config: TimerConfig, score: Score<'a>) -> Self {
        Self {
            config,
            score,
            state: TimerState::Idle,
            countdown: CountdownContext::default(),
            melody: None,
        }
    }

    /// Run one tick: apply `events`, then the time-based countdown, then the
    /// alarm melody.
    ///
    /// The tick that enters [`TimerState::Finished`] only arms the melody;
    /// its first note goes out on the following tick.
    pub fn tick(&mut self, now_ms: u64, events: EventSet) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.apply_events(now_ms, events, &mut outcome);

        let alarm_running = self.state == TimerState::Finished;
        if self.state == TimerState::Counting {
            self.advance_countdown(now_ms, &mut outcome);
        }

        if alarm_running {
            if let Some(melody) = self.melody.as_mut() {
                outcome.audio = melody.tick(now_ms);
            }
        }

        outcome
    }

    fn apply_events(&mut self, now_ms: u64, events: EventSet, outcome: &mut TickOutcome) {
        // Secondary cancels from every state and wins over anything else
        // pressed in the same tick.
        if events.contains(ButtonEvent::SecondaryPressed) {
            self.clear(outcome);
            return;
        }

        let start_event = if events.contains(ButtonEvent::PrimaryPressed) {
            ButtonEvent::PrimaryPressed
        } else if events.contains(ButtonEvent::PowerChordPressed) {
            ButtonEvent::PowerChordPressed
        } else {
            return;
        };

        match self.state {
            TimerState::Idle => {
                let total_secs = self.config.duration_for(start_event).unwrap_or_default();
                self.countdown.start(total_secs, now_ms);
                self.transition(TimerState::Counting, outcome);
            }
            TimerState::Counting => self.transition(TimerState::Paused, outcome),
            TimerState::Paused => {
                // Time spent paused is not counted.
                self.countdown.last_tick_ms = now_ms;
                self.transition(TimerState::Counting, outcome);
            }
            TimerState::Finished => self.clear(outcome),
        }
    }

    fn advance_countdown(&mut self, now_ms: u64, outcome: &mut TickOutcome) {
        if self.countdown.remaining_secs == 0 {
            self.finish(outcome);
            return;
        }
        if now_ms.saturating_sub(self.countdown.last_tick_ms) < SECOND_MS {
            return;
        }

        self.countdown.remaining_secs = self.countdown.remaining_secs.saturating_sub(1);
        self.countdown.last_tick_ms = now_ms;
        outcome.render = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("timer: {=u32}s remaining", self.countdown.remaining_secs);
        #[cfg(feature = "tracing")]
        tracing::trace!(remaining_secs = self.countdown.remaining_secs, "second elapsed");

        if self.countdown.remaining_secs == 0 {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: &mut TickOutcome) {
        self.melody = Some(MelodyScheduler::new(self.score));
        self.transition(TimerState::Finished, outcome);
    }

    fn clear(&mut self, outcome: &mut TickOutcome) {
        self.countdown.clear();
        self.melody = None;
        outcome.audio = Some(AudioCommand::Mute);
        self.transition(TimerState::Idle, outcome);
    }

    fn transition(&mut self, next: TimerState, outcome: &mut TickOutcome) {
        #[cfg(feature = "defmt")]
        defmt::debug!("timer: {=str} -> {=str}", self.state.label(), next.label());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.state.label(),
            to = next.label(),
            remaining_secs = self.countdown.remaining_secs,
            "timer transition"
        );

        self.state = next;
        outcome.render = true;
    }

    /// Current state.
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Countdown bookkeeping.
    pub const fn countdown(&self) -> &CountdownContext {
        &self.countdown
    }

    /// Seconds still to count.
    pub const fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs
    }

    /// Duration of the current session (0 when idle).
    pub const fn total_secs(&self) -> u32 {
        self.countdown.total_secs
    }

    /// Melody cursor while the alarm is active.
    pub fn melody_cursor(&self) -> Option<usize> {
        self.melody.as_ref().map(MelodyScheduler::cursor)
    }

    /// Active configuration.
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// What a presenter should draw right now.
    pub const fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.state,
            remaining_secs: self.countdown.remaining_secs,
            total_secs: self.countdown.total_secs,
        }
    }
}

impl Default for TimerStateMachine<'static> {
    fn default() -> Self {
        Self::new(TimerConfig::default(), Score::alarm())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    const PRIMARY: EventSet = EventSet::EMPTY.with(ButtonEvent::PrimaryPressed);
    const SECONDARY: EventSet = EventSet::EMPTY.with(ButtonEvent::SecondaryPressed);
    const CHORD: EventSet = EventSet::EMPTY.with(ButtonEvent::PowerChordPressed);
    const NONE: EventSet = EventSet::EMPTY;

    fn timer(long: u32, short: u32) -> TimerStateMachine<'static> {
        TimerStateMachine::new(
            TimerConfig::new(long, short, 10).expect("valid config"),
            Score::alarm(),
        )
    }

    #[test]
    fn test_starts_idle() {
        let t = TimerStateMachine::default();
        assert_eq!(t.state(), TimerState::Idle);
        assert_eq!(t.snapshot(), TimerSnapshot::IDLE);
        assert_eq!(t.melody_cursor(), None);
    }

    #[test]
    fn test_primary_starts_long_countdown() {
        let mut t = timer(3_600, 10);
        let out = t.tick(500, PRIMARY);
        assert!(out.render);
        assert_eq!(out.audio, None);
        assert_eq!(t.state(), TimerState::Counting);
        assert_eq!(t.total_secs(), 3_600);
        assert_eq!(t.remaining_secs(), 3_600);
        assert_eq!(t.countdown().last_tick_ms(), 500);
    }

    #[test]
    fn test_chord_starts_short_countdown() {
        let mut t = timer(3_600, 10);
        t.tick(0, CHORD);
        assert_eq!(t.state(), TimerState::Counting);
        assert_eq!(t.total_secs(), 10);
    }

    #[test]
    fn test_primary_wins_over_chord_from_idle() {
        let mut t = timer(3_600, 10);
        t.tick(0, PRIMARY.with(ButtonEvent::PowerChordPressed));
        assert_eq!(t.total_secs(), 3_600);
    }

    #[test]
    fn test_no_decrement_before_full_second() {
        let mut t = timer(60, 10);
        t.tick(0, PRIMARY);
        let out = t.tick(999, NONE);
        assert!(!out.render);
        assert_eq!(t.remaining_secs(), 60);
        let out = t.tick(1_000, NONE);
        assert!(out.render);
        assert_eq!(t.remaining_secs(), 59);
        assert_eq!(t.countdown().last_tick_ms(), 1_000);
    }

    #[test]
    fn test_starvation_drops_surplus_seconds() {
        let mut t = timer(60, 10);
        t.tick(0, PRIMARY);
        t.tick(5_500, NONE);
        assert_eq!(t.remaining_secs(), 59);
        // The next second is measured from the late tick.
        t.tick(6_000, NONE);
        assert_eq!(t.remaining_secs(), 59);
        t.tick(6_500, NONE);
        assert_eq!(t.remaining_secs(), 58);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut t = timer(60, 10);
        t.tick(0, PRIMARY);
        t.tick(300, CHORD);
        assert_eq!(t.state(), TimerState::Paused);
        let out = t.tick(10_000, NONE);
        assert!(!out.render);
        assert_eq!(t.remaining_secs(), 60);
        t.tick(10_000, PRIMARY);
        assert_eq!(t.state(), TimerState::Counting);
        assert_eq!(t.countdown().last_tick_ms(), 10_000);
        t.tick(10_999, NONE);
        assert_eq!(t.remaining_secs(), 60);
        t.tick(11_000, NONE);
        assert_eq!(t.remaining_secs(), 59);
    }

    #[test]
    fn test_reaching_zero_finishes_and_arms_melody() {
        let mut t = timer(60, 1);
        t.tick(0, CHORD);
        let out = t.tick(1_000, NONE);
        assert!(out.render);
        assert_eq!(out.audio, None);
        assert_eq!(t.state(), TimerState::Finished);
        assert_eq!(t.remaining_secs(), 0);
        assert_eq!(t.melody_cursor(), Some(0));

        let out = t.tick(1_010, NONE);
        assert_eq!(
            out.audio,
            Some(AudioCommand::PlayTone {
                freq_hz: 262,
                duration_ms: 100
            })
        );
        assert!(!out.render);
        assert_eq!(t.melody_cursor(), Some(1));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut t = timer(60, 0);
        t.tick(0, CHORD);
        assert_eq!(t.state(), TimerState::Finished);
        assert_eq!(t.total_secs(), 0);
    }

    #[test]
    fn test_primary_acknowledges_alarm() {
        let mut t = timer(60, 1);
        t.tick(0, CHORD);
        t.tick(1_000, NONE);
        t.tick(1_010, NONE);
        let out = t.tick(1_020, PRIMARY);
        assert_eq!(out.audio, Some(AudioCommand::Mute));
        assert!(out.render);
        assert_eq!(t.state(), TimerState::Idle);
        assert_eq!(t.snapshot(), TimerSnapshot::IDLE);
        assert_eq!(t.melody_cursor(), None);
    }

    #[test]
    fn test_secondary_clears_from_every_state() {
        for setup in [&[][..], &[PRIMARY][..], &[PRIMARY, PRIMARY][..]] {
            let mut t = timer(60, 10);
            for (i, events) in setup.iter().enumerate() {
                t.tick(i as u64 * 10, *events);
            }
            let out = t.tick(2_500, SECONDARY);
            assert_eq!(t.state(), TimerState::Idle);
            assert_eq!(t.remaining_secs(), 0);
            assert_eq!(t.total_secs(), 0);
            assert_eq!(out.audio, Some(AudioCommand::Mute));
            assert!(out.render);
        }
    }

    #[test]
    fn test_secondary_overrides_primary_in_same_tick() {
        let mut t = timer(60, 10);
        t.tick(0, PRIMARY.with(ButtonEvent::SecondaryPressed));
        assert_eq!(t.state(), TimerState::Idle);
    }

    #[test]
    fn test_idle_ignores_time() {
        let mut t = timer(60, 10);
        let out = t.tick(1_000_000, NONE);
        assert_eq!(out, TickOutcome::default());
    }

    #[test]
    fn test_refinish_restarts_melody() {
        let mut t = timer(60, 1);
        t.tick(0, CHORD);
        t.tick(1_000, NONE);
        t.tick(1_010, NONE);
        t.tick(1_200, NONE);
        assert_eq!(t.melody_cursor(), Some(2));
        t.tick(1_300, PRIMARY);
        t.tick(1_400, CHORD);
        t.tick(2_400, NONE);
        assert_eq!(t.state(), TimerState::Finished);
        assert_eq!(t.melody_cursor(), Some(0));
    }
}
