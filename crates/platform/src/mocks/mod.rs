//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests and the desktop emulator.

#![cfg(any(test, feature = "std"))]

use core::cell::Cell;

use crate::*;

/// How many recent commands / frames the recording mocks keep.
pub const HISTORY_DEPTH: usize = 64;

/// Error returned by mocks that were told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MockError;

/// Push onto a bounded history, evicting the oldest entry when full.
fn record<T>(history: &mut heapless::Deque<T, HISTORY_DEPTH>, item: T) {
    if history.is_full() {
        let _ = history.pop_front();
    }
    let _ = history.push_back(item);
}

/// Manually-driven clock.
///
/// Interior mutability lets a test advance time while a controller holds the
/// clock by value and only hands out `&MockClock`.
#[derive(Debug, Default)]
pub struct MockClock {
    now_ms: Cell<u64>,
}

impl MockClock {
    /// Create a clock reading `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Move time forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }

    /// Jump to an absolute reading.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

/// Mock button source. Holds whatever levels the test last set.
#[derive(Debug, Default)]
pub struct MockButtons {
    levels: ButtonLevels,
    samples: usize,
    fail_after: Option<usize>,
}

impl MockButtons {
    /// Create new mock buttons, all released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the levels returned by subsequent samples.
    pub fn set_levels(&mut self, levels: ButtonLevels) {
        self.levels = levels;
    }

    /// Release everything.
    pub fn release_all(&mut self) {
        self.levels = ButtonLevels::RELEASED;
    }

    /// Make every sample after the first `samples` fail.
    pub fn fail_after(&mut self, samples: usize) {
        self.fail_after = Some(samples);
    }

    /// Number of successful samples taken so far.
    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl ButtonSource for MockButtons {
    type Error = MockError;

    fn sample(&mut self) -> Result<ButtonLevels, Self::Error> {
        if self.fail_after.is_some_and(|limit| self.samples >= limit) {
            return Err(MockError);
        }
        self.samples = self.samples.saturating_add(1);
        Ok(self.levels)
    }
}

/// Mock audio driver: records every command.
#[derive(Debug, Default)]
pub struct MockAudio {
    history: heapless::Deque<AudioCommand, HISTORY_DEPTH>,
    tone_count: usize,
    mute_count: usize,
    fail_next: bool,
}

impl MockAudio {
    /// Create new mock audio driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent commands, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &AudioCommand> {
        self.history.iter()
    }

    /// The last command received.
    pub fn last(&self) -> Option<AudioCommand> {
        self.history.back().copied()
    }

    /// Total tones started
    pub fn tone_count(&self) -> usize {
        self.tone_count
    }

    /// Total mutes
    pub fn mute_count(&self) -> usize {
        self.mute_count
    }

    /// Is a tone sounding (last command was a tone)?
    pub fn is_sounding(&self) -> bool {
        matches!(self.last(), Some(AudioCommand::PlayTone { .. }))
    }

    /// Fail the next command.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    /// Forget recorded commands.
    pub fn clear(&mut self) {
        self.history.clear();
        self.tone_count = 0;
        self.mute_count = 0;
    }

    fn check_failure(&mut self) -> Result<(), MockError> {
        if core::mem::take(&mut self.fail_next) {
            Err(MockError)
        } else {
            Ok(())
        }
    }
}

impl AudioDriver for MockAudio {
    type Error = MockError;

    fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.tone_count = self.tone_count.saturating_add(1);
        record(
            &mut self.history,
            AudioCommand::PlayTone {
                freq_hz,
                duration_ms,
            },
        );
        Ok(())
    }

    fn mute(&mut self) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.mute_count = self.mute_count.saturating_add(1);
        record(&mut self.history, AudioCommand::Mute);
        Ok(())
    }
}

/// Mock presenter: records every rendered snapshot.
#[derive(Debug, Default)]
pub struct MockPresenter {
    frames: heapless::Deque<TimerSnapshot, HISTORY_DEPTH>,
    render_count: usize,
    fail_next: bool,
}

impl MockPresenter {
    /// Create new mock presenter
    pub fn new() -> Self {
        Self::default()
    }

    /// Get render count
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// The most recently rendered snapshot.
    pub fn last(&self) -> Option<TimerSnapshot> {
        self.frames.back().copied()
    }

    /// Most recent frames, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = &TimerSnapshot> {
        self.frames.iter()
    }

    /// Fail the next render.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl DisplayPresenter for MockPresenter {
    type Error = MockError;

    fn render(&mut self, snapshot: &TimerSnapshot) -> Result<(), Self::Error> {
        if core::mem::take(&mut self.fail_next) {
            return Err(MockError);
        }
        self.render_count = self.render_count.saturating_add(1);
        record(&mut self.frames, *snapshot);
        Ok(())
    }
}
