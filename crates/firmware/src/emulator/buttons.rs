//! Scripted button input.
//!
//! A [`ScriptedButtons`] replays timed [`Press`]es against a [`Clock`], so the
//! desktop demo sees the same levels on every run.

use core::convert::Infallible;

use platform::{ButtonLevels, ButtonSource, Clock};

/// One scripted button hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    /// Start, relative to the source's creation.
    pub at_ms: u64,
    /// How long the levels are held.
    pub hold_ms: u64,
    /// What is held.
    pub levels: ButtonLevels,
}

impl Press {
    /// Hold `levels` from `at_ms` for `hold_ms`.
    pub const fn new(at_ms: u64, hold_ms: u64, levels: ButtonLevels) -> Self {
        Self {
            at_ms,
            hold_ms,
            levels,
        }
    }

    fn active_at(&self, t_ms: u64) -> bool {
        t_ms >= self.at_ms && t_ms.saturating_sub(self.at_ms) < self.hold_ms
    }
}

/// Replays a fixed list of presses against a clock.
pub struct ScriptedButtons<C> {
    clock: C,
    origin_ms: u64,
    script: Vec<Press>,
}

impl<C: Clock> ScriptedButtons<C> {
    /// Start the script now.
    pub fn new(clock: C, script: impl IntoIterator<Item = Press>) -> Self {
        let origin_ms = clock.now_ms();
        Self {
            clock,
            origin_ms,
            script: script.into_iter().collect(),
        }
    }

    /// Milliseconds until the last press ends.
    pub fn length_ms(&self) -> u64 {
        self.script
            .iter()
            .map(|p| p.at_ms.saturating_add(p.hold_ms))
            .max()
            .unwrap_or(0)
    }

    /// Milliseconds since the script started.
    pub fn elapsed_ms(&self) -> u64 {
        self.clock.now_ms().saturating_sub(self.origin_ms)
    }
}

impl<C: Clock> ButtonSource for ScriptedButtons<C> {
    type Error = Infallible;

    fn sample(&mut self) -> Result<ButtonLevels, Self::Error> {
        let t = self.elapsed_ms();
        Ok(self
            .script
            .iter()
            .filter(|p| p.active_at(t))
            .fold(ButtonLevels::RELEASED, |acc, p| ButtonLevels {
                primary: acc.primary || p.levels.primary,
                secondary: acc.secondary || p.levels.secondary,
                power_chord: acc.power_chord || p.levels.power_chord,
            }))
    }
}
