//! Edge-triggered input dispatch.
//!
//! The button source reports levels; the dispatcher remembers last tick's
//! levels and reports only released → pressed transitions. Holding a button
//! therefore produces exactly one event, on the tick the press is first seen.

use platform::{ButtonEvent, ButtonLevels, ButtonSource};

/// The press events observed in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventSet(u8);

impl EventSet {
    /// No events.
    pub const EMPTY: Self = Self(0);

    const fn bit(event: ButtonEvent) -> u8 {
        match event {
            ButtonEvent::PrimaryPressed => 0b001,
            ButtonEvent::SecondaryPressed => 0b010,
            ButtonEvent::PowerChordPressed => 0b100,
        }
    }

    /// Add `event`. Adding twice is the same as adding once.
    pub fn insert(&mut self, event: ButtonEvent) {
        self.0 |= Self::bit(event);
    }

    /// Set with `event` added.
    #[must_use]
    pub const fn with(self, event: ButtonEvent) -> Self {
        Self(self.0 | Self::bit(event))
    }

    /// Whether `event` occurred.
    pub const fn contains(self, event: ButtonEvent) -> bool {
        self.0 & Self::bit(event) != 0
    }

    /// No events this tick.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of distinct events.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Events in [`ButtonEvent::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = ButtonEvent> {
        ButtonEvent::ALL
            .into_iter()
            .filter(move |event| self.contains(*event))
    }
}

impl From<ButtonEvent> for EventSet {
    fn from(event: ButtonEvent) -> Self {
        Self::EMPTY.with(event)
    }
}

impl FromIterator<ButtonEvent> for EventSet {
    fn from_iter<I: IntoIterator<Item = ButtonEvent>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Converts per-tick levels into rising-edge [`EventSet`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDispatcher {
    previous: ButtonLevels,
}

impl InputDispatcher {
    /// Create a dispatcher that assumes nothing is held.
    pub const fn new() -> Self {
        Self {
            previous: ButtonLevels::RELEASED,
        }
    }

    /// Edge-detect one tick's `levels`.
    pub fn dispatch(&mut self, levels: ButtonLevels) -> EventSet {
        let events = ButtonEvent::ALL
            .into_iter()
            .filter(|event| levels.is_held(*event) && !self.previous.is_held(*event))
            .collect();
        self.previous = levels;
        events
    }

    /// Sample `source` once and edge-detect the result.
    ///
    /// On error the remembered levels are left untouched, so a press that
    /// lands on a failed sample is still reported on the next good one.
    pub fn poll<S: ButtonSource>(&mut self, source: &mut S) -> Result<EventSet, S::Error> {
        let levels = source.sample()?;
        Ok(self.dispatch(levels))
    }

    /// Levels seen on the last successful sample.
    pub const fn previous(&self) -> ButtonLevels {
        self.previous
    }
}
