//! Countdown configuration.
//!
//! The two start durations used to be magic numbers; they live here together
//! with the scheduler tick period so a build can pick its own values.

use platform::ButtonEvent;
use thiserror_no_std::Error;

/// Duration started by the primary button: one hour.
pub const DEFAULT_LONG_DURATION_SECS: u32 = 3_600;

/// Duration started by the power chord: ten seconds.
pub const DEFAULT_SHORT_DURATION_SECS: u32 = 10;

/// Scheduler tick period.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 10;

/// Longest countdown the `MM:SS` face can show (99:59).
pub const MAX_DURATION_SECS: u32 = 5_999;

/// One countdown step.
pub const SECOND_MS: u64 = 1_000;

/// Rejected [`TimerConfig`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A start duration does not fit on the display.
    #[error("countdown duration {secs}s exceeds the {max}s the display can show")]
    DurationTooLong {
        /// Requested duration
        secs: u32,
        /// Largest accepted duration
        max: u32,
    },
    /// The tick period must be shorter than one countdown step.
    #[error("tick interval {ms}ms must be within 1..=999 ms")]
    TickIntervalOutOfRange {
        /// Requested interval
        ms: u32,
    },
}

/// Validated countdown configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    long_duration_secs: u32,
    short_duration_secs: u32,
    tick_interval_ms: u32,
}

impl TimerConfig {
    /// Build a configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DurationTooLong`] if either duration exceeds
    /// [`MAX_DURATION_SECS`]; [`ConfigError::TickIntervalOutOfRange`] if the
    /// tick interval is 0 or a second or longer.
    pub fn new(
        long_duration_secs: u32,
        short_duration_secs: u32,
        tick_interval_ms: u32,
    ) -> Result<Self, ConfigError> {
        for secs in [long_duration_secs, short_duration_secs] {
            if secs > MAX_DURATION_SECS {
                return Err(ConfigError::DurationTooLong {
                    secs,
                    max: MAX_DURATION_SECS,
                });
            }
        }
        if tick_interval_ms == 0 || u64::from(tick_interval_ms) >= SECOND_MS {
            return Err(ConfigError::TickIntervalOutOfRange {
                ms: tick_interval_ms,
            });
        }
        Ok(Self {
            long_duration_secs,
            short_duration_secs,
            tick_interval_ms,
        })
    }

    /// Duration started by [`ButtonEvent::PrimaryPressed`].
    pub const fn long_duration_secs(&self) -> u32 {
        self.long_duration_secs
    }

    /// Duration started by [`ButtonEvent::PowerChordPressed`].
    pub const fn short_duration_secs(&self) -> u32 {
        self.short_duration_secs
    }

    /// Scheduler tick period in milliseconds.
    pub const fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// The countdown length a start press selects, if `event` starts one.
    pub const fn duration_for(&self, event: ButtonEvent) -> Option<u32> {
        match event {
            ButtonEvent::PrimaryPressed => Some(self.long_duration_secs),
            ButtonEvent::PowerChordPressed => Some(self.short_duration_secs),
            ButtonEvent::SecondaryPressed => None,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            long_duration_secs: DEFAULT_LONG_DURATION_SECS,
            short_duration_secs: DEFAULT_SHORT_DURATION_SECS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}
