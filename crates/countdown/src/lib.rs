//! Countdown core: input dispatch, timer state machine, alarm melody.
//!
//! Everything in this crate is pure: no clocks are read, no pins touched, no
//! pixels drawn. The firmware controller samples the collaborators once per
//! tick and feeds the results in:
//!
//! ```text
//! Clock::now_ms ─┐
//!                ├─▶ TimerStateMachine::tick ─▶ TickOutcome { render, audio }
//! ButtonSource ─▶ InputDispatcher ─┘
//! ```
//!
//! Each tick does a bounded amount of work and returns; nothing here blocks
//! or sleeps.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dispatcher;
pub mod melody;
pub mod timer;

pub use config::{ConfigError, TimerConfig};
pub use dispatcher::{EventSet, InputDispatcher};
pub use melody::{MelodyScheduler, Note, Score, ScoreError, ALARM_NOTES};
pub use timer::{CountdownContext, TickOutcome, TimerStateMachine};

// Vocabulary types shared with the platform layer.
pub use platform::{AudioCommand, ButtonEvent, ButtonLevels, TimerSnapshot, TimerState};
