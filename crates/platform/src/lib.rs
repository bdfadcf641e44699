//! Hardware Abstraction Layer (HAL) for the Pocket Timer
//!
//! This crate provides the narrow capability traits the countdown core talks
//! to, plus the small vocabulary types that cross those boundaries. Nothing in
//! here knows about GPIO registers, PWM timers, or panel controllers.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: Controller + run loop)
//!         ↓
//! Feature Layers (countdown core, ui presenter)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (Embassy HAL + PAC)
//! ```
//!
//! # Capabilities
//!
//! - [`Clock`] - Monotonic millisecond time source
//! - [`ButtonSource`] - Debounced button/chord levels, sampled once per tick
//! - [`AudioDriver`] - Fire-and-forget tone / mute commands
//! - [`DisplayPresenter`] - Renders a [`TimerSnapshot`]
//!
//! # Features
//!
//! - `std`: Host-side [`mocks`] for tests and the desktop emulator
//! - `defmt`: Enable defmt logging derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{AudioCommand, AudioDriver};
//!
//! fn alarm<A: AudioDriver>(audio: &mut A) -> Result<(), A::Error> {
//!     audio.apply(AudioCommand::PlayTone { freq_hz: 262, duration_ms: 100 })
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod audio;
pub mod clock;
pub mod config;
pub mod display;
pub mod input;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main high-level traits
pub use audio::{AudioCommand, AudioDriver};
pub use clock::{Clock, EmbassyClock};
pub use display::{DisplayPresenter, TimerSnapshot, TimerState};
pub use input::{ButtonEvent, ButtonLevels, ButtonSource};
