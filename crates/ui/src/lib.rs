//! Timer face rendering: what the panel shows for each [`TimerState`].
//!
//! `no_std`; uses `core`, `heapless` and `embedded-graphics`. [`TimerScreen`]
//! wraps any `Rgb565` draw target and implements the platform
//! [`DisplayPresenter`] trait, so the same code drives the real panel and the
//! host-side test canvases.
//!
//! [`TimerState`]: platform::TimerState
//! [`DisplayPresenter`]: platform::DisplayPresenter

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod format;
pub mod render;
pub mod screen;

pub use format::{format_mm_ss, ClockText};
pub use render::{draw_face, TimerScreen};
pub use screen::Face;
