//! Face selection: which colours and text each timer state gets.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use platform::{TimerSnapshot, TimerState};

use crate::format::{format_mm_ss, ClockText};

/// One of the four timer faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Idle: "READY" on black.
    Ready,
    /// Counting: large MM:SS readout.
    Running,
    /// Paused: readout frozen, with a caption.
    Paused,
    /// Finished: "TIME UP!" on red.
    TimeUp,
}

impl Face {
    /// Face for a given state.
    pub const fn for_state(state: TimerState) -> Self {
        match state {
            TimerState::Idle => Self::Ready,
            TimerState::Counting => Self::Running,
            TimerState::Paused => Self::Paused,
            TimerState::Finished => Self::TimeUp,
        }
    }

    /// Fill colour for the whole panel.
    pub const fn background(self) -> Rgb565 {
        match self {
            Self::Ready | Self::Running | Self::Paused => Rgb565::BLACK,
            Self::TimeUp => Rgb565::RED,
        }
    }

    /// Colour of the headline text.
    pub const fn foreground(self) -> Rgb565 {
        match self {
            Self::Ready => Rgb565::GREEN,
            Self::Running | Self::Paused => Rgb565::WHITE,
            Self::TimeUp => Rgb565::BLACK,
        }
    }

    /// Small line under the headline, if any.
    pub const fn caption(self) -> Option<&'static str> {
        match self {
            Self::Paused => Some("PAUSED"),
            _ => None,
        }
    }

    /// Headline text for `snapshot`.
    pub fn headline(self, snapshot: &TimerSnapshot) -> ClockText {
        match self {
            Self::Ready => text("READY"),
            Self::Running | Self::Paused => format_mm_ss(snapshot.remaining_secs),
            Self::TimeUp => text("TIME UP!"),
        }
    }
}

fn text(s: &str) -> ClockText {
    let mut out = ClockText::new();
    // fixed labels are shorter than the buffer
    let _ = out.push_str(s);
    out
}
