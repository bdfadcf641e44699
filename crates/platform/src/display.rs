//! Display abstraction layer

/// Renders the timer face.
///
/// Called after every state transition and every second-boundary decrement.
/// Rendering the same snapshot twice must be harmless: the only cost of a
/// redundant call is the redraw itself.
pub trait DisplayPresenter {
    /// Error type for display operations
    type Error: core::fmt::Debug;

    /// Draw `snapshot` to the panel.
    fn render(&mut self, snapshot: &TimerSnapshot) -> Result<(), Self::Error>;
}

/// Countdown lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Waiting for a start press ("READY")
    #[default]
    Idle,
    /// Counting down
    Counting,
    /// Countdown frozen; remaining time preserved
    Paused,
    /// Reached zero; alarm melody looping
    Finished,
}

impl TimerState {
    /// Short label for log output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Counting => "counting",
            Self::Paused => "paused",
            Self::Finished => "finished",
        }
    }
}

/// Everything a presenter needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSnapshot {
    /// Current state
    pub state: TimerState,
    /// Seconds left, `0..=total_secs`
    pub remaining_secs: u32,
    /// Duration chosen when the countdown started
    pub total_secs: u32,
}

impl TimerSnapshot {
    /// The snapshot shown at power-on and after every clear.
    pub const IDLE: Self = Self {
        state: TimerState::Idle,
        remaining_secs: 0,
        total_secs: 0,
    };
}
