//! Input device abstraction

/// Source of debounced button levels.
///
/// Implementations report whether each input is *currently held*; turning
/// levels into press events is the dispatcher's job. Debouncing, if the
/// hardware needs it, happens below this trait.
pub trait ButtonSource {
    /// Error type for sampling failures (e.g. a GPIO expander NAK)
    type Error: core::fmt::Debug;

    /// Sample all inputs once. Called exactly once per scheduler tick.
    fn sample(&mut self) -> Result<ButtonLevels, Self::Error>;
}

/// Held/not-held state of every input at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    /// Front (primary) button held
    pub primary: bool,
    /// Side (secondary) button held
    pub secondary: bool,
    /// Power-button chord active
    pub power_chord: bool,
}

impl ButtonLevels {
    /// Nothing held.
    pub const RELEASED: Self = Self {
        primary: false,
        secondary: false,
        power_chord: false,
    };

    /// Only the primary button held.
    pub const fn primary() -> Self {
        Self {
            primary: true,
            ..Self::RELEASED
        }
    }

    /// Only the secondary button held.
    pub const fn secondary() -> Self {
        Self {
            secondary: true,
            ..Self::RELEASED
        }
    }

    /// Only the power chord active.
    pub const fn power_chord() -> Self {
        Self {
            power_chord: true,
            ..Self::RELEASED
        }
    }

    /// Whether the input behind `event` is held.
    pub const fn is_held(self, event: ButtonEvent) -> bool {
        match event {
            ButtonEvent::PrimaryPressed => self.primary,
            ButtonEvent::SecondaryPressed => self.secondary,
            ButtonEvent::PowerChordPressed => self.power_chord,
        }
    }
}

/// Rising-edge press events, at most one per input per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Primary button went from released to pressed
    PrimaryPressed,
    /// Secondary button went from released to pressed
    SecondaryPressed,
    /// Power chord went from inactive to active
    PowerChordPressed,
}

impl ButtonEvent {
    /// Every event, in the order the dispatcher reports them.
    pub const ALL: [Self; 3] = [
        Self::SecondaryPressed,
        Self::PrimaryPressed,
        Self::PowerChordPressed,
    ];

    /// Short label for log output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PrimaryPressed => "primary",
            Self::SecondaryPressed => "secondary",
            Self::PowerChordPressed => "power-chord",
        }
    }
}
