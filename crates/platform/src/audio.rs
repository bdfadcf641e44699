//! Audio output abstraction (piezo / speaker)

/// Tone output driver.
///
/// Both commands are fire-and-forget: the driver starts the tone (or silence)
/// and returns immediately. A tone keeps sounding until the next command;
/// the caller always issues one once `duration_ms` has elapsed. Drivers are
/// not required to time notes and may treat `duration_ms` as a hint.
pub trait AudioDriver {
    /// Error type
    type Error: core::fmt::Debug;

    /// Start a square-wave tone.
    fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), Self::Error>;

    /// Silence the output.
    fn mute(&mut self) -> Result<(), Self::Error>;

    /// Execute an [`AudioCommand`].
    fn apply(&mut self, command: AudioCommand) -> Result<(), Self::Error> {
        match command {
            AudioCommand::PlayTone {
                freq_hz,
                duration_ms,
            } => self.tone(freq_hz, duration_ms),
            AudioCommand::Mute => self.mute(),
        }
    }
}

/// A single instruction for the [`AudioDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioCommand {
    /// Sound `freq_hz` for `duration_ms`
    PlayTone {
        /// Tone frequency in Hz (never 0; rests are [`AudioCommand::Mute`])
        freq_hz: u32,
        /// Nominal note length in milliseconds
        duration_ms: u32,
    },
    /// Silence
    Mute,
}

impl AudioCommand {
    /// Short label for log output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayTone { .. } => "tone",
            Self::Mute => "mute",
        }
    }
}
