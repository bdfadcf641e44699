//! Non-blocking alarm melody sequencer.
//!
//! `MelodyScheduler` never waits for a note to finish. Each call to
//! [`MelodyScheduler::tick`] compares the clock against the start of the note
//! that is sounding and either returns immediately or hands back the next
//! [`AudioCommand`]. The audio driver does the actual sounding.
//!
//! ```text
//! tick:  armed ──▶ note 0 ──▶ note 1 ──▶ … ──▶ note N-1 ──▶ (silent wrap) ──▶ note 0 …
//! ```

use platform::AudioCommand;
use thiserror_no_std::Error;

/// One step of a score. A frequency of 0 is a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Tone frequency in Hz; 0 = silence
    pub freq_hz: u32,
    /// How long the note occupies the sequencer, in milliseconds (> 0)
    pub duration_ms: u32,
}

impl Note {
    /// A sounding note.
    pub const fn tone(freq_hz: u32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }

    /// A silent step.
    pub const fn rest(duration_ms: u32) -> Self {
        Self {
            freq_hz: 0,
            duration_ms,
        }
    }

    /// Returns `true` for a rest.
    pub const fn is_rest(self) -> bool {
        self.freq_hz == 0
    }

    /// The driver command that starts this note.
    pub const fn command(self) -> AudioCommand {
        if self.is_rest() {
            AudioCommand::Mute
        } else {
            AudioCommand::PlayTone {
                freq_hz: self.freq_hz,
                duration_ms: self.duration_ms,
            }
        }
    }
}

/// Built-in alarm: C4 E4 G4 C5.
pub const ALARM_NOTES: [Note; 4] = [
    Note::tone(262, 100),
    Note::tone(330, 100),
    Note::tone(392, 100),
    Note::tone(523, 200),
];

/// Rejected scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScoreError {
    /// A score needs at least one note.
    #[error("score has no notes")]
    Empty,
    /// Every note must take time, otherwise the sequencer would spin.
    #[error("note {index} has zero duration")]
    ZeroDuration {
        /// Offending position in the score
        index: usize,
    },
}

/// A validated, non-empty note sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score<'a> {
    notes: &'a [Note],
}

impl<'a> Score<'a> {
    /// Validate `notes` as a score.
    ///
    /// # Errors
    ///
    /// [`ScoreError::Empty`] for an empty slice, [`ScoreError::ZeroDuration`]
    /// for the first note with `duration_ms == 0`.
    pub fn new(notes: &'a [Note]) -> Result<Self, ScoreError> {
        if notes.is_empty() {
            return Err(ScoreError::Empty);
        }
        if let Some(index) = notes.iter().position(|note| note.duration_ms == 0) {
            return Err(ScoreError::ZeroDuration { index });
        }
        Ok(Self { notes })
    }

    /// Number of notes.
    pub const fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub const fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note at `index`.
    pub fn get(&self, index: usize) -> Option<Note> {
        self.notes.get(index).copied()
    }

    /// Underlying notes.
    pub const fn notes(&self) -> &'a [Note] {
        self.notes
    }
}

impl Score<'static> {
    /// The built-in [`ALARM_NOTES`] score.
    pub const fn alarm() -> Self {
        Self {
            notes: &ALARM_NOTES,
        }
    }
}

impl Default for Score<'static> {
    fn default() -> Self {
        Self::alarm()
    }
}

/// Looping, tick-driven score player.
///
/// `cursor` is the index of the next note to emit (`0..=score.len()`).
/// `note_started_at` is `None` while armed: the next tick emits
/// `score[cursor]` without waiting.
#[derive(Debug, Clone)]
pub struct MelodyScheduler<'a> {
    score: Score<'a>,
    cursor: usize,
    note_started_at: Option<u64>,
}

impl<'a> MelodyScheduler<'a> {
    /// Create a scheduler armed at the first note.
    pub const fn new(score: Score<'a>) -> Self {
        Self {
            score,
            cursor: 0,
            note_started_at: None,
        }
    }

    /// Re-arm at the first note.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.note_started_at = None;
    }

    /// Index of the next note to emit.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The score being played.
    pub const fn score(&self) -> Score<'a> {
        self.score
    }

    /// Advance by at most one step.
    ///
    /// Returns the command for a note that starts now, or `None` when the
    /// current note is still sounding or the score just wrapped.
    pub fn tick(&mut self, now_ms: u64) -> Option<AudioCommand> {
        if let Some(started_at) = self.note_started_at {
            let sounding = self
                .cursor
                .checked_sub(1)
                .and_then(|index| self.score.get(index))?;
            if now_ms.saturating_sub(started_at) < u64::from(sounding.duration_ms) {
                return None;
            }
            if self.cursor >= self.score.len() {
                self.reset();
                #[cfg(feature = "defmt")]
                defmt::trace!("melody: wrap");
                #[cfg(feature = "tracing")]
                tracing::trace!("melody wrapped");
                return None;
            }
        }

        let note = self.score.get(self.cursor)?;
        self.note_started_at = Some(now_ms);
        self.cursor = self.cursor.saturating_add(1);
        Some(note.command())
    }
}
