//! Logging collaborators for the desktop run.
//!
//! [`TracingPresenter`] draws through [`TimerScreen`] onto a headless
//! [`Panel`] and logs each face; [`TracingAudio`] logs commands instead of
//! playing them.

use core::convert::Infallible;

use platform::{AudioDriver, DisplayPresenter, TimerSnapshot};
use ui::{Face, TimerScreen};

use super::panel::Panel;

/// Draws each frame onto a [`Panel`] and writes its headline to the log.
pub struct TracingPresenter {
    screen: TimerScreen<Panel>,
    frames: usize,
}

impl TracingPresenter {
    /// New presenter over a blank default-size panel.
    pub fn new() -> Self {
        Self {
            screen: TimerScreen::new(Panel::new()),
            frames: 0,
        }
    }

    /// Frames actually drawn so far. Repeats of the shown snapshot are not
    /// counted.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Snapshot currently on the panel.
    pub fn last(&self) -> Option<TimerSnapshot> {
        self.screen.shown().copied()
    }

    /// The panel contents.
    pub fn panel(&self) -> &Panel {
        self.screen.target()
    }
}

impl Default for TracingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPresenter for TracingPresenter {
    type Error = Infallible;

    fn render(&mut self, snapshot: &TimerSnapshot) -> Result<(), Self::Error> {
        if self.screen.shown() == Some(snapshot) {
            return Ok(());
        }
        self.screen.render(snapshot)?;

        let face = Face::for_state(snapshot.state);
        let headline = face.headline(snapshot);
        tracing::info!(
            state = snapshot.state.label(),
            caption = face.caption().unwrap_or(""),
            lit = self.panel().count(face.foreground()),
            "[{}]",
            headline.as_str()
        );
        self.frames = self.frames.saturating_add(1);
        Ok(())
    }
}

/// Logs tone and mute commands instead of playing them.
#[derive(Debug, Default)]
pub struct TracingAudio {
    tones: usize,
}

impl TracingAudio {
    /// New, silent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tones played so far.
    pub fn tones(&self) -> usize {
        self.tones
    }
}

impl AudioDriver for TracingAudio {
    type Error = Infallible;

    fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), Self::Error> {
        tracing::info!(freq_hz, duration_ms, "tone");
        self.tones = self.tones.saturating_add(1);
        Ok(())
    }

    fn mute(&mut self) -> Result<(), Self::Error> {
        tracing::info!("mute");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::RgbColor;
    use platform::TimerState;

    #[test]
    fn test_presenter_paints_the_panel() {
        let mut presenter = TracingPresenter::new();
        presenter.render(&TimerSnapshot::IDLE).unwrap();
        assert_eq!(presenter.panel().background(), Some(Rgb565::BLACK));
        assert!(presenter.panel().count(Rgb565::GREEN) > 0);

        let finished = TimerSnapshot {
            state: TimerState::Finished,
            remaining_secs: 0,
            total_secs: 3,
        };
        presenter.render(&finished).unwrap();
        assert_eq!(presenter.panel().background(), Some(Rgb565::RED));
        assert_eq!(presenter.last(), Some(finished));
    }

    #[test]
    fn test_repeat_frame_is_not_redrawn() {
        let mut presenter = TracingPresenter::new();
        presenter.render(&TimerSnapshot::IDLE).unwrap();
        presenter.render(&TimerSnapshot::IDLE).unwrap();
        assert_eq!(presenter.frames(), 1);
    }
}
