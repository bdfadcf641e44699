//! Drawing timer faces onto an `Rgb565` target.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use platform::{DisplayPresenter, TimerSnapshot};

use crate::screen::Face;

/// Vertical distance from the headline centre to the caption centre.
const CAPTION_OFFSET_PX: i32 = 22;

/// Clear `target` and draw the face for `snapshot`, centred.
pub fn draw_face<D>(target: &mut D, snapshot: &TimerSnapshot) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let face = Face::for_state(snapshot.state);
    target.clear(face.background())?;

    let center = target.bounding_box().center();
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    let headline = face.headline(snapshot);
    Text::with_text_style(
        headline.as_str(),
        center,
        MonoTextStyle::new(&FONT_10X20, face.foreground()),
        centered,
    )
    .draw(target)?;

    if let Some(caption) = face.caption() {
        let at = Point::new(center.x, center.y.saturating_add(CAPTION_OFFSET_PX));
        Text::with_text_style(
            caption,
            at,
            MonoTextStyle::new(&FONT_6X10, face.foreground()),
            centered,
        )
        .draw(target)?;
    }

    Ok(())
}

/// [`DisplayPresenter`] over any `Rgb565` draw target.
///
/// Remembers the last snapshot it drew and skips identical redraws, which
/// keeps SPI traffic down while the timer sits idle or paused.
pub struct TimerScreen<D> {
    target: D,
    shown: Option<TimerSnapshot>,
}

impl<D> TimerScreen<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap `target`. Nothing is drawn until the first `render`.
    pub const fn new(target: D) -> Self {
        Self {
            target,
            shown: None,
        }
    }

    /// Force the next `render` to redraw even if the snapshot is unchanged.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Snapshot currently on the panel.
    pub const fn shown(&self) -> Option<&TimerSnapshot> {
        self.shown.as_ref()
    }

    /// Borrow the draw target.
    pub const fn target(&self) -> &D {
        &self.target
    }

    /// Release the draw target.
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplayPresenter for TimerScreen<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
{
    type Error = D::Error;

    fn render(&mut self, snapshot: &TimerSnapshot) -> Result<(), Self::Error> {
        if self.shown.as_ref() == Some(snapshot) {
            return Ok(());
        }
        // forget the old frame first; a failed draw leaves the panel unknown
        self.shown = None;
        draw_face(&mut self.target, snapshot)?;
        self.shown = Some(*snapshot);
        Ok(())
    }
}
