//! Headless in-memory panel.
//!
//! Stands in for the LCD on the desktop: faces are drawn through
//! [`ui::TimerScreen`] into a plain `Rgb565` framebuffer that tests and the
//! log can inspect.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Point, RgbColor, Size};

/// Panel width in landscape, pixels.
pub const PANEL_WIDTH: u32 = 240;
/// Panel height in landscape, pixels.
pub const PANEL_HEIGHT: u32 = 135;

/// Framebuffer-backed `Rgb565` draw target.
#[derive(Debug, Clone)]
pub struct Panel {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Panel {
    /// A black panel of the default size.
    pub fn new() -> Self {
        Self::with_size(Size::new(PANEL_WIDTH, PANEL_HEIGHT))
    }

    /// A black panel of `size`.
    pub fn with_size(size: Size) -> Self {
        let len = usize::try_from(size.width.saturating_mul(size.height)).unwrap_or(0);
        Self {
            size,
            pixels: vec![Rgb565::BLACK; len],
        }
    }

    /// Colour at `at`, or `None` off-panel.
    pub fn pixel(&self, at: Point) -> Option<Rgb565> {
        self.index(at).and_then(|i| self.pixels.get(i)).copied()
    }

    /// Top-left pixel; faces fill the whole panel with their background.
    pub fn background(&self) -> Option<Rgb565> {
        self.pixel(Point::zero())
    }

    /// Pixels currently showing `color`.
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|c| **c == color).count()
    }

    fn index(&self, at: Point) -> Option<usize> {
        let x = u32::try_from(at.x).ok()?;
        let y = u32::try_from(at.y).ok()?;
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = y.checked_mul(self.size.width)?.checked_add(x)?;
        usize::try_from(i).ok()
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Panel {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Panel {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(at, color) in pixels {
            // off-panel pixels are clipped
            if let Some(slot) = self.index(at).and_then(|i| self.pixels.get_mut(i)) {
                *slot = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}
