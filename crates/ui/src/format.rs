//! Remaining-time text.

use core::fmt::Write;

/// Fixed-capacity buffer for a formatted clock readout.
///
/// 16 bytes covers the widest `u32` input (`71582788:15`).
pub type ClockText = heapless::String<16>;

/// Format `secs` as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours; 3600 s reads `60:00`.
#[must_use]
pub fn format_mm_ss(secs: u32) -> ClockText {
    let mut text = ClockText::new();
    // capacity covers every u32, so the write cannot fail
    let _ = write!(text, "{:02}:{:02}", secs / 60, secs % 60);
    text
}
