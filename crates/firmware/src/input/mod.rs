//! Button input adapters.
//!
//! [`GpioButtons`] turns raw `embedded-hal` pins into debounced
//! [`platform::ButtonLevels`]. Edge detection is not done here; the countdown
//! core's dispatcher owns that.

pub mod gpio;

pub use gpio::{GpioButtons, Polarity, DEFAULT_SETTLE_SAMPLES};
