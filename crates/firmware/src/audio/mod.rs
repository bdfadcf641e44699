//! Audio output adapters.

pub mod buzzer;

pub use buzzer::{PwmBuzzer, Retune, BUZZER_DUTY_PERCENT};
