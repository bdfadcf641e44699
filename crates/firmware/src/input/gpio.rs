//! GPIO button source.
//!
//! # Pin assignments
//!
//! | Signal       | MCU pin | Notes                        |
//! |--------------|---------|------------------------------|
//! | Primary      | PE2     | Active-low, internal pull-up |
//! | Secondary    | PE3     | Active-low, internal pull-up |
//! | Power chord  | PE4     | Optional, active-low         |
//!
//! # Debounce
//!
//! Each pin is read once per [`sample`](platform::ButtonSource::sample). A
//! level change is only reported after it has been read the same way
//! `settle_samples` times in a row, so at a 10 ms tick the default of 2
//! filters bounces shorter than 20 ms.

use embedded_hal::digital::InputPin;
use platform::{ButtonLevels, ButtonSource};

/// Consecutive agreeing reads before a level change is accepted.
pub const DEFAULT_SETTLE_SAMPLES: u8 = 2;

/// Which electrical level means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed pulls the pin to ground (pull-up wiring).
    #[default]
    ActiveLow,
    /// Pressed drives the pin high (pull-down wiring).
    ActiveHigh,
}

impl Polarity {
    fn read<P: InputPin>(self, pin: &mut P) -> Result<bool, P::Error> {
        match self {
            Self::ActiveLow => pin.is_low(),
            Self::ActiveHigh => pin.is_high(),
        }
    }
}

/// Sample-count debouncer for one signal.
#[derive(Debug, Clone, Copy, Default)]
struct Debounce {
    stable: bool,
    streak: u8,
}

impl Debounce {
    fn update(&mut self, raw: bool, settle: u8) -> bool {
        if raw == self.stable {
            self.streak = 0;
        } else {
            self.streak = self.streak.saturating_add(1);
            if self.streak >= settle {
                self.stable = raw;
                self.streak = 0;
            }
        }
        self.stable
    }
}

/// Two buttons plus an optional power-chord line, read from GPIO.
///
/// All pins share one error type; on Embassy that is `Infallible`. Without a
/// chord pin the `C` parameter is a placeholder and never read.
pub struct GpioButtons<A, B, C = A> {
    primary: A,
    secondary: B,
    chord: Option<C>,
    polarity: Polarity,
    settle_samples: u8,
    debounce: [Debounce; 3],
}

impl<A, B> GpioButtons<A, B, A> {
    /// Active-low buttons with no chord line.
    pub fn new(primary: A, secondary: B) -> Self {
        Self {
            primary,
            secondary,
            chord: None,
            polarity: Polarity::ActiveLow,
            settle_samples: DEFAULT_SETTLE_SAMPLES,
            debounce: [Debounce::default(); 3],
        }
    }
}

impl<A, B, C> GpioButtons<A, B, C> {
    /// Add a power-chord line.
    pub fn with_chord<C2>(self, chord: C2) -> GpioButtons<A, B, C2> {
        GpioButtons {
            primary: self.primary,
            secondary: self.secondary,
            chord: Some(chord),
            polarity: self.polarity,
            settle_samples: self.settle_samples,
            debounce: self.debounce,
        }
    }

    /// Set the pressed level for all lines.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Set how many agreeing reads accept a change. 0 and 1 both mean
    /// "report every read as-is".
    pub fn with_settle_samples(mut self, samples: u8) -> Self {
        self.settle_samples = samples.max(1);
        self
    }

    /// Release the pins.
    pub fn into_pins(self) -> (A, B, Option<C>) {
        (self.primary, self.secondary, self.chord)
    }
}

impl<A, B, C> ButtonSource for GpioButtons<A, B, C>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
    C: InputPin<Error = A::Error>,
{
    type Error = A::Error;

    fn sample(&mut self) -> Result<ButtonLevels, Self::Error> {
        let primary = self.polarity.read(&mut self.primary)?;
        let secondary = self.polarity.read(&mut self.secondary)?;
        let power_chord = match self.chord.as_mut() {
            Some(pin) => self.polarity.read(pin)?,
            None => false,
        };

        let settle = self.settle_samples;
        let [p, s, c] = &mut self.debounce;
        Ok(ButtonLevels {
            primary: p.update(primary, settle),
            secondary: s.update(secondary, settle),
            power_chord: c.update(power_chord, settle),
        })
    }
}
