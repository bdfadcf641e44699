//! Passive piezo buzzer on a PWM channel.
//!
//! A tone is a square wave at the note's frequency; silence is a duty cycle
//! of zero. The buzzer does not time notes itself: a tone keeps sounding
//! until the next command, and the melody scheduler issues that command
//! once the note's duration has elapsed.

use embedded_hal::pwm::SetDutyCycle;
use platform::AudioDriver;

/// Duty cycle while a tone sounds. 50 % gives the loudest square wave.
pub const BUZZER_DUTY_PERCENT: u8 = 50;

/// A PWM output whose period can be changed at runtime.
///
/// `embedded-hal` covers duty cycle only; frequency is timer-specific.
pub trait Retune {
    /// Set the PWM frequency. Called only with non-zero values.
    fn retune(&mut self, freq_hz: u32);
}

/// [`AudioDriver`] over a retunable PWM channel.
pub struct PwmBuzzer<P> {
    pwm: P,
    sounding: Option<u32>,
}

impl<P: SetDutyCycle + Retune> PwmBuzzer<P> {
    /// Take the channel and silence it.
    pub fn new(mut pwm: P) -> Result<Self, P::Error> {
        pwm.set_duty_cycle_fully_off()?;
        Ok(Self {
            pwm,
            sounding: None,
        })
    }

    /// Frequency currently sounding, if any.
    pub const fn sounding(&self) -> Option<u32> {
        self.sounding
    }

    /// Release the channel.
    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle + Retune> AudioDriver for PwmBuzzer<P> {
    type Error = P::Error;

    fn tone(&mut self, freq_hz: u32, _duration_ms: u32) -> Result<(), Self::Error> {
        if freq_hz == 0 {
            return self.mute();
        }
        if self.sounding != Some(freq_hz) {
            self.pwm.retune(freq_hz);
        }
        self.pwm.set_duty_cycle_percent(BUZZER_DUTY_PERCENT)?;
        self.sounding = Some(freq_hz);
        Ok(())
    }

    fn mute(&mut self) -> Result<(), Self::Error> {
        self.pwm.set_duty_cycle_fully_off()?;
        self.sounding = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;
    use platform::AudioCommand;

    #[derive(Default)]
    struct FakePwm {
        duty: u16,
        freq_hz: u32,
        retunes: usize,
    }

    impl ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    impl Retune for FakePwm {
        fn retune(&mut self, freq_hz: u32) {
            self.freq_hz = freq_hz;
            self.retunes += 1;
        }
    }

    fn buzzer() -> PwmBuzzer<FakePwm> {
        PwmBuzzer::new(FakePwm {
            duty: 999,
            ..FakePwm::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_starts_silent() {
        let b = buzzer();
        assert_eq!(b.sounding(), None);
        assert_eq!(b.into_inner().duty, 0);
    }

    #[test]
    fn test_tone_sets_frequency_and_half_duty() {
        let mut b = buzzer();
        b.tone(440, 100).unwrap();
        assert_eq!(b.sounding(), Some(440));
        let pwm = b.into_inner();
        assert_eq!(pwm.freq_hz, 440);
        assert_eq!(pwm.duty, 500);
    }

    #[test]
    fn test_repeated_note_does_not_retune() {
        let mut b = buzzer();
        b.tone(523, 100).unwrap();
        b.tone(523, 100).unwrap();
        b.tone(392, 100).unwrap();
        assert_eq!(b.into_inner().retunes, 2);
    }

    #[test]
    fn test_tone_holds_until_next_command() {
        let mut b = buzzer();
        b.tone(262, 1).unwrap();
        assert_eq!(b.sounding(), Some(262));
        b.mute().unwrap();
        assert_eq!(b.sounding(), None);
        assert_eq!(b.into_inner().duty, 0);
    }

    #[test]
    fn test_mute_and_rest() {
        let mut b = buzzer();
        b.apply(AudioCommand::PlayTone {
            freq_hz: 262,
            duration_ms: 100,
        })
        .unwrap();
        b.apply(AudioCommand::Mute).unwrap();
        assert_eq!(b.sounding(), None);

        b.tone(262, 100).unwrap();
        b.tone(0, 100).unwrap();
        assert_eq!(b.sounding(), None);
        assert_eq!(b.into_inner().duty, 0);
    }
}
