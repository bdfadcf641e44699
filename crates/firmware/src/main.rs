//! Pocket Timer - Main Entry Point
//!
//! Hardware-only entry point for STM32H743ZI.

#![no_std]
#![no_main]

use core::convert::Infallible;

use countdown::{Score, TimerConfig};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, OutputType, Pull};
use embassy_stm32::peripherals::TIM3;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_stm32::timer::{Channel, CountingMode};
use embassy_time::{Duration, Timer};
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use platform::config::{APP_NAME, APP_VERSION};
use platform::{DisplayPresenter, EmbassyClock, TimerSnapshot};
use ui::Face;

use firmware::{run, Controller, GpioButtons, PwmBuzzer, Retune};

// Logging transport + panic handler
use {defmt_rtt as _, panic_probe as _};

/// Piezo on PA6 (TIM3_CH1).
struct Tim3Buzzer(SimplePwm<'static, TIM3>);

impl ErrorType for Tim3Buzzer {
    type Error = Infallible;
}

impl SetDutyCycle for Tim3Buzzer {
    fn max_duty_cycle(&self) -> u16 {
        self.0.get_max_duty()
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.0.set_duty(Channel::Ch1, duty);
        Ok(())
    }
}

impl Retune for Tim3Buzzer {
    fn retune(&mut self, freq_hz: u32) {
        self.0.set_frequency(Hertz(freq_hz));
    }
}

/// Logs each frame over RTT. The panel driver plugs in here as a
/// `ui::TimerScreen` once its SPI bring-up lands.
struct RttPresenter;

impl DisplayPresenter for RttPresenter {
    type Error = Infallible;

    fn render(&mut self, snapshot: &TimerSnapshot) -> Result<(), Self::Error> {
        let face = Face::for_state(snapshot.state);
        defmt::info!(
            "face {=str}: {=str}",
            snapshot.state.label(),
            face.headline(snapshot).as_str()
        );
        Ok(())
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    defmt::info!("{=str} v{=str}", APP_NAME, APP_VERSION);
    defmt::info!("Initializing STM32H743ZI");

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    // Buttons: internal pull-ups, pressed = low
    let buttons = GpioButtons::new(Input::new(p.PE2, Pull::Up), Input::new(p.PE3, Pull::Up))
        .with_chord(Input::new(p.PE4, Pull::Up));

    let mut pwm = SimplePwm::new(
        p.TIM3,
        Some(PwmPin::new_ch1(p.PA6, OutputType::PushPull)),
        None,
        None,
        None,
        Hertz(440),
        CountingMode::EdgeAlignedUp,
    );
    pwm.enable(Channel::Ch1);
    let buzzer = match PwmBuzzer::new(Tim3Buzzer(pwm)) {
        Ok(buzzer) => buzzer,
        Err(never) => match never {},
    };

    let config = TimerConfig::default();
    let period = Duration::from_millis(u64::from(config.tick_interval_ms()));
    defmt::info!(
        "long={=u32}s short={=u32}s tick={=u32}ms",
        config.long_duration_secs(),
        config.short_duration_secs(),
        config.tick_interval_ms()
    );

    let mut controller = Controller::new(
        config,
        Score::alarm(),
        EmbassyClock::new(),
        buttons,
        RttPresenter,
        buzzer,
    );

    let err = run(&mut controller, period).await;
    defmt::error!("timer stopped: {=str} failed", err.label());

    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}
