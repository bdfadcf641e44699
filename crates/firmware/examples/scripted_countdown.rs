//! Scripted Countdown Demo
//!
//! Drives the real controller and run loop on the desktop with a scripted
//! sequence of presses. Faces are drawn onto a headless panel and logged;
//! tones go to the log.
//!
//! Run with: cargo run --example scripted_countdown --features emulator
//! More detail: RUST_LOG=debug cargo run --example scripted_countdown --features emulator

use countdown::{Score, TimerConfig};
use firmware::emulator::{init_tracing, Press, ScriptedButtons, TracingAudio, TracingPresenter};
use firmware::{run, Controller};
use platform::{config, ButtonLevels, EmbassyClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    tracing::info!("{}", config::dev_banner());

    // Short countdown via the chord, let the alarm ring, cancel it, then
    // start and pause a long countdown.
    let script = [
        Press::new(500, 100, ButtonLevels::power_chord()),
        Press::new(5_500, 100, ButtonLevels::secondary()),
        Press::new(6_500, 100, ButtonLevels::primary()),
        Press::new(8_700, 100, ButtonLevels::primary()),
    ];
    let buttons = ScriptedButtons::new(EmbassyClock::new(), script);
    let length_ms = buttons.length_ms().saturating_add(1_500);

    let config = TimerConfig::new(90, 3, 10).map_err(|e| e.to_string())?;
    let period = embassy_time::Duration::from_millis(u64::from(config.tick_interval_ms()));
    let mut controller = Controller::new(
        config,
        Score::alarm(),
        EmbassyClock::new(),
        buttons,
        TracingPresenter::new(),
        TracingAudio::new(),
    );

    let outcome = tokio::time::timeout(
        std::time::Duration::from_millis(length_ms),
        run(&mut controller, period),
    )
    .await;
    if let Ok(err) = outcome {
        tracing::error!(error = ?err, "run loop stopped early");
    }

    tracing::info!(
        frames = controller.presenter().frames(),
        tones = controller.audio().tones(),
        state = controller.timer().state().label(),
        "script finished"
    );
    Ok(())
}
