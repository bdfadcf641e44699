//! Desktop collaborators (feature `emulator`).
//!
//! Time comes from [`platform::EmbassyClock`] on the `std` time driver.
//! Faces are drawn onto a headless [`Panel`] and logged, audio goes to
//! `tracing`, and button presses come from a script so a run is reproducible.

mod buttons;
mod log;
mod panel;

pub use buttons::{Press, ScriptedButtons};
pub use log::{TracingAudio, TracingPresenter};
pub use panel::{Panel, PANEL_HEIGHT, PANEL_WIDTH};

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
