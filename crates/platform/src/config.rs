//! Application configuration and constants
//!
//! Branding and naming shared by the firmware banner, the emulator and the
//! UI. Reference these constants rather than hardcoding values.

/// The application name
pub const APP_NAME: &str = "Pocket Timer";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Development mode banner
pub const fn dev_banner() -> &'static str {
    "Pocket Timer - Emulator"
}
