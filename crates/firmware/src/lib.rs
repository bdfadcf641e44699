//! Pocket Timer firmware
//!
//! Wires the countdown core to its collaborators and drives it on a fixed
//! cadence.
//!
//! # Architecture
//!
//! ```text
//! Application Layer (main.rs, run loop)
//!         ↓
//! Controller (clock → input → state machine → render → audio)
//!         ↓
//! Adapters (GPIO buttons, PWM buzzer, timer screen)
//!         ↓
//! Platform HAL (Embassy, STM32)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for STM32H7 target (embassy, defmt)
//! - `emulator` - Build for desktop runs (tokio, tracing)
//! - `std` - Enable standard library (for emulator and testing)
//!
//! # Examples
//!
//! ## Hardware Target
//!
//! ```bash
//! cargo build --release --target thumbv7em-none-eabihf --features hardware
//! ```
//!
//! ## Emulator Target
//!
//! ```bash
//! cargo run --example scripted_countdown --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)]
#![deny(unsafe_op_in_unsafe_fn)]
// Logging discipline
#![warn(clippy::print_stdout)]
#![warn(clippy::dbg_macro)]
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod audio;
pub mod controller;
pub mod input;

#[cfg(feature = "emulator")]
pub mod emulator;

pub use audio::{PwmBuzzer, Retune};
pub use controller::{run, Controller, ControllerError, TickError};
pub use input::{GpioButtons, Polarity};
