use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::cargo::{step, OnFailure, TARGET};

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    step(
        "Hardware target (STM32H7)",
        &["check", "-p", "firmware", "--target", TARGET, "--features", "hardware"],
        OnFailure::Abort,
    )?;
    step(
        "Emulator target (host)",
        &["check", "-p", "firmware", "--features", "emulator", "--all-targets"],
        OnFailure::Abort,
    )?;

    // The core crates must stay no_std
    for krate in ["platform", "countdown", "ui"] {
        step(
            &format!("{krate} (no_std)"),
            &["check", "-p", krate, "--target", TARGET, "--no-default-features"],
            OnFailure::Abort,
        )?;
    }

    step(
        "Clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;
    if step("Formatting", &["fmt", "--all", "--check"], OnFailure::Warn)?.is_none() {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
