use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

pub fn run(log_filter: &str) -> Result<()> {
    println!();
    println!("{}", platform::config::dev_banner().cyan().bold());
    println!();

    let status = Command::new("cargo")
        .args([
            "run",
            "-p",
            "firmware",
            "--example",
            "scripted_countdown",
            "--features",
            "emulator",
        ])
        .env("RUST_LOG", log_filter)
        .status()
        .context("Failed to launch the scripted countdown")?;

    if !status.success() {
        anyhow::bail!("Demo exited with {status}");
    }
    Ok(())
}
