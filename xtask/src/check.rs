use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::{self, OnFailure};
use crate::FIRMWARE_TARGET;

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking firmware builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    // Check 1: smoke image for the management core
    step::cargo(
        "Hardware target (smoke)",
        &[
            "check",
            "-p",
            "firmware",
            "--target",
            FIRMWARE_TARGET,
            "--features",
            "hardware",
        ],
        OnFailure::Abort,
    )?;

    // Check 2: integration image for the management core
    step::cargo(
        "Hardware target (integration-test)",
        &[
            "check",
            "-p",
            "firmware",
            "--target",
            FIRMWARE_TARGET,
            "--features",
            "hardware,integration-test",
        ],
        OnFailure::Abort,
    )?;

    // Check 3: platform crate stays no_std
    step::cargo(
        "Platform crate (no_std)",
        &[
            "check",
            "-p",
            "platform",
            "--target",
            FIRMWARE_TARGET,
            "--no-default-features",
        ],
        OnFailure::Abort,
    )?;

    // Check 4: host library build used by the tests
    step::cargo(
        "Host build",
        &["check", "--workspace", "--all-targets"],
        OnFailure::Abort,
    )?;

    // Check 5: clippy; warnings are shown, not fatal
    step::cargo(
        "Clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;

    // Check 6: formatting
    if step::cargo("Formatting", &["fmt", "--all", "--check"], OnFailure::Warn)?.is_none() {
        eprintln!("     Run 'cargo fmt --all' to fix");
        println!();
    }

    step::finish("All checks", total_start);
    Ok(())
}
