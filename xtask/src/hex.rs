use anyhow::{Context, Result};
use colored::Colorize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use crate::step::{self, OnFailure};
use crate::FIRMWARE_TARGET;

/// GNU objcopy builds tried in order. LLVM objcopy has no `verilog` output.
const OBJCOPY_CANDIDATES: &[&str] = &[
    "riscv64-unknown-elf-objcopy",
    "riscv32-unknown-elf-objcopy",
];

/// Link address of the flash window in `memory.x`.
const FLASH_ORIGIN: u32 = 0x1000_0000;

pub fn run(release: bool, integration_test: bool, output: Option<&Path>) -> Result<()> {
    let profile = if release { "release" } else { "debug" };
    let routine = if integration_test { "integration" } else { "smoke" };

    println!();
    println!(
        "{}",
        format!("🔨 Building firmware ({routine} routine, {profile} mode)...")
            .cyan()
            .bold()
    );
    println!();

    let start = Instant::now();

    let features = if integration_test {
        "hardware,integration-test"
    } else {
        "hardware"
    };
    let mut args = vec![
        "build",
        "-p",
        "firmware",
        "--target",
        FIRMWARE_TARGET,
        "--features",
        features,
    ];
    if release {
        args.push("--release");
    }
    step::cargo("Build", &args, OnFailure::Abort)?;

    let elf = elf_path(profile);
    show_binary_size(&elf);

    let hex = output.map_or_else(|| elf.with_extension("hex"), Path::to_path_buf);
    write_verilog_hex(&elf, &hex)?;

    println!(
        "{}",
        format!("✓ Hex image written to {}", hex.display()).green()
    );
    println!(
        "   {}",
        "Addresses start at 0; load it with $readmemh into the flash model".dimmed()
    );
    println!();

    step::finish("Hex build", start);
    Ok(())
}

fn elf_path(profile: &str) -> PathBuf {
    ["target", FIRMWARE_TARGET, profile, "firmware"].iter().collect()
}

fn write_verilog_hex(elf: &Path, hex: &Path) -> Result<()> {
    println!("{}", "📦 Converting ELF to Verilog hex...".cyan());

    let args = objcopy_args(elf, hex);
    let tool = first_working(OBJCOPY_CANDIDATES, |tool| {
        match Command::new(tool).args(&args).output() {
            Err(_) => Attempt::Missing,
            Ok(out) if out.status.success() => Attempt::Converted,
            Ok(out) => Attempt::Failed(String::from_utf8_lossy(&out.stderr).into_owned()),
        }
    })?;

    println!("   {}", format!("(via {tool})").dimmed());
    Ok(())
}

/// objcopy arguments: Verilog output with flash addresses rebased to 0.
fn objcopy_args(elf: &Path, hex: &Path) -> Vec<OsString> {
    vec![
        "-O".into(),
        "verilog".into(),
        format!("--change-addresses=-{FLASH_ORIGIN:#x}").into(),
        elf.into(),
        hex.into(),
    ]
}

/// Result of running one objcopy candidate.
enum Attempt {
    /// Not on PATH
    Missing,
    /// Ran and exited non-zero, with its stderr
    Failed(String),
    Converted,
}

/// Try `tools` in order until one converts the image.
///
/// A tool that fails is reported and the next one is tried.
fn first_working<'a>(
    tools: &[&'a str],
    mut attempt: impl FnMut(&str) -> Attempt,
) -> Result<&'a str> {
    let mut failures = 0usize;
    for &tool in tools {
        match attempt(tool) {
            Attempt::Converted => return Ok(tool),
            Attempt::Missing => {}
            Attempt::Failed(stderr) => {
                failures = failures.saturating_add(1);
                eprintln!("{}", format!("  ⚠ {tool} failed, trying next").yellow());
                for line in stderr.lines() {
                    eprintln!("     {}", line.dimmed());
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("objcopy failed ({failures} tool(s) tried)");
    }
    Err(anyhow::anyhow!("no RISC-V objcopy found"))
        .context("Install the RISC-V GNU binutils (riscv64-unknown-elf-objcopy)")
}

fn show_binary_size(elf: &Path) {
    let output = Command::new("rust-size").arg(elf).arg("-A").output();

    // Size report is informational; a missing rust-size is not an error.
    if let Ok(out) = output {
        if out.status.success() {
            println!("{}", "📊 Binary size:".cyan());
            for line in String::from_utf8_lossy(&out.stdout).lines() {
                println!("   {}", line.dimmed());
            }
            println!();
        }
    }
}
