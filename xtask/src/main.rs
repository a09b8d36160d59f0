// Desktop/tooling crate — unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod check;
mod doc;
mod hex;
mod step;
mod test;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Target triple of the Caravel management core.
pub const FIRMWARE_TARGET: &str = "riscv32imc-unknown-none-elf";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "User-area peripheral bring-up development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the firmware for the RISC-V target and the host, plus lints
    Check,
    /// Run host tests (unit, integration, doc)
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Build and optionally open documentation
    Doc {
        /// Open documentation in browser
        #[arg(long)]
        open: bool,
    },
    /// Build the firmware and write a Verilog hex image for simulation
    ///
    /// Addresses in the image are offsets into the flash window (0x1000_0000
    /// becomes 0), as the flash model's $readmemh expects.
    Hex {
        /// Build the release profile
        #[arg(short, long)]
        release: bool,
        /// Build the harness-driven integration routine instead of the smoke routine
        #[arg(long)]
        integration_test: bool,
        /// Output file (defaults to target/<triple>/<profile>/firmware.hex)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => check::run(),
        Commands::Test { unit, integration } => test::run(unit, integration),
        Commands::Doc { open } => doc::run(open),
        Commands::Hex {
            release,
            integration_test,
            output,
        } => hex::run(release, integration_test, output.as_deref()),
    }
}
