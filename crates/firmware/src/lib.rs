//! User-area peripheral bring-up firmware
//!
//! Busy-polling drivers for the four SPI masters, the I3C controller and the
//! two-pin GPIO block, plus the sequencers that exercise them on first
//! silicon and in RTL simulation.
//!
//! # Architecture
//!
//! ```text
//! Entry point (main.rs, `hardware` feature)
//!         ↓
//! Sequencers (sequence::smoke, sequence::integration)
//!         ↓
//! Drivers (drivers::{Spi, I3c, Gpio}, harness, delay)
//!         ↓
//! platform (register blocks over RegisterBus)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for the management core (riscv-rt, defmt-rtt, panic-halt)
//! - `integration-test` - Entry point runs the integration routine
//! - `defmt` - Log through defmt
//! - `std` - Enable standard library and the recording mocks (for host testing)
//!
//! # Examples
//!
//! ## Hardware Target
//!
//! ```bash
//! cargo build --release --target riscv32imc-unknown-none-elf --features hardware
//! ```
//!
//! ## Host Tests
//!
//! ```bash
//! cargo test -p firmware
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(unsafe_op_in_unsafe_fn)]
// unsafe fn body is not implicitly unsafe block
// Logging discipline (allow println in tests via clippy.toml)
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
// Pedantic lints too noisy for firmware application code:
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

pub mod delay;
pub mod drivers;
pub mod harness;
pub mod sequence;

// Re-export key types
pub use drivers::{Gpio, I3c, Pin, Spi};
pub use harness::{HarnessSignal, ManagementGpio};
#[cfg(any(test, feature = "std"))]
pub use harness::{HarnessEvent, MockHarness};
pub use sequence::integration::IntegrationReport;
pub use sequence::smoke::SmokeReport;
