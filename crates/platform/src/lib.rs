//! Platform layer for the user-area peripheral bring-up firmware
//!
//! This crate holds everything about the chip that is not a driver:
//! addresses, register layouts, access rules, and the host-side mock that
//! lets the drivers be tested without silicon.
//!
//! # Architecture Layers
//!
//! ```text
//! Sequencers (firmware::sequence)
//!         ↓
//! Drivers (firmware::drivers: Spi, I3c, Gpio)
//!         ↓
//! Register blocks (this crate: registers, types)
//!         ↓
//! RegisterBus (this crate: Mmio on the SoC, MockRegisterBus on host)
//! ```
//!
//! # Features
//!
//! - `std`: Expose [`mocks`] outside of this crate's own tests
//! - `defmt`: Derive `defmt::Format` on the public types
//!
//! # Example
//!
//! ```
//! use platform::{memory_map::GPIO_BASE, registers::GpioRegisters};
//!
//! let regs = GpioRegisters::at(GPIO_BASE);
//! assert_eq!(regs.dir.addr(), 0x3000_2008);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
// Pedantic lints suppressed for this hardware HAL crate:
#![allow(clippy::doc_markdown)] // hex addresses and register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(feature = "std")]
extern crate std;

pub mod bus;
pub mod config;
pub mod error;
pub mod memory_map;
pub mod mocks;
pub mod registers;
pub mod types;

// Re-export the bus layer
pub use bus::{Mmio, ReadOnly, ReadWrite, Register, RegisterBus, WriteOnly};

// Re-export register blocks
pub use registers::{
    GpioRegisters, I3cRegisters, I3cStatus, MgmtGpioRegisters, SpiRegisters, SpiStatus,
};

// Re-export domain types
pub use error::{I3cError, OutOfRangeError};
pub use memory_map::SpiInstance;
pub use types::{Direction, GpioPin, PinState, Prescaler, SpiConfig, SpiMode};
