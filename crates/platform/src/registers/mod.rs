//! Register maps for the user-area peripherals
//!
//! Offsets and bits follow the user project's RTL register files; the
//! management GPIO follows the management SoC's CSR map.
//!
//! Each submodule has three parts:
//! - byte offsets from the bank base (`*_OFFSET`)
//! - field bits, exactly as the RTL lays them out
//! - a register block struct with one named [`Register`] per word
//!
//! [`Register`]: crate::bus::Register

pub mod gpio;
pub mod i3c;
pub mod mgmt_gpio;
pub mod spi;

pub use gpio::GpioRegisters;
pub use i3c::{I3cRegisters, I3cStatus};
pub use mgmt_gpio::MgmtGpioRegisters;
pub use spi::{SpiRegisters, SpiStatus};
