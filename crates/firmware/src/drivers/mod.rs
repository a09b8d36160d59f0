//! Busy-polling drivers for the user-area peripherals
//!
//! Each driver owns a [`platform::RegisterBus`] (usually `&mut` to the one
//! shared bus) plus the register block of its peripheral. Drivers hold no
//! other state, so dropping one and binding a fresh one later is free.

pub mod gpio;
pub mod i3c;
pub mod spi;

pub use gpio::{Gpio, Pin};
pub use i3c::I3c;
pub use spi::Spi;
