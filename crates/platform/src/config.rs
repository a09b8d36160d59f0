//! Bring-up configuration and constants
//!
//! Every number the test sequencers use lives here, so a change to the
//! bring-up plan is one edit instead of a hunt through the routines.

use crate::memory_map::SpiInstance;
use crate::registers::gpio::{IRQ_P1NE, IRQ_P1PE};
use crate::types::{GpioPin, SpiConfig, SpiMode};

/// The firmware name
pub const APP_NAME: &str = "User Periph Smoke";

/// Firmware version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line the harness looks for at the end of the integration routine
pub const INTEGRATION_DONE_MESSAGE: &str = "Integration test completed";

/// Settings for the smoke routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmokeConfig {
    /// Applied to every SPI controller
    pub spi: SpiConfig,
    /// One test byte per controller, in [`SpiInstance::ALL`] order
    pub spi_patterns: [u8; 4],
    /// I3C target address
    pub i3c_target: u8,
    /// Byte written to the I3C target
    pub i3c_payload: u8,
    /// Pin driven by the routine
    pub output_pin: GpioPin,
    /// Pin sampled by the routine
    pub input_pin: GpioPin,
    /// Spin count for the single high/low pulse
    pub pulse_delay: u32,
    /// Interrupt conditions armed on the input pin
    pub input_irq_flags: u32,
    /// Number of blink cycles at the end
    pub toggle_count: u32,
    /// Spin count for each half of a blink cycle
    pub toggle_delay: u32,
}

impl SmokeConfig {
    /// Test byte for `spi`.
    #[must_use]
    pub fn pattern_for(&self, spi: SpiInstance) -> u8 {
        match spi {
            SpiInstance::Spi0 => self.spi_patterns[0],
            SpiInstance::Spi1 => self.spi_patterns[1],
            SpiInstance::Spi2 => self.spi_patterns[2],
            SpiInstance::Spi3 => self.spi_patterns[3],
        }
    }
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            spi: SpiConfig::from_raw(10, 0),
            spi_patterns: [0xA5, 0x55, 0xAA, 0xFF],
            i3c_target: 0x50,
            i3c_payload: 0x12,
            output_pin: GpioPin::Pin0,
            input_pin: GpioPin::Pin1,
            pulse_delay: 1000,
            input_irq_flags: IRQ_P1PE | IRQ_P1NE,
            toggle_count: 10,
            toggle_delay: 500,
        }
    }
}

/// Settings for the integration routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntegrationConfig {
    /// SPI0 settings
    pub spi0: SpiConfig,
    /// SPI1 settings
    pub spi1: SpiConfig,
    /// Pin driven by the routine
    pub output_pin: GpioPin,
    /// Pin left as input
    pub input_pin: GpioPin,
    /// Number of blink cycles
    pub toggle_count: u32,
    /// Spin count for each half of a blink cycle
    pub toggle_delay: u32,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            spi0: SpiConfig::from_raw(10, 0),
            spi1: SpiConfig {
                mode: SpiMode::Mode3,
                ..SpiConfig::from_raw(10, 0)
            },
            output_pin: GpioPin::Pin0,
            input_pin: GpioPin::Pin1,
            toggle_count: 5,
            toggle_delay: 1000,
        }
    }
}
