//! Integration routine: configure everything under harness supervision
//!
//! The harness holds its checks until the signal line goes high, then
//! inspects the peripheral configuration over the bus and counts the
//! output pin's pulses.

use platform::config::{IntegrationConfig, INTEGRATION_DONE_MESSAGE};
use platform::{Direction, PinState, RegisterBus, SpiInstance};

use crate::drivers::{Gpio, I3c, Spi};
use crate::harness::HarnessSignal;
use crate::sequence::blink;

/// What the integration routine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntegrationReport {
    /// Completed blink cycles after the signal went high
    pub toggles: u32,
}

/// Run the integration routine on `bus`, reporting progress on `harness`.
pub fn run<B, H>(bus: &mut B, harness: &mut H, config: &IntegrationConfig) -> IntegrationReport
where
    B: RegisterBus,
    H: HarnessSignal,
{
    harness.enable_output();
    harness.set(PinState::Low);

    Spi::new(&mut *bus, SpiInstance::Spi0).init(config.spi0);
    Spi::new(&mut *bus, SpiInstance::Spi1).init(config.spi1);

    I3c::new(&mut *bus).init();

    let mut gpio = Gpio::new(&mut *bus);
    gpio.init();
    gpio.set_pin_direction(config.output_pin, Direction::Output);
    gpio.set_pin_direction(config.input_pin, Direction::Input);
    gpio.write_pin(config.output_pin, PinState::High);

    harness.set(PinState::High);

    let toggles = blink(
        &mut gpio,
        config.output_pin,
        config.toggle_count,
        config.toggle_delay,
    );

    info!("{=str}", INTEGRATION_DONE_MESSAGE);
    IntegrationReport { toggles }
}
