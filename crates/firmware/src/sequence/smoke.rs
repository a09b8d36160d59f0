//! Smoke routine: touch every peripheral once
//!
//! 1. SPI0..SPI3: init, one transfer each with its own test byte
//! 2. I3C: init, write one byte to the target, read one back
//! 3. GPIO: output pin pulsed once, input pin sampled, edge interrupts armed
//! 4. Output pin blinks to mark the end

use platform::config::SmokeConfig;
use platform::{Direction, I3cError, PinState, RegisterBus, SpiInstance};

use crate::delay;
use crate::drivers::{Gpio, I3c, Spi};
use crate::sequence::blink;

/// What the smoke routine observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmokeReport {
    /// Byte received by each SPI controller, in [`SpiInstance::ALL`] order
    pub spi_rx: [u8; 4],
    /// Outcome of the I3C write
    pub i3c_write: Result<(), I3cError>,
    /// Outcome of the I3C read
    pub i3c_read: Result<u8, I3cError>,
    /// Level sampled on the input pin (0 or 1)
    pub input_level: u8,
    /// Completed blink cycles
    pub toggles: u32,
}

impl SmokeReport {
    /// Both I3C transactions completed without the error bit.
    pub fn i3c_ok(&self) -> bool {
        self.i3c_write.is_ok() && self.i3c_read.is_ok()
    }
}

/// Run the smoke routine on `bus`.
pub fn run<B: RegisterBus>(bus: &mut B, config: &SmokeConfig) -> SmokeReport {
    info!("smoke: start");

    // ── SPI ──────────────────────────────────────────────────────────────────
    let mut spi_rx = [0u8; 4];
    for (rx, instance) in spi_rx.iter_mut().zip(SpiInstance::ALL) {
        let mut spi = Spi::new(&mut *bus, instance);
        spi.init(config.spi);
        *rx = spi.transfer(config.pattern_for(instance));
        debug!("smoke: SPI{=u8} rx={=u8:#x}", instance.index(), *rx);
    }

    // ── I3C ──────────────────────────────────────────────────────────────────
    let mut i3c = I3c::new(&mut *bus);
    i3c.init();
    let i3c_write = i3c.write(config.i3c_target, config.i3c_payload);
    let i3c_read = i3c.read(config.i3c_target);
    if let Err(e) = i3c_write {
        warn!("smoke: I3C write returned {=i32}", e.code());
    }
    if let Err(e) = i3c_read {
        warn!("smoke: I3C read returned {=i32}", e.code());
    }

    // ── GPIO ─────────────────────────────────────────────────────────────────
    let mut gpio = Gpio::new(&mut *bus);
    gpio.init();
    gpio.set_pin_direction(config.output_pin, Direction::Output);
    gpio.set_pin_direction(config.input_pin, Direction::Input);

    gpio.write_pin(config.output_pin, PinState::High);
    delay::spin(config.pulse_delay);
    gpio.write_pin(config.output_pin, PinState::Low);
    delay::spin(config.pulse_delay);

    let input_level = u8::from(gpio.read_pin(config.input_pin));
    gpio.enable_interrupt(config.input_pin.index(), config.input_irq_flags);

    let toggles = blink(
        &mut gpio,
        config.output_pin,
        config.toggle_count,
        config.toggle_delay,
    );

    let report = SmokeReport {
        spi_rx,
        i3c_write,
        i3c_read,
        input_level,
        toggles,
    };
    info!("smoke: done, {=u32} toggles", toggles);
    report
}
