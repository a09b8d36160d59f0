//! Two-pin GPIO driver
//!
//! Pins are addressed by raw index to match the bring-up scripts. Only 0 and
//! 1 exist; any other index is ignored by the setters and reads as 0.
//! Output writes do not check the pin direction.
//!
//! For code written against `embedded-hal`, [`Gpio::pin`] hands out a
//! borrowed single-pin view implementing `OutputPin`, `StatefulOutputPin`
//! and `InputPin`.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use platform::memory_map::GPIO_BASE;
use platform::registers::gpio::IRQ_ALL;
use platform::{Direction, GpioPin, GpioRegisters, PinState, RegisterBus};

/// The GPIO block on a register bus.
pub struct Gpio<B> {
    bus: B,
    regs: GpioRegisters,
}

impl<B: RegisterBus> Gpio<B> {
    /// Bind the driver to the GPIO block. Touches no registers.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            regs: GpioRegisters::at(GPIO_BASE),
        }
    }

    /// Give the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    /// Both pins to input, every latched interrupt cleared.
    ///
    /// The interrupt mask and output latch are left as they were.
    pub fn init(&mut self) {
        self.regs.dir.write(&mut self.bus, 0);
        self.regs.ic.write(&mut self.bus, IRQ_ALL);
        debug!("GPIO init");
    }

    /// Set the direction of `pin`.
    pub fn set_direction(&mut self, pin: u8, direction: Direction) {
        if let Some(pin) = GpioPin::new(pin) {
            self.set_pin_direction(pin, direction);
        }
    }

    /// Drive `pin` to `state`.
    pub fn write(&mut self, pin: u8, state: PinState) {
        if let Some(pin) = GpioPin::new(pin) {
            self.write_pin(pin, state);
        }
    }

    /// Input level of `pin` (0 or 1). Unknown pins read as 0.
    pub fn read(&mut self, pin: u8) -> u8 {
        match GpioPin::new(pin) {
            Some(pin) => u8::from(self.read_pin(pin)),
            None => 0,
        }
    }

    /// Invert the output latch of `pin`.
    pub fn toggle(&mut self, pin: u8) {
        if let Some(pin) = GpioPin::new(pin) {
            self.regs.datao.modify(&mut self.bus, |v| v ^ pin.mask());
        }
    }

    // ── Typed pin access ─────────────────────────────────────────────────────

    /// DIR update for a known pin.
    pub fn set_pin_direction(&mut self, pin: GpioPin, direction: Direction) {
        match direction {
            Direction::Output => self.regs.dir.set_bits(&mut self.bus, pin.mask()),
            Direction::Input => self.regs.dir.clear_bits(&mut self.bus, pin.mask()),
        }
    }

    /// DATAO update for a known pin.
    pub fn write_pin(&mut self, pin: GpioPin, state: PinState) {
        match state {
            PinState::High => self.regs.datao.set_bits(&mut self.bus, pin.mask()),
            PinState::Low => self.regs.datao.clear_bits(&mut self.bus, pin.mask()),
        }
    }

    /// DATAI level of a known pin.
    pub fn read_pin(&mut self, pin: GpioPin) -> PinState {
        PinState::from(self.regs.datai.any_set(&mut self.bus, pin.mask()))
    }

    /// Level currently latched in DATAO for a known pin.
    pub fn output_state(&mut self, pin: GpioPin) -> PinState {
        PinState::from(self.regs.datao.any_set(&mut self.bus, pin.mask()))
    }

    /// Borrow one pin as an `embedded-hal` digital pin.
    pub fn pin(&mut self, pin: GpioPin) -> Pin<'_, B> {
        Pin { gpio: self, pin }
    }

    // ── Interrupt registers ──────────────────────────────────────────────────

    /// Unmask the conditions in `flags`.
    ///
    /// `pin` is accepted for call-site readability only: the condition bits
    /// already name their pin, so it does not affect the mask.
    pub fn enable_interrupt(&mut self, pin: u8, flags: u32) {
        let _ = pin;
        self.regs.im.set_bits(&mut self.bus, flags);
    }

    /// Mask the conditions in `flags`.
    pub fn disable_interrupt(&mut self, flags: u32) {
        self.regs.im.clear_bits(&mut self.bus, flags);
    }

    /// Acknowledge the conditions in `flags`.
    pub fn clear_interrupt(&mut self, flags: u32) {
        self.regs.ic.write(&mut self.bus, flags);
    }

    /// Raw interrupt status.
    pub fn raw_interrupts(&mut self) -> u32 {
        self.regs.ris.read(&mut self.bus)
    }

    /// Interrupt status after the mask.
    pub fn masked_interrupts(&mut self) -> u32 {
        self.regs.mis.read(&mut self.bus)
    }
}

// ── embedded-hal ─────────────────────────────────────────────────────────────

/// One GPIO pin borrowed from a [`Gpio`].
pub struct Pin<'a, B> {
    gpio: &'a mut Gpio<B>,
    pin: GpioPin,
}

impl<B> Pin<'_, B> {
    /// Which pin this is.
    pub fn id(&self) -> GpioPin {
        self.pin
    }
}

impl<B: RegisterBus> ErrorType for Pin<'_, B> {
    type Error = Infallible;
}

impl<B: RegisterBus> OutputPin for Pin<'_, B> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.gpio.write_pin(self.pin, PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.gpio.write_pin(self.pin, PinState::High);
        Ok(())
    }
}

impl<B: RegisterBus> StatefulOutputPin for Pin<'_, B> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.output_state(self.pin).is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.gpio.output_state(self.pin).is_high())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        let next = self.gpio.output_state(self.pin).toggled();
        self.gpio.write_pin(self.pin, next);
        Ok(())
    }
}

impl<B: RegisterBus> InputPin for Pin<'_, B> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.gpio.read_pin(self.pin).is_high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.gpio.read_pin(self.pin).is_high())
    }
}
