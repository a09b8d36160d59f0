//! SPI master driver
//!
//! Byte-at-a-time, busy-polling access to one of the four SPI controllers.
//! Every transfer frames a single byte with slave select:
//!
//! ```text
//! wait !TX_F → TXDATA ← byte → SS on → wait !BUSY → SS off → RXDATA (if !RX_E)
//! ```
//!
//! There is no timeout: if the controller never drops TX_F or BUSY the
//! call spins forever. The bring-up harness treats a hang as a failure.

use core::convert::Infallible;

use embedded_hal::spi::{ErrorType, SpiBus};
use platform::registers::spi::{
    CTRL_ENABLE, CTRL_RX_EN, CTRL_SS, DATA_MASK, FIFO_FLUSH, GCLK_ENABLE, STATUS_BUSY,
    STATUS_RX_E, STATUS_TX_F,
};
use platform::{RegisterBus, SpiConfig, SpiInstance, SpiRegisters, SpiStatus};

/// Byte shifted out when the caller only wants to receive.
pub const FILL_BYTE: u8 = 0x00;

/// One SPI controller on a register bus.
pub struct Spi<B> {
    bus: B,
    regs: SpiRegisters,
    instance: SpiInstance,
}

impl<B: RegisterBus> Spi<B> {
    /// Bind the driver to `instance`. Touches no registers.
    pub fn new(bus: B, instance: SpiInstance) -> Self {
        Self {
            bus,
            regs: SpiRegisters::at(instance.base()),
            instance,
        }
    }

    /// Controller this driver talks to.
    pub fn instance(&self) -> SpiInstance {
        self.instance
    }

    /// Give the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    // ── Setup ────────────────────────────────────────────────────────────────

    /// Ungate the clock, program divider and mode, enable TX and RX.
    ///
    /// Register order: GCLK, PR, CFG, CTRL. Slave select is left
    /// deasserted.
    pub fn init(&mut self, config: SpiConfig) {
        self.regs.gclk.write(&mut self.bus, GCLK_ENABLE);
        self.regs.prescaler.write(&mut self.bus, config.prescaler.get());
        self.regs.cfg.write(&mut self.bus, config.mode.bits());
        self.regs.ctrl.write(&mut self.bus, CTRL_ENABLE | CTRL_RX_EN);
        debug!(
            "SPI{=u8} init: PR={=u32} CFG={=u32}",
            self.instance.index(),
            config.prescaler.get(),
            config.mode.bits()
        );
    }

    /// [`init`](Self::init) from raw values: prescaler clamped to 2, mode
    /// masked to its low two bits.
    pub fn init_raw(&mut self, prescaler: u32, mode: u32) {
        self.init(SpiConfig::from_raw(prescaler, mode));
    }

    // ── Data ─────────────────────────────────────────────────────────────────

    /// Shift `byte` out and return the byte shifted in.
    ///
    /// Returns 0 when the controller reports an empty RX FIFO after the
    /// transaction.
    pub fn transfer(&mut self, byte: u8) -> u8 {
        self.shift(byte)
    }

    /// Shift `byte` out, discarding what comes back.
    pub fn write(&mut self, byte: u8) {
        let _ = self.shift(byte);
    }

    /// Shift in one byte, sending [`FILL_BYTE`].
    pub fn read(&mut self) -> u8 {
        self.shift(FILL_BYTE)
    }

    /// Pop a received byte without starting a transaction.
    pub fn try_read_rx(&mut self) -> Option<u8> {
        if self.regs.status.any_set(&mut self.bus, STATUS_RX_E) {
            None
        } else {
            Some(self.rx_byte())
        }
    }

    /// A transaction is in progress.
    pub fn is_busy(&mut self) -> bool {
        self.regs.status.any_set(&mut self.bus, STATUS_BUSY)
    }

    /// Decoded STATUS snapshot.
    pub fn status(&mut self) -> SpiStatus {
        SpiStatus::from_bits(self.regs.status.read(&mut self.bus))
    }

    fn shift(&mut self, byte: u8) -> u8 {
        while self.regs.status.any_set(&mut self.bus, STATUS_TX_F) {
            core::hint::spin_loop();
        }

        self.regs.txdata.write(&mut self.bus, u32::from(byte));
        self.regs.ctrl.set_bits(&mut self.bus, CTRL_SS);

        while self.regs.status.any_set(&mut self.bus, STATUS_BUSY) {
            core::hint::spin_loop();
        }

        self.regs.ctrl.clear_bits(&mut self.bus, CTRL_SS);

        let rx = self.try_read_rx().unwrap_or(0);
        trace!(
            "SPI{=u8} tx={=u8:#x} rx={=u8:#x}",
            self.instance.index(),
            byte,
            rx
        );
        rx
    }

    fn rx_byte(&mut self) -> u8 {
        (self.regs.rxdata.read(&mut self.bus) & DATA_MASK) as u8
    }

    // ── FIFOs ────────────────────────────────────────────────────────────────

    /// Bytes waiting in the RX FIFO.
    pub fn rx_fifo_level(&mut self) -> u32 {
        self.regs.rx_fifo_level.read(&mut self.bus)
    }

    /// Bytes queued in the TX FIFO.
    pub fn tx_fifo_level(&mut self) -> u32 {
        self.regs.tx_fifo_level.read(&mut self.bus)
    }

    /// Level at which RX_A asserts.
    pub fn set_rx_fifo_threshold(&mut self, level: u32) {
        self.regs.rx_fifo_threshold.write(&mut self.bus, level);
    }

    /// Level below which TX_B asserts.
    pub fn set_tx_fifo_threshold(&mut self, level: u32) {
        self.regs.tx_fifo_threshold.write(&mut self.bus, level);
    }

    /// Discard everything in the RX FIFO.
    pub fn flush_rx_fifo(&mut self) {
        self.regs.rx_fifo_flush.write(&mut self.bus, FIFO_FLUSH);
    }

    /// Discard everything in the TX FIFO.
    pub fn flush_tx_fifo(&mut self) {
        self.regs.tx_fifo_flush.write(&mut self.bus, FIFO_FLUSH);
    }

    // ── Interrupt registers ──────────────────────────────────────────────────
    //
    // Nothing services these; they are exposed for inspection only.

    /// Unmask the conditions in `mask`.
    pub fn enable_interrupts(&mut self, mask: u32) {
        self.regs.im.set_bits(&mut self.bus, mask);
    }

    /// Mask the conditions in `mask`.
    pub fn disable_interrupts(&mut self, mask: u32) {
        self.regs.im.clear_bits(&mut self.bus, mask);
    }

    /// Raw interrupt status.
    pub fn raw_interrupts(&mut self) -> u32 {
        self.regs.ris.read(&mut self.bus)
    }

    /// Interrupt status after the mask.
    pub fn masked_interrupts(&mut self) -> u32 {
        self.regs.mis.read(&mut self.bus)
    }

    /// Acknowledge the conditions in `mask`.
    pub fn clear_interrupts(&mut self, mask: u32) {
        self.regs.ic.write(&mut self.bus, mask);
    }
}

// ── embedded-hal ─────────────────────────────────────────────────────────────

impl<B: RegisterBus> ErrorType for Spi<B> {
    type Error = Infallible;
}

impl<B: RegisterBus> SpiBus<u8> for Spi<B> {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for word in words {
            *word = self.shift(FILL_BYTE);
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for &word in words {
            let _ = self.shift(word);
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let len = read.len().max(write.len());
        for i in 0..len {
            let out = write.get(i).copied().unwrap_or(FILL_BYTE);
            let rx = self.shift(out);
            if let Some(slot) = read.get_mut(i) {
                *slot = rx;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for word in words {
            *word = self.shift(*word);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        while self.is_busy() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}
