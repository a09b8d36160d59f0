//! I3C controller register map

use crate::bus::{ReadOnly, ReadWrite, Register, WriteOnly};

// ---------------------------------------------------------------------------
// Register offsets
// ---------------------------------------------------------------------------

/// Control: enable, start/stop strobes, transfer direction
pub const CTRL_OFFSET: u32 = 0x00;

/// Status: busy, done, ack, error
pub const STATUS_OFFSET: u32 = 0x04;

/// Data byte (TX before start, RX after done)
pub const DATA_OFFSET: u32 = 0x08;

/// Target address; bit 0 is the read marker
pub const ADDR_OFFSET: u32 = 0x0C;

/// Interrupt enable
pub const IRQ_EN_OFFSET: u32 = 0x10;

/// Interrupt status
pub const IRQ_STAT_OFFSET: u32 = 0x14;

/// Interrupt clear (write 1 to clear)
pub const IRQ_CLR_OFFSET: u32 = 0x18;

// ---------------------------------------------------------------------------
// Field bits
// ---------------------------------------------------------------------------

/// CTRL: controller enable
pub const CTRL_ENABLE: u32 = 1 << 0;

/// CTRL: start a transaction
pub const CTRL_START: u32 = 1 << 1;

/// CTRL: issue a stop condition
pub const CTRL_STOP: u32 = 1 << 2;

/// CTRL: transaction reads from the target
pub const CTRL_READ_MODE: u32 = 1 << 3;

/// CTRL: transaction writes to the target
pub const CTRL_WRITE_MODE: u32 = 1 << 4;

/// STATUS: transaction in flight
pub const STATUS_BUSY: u32 = 1 << 0;

/// STATUS: transaction finished
pub const STATUS_DONE: u32 = 1 << 1;

/// STATUS: target acknowledged
pub const STATUS_ACK_RECEIVED: u32 = 1 << 2;

/// STATUS: transaction failed
pub const STATUS_ERROR: u32 = 1 << 3;

/// IRQ_EN / IRQ_STAT / IRQ_CLR: transaction complete
pub const IRQ_TRANSACTION_DONE: u32 = 1 << 0;

/// ADDR: read marker ORed into the target address
pub const ADDR_READ: u32 = 1;

/// Received data occupies the low byte of DATA
pub const DATA_MASK: u32 = 0xFF;

// ---------------------------------------------------------------------------
// Register block
// ---------------------------------------------------------------------------

/// Named registers of the I3C controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I3cRegisters {
    /// Control
    pub ctrl: Register<ReadWrite>,
    /// Status
    pub status: Register<ReadOnly>,
    /// Data
    pub data: Register<ReadWrite>,
    /// Target address
    pub addr: Register<ReadWrite>,
    /// Interrupt enable
    pub irq_en: Register<ReadWrite>,
    /// Interrupt status
    pub irq_stat: Register<ReadOnly>,
    /// Interrupt clear
    pub irq_clr: Register<WriteOnly>,
}

impl I3cRegisters {
    /// Register block of the I3C controller whose bank starts at `base`.
    #[must_use]
    pub const fn at(base: u32) -> Self {
        Self {
            ctrl: Register::at(base, CTRL_OFFSET),
            status: Register::at(base, STATUS_OFFSET),
            data: Register::at(base, DATA_OFFSET),
            addr: Register::at(base, ADDR_OFFSET),
            irq_en: Register::at(base, IRQ_EN_OFFSET),
            irq_stat: Register::at(base, IRQ_STAT_OFFSET),
            irq_clr: Register::at(base, IRQ_CLR_OFFSET),
        }
    }
}

/// Decoded snapshot of the I3C STATUS register.
///
/// A transaction moves IDLE → BUSY (on start) → DONE or ERROR; software
/// only ever observes it through these bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I3cStatus(u32);

impl I3cStatus {
    /// Wrap a raw STATUS word.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw STATUS word.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Transaction in flight.
    #[must_use]
    pub const fn busy(self) -> bool {
        self.0 & STATUS_BUSY != 0
    }

    /// Transaction finished.
    #[must_use]
    pub const fn done(self) -> bool {
        self.0 & STATUS_DONE != 0
    }

    /// Target acknowledged its address.
    #[must_use]
    pub const fn ack_received(self) -> bool {
        self.0 & STATUS_ACK_RECEIVED != 0
    }

    /// Transaction failed.
    #[must_use]
    pub const fn error(self) -> bool {
        self.0 & STATUS_ERROR != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::I3C_BASE;

    #[test]
    fn block_addresses() {
        let regs = I3cRegisters::at(I3C_BASE);
        assert_eq!(regs.ctrl.addr(), 0x3000_1000);
        assert_eq!(regs.addr.addr(), 0x3000_100C);
        assert_eq!(regs.irq_clr.addr(), 0x3000_1018);
    }

    #[test]
    fn status_error_is_independent_of_done() {
        let s = I3cStatus::from_bits(STATUS_DONE | STATUS_ERROR);
        assert!(s.done());
        assert!(s.error());
        assert!(!s.busy());
        assert!(!s.ack_received());
    }
}
