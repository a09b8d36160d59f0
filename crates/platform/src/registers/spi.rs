//! SPI master register map (identical for SPI0–SPI3)

use crate::bus::{ReadOnly, ReadWrite, Register, WriteOnly};

// ---------------------------------------------------------------------------
// Register offsets
// ---------------------------------------------------------------------------

/// Received byte (bits 7:0)
pub const RXDATA_OFFSET: u32 = 0x00;

/// Byte to transmit (bits 7:0)
pub const TXDATA_OFFSET: u32 = 0x04;

/// Clock polarity / phase
pub const CFG_OFFSET: u32 = 0x08;

/// Enable, RX enable, slave select
pub const CTRL_OFFSET: u32 = 0x0C;

/// Bus clock prescaler. The RTL misbehaves below 2.
pub const PR_OFFSET: u32 = 0x10;

/// FIFO flags, busy, done
pub const STATUS_OFFSET: u32 = 0x14;

/// Number of bytes waiting in the RX FIFO
pub const RX_FIFO_LEVEL_OFFSET: u32 = 0xFE00;

/// RX FIFO threshold (RX_A asserts at or above it)
pub const RX_FIFO_THRESHOLD_OFFSET: u32 = 0xFE04;

/// Write 1 to discard the RX FIFO
pub const RX_FIFO_FLUSH_OFFSET: u32 = 0xFE08;

/// Number of bytes queued in the TX FIFO
pub const TX_FIFO_LEVEL_OFFSET: u32 = 0xFE10;

/// TX FIFO threshold (TX_B asserts below it)
pub const TX_FIFO_THRESHOLD_OFFSET: u32 = 0xFE14;

/// Write 1 to discard the TX FIFO
pub const TX_FIFO_FLUSH_OFFSET: u32 = 0xFE18;

/// Interrupt mask
pub const IM_OFFSET: u32 = 0xFF00;

/// Masked interrupt status
pub const MIS_OFFSET: u32 = 0xFF04;

/// Raw interrupt status
pub const RIS_OFFSET: u32 = 0xFF08;

/// Interrupt clear (write 1 to clear)
pub const IC_OFFSET: u32 = 0xFF0C;

/// Clock gate enable
pub const GCLK_OFFSET: u32 = 0xFF10;

// ---------------------------------------------------------------------------
// Field bits
// ---------------------------------------------------------------------------

/// CFG: clock polarity
pub const CFG_CPOL: u32 = 1 << 0;

/// CFG: clock phase
pub const CFG_CPHA: u32 = 1 << 1;

/// CFG: the only writable bits
pub const CFG_MODE_MASK: u32 = CFG_CPOL | CFG_CPHA;

/// CTRL: slave select (asserted while set)
pub const CTRL_SS: u32 = 1 << 0;

/// CTRL: controller enable
pub const CTRL_ENABLE: u32 = 1 << 1;

/// CTRL: receiver enable
pub const CTRL_RX_EN: u32 = 1 << 2;

/// STATUS: TX FIFO empty
pub const STATUS_TX_E: u32 = 1 << 0;

/// STATUS: TX FIFO full
pub const STATUS_TX_F: u32 = 1 << 1;

/// STATUS: RX FIFO empty
pub const STATUS_RX_E: u32 = 1 << 2;

/// STATUS: RX FIFO full
pub const STATUS_RX_F: u32 = 1 << 3;

/// STATUS: TX FIFO below threshold
pub const STATUS_TX_B: u32 = 1 << 4;

/// STATUS: RX FIFO at or above threshold
pub const STATUS_RX_A: u32 = 1 << 5;

/// STATUS: shift in progress
pub const STATUS_BUSY: u32 = 1 << 6;

/// STATUS: last shift finished
pub const STATUS_DONE: u32 = 1 << 7;

/// Clock gate on
pub const GCLK_ENABLE: u32 = 1;

/// Flush strobe
pub const FIFO_FLUSH: u32 = 1;

/// Received data occupies the low byte of RXDATA
pub const DATA_MASK: u32 = 0xFF;

// ---------------------------------------------------------------------------
// Register block
// ---------------------------------------------------------------------------

/// Named registers of one SPI master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiRegisters {
    /// RX data
    pub rxdata: Register<ReadOnly>,
    /// TX data
    pub txdata: Register<WriteOnly>,
    /// CPOL/CPHA configuration
    pub cfg: Register<ReadWrite>,
    /// Control
    pub ctrl: Register<ReadWrite>,
    /// Prescaler
    pub prescaler: Register<ReadWrite>,
    /// Status
    pub status: Register<ReadOnly>,
    /// RX FIFO level
    pub rx_fifo_level: Register<ReadOnly>,
    /// RX FIFO threshold
    pub rx_fifo_threshold: Register<ReadWrite>,
    /// RX FIFO flush
    pub rx_fifo_flush: Register<WriteOnly>,
    /// TX FIFO level
    pub tx_fifo_level: Register<ReadOnly>,
    /// TX FIFO threshold
    pub tx_fifo_threshold: Register<ReadWrite>,
    /// TX FIFO flush
    pub tx_fifo_flush: Register<WriteOnly>,
    /// Interrupt mask
    pub im: Register<ReadWrite>,
    /// Masked interrupt status
    pub mis: Register<ReadOnly>,
    /// Raw interrupt status
    pub ris: Register<ReadOnly>,
    /// Interrupt clear
    pub ic: Register<WriteOnly>,
    /// Clock gate
    pub gclk: Register<ReadWrite>,
}

impl SpiRegisters {
    /// Register block of the SPI master whose bank starts at `base`.
    #[must_use]
    pub const fn at(base: u32) -> Self {
        Self {
            rxdata: Register::at(base, RXDATA_OFFSET),
            txdata: Register::at(base, TXDATA_OFFSET),
            cfg: Register::at(base, CFG_OFFSET),
            ctrl: Register::at(base, CTRL_OFFSET),
            prescaler: Register::at(base, PR_OFFSET),
            status: Register::at(base, STATUS_OFFSET),
            rx_fifo_level: Register::at(base, RX_FIFO_LEVEL_OFFSET),
            rx_fifo_threshold: Register::at(base, RX_FIFO_THRESHOLD_OFFSET),
            rx_fifo_flush: Register::at(base, RX_FIFO_FLUSH_OFFSET),
            tx_fifo_level: Register::at(base, TX_FIFO_LEVEL_OFFSET),
            tx_fifo_threshold: Register::at(base, TX_FIFO_THRESHOLD_OFFSET),
            tx_fifo_flush: Register::at(base, TX_FIFO_FLUSH_OFFSET),
            im: Register::at(base, IM_OFFSET),
            mis: Register::at(base, MIS_OFFSET),
            ris: Register::at(base, RIS_OFFSET),
            ic: Register::at(base, IC_OFFSET),
            gclk: Register::at(base, GCLK_OFFSET),
        }
    }
}

/// Decoded snapshot of the SPI STATUS register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiStatus(u32);

impl SpiStatus {
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

    /// TX FIFO empty.
    #[must_use]
    pub const fn tx_empty(self) -> bool {
        self.0 & STATUS_TX_E != 0
    }

    /// TX FIFO full.
    #[must_use]
    pub const fn tx_full(self) -> bool {
        self.0 & STATUS_TX_F != 0
    }

    /// RX FIFO empty.
    #[must_use]
    pub const fn rx_empty(self) -> bool {
        self.0 & STATUS_RX_E != 0
    }

    /// RX FIFO full.
    #[must_use]
    pub const fn rx_full(self) -> bool {
        self.0 & STATUS_RX_F != 0
    }

    /// Shift in progress.
    #[must_use]
    pub const fn busy(self) -> bool {
        self.0 & STATUS_BUSY != 0
    }

    /// Last shift finished.
    #[must_use]
    pub const fn done(self) -> bool {
        self.0 & STATUS_DONE != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::{SPI0_BASE, SPI3_BASE};

    #[test]
    fn block_addresses_follow_base() {
        let regs = SpiRegisters::at(SPI3_BASE);
        assert_eq!(regs.rxdata.addr(), 0x3000_0300);
        assert_eq!(regs.status.addr(), 0x3000_0314);
        assert_eq!(regs.gclk.addr(), 0x3001_0210);
    }

    #[test]
    fn mis_and_ris_are_not_swapped() {
        // MIS sits below RIS in this IP, unlike the usual ordering.
        let regs = SpiRegisters::at(SPI0_BASE);
        assert_eq!(regs.mis.addr(), SPI0_BASE + 0xFF04);
        assert_eq!(regs.ris.addr(), SPI0_BASE + 0xFF08);
    }

    #[test]
    fn status_decodes_each_flag() {
        let s = SpiStatus::from_bits(STATUS_TX_F | STATUS_BUSY);
        assert!(s.tx_full());
        assert!(s.busy());
        assert!(!s.rx_empty());
        assert!(!s.done());
    }
}
