//! Two-pin GPIO register map
//!
//! The interrupt registers carry one bit per pin per condition, grouped by
//! condition in byte lanes:
//!
//! | Lane   | Condition     | Pin 0 | Pin 1 |
//! |--------|---------------|-------|-------|
//! | 7:0    | level high    | bit 0 | bit 1 |
//! | 15:8   | level low     | bit 8 | bit 9 |
//! | 23:16  | rising edge   | bit16 | bit17 |
//! | 31:24  | falling edge  | bit24 | bit25 |

use crate::bus::{ReadOnly, ReadWrite, Register, WriteOnly};

// ---------------------------------------------------------------------------
// Register offsets
// ---------------------------------------------------------------------------

/// Pin input levels
pub const DATAI_OFFSET: u32 = 0x00;

/// Pin output levels
pub const DATAO_OFFSET: u32 = 0x04;

/// Pin directions (1 = output)
pub const DIR_OFFSET: u32 = 0x08;

/// Interrupt mask
pub const IM_OFFSET: u32 = 0x0F00;

/// Masked interrupt status
pub const MIS_OFFSET: u32 = 0x0F04;

/// Raw interrupt status
pub const RIS_OFFSET: u32 = 0x0F08;

/// Interrupt clear (write 1 to clear)
pub const IC_OFFSET: u32 = 0x0F0C;

// ---------------------------------------------------------------------------
// Interrupt condition bits
// ---------------------------------------------------------------------------

/// Pin 0 level high
pub const IRQ_P0HI: u32 = 1 << 0;

/// Pin 1 level high
pub const IRQ_P1HI: u32 = 1 << 1;

/// Pin 0 level low
pub const IRQ_P0LO: u32 = 1 << 8;

/// Pin 1 level low
pub const IRQ_P1LO: u32 = 1 << 9;

/// Pin 0 rising edge
pub const IRQ_P0PE: u32 = 1 << 16;

/// Pin 1 rising edge
pub const IRQ_P1PE: u32 = 1 << 17;

/// Pin 0 falling edge
pub const IRQ_P0NE: u32 = 1 << 24;

/// Pin 1 falling edge
pub const IRQ_P1NE: u32 = 1 << 25;

/// Every pending condition, used to clear at init
pub const IRQ_ALL: u32 = 0xFFFF_FFFF;

// ---------------------------------------------------------------------------
// Register block
// ---------------------------------------------------------------------------

/// Named registers of the GPIO block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioRegisters {
    /// Input levels
    pub datai: Register<ReadOnly>,
    /// Output levels
    pub datao: Register<ReadWrite>,
    /// Directions
    pub dir: Register<ReadWrite>,
    /// Interrupt mask
    pub im: Register<ReadWrite>,
    /// Masked interrupt status
    pub mis: Register<ReadOnly>,
    /// Raw interrupt status
    pub ris: Register<ReadOnly>,
    /// Interrupt clear
    pub ic: Register<WriteOnly>,
}

impl GpioRegisters {
    /// Register block of the GPIO bank starting at `base`.
    #[must_use]
    pub const fn at(base: u32) -> Self {
        Self {
            datai: Register::at(base, DATAI_OFFSET),
            datao: Register::at(base, DATAO_OFFSET),
            dir: Register::at(base, DIR_OFFSET),
            im: Register::at(base, IM_OFFSET),
            mis: Register::at(base, MIS_OFFSET),
            ris: Register::at(base, RIS_OFFSET),
            ic: Register::at(base, IC_OFFSET),
        }
    }
}
