//! Management SoC GPIO CSRs
//!
//! A single pad owned by the management core. The test harness samples it
//! to learn when the firmware has reached its checkpoint, so the only
//! operations needed are "make it a driven output" and "set its level".

use crate::bus::{ReadOnly, ReadWrite, Register};

/// Pad mode, high bit
pub const MODE1_OFFSET: u32 = 0x00;

/// Pad mode, low bit
pub const MODE0_OFFSET: u32 = 0x04;

/// Input buffer enable
pub const IEN_OFFSET: u32 = 0x08;

/// Output driver enable
pub const OE_OFFSET: u32 = 0x0C;

/// Output level
pub const OUT_OFFSET: u32 = 0x10;

/// Input level
pub const IN_OFFSET: u32 = 0x14;

/// Named CSRs of the management GPIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MgmtGpioRegisters {
    /// Mode bit 1
    pub mode1: Register<ReadWrite>,
    /// Mode bit 0
    pub mode0: Register<ReadWrite>,
    /// Input enable
    pub ien: Register<ReadWrite>,
    /// Output enable
    pub oe: Register<ReadWrite>,
    /// Output level
    pub out: Register<ReadWrite>,
    /// Input level
    pub input: Register<ReadOnly>,
}

impl MgmtGpioRegisters {
    /// CSR block starting at `base`.
    #[must_use]
    pub const fn at(base: u32) -> Self {
        Self {
            mode1: Register::at(base, MODE1_OFFSET),
            mode0: Register::at(base, MODE0_OFFSET),
            ien: Register::at(base, IEN_OFFSET),
            oe: Register::at(base, OE_OFFSET),
            out: Register::at(base, OUT_OFFSET),
            input: Register::at(base, IN_OFFSET),
        }
    }
}
