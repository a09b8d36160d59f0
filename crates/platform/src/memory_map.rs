//! User-area memory map
//!
//! | Peripheral | Base          | Window  |
//! |------------|---------------|---------|
//! | SPI0       | `0x3000_0000` | 64 KB   |
//! | SPI1       | `0x3000_0100` | 64 KB   |
//! | SPI2       | `0x3000_0200` | 64 KB   |
//! | SPI3       | `0x3000_0300` | 64 KB   |
//! | I3C        | `0x3000_1000` | 0x1C    |
//! | GPIO       | `0x3000_2000` | 0x1000  |
//!
//! The management SoC's own GPIO (the single pin the test harness watches)
//! lives in the CSR space at [`MGMT_GPIO_BASE`], outside the user area.
//!
//! The SPI banks are 0x100 apart but their FIFO and interrupt registers sit
//! at offsets `0xFE00..=0xFF10`, so the upper windows of neighbouring
//! instances overlap in the address space. The Wishbone decoder in the user
//! project resolves this; software only ever uses base + documented offset.

/// SPI controller 0 base address.
pub const SPI0_BASE: u32 = 0x3000_0000;

/// SPI controller 1 base address.
pub const SPI1_BASE: u32 = 0x3000_0100;

/// SPI controller 2 base address.
pub const SPI2_BASE: u32 = 0x3000_0200;

/// SPI controller 3 base address.
pub const SPI3_BASE: u32 = 0x3000_0300;

/// I3C controller base address.
pub const I3C_BASE: u32 = 0x3000_1000;

/// Two-pin GPIO block base address.
pub const GPIO_BASE: u32 = 0x3000_2000;

/// Management SoC GPIO CSR bank base address.
pub const MGMT_GPIO_BASE: u32 = 0xF000_3800;

/// One of the four identical SPI controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiInstance {
    /// SPI0 at [`SPI0_BASE`]
    Spi0,
    /// SPI1 at [`SPI1_BASE`]
    Spi1,
    /// SPI2 at [`SPI2_BASE`]
    Spi2,
    /// SPI3 at [`SPI3_BASE`]
    Spi3,
}

impl SpiInstance {
    /// Every SPI controller, in bring-up order.
    pub const ALL: [Self; 4] = [Self::Spi0, Self::Spi1, Self::Spi2, Self::Spi3];

    /// Base address of this controller's register bank.
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Spi0 => SPI0_BASE,
            Self::Spi1 => SPI1_BASE,
            Self::Spi2 => SPI2_BASE,
            Self::Spi3 => SPI3_BASE,
        }
    }

    /// Controller number (0–3).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Spi0 => 0,
            Self::Spi1 => 1,
            Self::Spi2 => 2,
            Self::Spi3 => 3,
        }
    }
}
