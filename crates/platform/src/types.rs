//! Peripheral configuration newtypes.
//!
//! These keep the register invariants out of the drivers:
//! - `Prescaler`: never below 2, which the SPI RTL cannot divide by
//! - `SpiMode`: only the two CPOL/CPHA bits ever reach CFG
//! - `GpioPin`: only pins 0 and 1 exist

use crate::error::OutOfRangeError;
use crate::registers::spi::{CFG_CPHA, CFG_CPOL, CFG_MODE_MASK};

// ── Prescaler ────────────────────────────────────────────────────────────────

/// SPI bus clock prescaler, clamped to at least [`Prescaler::MIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Prescaler(u32);

impl Prescaler {
    /// Smallest divider the controller handles.
    pub const MIN: u32 = 2;

    /// Create a `Prescaler`, raising values below 2 to 2.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else {
            Self(value)
        }
    }

    /// Create a `Prescaler`, returning an error if `value < 2`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value < 2`.
    pub const fn try_new(value: u32) -> Result<Self, OutOfRangeError> {
        if value < Self::MIN {
            Err(OutOfRangeError {
                value,
                min: Self::MIN,
                max: u32::MAX,
            })
        } else {
            Ok(Self(value))
        }
    }

    /// Value written to the PR register.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Prescaler {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

// ── SpiMode ──────────────────────────────────────────────────────────────────

/// SPI clock mode (CPOL in bit 0, CPHA in bit 1 of CFG).
///
/// Note the bit order differs from the usual "mode = CPOL*2 + CPHA"
/// numbering: here the mode number is the raw CFG value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// CFG = 0
    #[default]
    Mode0,
    /// CFG = 1 (CPOL)
    Mode1,
    /// CFG = 2 (CPHA)
    Mode2,
    /// CFG = 3 (CPOL | CPHA)
    Mode3,
}

impl SpiMode {
    /// Decode a mode number. Only the low two bits are significant.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & CFG_MODE_MASK {
            0 => Self::Mode0,
            1 => Self::Mode1,
            2 => Self::Mode2,
            _ => Self::Mode3,
        }
    }

    /// Value written to CFG.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Mode0 => 0,
            Self::Mode1 => 1,
            Self::Mode2 => 2,
            Self::Mode3 => 3,
        }
    }

    /// Clock idles high.
    #[must_use]
    pub const fn cpol(self) -> bool {
        self.bits() & CFG_CPOL != 0
    }

    /// Data sampled on the second clock edge.
    #[must_use]
    pub const fn cpha(self) -> bool {
        self.bits() & CFG_CPHA != 0
    }
}

impl From<u8> for SpiMode {
    fn from(bits: u8) -> Self {
        Self::from_bits(u32::from(bits))
    }
}

// ── SpiConfig ────────────────────────────────────────────────────────────────

/// Settings applied by `Spi::init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock divider
    pub prescaler: Prescaler,
    /// Clock polarity / phase
    pub mode: SpiMode,
}

impl SpiConfig {
    /// Build from raw values, applying the clamp and the mode mask.
    #[must_use]
    pub const fn from_raw(prescaler: u32, mode: u32) -> Self {
        Self {
            prescaler: Prescaler::new(prescaler),
            mode: SpiMode::from_bits(mode),
        }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::from_raw(10, 0)
    }
}

// ── GPIO ─────────────────────────────────────────────────────────────────────

/// One of the two user GPIO pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioPin {
    /// Pin 0
    Pin0,
    /// Pin 1
    Pin1,
}

impl GpioPin {
    /// Both pins, in index order.
    pub const ALL: [Self; 2] = [Self::Pin0, Self::Pin1];

    /// Pin for `index`, or `None` if the block has no such pin.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Pin0),
            1 => Some(Self::Pin1),
            _ => None,
        }
    }

    /// Bit position in DATAI / DATAO / DIR.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Pin0 => 0,
            Self::Pin1 => 1,
        }
    }

    /// Single-bit mask in DATAI / DATAO / DIR.
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Pin0 => 1 << 0,
            Self::Pin1 => 1 << 1,
        }
    }
}

impl TryFrom<u8> for GpioPin {
    type Error = OutOfRangeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(OutOfRangeError {
            value: u32::from(index),
            min: 0,
            max: 1,
        })
    }
}

/// Pin direction as stored in DIR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// DIR bit clear
    #[default]
    Input = 0,
    /// DIR bit set
    Output = 1,
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        if value == 0 {
            Self::Input
        } else {
            Self::Output
        }
    }
}

/// Logic level on a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// 0
    #[default]
    Low,
    /// 1
    High,
}

impl PinState {
    /// `true` for [`PinState::High`].
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// Opposite level.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl From<bool> for PinState {
    fn from(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<u8> for PinState {
    fn from(value: u8) -> Self {
        Self::from(value != 0)
    }
}

impl From<PinState> for u8 {
    fn from(state: PinState) -> Self {
        match state {
            PinState::Low => 0,
            PinState::High => 1,
        }
    }
}
