//! Error types shared by the drivers and the newtype constructors.

use thiserror::Error;

use crate::registers::I3cStatus;

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("value {value} outside {min}..={max}")]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

/// Failure of a single I3C transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I3cError {
    /// The controller finished with STATUS.ERROR set.
    ///
    /// `addr` is the 7-bit target address as passed by the caller (without
    /// the read marker); `status` is the STATUS word that reported the error.
    #[error("I3C transaction to {addr:#04x} failed (status {status:#06x})")]
    Transaction {
        /// Target address.
        addr: u8,
        /// STATUS at completion.
        status: u32,
    },
}

impl I3cError {
    /// Numeric return code in the bring-up log convention (`-1` on failure).
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Transaction { .. } => -1,
        }
    }

    /// Decoded STATUS word at the time of the failure.
    #[must_use]
    pub const fn status(self) -> I3cStatus {
        match self {
            Self::Transaction { status, .. } => I3cStatus::from_bits(status),
        }
    }
}
