//! Mock register bus for testing
//!
//! [`MockRegisterBus`] stands in for [`crate::bus::Mmio`] in unit and
//! integration tests. It behaves like plain memory (a write is visible to
//! the next read of the same address) with two additions:
//!
//! - scripted reads: a queue of values returned by successive loads of one
//!   address before it falls back to the stored word, for status registers
//!   that change under the driver's feet
//! - an access log recording every load and store in order

#![cfg(any(test, feature = "std"))]

use heapless::{Deque, Vec};

use crate::bus::RegisterBus;

/// Distinct addresses the mock can hold.
pub const CELL_CAPACITY: usize = 64;

/// Addresses that can carry a read script at the same time.
pub const SCRIPT_SLOTS: usize = 8;

/// Values queued per scripted address.
pub const SCRIPT_DEPTH: usize = 32;

/// Accesses kept in the log. Later accesses are counted but not stored.
pub const LOG_DEPTH: usize = 1024;

/// One bus access as seen by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Load of `addr` that returned `value`
    Read {
        /// Address
        addr: u32,
        /// Value returned
        value: u32,
    },
    /// Store of `value` to `addr`
    Write {
        /// Address
        addr: u32,
        /// Value stored
        value: u32,
    },
}

impl Access {
    /// Address touched by this access.
    #[must_use]
    pub const fn addr(&self) -> u32 {
        match *self {
            Self::Read { addr, .. } | Self::Write { addr, .. } => addr,
        }
    }

    /// `true` for stores.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Recording, scriptable register bus.
#[derive(Debug, Default)]
pub struct MockRegisterBus {
    cells: Vec<(u32, u32), CELL_CAPACITY>,
    scripts: Vec<(u32, Deque<u32, SCRIPT_DEPTH>), SCRIPT_SLOTS>,
    log: Vec<Access, LOG_DEPTH>,
    dropped: usize,
}

impl MockRegisterBus {
    /// Create an empty bus. Every address reads as 0 until written.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stored word at `addr` without logging an access.
    ///
    /// # Panics
    ///
    /// Panics if more than [`CELL_CAPACITY`] distinct addresses are used.
    pub fn preset(&mut self, addr: u32, value: u32) {
        self.store(addr, value);
    }

    /// Stored word at `addr`, without logging an access.
    #[must_use]
    pub fn peek(&self, addr: u32) -> u32 {
        self.cells
            .iter()
            .find(|(a, _)| *a == addr)
            .map_or(0, |(_, v)| *v)
    }

    /// Queue `values` to be returned, in order, by the next loads of `addr`.
    ///
    /// Once the queue is drained, loads return the stored word again.
    /// Scripted values never change the stored word.
    ///
    /// # Errors
    ///
    /// Returns the first value that did not fit.
    pub fn script_reads(&mut self, addr: u32, values: &[u32]) -> Result<(), u32> {
        let slot = match self.scripts.iter().position(|(a, _)| *a == addr) {
            Some(slot) => slot,
            None => {
                let first = values.first().copied().unwrap_or_default();
                self.scripts.push((addr, Deque::new())).map_err(|_| first)?;
                self.scripts.len().saturating_sub(1)
            }
        };
        let Some((_, queue)) = self.scripts.get_mut(slot) else {
            return Err(values.first().copied().unwrap_or_default());
        };
        for &value in values {
            queue.push_back(value)?;
        }
        Ok(())
    }

    /// Every access so far, oldest first.
    #[must_use]
    pub fn log(&self) -> &[Access] {
        &self.log
    }

    /// Accesses that did not fit in the log.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget the log, keeping stored words and scripts.
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.dropped = 0;
    }

    /// Values stored to `addr`, oldest first.
    pub fn writes_to(&self, addr: u32) -> impl Iterator<Item = u32> + '_ {
        self.log.iter().filter_map(move |access| match *access {
            Access::Write { addr: a, value } if a == addr => Some(value),
            _ => None,
        })
    }

    /// Number of loads of `addr`.
    #[must_use]
    pub fn reads_of(&self, addr: u32) -> usize {
        self.log
            .iter()
            .filter(|access| !access.is_write() && access.addr() == addr)
            .count()
    }

    /// Most recent value stored to `addr`, if any.
    #[must_use]
    pub fn last_write(&self, addr: u32) -> Option<u32> {
        self.writes_to(addr).last()
    }

    /// Position in the log of the first access to `addr`.
    #[must_use]
    pub fn first_access(&self, addr: u32) -> Option<usize> {
        self.log.iter().position(|access| access.addr() == addr)
    }

    /// Scripted values not yet consumed for `addr`.
    #[must_use]
    pub fn pending_script(&self, addr: u32) -> usize {
        self.scripts
            .iter()
            .find(|(a, _)| *a == addr)
            .map_or(0, |(_, q)| q.len())
    }

    #[allow(clippy::panic)]
    fn store(&mut self, addr: u32, value: u32) {
        if let Some(cell) = self.cells.iter_mut().find(|(a, _)| *a == addr) {
            cell.1 = value;
        } else if self.cells.push((addr, value)).is_err() {
            panic!("MockRegisterBus: more than {CELL_CAPACITY} addresses in use");
        }
    }

    fn record(&mut self, access: Access) {
        if self.log.push(access).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}

impl RegisterBus for MockRegisterBus {
    fn read(&mut self, addr: u32) -> u32 {
        let scripted = self
            .scripts
            .iter_mut()
            .find(|(a, _)| *a == addr)
            .and_then(|(_, q)| q.pop_front());
        let value = scripted.unwrap_or_else(|| self.peek(addr));
        self.record(Access::Read { addr, value });
        value
    }

    fn write(&mut self, addr: u32, value: u32) {
        self.store(addr, value);
        self.record(Access::Write { addr, value });
    }
}
