//! Register bus and typed register descriptors
//!
//! Every peripheral in the user area is a bank of 32-bit words at a fixed
//! physical address. Drivers never dereference raw pointers themselves; they
//! go through a [`RegisterBus`], which is either the real volatile backend
//! ([`Mmio`]) or the recording mock in [`crate::mocks`].
//!
//! ```text
//! Driver (firmware::drivers::spi)
//!         ↓  named fields: regs.status.read(bus)
//! Register<A>  (address + access marker)
//!         ↓
//! RegisterBus  (Mmio on hardware, MockRegisterBus on host)
//! ```

use core::marker::PhantomData;

// ── Bus trait ────────────────────────────────────────────────────────────────

/// Single-word load/store access to the peripheral address space.
///
/// Implementations must perform exactly one device access per call: no
/// caching, no merging, no elision, and no reordering relative to other
/// calls on the same bus.
pub trait RegisterBus {
    /// Load the 32-bit word at `addr`.
    fn read(&mut self, addr: u32) -> u32;

    /// Store `value` to the 32-bit word at `addr`.
    fn write(&mut self, addr: u32, value: u32);

    /// Read-modify-write. Not atomic; nothing else runs concurrently.
    fn modify<F>(&mut self, addr: u32, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(addr);
        self.write(addr, f(value));
    }
}

impl<B: RegisterBus> RegisterBus for &mut B {
    #[inline]
    fn read(&mut self, addr: u32) -> u32 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u32, value: u32) {
        (**self).write(addr, value);
    }
}

// ── Hardware backend ─────────────────────────────────────────────────────────

/// Volatile memory-mapped backend for the physical register space.
///
/// Each handle represents exclusive ownership of one address window: the
/// user-area peripherals, or the management SoC's CSR bank.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Obtain the bus handle.
    ///
    /// # Safety
    ///
    /// Must be called at most once per address window, on a target where
    /// the peripherals are actually mapped at the addresses in
    /// [`crate::memory_map`]. Two live handles driving the same window
    /// would alias its registers and break the single-owner model the
    /// drivers rely on.
    #[must_use]
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterBus for Mmio {
    #[inline]
    fn read(&mut self, addr: u32) -> u32 {
        // SAFETY: `Mmio` only exists on the device (see `steal`), where every
        // address produced by the register blocks is a mapped, 4-byte aligned
        // peripheral word.
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }

    #[inline]
    fn write(&mut self, addr: u32, value: u32) {
        // SAFETY: as for `read`; the register blocks only hand out addresses
        // inside the peripheral window.
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}

// ── Access markers ───────────────────────────────────────────────────────────

/// Register that can only be loaded (status, RX data, level counters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOnly;

/// Register that can only be stored (TX data, flush, interrupt clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOnly;

/// Register that can be loaded, stored and read-modify-written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadWrite;

/// Access markers that permit loads.
pub trait Readable {}

/// Access markers that permit stores.
pub trait Writable {}

impl Readable for ReadOnly {}
impl Readable for ReadWrite {}
impl Writable for WriteOnly {}
impl Writable for ReadWrite {}

// ── Register descriptor ──────────────────────────────────────────────────────

/// One 32-bit register: an absolute address plus its access marker.
///
/// Descriptors are plain data; they do not hold the bus. Every access takes
/// the bus explicitly so the same register block works against [`Mmio`] and
/// against the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register<A> {
    addr: u32,
    _access: PhantomData<A>,
}

impl<A> Register<A> {
    /// Describe the register at `base + offset`.
    #[must_use]
    pub const fn at(base: u32, offset: u32) -> Self {
        Self {
            addr: base.wrapping_add(offset),
            _access: PhantomData,
        }
    }

    /// Absolute address of this register.
    #[must_use]
    pub const fn addr(self) -> u32 {
        self.addr
    }
}

impl<A: Readable> Register<A> {
    /// Load the register.
    #[inline]
    pub fn read<B: RegisterBus>(self, bus: &mut B) -> u32 {
        bus.read(self.addr)
    }

    /// Load the register and test whether any bit of `mask` is set.
    #[inline]
    pub fn any_set<B: RegisterBus>(self, bus: &mut B, mask: u32) -> bool {
        self.read(bus) & mask != 0
    }
}

impl<A: Writable> Register<A> {
    /// Store `value` into the register.
    #[inline]
    pub fn write<B: RegisterBus>(self, bus: &mut B, value: u32) {
        bus.write(self.addr, value);
    }
}

impl Register<ReadWrite> {
    /// Read-modify-write the register.
    #[inline]
    pub fn modify<B, F>(self, bus: &mut B, f: F)
    where
        B: RegisterBus,
        F: FnOnce(u32) -> u32,
    {
        bus.modify(self.addr, f);
    }

    /// Set every bit of `mask`, leaving the others untouched.
    #[inline]
    pub fn set_bits<B: RegisterBus>(self, bus: &mut B, mask: u32) {
        self.modify(bus, |v| v | mask);
    }

    /// Clear every bit of `mask`, leaving the others untouched.
    #[inline]
    pub fn clear_bits<B: RegisterBus>(self, bus: &mut B, mask: u32) {
        self.modify(bus, |v| v & !mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{Access, MockRegisterBus};

    #[test]
    fn register_address_is_base_plus_offset() {
        let reg: Register<ReadWrite> = Register::at(0x3000_0100, 0xFF10);
        assert_eq!(reg.addr(), 0x3001_0010);
    }

    #[test]
    fn set_and_clear_bits_preserve_other_bits() {
        let mut bus = MockRegisterBus::new();
        let reg: Register<ReadWrite> = Register::at(0x1000, 0x0C);
        bus.preset(reg.addr(), 0b0110);

        reg.set_bits(&mut bus, 0b0001);
        assert_eq!(bus.peek(reg.addr()), 0b0111);

        reg.clear_bits(&mut bus, 0b0100);
        assert_eq!(bus.peek(reg.addr()), 0b0011);
    }

    #[test]
    fn modify_is_one_read_then_one_write() {
        let mut bus = MockRegisterBus::new();
        let reg: Register<ReadWrite> = Register::at(0x2000, 0x04);
        bus.preset(reg.addr(), 5);

        reg.modify(&mut bus, |v| v * 2);

        assert_eq!(
            bus.log(),
            &[
                Access::Read {
                    addr: 0x2004,
                    value: 5
                },
                Access::Write {
                    addr: 0x2004,
                    value: 10
                },
            ]
        );
    }

    #[test]
    fn mutable_reference_is_a_bus() {
        fn store<B: RegisterBus>(mut bus: B) {
            bus.write(0x10, 0xAB);
        }

        let mut bus = MockRegisterBus::new();
        store(&mut bus);
        assert_eq!(bus.peek(0x10), 0xAB);
    }
}
