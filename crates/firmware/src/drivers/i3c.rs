//! I3C controller driver
//!
//! Single-byte write and read transactions, completed by polling STATUS.
//!
//! # Transaction flow
//!
//! ```text
//! IDLE ──start──▶ BUSY ──▶ DONE   → IRQ_CLR ← 1, Ok
//!                      └─▶ ERROR  → Err (IRQ_CLR untouched)
//! ```
//!
//! The target address is written as given; a read ORs in bit 0 as the read
//! marker instead of shifting the address.

use platform::memory_map::I3C_BASE;
use platform::registers::i3c::{
    ADDR_READ, CTRL_ENABLE, CTRL_READ_MODE, CTRL_START, CTRL_WRITE_MODE, DATA_MASK,
    IRQ_TRANSACTION_DONE, STATUS_BUSY, STATUS_ERROR,
};
use platform::{I3cError, I3cRegisters, I3cStatus, RegisterBus};

/// The I3C controller on a register bus.
pub struct I3c<B> {
    bus: B,
    regs: I3cRegisters,
}

impl<B: RegisterBus> I3c<B> {
    /// Bind the driver to the controller. Touches no registers.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            regs: I3cRegisters::at(I3C_BASE),
        }
    }

    /// Give the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    /// Enable the controller and its transaction-complete interrupt.
    pub fn init(&mut self) {
        self.regs.ctrl.write(&mut self.bus, CTRL_ENABLE);
        self.regs.irq_en.write(&mut self.bus, IRQ_TRANSACTION_DONE);
        debug!("I3C init");
    }

    /// Write one byte to the target at `addr`.
    pub fn write(&mut self, addr: u8, data: u8) -> Result<(), I3cError> {
        self.wait_idle();

        self.regs.addr.write(&mut self.bus, u32::from(addr));
        self.regs.data.write(&mut self.bus, u32::from(data));
        self.regs
            .ctrl
            .write(&mut self.bus, CTRL_ENABLE | CTRL_WRITE_MODE | CTRL_START);

        self.wait_idle();
        self.check(addr)?;

        self.regs.irq_clr.write(&mut self.bus, IRQ_TRANSACTION_DONE);
        trace!("I3C write {=u8:#x} -> {=u8:#x}", data, addr);
        Ok(())
    }

    /// Read one byte from the target at `addr`.
    pub fn read(&mut self, addr: u8) -> Result<u8, I3cError> {
        self.wait_idle();

        self.regs
            .addr
            .write(&mut self.bus, u32::from(addr) | ADDR_READ);
        self.regs
            .ctrl
            .write(&mut self.bus, CTRL_ENABLE | CTRL_READ_MODE | CTRL_START);

        self.wait_idle();
        self.check(addr)?;

        let byte = (self.regs.data.read(&mut self.bus) & DATA_MASK) as u8;
        self.regs.irq_clr.write(&mut self.bus, IRQ_TRANSACTION_DONE);
        trace!("I3C read {=u8:#x} <- {=u8:#x}", byte, addr);
        Ok(byte)
    }

    /// Decoded STATUS snapshot.
    pub fn status(&mut self) -> I3cStatus {
        I3cStatus::from_bits(self.regs.status.read(&mut self.bus))
    }

    /// A transaction-complete interrupt is latched.
    pub fn interrupt_pending(&mut self) -> bool {
        self.regs
            .irq_stat
            .any_set(&mut self.bus, IRQ_TRANSACTION_DONE)
    }

    fn wait_idle(&mut self) {
        while self.regs.status.any_set(&mut self.bus, STATUS_BUSY) {
            core::hint::spin_loop();
        }
    }

    fn check(&mut self, addr: u8) -> Result<(), I3cError> {
        let status = self.regs.status.read(&mut self.bus);
        if status & STATUS_ERROR != 0 {
            warn!(
                "I3C transaction to {=u8:#x} failed, status={=u32:#x}",
                addr,
                status
            );
            return Err(I3cError::Transaction { addr, status });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::MockRegisterBus;
    use platform::registers::i3c::{
        ADDR_OFFSET, CTRL_OFFSET, DATA_OFFSET, IRQ_CLR_OFFSET, IRQ_EN_OFFSET, STATUS_DONE,
        STATUS_OFFSET,
    };

    const STATUS: u32 = I3C_BASE + STATUS_OFFSET;
    const DATA: u32 = I3C_BASE + DATA_OFFSET;
    const IRQ_CLR: u32 = I3C_BASE + IRQ_CLR_OFFSET;

    #[test]
    fn init_enables_controller_and_irq() {
        let mut bus = MockRegisterBus::new();
        I3c::new(&mut bus).init();
        assert_eq!(bus.peek(I3C_BASE + CTRL_OFFSET), CTRL_ENABLE);
        assert_eq!(bus.peek(I3C_BASE + IRQ_EN_OFFSET), 1);
    }

    #[test]
    fn read_sets_read_marker_and_masks_data() {
        let mut bus = MockRegisterBus::new();
        bus.preset(DATA, 0xABCD);

        let byte = I3c::new(&mut bus).read(0x50);

        assert_eq!(byte, Ok(0xCD));
        assert_eq!(bus.last_write(I3C_BASE + ADDR_OFFSET), Some(0x51));
        assert_eq!(
            bus.last_write(I3C_BASE + CTRL_OFFSET),
            Some(CTRL_ENABLE | CTRL_READ_MODE | CTRL_START)
        );
        assert_eq!(bus.last_write(IRQ_CLR), Some(1));
    }

    #[test]
    fn read_error_leaves_data_and_irq_clear_alone() {
        let mut bus = MockRegisterBus::new();
        bus.preset(STATUS, STATUS_DONE | STATUS_ERROR);

        let result = I3c::new(&mut bus).read(0x50);

        assert_eq!(
            result,
            Err(I3cError::Transaction {
                addr: 0x50,
                status: STATUS_DONE | STATUS_ERROR
            })
        );
        assert_eq!(bus.reads_of(DATA), 0);
        assert_eq!(bus.last_write(IRQ_CLR), None);
    }

    #[test]
    fn write_waits_for_idle_before_programming() {
        let mut bus = MockRegisterBus::new();
        bus.script_reads(STATUS, &[STATUS_BUSY, STATUS_BUSY, 0])
            .unwrap();

        I3c::new(&mut bus).write(0x50, 0x12).unwrap();

        let addr_write = bus.first_access(I3C_BASE + ADDR_OFFSET).unwrap();
        let third_status_read = bus
            .log()
            .iter()
            .enumerate()
            .filter(|(_, a)| a.addr() == STATUS)
            .nth(2)
            .map(|(i, _)| i)
            .unwrap();
        assert!(third_status_read < addr_write);
    }

    #[test]
    fn interrupt_pending_reads_irq_stat() {
        let mut bus = MockRegisterBus::new();
        bus.preset(I3C_BASE + 0x14, 1);
        assert!(I3c::new(&mut bus).interrupt_pending());
    }
}
