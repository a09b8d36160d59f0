//! Harness signal
//!
//! The simulation harness cannot see the user-area peripherals' internal
//! state; it watches one management SoC GPIO pad instead. The integration
//! routine drives that pad low while it sets up and high once the
//! peripherals are configured.
//!
//! [`MockHarness`] records the calls instead; like `platform::mocks` it only
//! exists under `cfg(test)` or the `std` feature.

use platform::memory_map::MGMT_GPIO_BASE;
use platform::{MgmtGpioRegisters, PinState, RegisterBus};

/// A single output line the test harness observes.
pub trait HarnessSignal {
    /// Make the line a driven output.
    fn enable_output(&mut self);

    /// Drive the line to `state`.
    fn set(&mut self, state: PinState);
}

impl<H: HarnessSignal> HarnessSignal for &mut H {
    fn enable_output(&mut self) {
        (**self).enable_output();
    }

    fn set(&mut self, state: PinState) {
        (**self).set(state);
    }
}

// ── Management GPIO ──────────────────────────────────────────────────────────

/// Harness signal on the management SoC's GPIO pad.
pub struct ManagementGpio<B> {
    bus: B,
    regs: MgmtGpioRegisters,
}

impl<B: RegisterBus> ManagementGpio<B> {
    /// Bind to the management GPIO CSRs. Touches no registers.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            regs: MgmtGpioRegisters::at(MGMT_GPIO_BASE),
        }
    }

    /// Give the bus back.
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: RegisterBus> HarnessSignal for ManagementGpio<B> {
    fn enable_output(&mut self) {
        // Mode 0b10: push-pull output, input buffer off.
        self.regs.mode1.write(&mut self.bus, 1);
        self.regs.mode0.write(&mut self.bus, 0);
        self.regs.ien.write(&mut self.bus, 0);
        self.regs.oe.write(&mut self.bus, 1);
    }

    fn set(&mut self, state: PinState) {
        self.regs.out.write(&mut self.bus, u32::from(u8::from(state)));
    }
}

// ── Recording mock ───────────────────────────────────────────────────────────

#[cfg(any(test, feature = "std"))]
pub use mock::{HarnessEvent, MockHarness, MOCK_HARNESS_DEPTH};

#[cfg(any(test, feature = "std"))]
mod mock {
    use heapless::Vec;
    use platform::PinState;

    use super::HarnessSignal;

    /// Maximum events kept by [`MockHarness`].
    pub const MOCK_HARNESS_DEPTH: usize = 32;

    /// Something the firmware did to the harness line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum HarnessEvent {
        /// `enable_output` was called
        OutputEnabled,
        /// `set` was called
        Set(PinState),
    }

    /// Harness signal that records calls instead of touching hardware.
    #[derive(Debug, Default)]
    pub struct MockHarness {
        events: Vec<HarnessEvent, MOCK_HARNESS_DEPTH>,
    }

    impl MockHarness {
        /// Create a mock with no recorded events.
        pub fn new() -> Self {
            Self::default()
        }

        /// Recorded events, oldest first.
        pub fn events(&self) -> &[HarnessEvent] {
            &self.events
        }

        /// Last level driven, if any.
        pub fn level(&self) -> Option<PinState> {
            self.events.iter().rev().find_map(|event| match *event {
                HarnessEvent::Set(state) => Some(state),
                HarnessEvent::OutputEnabled => None,
            })
        }

        fn push(&mut self, event: HarnessEvent) {
            // Drops events once full.
            let _ = self.events.push(event);
        }
    }

    impl HarnessSignal for MockHarness {
        fn enable_output(&mut self) {
            self.push(HarnessEvent::OutputEnabled);
        }

        fn set(&mut self, state: PinState) {
            self.push(HarnessEvent::Set(state));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::MockRegisterBus;
    use platform::registers::mgmt_gpio::{OE_OFFSET, OUT_OFFSET};

    #[test]
    fn management_gpio_enables_then_drives() {
        let mut bus = MockRegisterBus::new();
        let mut signal = ManagementGpio::new(&mut bus);
        signal.enable_output();
        signal.set(PinState::High);
        let _ = signal.release();

        assert_eq!(bus.peek(MGMT_GPIO_BASE + OE_OFFSET), 1);
        assert_eq!(bus.peek(MGMT_GPIO_BASE + OUT_OFFSET), 1);
    }

    #[test]
    fn mock_reports_last_level() {
        let mut mock = MockHarness::new();
        assert_eq!(mock.level(), None);
        mock.enable_output();
        mock.set(PinState::Low);
        mock.set(PinState::High);
        assert_eq!(mock.level(), Some(PinState::High));
        assert_eq!(mock.events().len(), 3);
    }
}
