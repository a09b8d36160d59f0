//! Property-based tests for the driver register contracts.
//! Verifies the invariants hold for ALL inputs, not just the bring-up values.
#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use firmware::drivers::{Gpio, Spi};
use platform::memory_map::{SpiInstance, GPIO_BASE};
use platform::mocks::MockRegisterBus;
use platform::registers::{gpio, spi};
use platform::{Direction, PinState};

fn any_instance() -> impl proptest::strategy::Strategy<Value = SpiInstance> {
    proptest::sample::select(SpiInstance::ALL.to_vec())
}

proptest::proptest! {
    /// PR never receives a divider below 2.
    #[test]
    fn spi_init_prescaler_floor(instance in any_instance(), prescaler in proptest::num::u32::ANY) {
        let mut bus = MockRegisterBus::new();
        Spi::new(&mut bus, instance).init_raw(prescaler, 0);
        let pr = bus.peek(instance.base() + spi::PR_OFFSET);
        assert_eq!(pr, prescaler.max(2));
    }

    /// CFG only ever holds CPOL/CPHA.
    #[test]
    fn spi_init_mode_mask(instance in any_instance(), mode in 0u32..=255u32) {
        let mut bus = MockRegisterBus::new();
        Spi::new(&mut bus, instance).init_raw(10, mode);
        assert_eq!(bus.peek(instance.base() + spi::CFG_OFFSET), mode & 0x3);
    }

    /// Transfer returns the low byte of RXDATA and always drops SS.
    #[test]
    fn spi_transfer_masks_rx_and_drops_ss(tx in 0u8..=255u8, rxdata in proptest::num::u32::ANY) {
        let mut bus = MockRegisterBus::new();
        let base = SpiInstance::Spi0.base();
        bus.preset(base + spi::RXDATA_OFFSET, rxdata);

        let rx = Spi::new(&mut bus, SpiInstance::Spi0).transfer(tx);

        assert_eq!(u32::from(rx), rxdata & 0xFF);
        assert_eq!(bus.peek(base + spi::CTRL_OFFSET) & spi::CTRL_SS, 0);
        assert_eq!(bus.last_write(base + spi::TXDATA_OFFSET), Some(u32::from(tx)));
    }

    /// Out-of-range pins leave every GPIO register untouched and read as 0.
    #[test]
    fn gpio_unknown_pin_is_inert(pin in 2u8..=255u8, datai in proptest::num::u32::ANY) {
        let mut bus = MockRegisterBus::new();
        bus.preset(GPIO_BASE + gpio::DATAI_OFFSET, datai);

        let mut gpio = Gpio::new(&mut bus);
        gpio.set_direction(pin, Direction::Output);
        gpio.write(pin, PinState::High);
        let level = gpio.read(pin);
        drop(gpio);

        assert_eq!(level, 0);
        assert!(bus.log().iter().all(|a| !a.is_write()));
        assert_eq!(bus.peek(GPIO_BASE + gpio::DIR_OFFSET), 0);
        assert_eq!(bus.peek(GPIO_BASE + gpio::DATAO_OFFSET), 0);
    }

    /// In-range pins read exactly their DATAI bit.
    #[test]
    fn gpio_read_is_single_bit(pin in 0u8..=1u8, datai in proptest::num::u32::ANY) {
        let mut bus = MockRegisterBus::new();
        bus.preset(GPIO_BASE + gpio::DATAI_OFFSET, datai);
        let level = Gpio::new(&mut bus).read(pin);
        assert_eq!(u32::from(level), (datai >> pin) & 1);
    }

    /// Writing one pin never disturbs the other.
    #[test]
    fn gpio_write_preserves_other_pin(pin in 0u8..=1u8, high in proptest::bool::ANY, initial in 0u32..=3u32) {
        let mut bus = MockRegisterBus::new();
        bus.preset(GPIO_BASE + gpio::DATAO_OFFSET, initial);

        Gpio::new(&mut bus).write(pin, PinState::from(high));

        let other = 1 - pin;
        let datao = bus.peek(GPIO_BASE + gpio::DATAO_OFFSET);
        assert_eq!((datao >> other) & 1, (initial >> other) & 1);
        assert_eq!((datao >> pin) & 1, u32::from(high));
    }
}
