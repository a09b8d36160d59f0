//! Driver integration tests — drive each peripheral against the mock bus.
// Integration test file: expect/unwrap/panic are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]
//!
//! Each test scripts the STATUS registers the way the RTL sequences them and
//! then checks the resulting register traffic.
//!
//! Run with: cargo test -p firmware --test integration_drivers

use firmware::drivers::{Gpio, I3c, Spi};
use platform::memory_map::{GPIO_BASE, I3C_BASE, SPI1_BASE};
use platform::mocks::{Access, MockRegisterBus};
use platform::registers::{gpio, i3c, spi};
use platform::{Direction, I3cError, PinState, SpiConfig, SpiInstance, SpiMode};

// ── GPIO ─────────────────────────────────────────────────────────────────────

#[test]
fn gpio_init_direction_write_end_to_end() {
    let mut bus = MockRegisterBus::new();
    bus.preset(GPIO_BASE + gpio::DIR_OFFSET, 0b10);
    bus.preset(GPIO_BASE + gpio::DATAO_OFFSET, 0b10);

    let mut gpio = Gpio::new(&mut bus);
    gpio.init();
    gpio.set_direction(0, Direction::Output);
    gpio.write(0, PinState::High);
    drop(gpio);

    // init cleared pin 1's direction but left the output latch alone
    assert_eq!(bus.peek(GPIO_BASE + gpio::DIR_OFFSET), 0b01);
    assert_eq!(bus.peek(GPIO_BASE + gpio::DATAO_OFFSET), 0b11);
}

#[test]
fn gpio_direction_readback_matches_for_both_pins() {
    for pin in 0..2u8 {
        for dir in [Direction::Output, Direction::Input] {
            let mut bus = MockRegisterBus::new();
            Gpio::new(&mut bus).set_direction(pin, dir);
            let bit = (bus.peek(GPIO_BASE + gpio::DIR_OFFSET) >> pin) & 1;
            assert_eq!(bit, dir as u32, "pin {pin} {dir:?}");
        }
    }
}

#[test]
fn gpio_interrupt_mask_accumulates() {
    let mut bus = MockRegisterBus::new();
    let mut gpio = Gpio::new(&mut bus);
    gpio.enable_interrupt(1, gpio::IRQ_P1PE);
    gpio.enable_interrupt(1, gpio::IRQ_P1NE);
    gpio.disable_interrupt(gpio::IRQ_P1PE);
    gpio.clear_interrupt(gpio::IRQ_P1NE);
    drop(gpio);

    assert_eq!(bus.peek(GPIO_BASE + gpio::IM_OFFSET), gpio::IRQ_P1NE);
    assert_eq!(
        bus.last_write(GPIO_BASE + gpio::IC_OFFSET),
        Some(gpio::IRQ_P1NE)
    );
}

// ── I3C ──────────────────────────────────────────────────────────────────────

#[test]
fn i3c_write_busy_then_done() {
    let mut bus = MockRegisterBus::new();
    let status = I3C_BASE + i3c::STATUS_OFFSET;
    // idle before start, then BUSY for two polls, then DONE
    bus.script_reads(status, &[0, i3c::STATUS_BUSY, i3c::STATUS_BUSY])
        .unwrap();
    bus.preset(status, i3c::STATUS_DONE | i3c::STATUS_ACK_RECEIVED);

    let result = I3c::new(&mut bus).write(0x50, 0x12);

    assert_eq!(result, Ok(()));
    assert_eq!(bus.peek(I3C_BASE + i3c::ADDR_OFFSET), 0x50);
    assert_eq!(bus.peek(I3C_BASE + i3c::DATA_OFFSET), 0x12);
    assert_eq!(
        bus.peek(I3C_BASE + i3c::CTRL_OFFSET),
        i3c::CTRL_ENABLE | i3c::CTRL_WRITE_MODE | i3c::CTRL_START
    );
    assert_eq!(bus.last_write(I3C_BASE + i3c::IRQ_CLR_OFFSET), Some(1));
}

#[test]
fn i3c_write_error_returns_before_irq_clear() {
    let mut bus = MockRegisterBus::new();
    bus.preset(I3C_BASE + i3c::STATUS_OFFSET, i3c::STATUS_ERROR);

    let err = I3c::new(&mut bus).write(0x50, 0x12).unwrap_err();

    assert_eq!(err.code(), -1);
    assert!(matches!(err, I3cError::Transaction { addr: 0x50, .. }));
    assert_eq!(bus.last_write(I3C_BASE + i3c::IRQ_CLR_OFFSET), None);
    // DATA was programmed before the transaction and never touched afterwards
    assert_eq!(bus.writes_to(I3C_BASE + i3c::DATA_OFFSET).count(), 1);
    assert_eq!(bus.reads_of(I3C_BASE + i3c::DATA_OFFSET), 0);
}

#[test]
fn i3c_irq_clear_is_last_write_of_successful_read() {
    let mut bus = MockRegisterBus::new();
    bus.preset(I3C_BASE + i3c::DATA_OFFSET, 0x5A);

    assert_eq!(I3c::new(&mut bus).read(0x50), Ok(0x5A));

    let last_write = bus.log().iter().rev().find(|a| a.is_write()).copied();
    assert_eq!(
        last_write,
        Some(Access::Write {
            addr: I3C_BASE + i3c::IRQ_CLR_OFFSET,
            value: 1
        })
    );
}

// ── SPI ──────────────────────────────────────────────────────────────────────

#[test]
fn spi_ss_deasserted_after_transfer_on_both_rx_paths() {
    for rx_empty in [false, true] {
        let mut bus = MockRegisterBus::new();
        let status = SPI1_BASE + spi::STATUS_OFFSET;
        bus.script_reads(status, &[0, spi::STATUS_BUSY]).unwrap();
        if rx_empty {
            bus.preset(status, spi::STATUS_RX_E);
        }
        bus.preset(SPI1_BASE + spi::RXDATA_OFFSET, 0x99);

        let mut spi = Spi::new(&mut bus, SpiInstance::Spi1);
        spi.init(SpiConfig::default());
        let rx = spi.transfer(0xA5);
        drop(spi);

        assert_eq!(rx, if rx_empty { 0 } else { 0x99 });
        assert_eq!(
            bus.peek(SPI1_BASE + spi::CTRL_OFFSET),
            spi::CTRL_ENABLE | spi::CTRL_RX_EN,
            "SS left asserted (rx_empty={rx_empty})"
        );
    }
}

#[test]
fn spi_read_sends_fill_byte() {
    let mut bus = MockRegisterBus::new();
    let _ = Spi::new(&mut bus, SpiInstance::Spi1).read();
    assert_eq!(bus.last_write(SPI1_BASE + spi::TXDATA_OFFSET), Some(0x00));
}

#[test]
fn spi_mode_three_sets_both_cfg_bits() {
    let mut bus = MockRegisterBus::new();
    let config = SpiConfig {
        mode: SpiMode::Mode3,
        ..SpiConfig::default()
    };
    Spi::new(&mut bus, SpiInstance::Spi1).init(config);
    assert_eq!(
        bus.peek(SPI1_BASE + spi::CFG_OFFSET),
        spi::CFG_CPOL | spi::CFG_CPHA
    );
}

#[test]
fn spi_fifo_flush_and_levels() {
    let mut bus = MockRegisterBus::new();
    bus.preset(SPI1_BASE + spi::RX_FIFO_LEVEL_OFFSET, 3);

    let mut spi = Spi::new(&mut bus, SpiInstance::Spi1);
    assert_eq!(spi.rx_fifo_level(), 3);
    assert_eq!(spi.tx_fifo_level(), 0);
    spi.set_rx_fifo_threshold(2);
    spi.flush_rx_fifo();
    spi.flush_tx_fifo();
    drop(spi);

    assert_eq!(bus.peek(SPI1_BASE + spi::RX_FIFO_THRESHOLD_OFFSET), 2);
    assert_eq!(bus.last_write(SPI1_BASE + spi::RX_FIFO_FLUSH_OFFSET), Some(1));
    assert_eq!(bus.last_write(SPI1_BASE + spi::TX_FIFO_FLUSH_OFFSET), Some(1));
}

#[test]
fn spi_try_read_rx_does_not_start_transaction() {
    let mut bus = MockRegisterBus::new();
    bus.preset(SPI1_BASE + spi::STATUS_OFFSET, spi::STATUS_RX_E);

    assert_eq!(Spi::new(&mut bus, SpiInstance::Spi1).try_read_rx(), None);
    assert_eq!(bus.writes_to(SPI1_BASE + spi::TXDATA_OFFSET).count(), 0);
    assert_eq!(bus.writes_to(SPI1_BASE + spi::CTRL_OFFSET).count(), 0);
}
