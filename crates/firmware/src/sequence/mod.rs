//! Bring-up sequencers
//!
//! Linear scripts that exercise every peripheral once and report what they
//! saw. They never assert: on silicon the evidence is the pin activity and
//! the log, in simulation it is the harness watching the bus.
//!
//! - [`smoke`]: SPI0–3, I3C, GPIO, then a blink pattern
//! - [`integration`]: configuration only, framed by the harness signal

pub mod integration;
pub mod smoke;

use platform::{GpioPin, PinState, RegisterBus};

use crate::delay;
use crate::drivers::Gpio;

/// Pulse `pin` high then low `cycles` times, spinning `half_period` after
/// each edge. Returns the number of completed cycles.
pub fn blink<B: RegisterBus>(
    gpio: &mut Gpio<B>,
    pin: GpioPin,
    cycles: u32,
    half_period: u32,
) -> u32 {
    let mut done: u32 = 0;
    for _ in 0..cycles {
        gpio.write_pin(pin, PinState::High);
        delay::spin(half_period);
        gpio.write_pin(pin, PinState::Low);
        delay::spin(half_period);
        done = done.saturating_add(1);
    }
    done
}
