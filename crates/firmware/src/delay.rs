//! Uncalibrated busy-wait
//!
//! [`spin`] burns `count` no-op iterations. The wall-clock length depends on
//! the core clock and on where the code executes from (flash XIP is much
//! slower than RAM), so it is only good for "visibly slow" pulses on a
//! scope or in simulation.

/// Spin for `count` no-op instructions.
#[inline(never)]
pub fn spin(count: u32) {
    for _ in 0..count {
        nop();
    }
}

#[cfg(all(feature = "hardware", target_arch = "riscv32"))]
#[inline(always)]
fn nop() {
    // SAFETY: `nop` has no operands and touches neither memory nor flags.
    unsafe { core::arch::asm!("nop", options(nomem, nostack, preserves_flags)) };
}

#[cfg(not(all(feature = "hardware", target_arch = "riscv32")))]
#[inline(always)]
fn nop() {
    core::hint::spin_loop();
}
