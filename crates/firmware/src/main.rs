//! User-area bring-up firmware - Main Entry Point
//!
//! Hardware-only entry point for the Caravel management core (VexRiscv).
//! Runs the smoke routine, or the integration routine with the
//! `integration-test` feature, then parks the core.

#![no_std]
#![no_main]

use platform::config::{APP_NAME, APP_VERSION};
use platform::Mmio;
use riscv_rt::entry;

// Global logger
use defmt_rtt as _;
// Panic handler
use panic_halt as _;

#[entry]
fn main() -> ! {
    defmt::info!("{=str} v{=str}", APP_NAME, APP_VERSION);

    // SAFETY: first and only handle on the user-area window; `main` runs
    // once and nothing else in the image touches these addresses.
    let mut bus = unsafe { Mmio::steal() };

    #[cfg(not(feature = "integration-test"))]
    {
        use platform::config::SmokeConfig;

        let report = firmware::sequence::smoke::run(&mut bus, &SmokeConfig::default());
        defmt::info!("{}", report);
    }

    #[cfg(feature = "integration-test")]
    {
        use firmware::ManagementGpio;
        use platform::config::IntegrationConfig;

        // SAFETY: the management GPIO CSRs are a separate window from the
        // user area, and this is the only handle on them.
        let mut harness = ManagementGpio::new(unsafe { Mmio::steal() });
        let report = firmware::sequence::integration::run(
            &mut bus,
            &mut harness,
            &IntegrationConfig::default(),
        );
        defmt::info!("{}", report);
    }

    loop {
        core::hint::spin_loop();
    }
}
