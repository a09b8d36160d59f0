//! Dependency audit tests.
//!
//! The hardware image must not carry test doubles. These tests check the
//! manifest and sources keep mocks behind `cfg(test)` / the `std` feature.
//!
//! Run with: cargo test -p firmware --test dependency_audit

// Audit test file: expect/unwrap/panic are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

const MANIFEST: &str = include_str!("../Cargo.toml");
const HARNESS_RS: &str = include_str!("../src/harness.rs");
const LIB_RS: &str = include_str!("../src/lib.rs");

const MOCK_GATE: &str = "#[cfg(any(test, feature = \"std\"))]";

/// Line of `MANIFEST` declaring `name` in the `[dependencies]` table.
fn dependency_line(name: &str) -> &'static str {
    let deps = MANIFEST
        .split("[dependencies]")
        .nth(1)
        .and_then(|rest| rest.split("\n[").next())
        .expect("manifest has a [dependencies] table");
    deps.lines()
        .find(|line| line.starts_with(&format!("{name} ")))
        .unwrap_or_else(|| panic!("{name} missing from [dependencies]"))
}

#[test]
fn heapless_is_optional_in_the_image() {
    assert!(
        dependency_line("heapless").contains("optional = true"),
        "heapless is only used by MockHarness and must stay out of hardware builds"
    );
    assert!(
        MANIFEST.contains("std = [\"platform/std\", \"dep:heapless\"]"),
        "the std feature must pull heapless in for the mocks"
    );
}

#[test]
fn mock_harness_is_gated_like_platform_mocks() {
    let module = HARNESS_RS
        .find("mod mock {")
        .expect("MockHarness lives in its own module");
    assert!(
        HARNESS_RS[..module].trim_end().ends_with(MOCK_GATE),
        "mod mock must be behind {MOCK_GATE}"
    );
}

#[test]
fn mock_reexports_are_gated() {
    for source in [HARNESS_RS, LIB_RS] {
        let reexport = source
            .lines()
            .position(|line| line.starts_with("pub use") && line.contains("MockHarness"))
            .expect("MockHarness is re-exported");
        let previous = source.lines().nth(reexport - 1).unwrap();
        assert_eq!(previous, MOCK_GATE);
    }
}
