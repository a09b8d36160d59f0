#![allow(clippy::panic)]

fn main() {
    // Only run linker script setup for hardware builds
    #[cfg(feature = "hardware")]
    {
        use std::env;
        use std::fs;
        use std::path::PathBuf;

        // Put `memory.x` in our output directory and ensure it's on the linker search path.
        let Some(out_dir) = env::var_os("OUT_DIR") else {
            panic!("OUT_DIR not set by cargo");
        };
        let out = PathBuf::from(out_dir);
        let memory_x = include_bytes!("../../memory.x");

        if let Err(e) = fs::write(out.join("memory.x"), memory_x) {
            panic!("failed to stage memory.x: {e}");
        }

        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rerun-if-changed=../../memory.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
