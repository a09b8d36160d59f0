use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::{self, OnFailure};

/// Crates whose API docs are built; register maps live in `platform`.
const DOC_CRATES: &[&str] = &["-p", "platform", "-p", "firmware"];

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let start = Instant::now();

    let mut args = vec!["doc", "--no-deps", "--document-private-items"];
    args.extend_from_slice(DOC_CRATES);
    if open {
        args.push("--open");
    }
    step::cargo("rustdoc", &args, OnFailure::Abort)?;

    if !open {
        println!(
            "   {}",
            "Register maps: target/doc/platform/registers/index.html".dimmed()
        );
        println!("   {}", "Or run 'cargo xtask doc --open'".dimmed());
        println!();
    }

    step::finish("Documentation", start);
    Ok(())
}
