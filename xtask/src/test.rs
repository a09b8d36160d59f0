use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::{self, OnFailure};

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let total_start = Instant::now();

    let run_unit = !integration_only;
    let run_integration = !unit_only;

    // Test 1: unit tests next to the code
    if run_unit {
        if let Some(output) = step::cargo(
            "Unit tests",
            &["test", "--lib", "--workspace"],
            OnFailure::Abort,
        )? {
            report_summary(&output.stdout);
        }
    }

    // Test 2: crates/*/tests (mock-bus scenarios and property tests)
    if run_integration {
        if let Some(output) = step::cargo(
            "Integration tests",
            &["test", "--tests", "-p", "platform", "-p", "firmware"],
            OnFailure::Abort,
        )? {
            report_summary(&output.stdout);
        }
    }

    // Test 3: doc tests; failures are reported but not fatal
    if let Some(output) = step::cargo(
        "Doc tests",
        &["test", "--doc", "-p", "platform", "-p", "firmware"],
        OnFailure::Warn,
    )? {
        report_summary(&output.stdout);
    }

    step::finish("All tests", total_start);
    Ok(())
}

fn report_summary(stdout: &[u8]) {
    let text = String::from_utf8_lossy(stdout);
    let summaries = extract_test_summaries(&text);
    if summaries.is_empty() {
        println!("   {}", "(summary not available)".dimmed());
    }
    for summary in summaries {
        println!("   {}", summary.dimmed());
    }
    println!();
}

/// Pull the text after "test result:" from every test binary's summary line.
fn extract_test_summaries(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split("test result:").nth(1))
        .map(|summary| summary.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_collected_from_every_binary() {
        let output = "running 2 tests\n\
                      test result: ok. 2 passed; 0 failed\n\
                      running 1 test\n\
                      test result: ok. 1 passed; 0 failed\n";
        assert_eq!(
            extract_test_summaries(output),
            ["ok. 2 passed; 0 failed", "ok. 1 passed; 0 failed"]
        );
    }

    #[test]
    fn no_summary_line_gives_empty() {
        assert!(extract_test_summaries("error: could not compile").is_empty());
    }
}
