//! Text and JSON printing for command reports

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

use crate::bench::Timing;
use crate::check::CheckSummary;
use crate::commands::{CountReport, DecodeReport, EncodeReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    println!("{}", text);
    Ok(())
}

pub fn print_encode(mode: OutputMode, report: &EncodeReport) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(report),
        OutputMode::Text => {
            let kind = if report.signed { "i" } else { "u" };
            println!(
                "{} {} ({}{}: {}/{} digits)",
                report.hex.bright_green().bold(),
                "<-".dimmed(),
                kind,
                report.width,
                report.digits,
                report.max_digits
            );
            Ok(())
        },
    }
}

pub fn print_decode(mode: OutputMode, report: &DecodeReport) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(report),
        OutputMode::Text => {
            println!(
                "{} {} 0x{}",
                report.value.to_string().bright_green().bold(),
                "<-".dimmed(),
                report.hex
            );
            if !report.is_complete() {
                println!(
                    "   {} stopped after {} of {} characters",
                    "NOTE".yellow(),
                    report.consumed,
                    report.total
                );
            }
            Ok(())
        },
    }
}

pub fn print_count(mode: OutputMode, report: &CountReport) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(report),
        OutputMode::Text => {
            println!(
                "{} digits (max {} for {}-bit)",
                report.digits.to_string().bright_green().bold(),
                report.max_digits,
                report.width
            );
            Ok(())
        },
    }
}

pub fn print_check(mode: OutputMode, summary: &CheckSummary) -> Result<()> {
    if mode == OutputMode::Json {
        return print_json(summary);
    }

    for mismatch in &summary.mismatches {
        eprintln!(
            "{} [{}] {}: expected {}, got {}",
            "FAIL".red(),
            mismatch.suite,
            mismatch.input,
            mismatch.expected.green(),
            mismatch.actual.red()
        );
    }
    println!();
    if summary.is_ok() {
        println!(
            "{} {} boundary checks passed",
            "SUCCESS".green().bold(),
            summary.passed
        );
    } else {
        eprintln!(
            "{} {} passed, {} failed",
            "FAILURE".red().bold(),
            summary.passed,
            summary.failed()
        );
    }
    Ok(())
}

pub fn print_bench(mode: OutputMode, timings: &[Timing]) -> Result<()> {
    if mode == OutputMode::Json {
        return print_json(&timings);
    }

    let Some(iterations) = timings.first().map(|t| t.iterations) else {
        return Ok(());
    };
    println!("{} {} iterations", "Timing".bright_cyan().bold(), iterations);
    for timing in timings {
        println!(
            "  {:<22} {:>12.3?}  {:>8.2} ns/iter",
            timing.label,
            timing.elapsed,
            timing.nanos_per_iter()
        );
    }
    Ok(())
}
