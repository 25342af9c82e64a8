//! hexconv - minimal hex encoder/decoder
//!
//! Thin command-line front end over hex-codec: encode decimal integers to
//! their shortest lowercase hex form, decode hex text best-effort, count
//! digits, run the boundary self-check, and time the renderers.

mod bench;
mod check;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hex_codec::Width;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::output::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "hexconv")]
#[command(about = "Minimal hex encoder/decoder for fixed-width integers")]
#[command(long_about = "Minimal hex encoder/decoder for fixed-width integers

Commands:
  encode      Decimal integer to shortest lowercase hex
  decode      Hex text to integer (stops at the first non-hex character)
  count       Number of hex digits needed for a value
  check       Run the boundary self-check tables
  bench       Stopwatch comparison of hex renderers

Examples:
  hexconv encode 48879                  # beef
  hexconv encode -w 8 --signed -- -1    # ff
  hexconv decode fedcba9876543210       # 18364758544493064720
  hexconv decode -w 16 --strict 12zz    # error: trailing input
  hexconv --json check")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a decimal integer as minimal hex
    Encode {
        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Integer width: 8, 16, 32 or 64 (u/i prefix accepted)
        #[arg(short, long, default_value = "64")]
        width: Width,

        /// Treat the value as a signed integer
        #[arg(short, long)]
        signed: bool,
    },

    /// Decode hex text, consuming at most the width's digit count
    Decode {
        /// Hex text, either case
        text: String,

        /// Integer width: 8, 16, 32 or 64 (u/i prefix accepted)
        #[arg(short, long, default_value = "64")]
        width: Width,

        /// Report the value as a signed integer
        #[arg(short, long)]
        signed: bool,

        /// Fail unless every character was consumed
        #[arg(long)]
        strict: bool,
    },

    /// Count the hex digits a value needs
    Count {
        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Integer width: 8, 16, 32 or 64 (u/i prefix accepted)
        #[arg(short, long, default_value = "64")]
        width: Width,

        /// Treat the value as a signed integer
        #[arg(short, long)]
        signed: bool,
    },

    /// Run the boundary self-check
    Check,

    /// Time the renderers against std formatting
    Bench {
        /// Iterations per case
        #[arg(short = 'n', long, env = "HEXCONV_BENCH_ITERATIONS", default_value_t = bench::DEFAULT_ITERATIONS)]
        iterations: u64,

        /// First input value, in hex
        #[arg(long, default_value = "57fcb3c9ff43abcd", value_parser = parse_seed)]
        seed: u64,
    },
}

/// Seeds are written in hex; an optional 0x prefix is allowed
fn parse_seed(text: &str) -> Result<u64, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let (value, consumed) = hex_codec::from_hex_counted::<u64>(digits);
    if digits.is_empty() || consumed != digits.len() {
        return Err(format!("'{}' is not a 64-bit hex value", text));
    }
    Ok(value)
}

/// `RUST_LOG` wins over `--verbose` when set
fn log_filter(verbose: bool) -> EnvFilter {
    let log_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mode = OutputMode::from_flag(cli.json);

    match cli.command {
        Commands::Encode {
            value,
            width,
            signed,
        } => {
            let report = commands::encode(&value, width, signed)?;
            output::print_encode(mode, &report)?;
        },
        Commands::Decode {
            text,
            width,
            signed,
            strict,
        } => {
            let report = commands::decode(&text, width, signed, strict)?;
            output::print_decode(mode, &report)?;
        },
        Commands::Count {
            value,
            width,
            signed,
        } => {
            let report = commands::count(&value, width, signed)?;
            output::print_count(mode, &report)?;
        },
        Commands::Check => {
            let summary = check::run();
            output::print_check(mode, &summary)?;
            if !summary.is_ok() {
                return Err(CliError::CheckFailed(summary.failed()).into());
            }
        },
        Commands::Bench { iterations, seed } => {
            tracing::info!(iterations, seed = %format_args!("{:#x}", seed), "Starting timing run");
            let timings = bench::run(iterations, seed);
            output::print_bench(mode, &timings)?;
        },
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_logging(cli.verbose);

    run(cli)
}
