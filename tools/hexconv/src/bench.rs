//! Stopwatch comparison of hex rendering strategies
//!
//! A quick wall-clock harness for eyeballing renderers on the current
//! machine. The criterion suite in hex-codec is the one to trust for
//! numbers; this exists so the comparison can run from a release binary.

use std::fmt::Write;
use std::hint::black_box;
use std::time::{Duration, Instant};

use hex_codec::{to_hex, to_hex_wide, HexBuffer};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_SEED: u64 = 0x57fc_b3c9_ff43_abcd;
pub const DEFAULT_ITERATIONS: u64 = 200_000;

#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub label: &'static str,
    pub iterations: u64,
    #[serde(rename = "elapsed_ns")]
    #[serde(serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
}

impl Timing {
    pub fn nanos_per_iter(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

fn serialize_nanos<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

/// Time `iterations` calls of `f`, feeding it `seed`, `seed + 1`, ...
fn time_me<F>(label: &'static str, iterations: u64, seed: u64, mut f: F) -> Timing
where
    F: FnMut(u64),
{
    let start = Instant::now();
    let mut value = seed;
    for _ in 0..iterations {
        f(black_box(value));
        value = value.wrapping_add(1);
    }
    let elapsed = start.elapsed();
    let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    debug!(label, iterations, elapsed_us, "Timed case");

    Timing {
        label,
        iterations,
        elapsed,
    }
}

/// Run every case in a fixed order
pub fn run(iterations: u64, seed: u64) -> Vec<Timing> {
    let mut timings = Vec::with_capacity(6);

    timings.push(time_me("format!", iterations, seed, |v| {
        black_box(format!("{:x}", v));
    }));

    let mut reused = String::with_capacity(16);
    timings.push(time_me("write! reused String", iterations, seed, |v| {
        reused.clear();
        black_box(write!(reused, "{:x}", v).ok());
        black_box(&reused);
    }));

    timings.push(time_me("to_hex", iterations, seed, |v| {
        black_box(to_hex(v));
    }));

    let mut buffer = HexBuffer::new();
    timings.push(time_me("HexBuffer", iterations, seed, |v| {
        black_box(buffer.format(v));
    }));

    timings.push(time_me("format! -> utf16", iterations, seed, |v| {
        let wide: Vec<u16> = format!("{:x}", v).encode_utf16().collect();
        black_box(wide);
    }));

    timings.push(time_me("to_hex_wide", iterations, seed, |v| {
        black_box(to_hex_wide(v));
    }));

    timings
}
