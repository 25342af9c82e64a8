//! Render and parse benchmarks
//!
//! Compares the mask-search renderer against std formatting for the same
//! incrementing 64-bit values the `hexconv bench` command uses.

use std::fmt::Write;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hex_codec::{from_hex_counted, to_hex, to_hex_wide, HexBuffer};

const SEED: u64 = 0x57fc_b3c9_ff43_abcd;
const BATCH: usize = 1024;

fn inputs() -> Vec<u64> {
    (0..BATCH as u64).map(|i| SEED.wrapping_add(i)).collect()
}

fn bench_render(c: &mut Criterion) {
    let values = inputs();
    let mut group = c.benchmark_group("render_u64");

    group.bench_function("format_macro", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(format!("{:x}", black_box(v)));
            }
        })
    });

    group.bench_function("write_reused_string", |b| {
        let mut text = String::with_capacity(16);
        b.iter(|| {
            for &v in &values {
                text.clear();
                black_box(write!(text, "{:x}", black_box(v)).ok());
                black_box(&text);
            }
        })
    });

    group.bench_function("to_hex", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(to_hex(black_box(v)));
            }
        })
    });

    group.bench_function("hex_buffer", |b| {
        let mut buffer = HexBuffer::new();
        b.iter(|| {
            for &v in &values {
                black_box(buffer.format(black_box(v)));
            }
        })
    });

    group.finish();
}

fn bench_render_wide(c: &mut Criterion) {
    let values = inputs();
    let mut group = c.benchmark_group("render_u64_wide");

    group.bench_function("format_then_utf16", |b| {
        b.iter(|| {
            for &v in &values {
                let wide: Vec<u16> = format!("{:x}", black_box(v)).encode_utf16().collect();
                black_box(wide);
            }
        })
    });

    group.bench_function("to_hex_wide", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(to_hex_wide(black_box(v)));
            }
        })
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let texts: Vec<String> = inputs().into_iter().map(to_hex).collect();
    let mut group = c.benchmark_group("parse_u64");

    group.bench_function("from_str_radix", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(u64::from_str_radix(black_box(text), 16).ok());
            }
        })
    });

    group.bench_function("from_hex_counted", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(from_hex_counted::<u64>(black_box(text)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_render_wide, bench_parse);
criterion_main!(benches);
