//! Boundary self-check
//!
//! Runs the reference tables through every render and parse path of
//! hex-codec and collects mismatches instead of stopping at the first one.

use std::fmt::Display;

use hex_codec::{
    digit_count_for, from_hex_counted, from_hex_wide_counted, max_digit_count_for, to_hex,
    to_hex_array, to_hex_checked, to_hex_wide, try_to_hex, HexBuffer,
};
use serde::Serialize;
use tracing::{debug, warn};

/// (value, minimal hex text) at every nibble boundary
const RENDER_TABLE: [(u64, &str); 24] = [
    (0x0000_0000_0000_0000, "0"),
    (0x0000_0000_0000_000f, "f"),
    (0x0000_0000_0000_00f0, "f0"),
    (0x0000_0000_0000_0f00, "f00"),
    (0x0000_0000_0000_f000, "f000"),
    (0x0000_0000_0000_ffff, "ffff"),
    (0xf000_0000_0000_0000, "f000000000000000"),
    (0x0f00_0000_0000_0000, "f00000000000000"),
    (0x00f0_0000_0000_0000, "f0000000000000"),
    (0x000f_0000_0000_0000, "f000000000000"),
    (0xffff_0000_0000_0000, "ffff000000000000"),
    (0x0000_f000_0000_0000, "f00000000000"),
    (0x0000_0f00_0000_0000, "f0000000000"),
    (0x0000_00f0_0000_0000, "f000000000"),
    (0x0000_000f_0000_0000, "f00000000"),
    (0x0000_ffff_0000_0000, "ffff00000000"),
    (0x0000_0000_f000_0000, "f0000000"),
    (0x0000_0000_0f00_0000, "f000000"),
    (0x0000_0000_00f0_0000, "f00000"),
    (0x0000_0000_000f_0000, "f0000"),
    (0x0000_0000_ffff_0000, "ffff0000"),
    (0xffff_ffff_ffff_ffff, "ffffffffffffffff"),
    (0xf000_0000_0000_000f, "f00000000000000f"),
    (0x0000_000f_f000_0000, "ff0000000"),
];

/// (input, value, consumed)
const PARSE_TABLE: [(&str, u64, usize); 31] = [
    ("0", 0x0000_0000_0000_0000, 1),
    ("00000f", 0x0000_0000_0000_000f, 6),
    ("00000f0", 0x0000_0000_0000_00f0, 7),
    ("0f00", 0x0000_0000_0000_0f00, 4),
    ("000f000", 0x0000_0000_0000_f000, 7),
    ("00000000ffff", 0x0000_0000_0000_ffff, 12),
    ("f000000000000000", 0xf000_0000_0000_0000, 16),
    ("f00000000000000", 0x0f00_0000_0000_0000, 15),
    ("f0000000000000", 0x00f0_0000_0000_0000, 14),
    ("f000000000000", 0x000f_0000_0000_0000, 13),
    ("ffff000000000000", 0xffff_0000_0000_0000, 16),
    ("000f00000000000", 0x0000_f000_0000_0000, 15),
    ("000f0000000000", 0x0000_0f00_0000_0000, 14),
    ("000f000000000", 0x0000_00f0_0000_0000, 13),
    ("000000f00000000", 0x0000_000f_0000_0000, 15),
    ("0000ffff00000000", 0x0000_ffff_0000_0000, 16),
    ("0f0000000", 0x0000_0000_f000_0000, 9),
    ("00000f000000", 0x0000_0000_0f00_0000, 12),
    ("00000f00000", 0x0000_0000_00f0_0000, 11),
    ("0000000000f0000", 0x0000_0000_000f_0000, 15),
    ("0000ffff0000", 0x0000_0000_ffff_0000, 12),
    ("ffffffffffffffff", 0xffff_ffff_ffff_ffff, 16),
    ("f00000000000000f", 0xf000_0000_0000_000f, 16),
    ("00000ff0000000", 0x0000_000f_f000_0000, 14),
    ("0123456789abcdef", 0x0123_4567_89ab_cdef, 16),
    ("fedcba98765432101", 0xfedc_ba98_7654_3210, 16),
    ("1234567887654321", 0x1234_5678_8765_4321, 16),
    ("abcddcbaabcddcba", 0xabcd_dcba_abcd_dcba, 16),
    ("00000000000000001", 0x0, 16),
    ("gagagagagag", 0x0, 0),
    ("agagagagag", 0xa, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub suite: &'static str,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    pub passed: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckSummary {
    pub fn failed(&self) -> usize {
        self.mismatches.len()
    }

    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }

    fn check_pair<I, E>(&mut self, suite: &'static str, input: I, expected: E, actual: E)
    where
        I: Display,
        E: PartialEq + Display,
    {
        if expected == actual {
            self.passed += 1;
            return;
        }
        warn!(suite, input = %input, expected = %expected, actual = %actual, "Value did not match");
        self.mismatches.push(Mismatch {
            suite,
            input: input.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
}

fn check_digit_count(summary: &mut CheckSummary) {
    for (value, text) in RENDER_TABLE {
        summary.check_pair(
            "digit count",
            format_args!("{:#018x}", value),
            text.len(),
            digit_count_for(value),
        );
    }
}

fn check_render(summary: &mut CheckSummary) {
    let mut array = [0_u8; max_digit_count_for::<u64>() + 1];
    let mut slice = vec![0_u8; max_digit_count_for::<u64>() + 1];
    let mut stack = HexBuffer::new();

    for (value, expected) in RENDER_TABLE {
        let input = format!("{:#018x}", value);

        let n = to_hex_array(value, &mut array);
        let actual = String::from_utf8_lossy(&array[..n]);
        summary.check_pair("static buffer", &input, expected, actual.as_ref());

        let n = try_to_hex(value, slice.as_mut_slice());
        let actual = String::from_utf8_lossy(&slice[..n]);
        summary.check_pair("slice buffer", &input, expected, actual.as_ref());

        let actual = match to_hex_checked(value, slice.as_mut_slice()) {
            Ok(n) => String::from_utf8_lossy(&slice[..n]).into_owned(),
            Err(e) => e.to_string(),
        };
        summary.check_pair("checked buffer", &input, expected, actual.as_str());

        summary.check_pair("stack buffer", &input, expected, stack.format(value));
        summary.check_pair("owned text", &input, expected, to_hex(value).as_str());

        let wide = String::from_utf16_lossy(&to_hex_wide(value));
        summary.check_pair("wide text", &input, expected, wide.as_str());
    }
}

fn check_parse(summary: &mut CheckSummary) {
    for (text, value, consumed) in PARSE_TABLE {
        let (actual, actual_consumed) = from_hex_counted::<u64>(text);
        summary.check_pair(
            "parse value",
            text,
            format!("{:#x}", value),
            format!("{:#x}", actual),
        );
        summary.check_pair("parse consumed", text, consumed, actual_consumed);
    }
}

fn check_parse_wide(summary: &mut CheckSummary) {
    for (text, value, consumed) in PARSE_TABLE {
        let wide: Vec<u16> = text.encode_utf16().collect();
        let (actual, actual_consumed) = from_hex_wide_counted::<u64>(&wide);
        summary.check_pair(
            "wide parse value",
            text,
            format!("{:#x}", value),
            format!("{:#x}", actual),
        );
        summary.check_pair("wide parse consumed", text, consumed, actual_consumed);
    }
}

/// Run every suite
pub fn run() -> CheckSummary {
    let mut summary = CheckSummary::default();
    check_digit_count(&mut summary);
    check_render(&mut summary);
    check_parse(&mut summary);
    check_parse_wide(&mut summary);
    debug!(
        passed = summary.passed,
        failed = summary.failed(),
        "Boundary check complete"
    );
    summary
}
