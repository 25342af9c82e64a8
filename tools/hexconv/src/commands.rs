//! encode / decode / count commands
//!
//! Each command returns a serializable report; printing is left to
//! `output` so the same report serves text and JSON modes.

use std::fmt;

use hex_codec::Width;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;

/// Decoded value, signed or unsigned depending on `--signed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    Unsigned(u64),
    Signed(i64),
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Unsigned(v) => write!(f, "{}", v),
            DecodedValue::Signed(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    pub input: String,
    pub width: u32,
    pub signed: bool,
    pub hex: String,
    pub digits: usize,
    pub max_digits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub input: String,
    pub width: u32,
    pub value: DecodedValue,
    /// Canonical minimal form of the decoded bits
    pub hex: String,
    pub consumed: usize,
    pub total: usize,
}

impl DecodeReport {
    /// Whether every input character was a digit that got used
    pub fn is_complete(&self) -> bool {
        self.consumed == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub input: String,
    pub width: u32,
    pub digits: usize,
    pub max_digits: usize,
}

/// Parse a decimal argument into the width's bit pattern
pub fn parse_decimal(value: &str, width: Width, signed: bool) -> Result<u64, CliError> {
    let trimmed = value.trim();
    if signed {
        let parsed: i64 = trimmed
            .parse()
            .map_err(|e| CliError::invalid_decimal(value, e))?;
        width
            .normalize_signed(parsed)
            .ok_or_else(|| CliError::out_of_range(value, width, true))
    } else {
        let parsed: u64 = trimmed
            .parse()
            .map_err(|e| CliError::invalid_decimal(value, e))?;
        width
            .normalize_unsigned(parsed)
            .ok_or_else(|| CliError::out_of_range(value, width, false))
    }
}

pub fn encode(value: &str, width: Width, signed: bool) -> Result<EncodeReport, CliError> {
    let bits = parse_decimal(value, width, signed)?;
    let hex = width.render(bits);
    debug!(input = value, width = %width, bits, hex = %hex, "Encoded value");

    Ok(EncodeReport {
        input: value.to_string(),
        width: width.bits(),
        signed,
        digits: hex.len(),
        hex,
        max_digits: width.max_digits(),
    })
}

pub fn count(value: &str, width: Width, signed: bool) -> Result<CountReport, CliError> {
    let bits = parse_decimal(value, width, signed)?;
    let digits = width.digit_count(bits);
    debug!(input = value, width = %width, digits, "Counted digits");

    Ok(CountReport {
        input: value.to_string(),
        width: width.bits(),
        digits,
        max_digits: width.max_digits(),
    })
}

/// Best-effort decode; with `strict`, unconsumed characters are an error
pub fn decode(
    text: &str,
    width: Width,
    signed: bool,
    strict: bool,
) -> Result<DecodeReport, CliError> {
    let (bits, consumed) = width.parse(text);
    let total = text.chars().count();
    debug!(input = text, width = %width, bits, consumed, total, "Decoded text");

    let report = DecodeReport {
        input: text.to_string(),
        width: width.bits(),
        value: if signed {
            DecodedValue::Signed(width.to_signed(bits))
        } else {
            DecodedValue::Unsigned(bits)
        },
        hex: width.render(bits),
        consumed,
        total,
    };

    if strict && !report.is_complete() {
        return Err(CliError::TrailingInput {
            text: text.to_string(),
            consumed,
            total,
        });
    }
    Ok(report)
}
