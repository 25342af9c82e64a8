//! Input errors for hexconv commands

use hex_codec::Width;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid decimal value '{value}': {reason}")]
    InvalidDecimal { value: String, reason: String },

    #[error("Value {value} does not fit in a {width}-bit {kind} integer")]
    OutOfRange {
        value: String,
        width: Width,
        kind: &'static str,
    },

    #[error("Trailing input after {consumed} of {total} characters in '{text}'")]
    TrailingInput {
        text: String,
        consumed: usize,
        total: usize,
    },

    #[error("{0} boundary check(s) failed")]
    CheckFailed(usize),
}

impl CliError {
    pub fn invalid_decimal(value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidDecimal {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub fn out_of_range(value: impl Into<String>, width: Width, signed: bool) -> Self {
        Self::OutOfRange {
            value: value.into(),
            width,
            kind: if signed { "signed" } else { "unsigned" },
        }
    }
}
