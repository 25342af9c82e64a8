//! Best-effort hex parsing
//!
//! Parsing never fails. The scan stops, without consuming, at the first unit
//! that is not a hex digit, and stops after `T::MAX_DIGITS` digits even when
//! more follow. Callers that need strict input compare the consumed count
//! with the text length.
//!
//! ```rust
//! use hex_codec::from_hex_counted;
//!
//! assert_eq!(from_hex_counted::<u64>("ff zz"), (0xff, 2));
//! assert_eq!(from_hex_counted::<u64>("zz"), (0, 0));
//! // Digits past the width are left unread
//! assert_eq!(from_hex_counted::<u8>("abc"), (0xab, 2));
//! ```

use crate::unit::{nibble_value, HexUnit};
use crate::unsigned::HexInt;

/// Parse hex units into `T`, returning the value and the units consumed
pub fn parse_hex<T: HexInt, C: HexUnit>(text: &[C]) -> (T, usize) {
    let mut bits = 0_u64;
    let mut consumed = 0;

    for unit in text {
        let Some(digit) = unit.to_ascii().and_then(nibble_value) else {
            break;
        };

        bits = (bits << 4) | u64::from(digit);
        consumed += 1;
        if consumed >= T::MAX_DIGITS {
            break;
        }
    }

    (T::from_bits(bits), consumed)
}

/// Parse narrow text, returning the value and the bytes consumed
#[inline]
pub fn from_hex_counted<T: HexInt>(text: &str) -> (T, usize) {
    parse_hex(text.as_bytes())
}

/// Parse narrow text, discarding the consumed count
#[inline]
pub fn from_hex<T: HexInt>(text: &str) -> T {
    from_hex_counted(text).0
}

/// Parse UTF-16 text, returning the value and the units consumed
#[inline]
pub fn from_hex_wide_counted<T: HexInt>(text: &[u16]) -> (T, usize) {
    parse_hex(text)
}

/// Parse UTF-16 text, discarding the consumed count
#[inline]
pub fn from_hex_wide<T: HexInt>(text: &[u16]) -> T {
    from_hex_wide_counted(text).0
}
