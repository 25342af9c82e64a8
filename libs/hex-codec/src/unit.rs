//! Character flavors for hex text
//!
//! Render and parse are written once, generic over the code unit:
//! - `u8`: narrow text (`&str` bytes, C-style byte buffers)
//! - `u16`: wide text (UTF-16 code units)
//! - `char`: Unicode scalar buffers

/// Lowercase digit table
pub const HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";

/// A text code unit hex digits can be written to and read from
pub trait HexUnit: Copy + Eq {
    /// Terminator written after the digits in buffer render variants
    const NUL: Self;

    /// Unit for an ASCII byte
    fn from_ascii(byte: u8) -> Self;

    /// ASCII byte for this unit, `None` for anything outside ASCII
    fn to_ascii(self) -> Option<u8>;
}

impl HexUnit for u8 {
    const NUL: Self = 0;

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }
}

impl HexUnit for u16 {
    const NUL: Self = 0;

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }
}

impl HexUnit for char {
    const NUL: Self = '\0';

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        char::from(byte)
    }

    #[inline]
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self as u8)
    }
}

/// Hex character for the low nibble of `nibble`
#[inline]
pub(crate) fn nibble_to_unit<C: HexUnit>(nibble: u64) -> C {
    C::from_ascii(HEX_DIGITS[(nibble & 0xf) as usize])
}

/// Value of a hex digit, case-insensitive
///
/// Letters are ranked `a`=10 through `z`=35; only ranks below 16 are digits,
/// so `g`..`z` are rejected along with every non-alphanumeric byte.
#[inline]
pub(crate) const fn nibble_value(byte: u8) -> Option<u8> {
    let rank = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return None,
    };
    if rank < 16 {
        Some(rank)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_value_digits_and_letters() {
        assert_eq!(nibble_value(b'0'), Some(0));
        assert_eq!(nibble_value(b'9'), Some(9));
        assert_eq!(nibble_value(b'a'), Some(10));
        assert_eq!(nibble_value(b'F'), Some(15));
        assert_eq!(nibble_value(b'f'), Some(15));
    }

    #[test]
    fn test_nibble_value_rejects_non_hex() {
        for byte in [b'g', b'G', b'z', b'Z', b' ', b'x', b'-', b'/', b':', b'@', 0, 0x80] {
            assert_eq!(nibble_value(byte), None, "byte {:#04x}", byte);
        }
    }

    #[test]
    fn test_units_round_trip_ascii() {
        for &digit in &HEX_DIGITS {
            assert_eq!(<u8 as HexUnit>::from_ascii(digit).to_ascii(), Some(digit));
            assert_eq!(<u16 as HexUnit>::from_ascii(digit).to_ascii(), Some(digit));
            assert_eq!(<char as HexUnit>::from_ascii(digit).to_ascii(), Some(digit));
        }
    }

    #[test]
    fn test_wide_units_outside_ascii() {
        // U+0166 has low byte 0x66 ('f'); it must not read as a digit
        assert_eq!(0x0166_u16.to_ascii(), None);
        assert_eq!(0x00e9_u16.to_ascii(), None);
        assert_eq!(HexUnit::to_ascii('é'), None);
        assert_eq!(0xc3_u8.to_ascii(), None);
    }

    #[test]
    fn test_nibble_to_unit() {
        assert_eq!(nibble_to_unit::<u8>(0xa), b'a');
        assert_eq!(nibble_to_unit::<u16>(0x3), u16::from(b'3'));
        assert_eq!(nibble_to_unit::<char>(0x1f), 'f');
    }
}
