//! Hex rendering
//!
//! All variants write lowercase digits, most significant first, with leading
//! zeros suppressed (zero renders as `"0"`).
//!
//! | Function | Destination | On short buffer |
//! |----------|-------------|-----------------|
//! | [`try_to_hex`] | `&mut [C]` | returns 0, buffer untouched |
//! | [`to_hex_checked`] | `&mut [C]` | `Err(HexError::BufferTooSmall)` |
//! | [`to_hex_array`] | `&mut [C; N]` | rejected at compile time |
//! | [`HexBuffer::format`] | internal stack buffer | cannot happen |
//! | [`to_hex`] / [`to_hex_wide`] | new `String` / `Vec<u16>` | cannot happen |
//!
//! Buffer variants append a NUL terminator, so they need one unit more than
//! the digit count.

use tracing::trace;

use crate::digits::{digit_count_for, MAX_HEX_DIGITS};
use crate::error::{HexError, Result};
use crate::unit::{nibble_to_unit, HexUnit};
use crate::unsigned::HexInt;

/// Write the low `out.len()` nibbles of `bits`, last slot first
#[inline]
fn write_digits<C: HexUnit>(mut bits: u64, out: &mut [C]) {
    for slot in out.iter_mut().rev() {
        *slot = nibble_to_unit(bits);
        bits >>= 4;
    }
}

/// Render into a buffer already known to hold `count + 1` units
#[inline]
fn render_terminated<T: HexInt, C: HexUnit>(value: T, buf: &mut [C], count: usize) -> usize {
    let bits = value.to_bits();
    if bits == 0 {
        buf[0] = C::from_ascii(b'0');
        buf[1] = C::NUL;
        return 1;
    }

    write_digits(bits, &mut buf[..count]);
    buf[count] = C::NUL;
    count
}

/// Render `value` into `buf` followed by a NUL terminator
///
/// Returns the number of digits written, or 0 if `buf` is shorter than
/// `digit_count_for(value) + 1`. On failure `buf` is not modified.
pub fn try_to_hex<T: HexInt, C: HexUnit>(value: T, buf: &mut [C]) -> usize {
    let count = digit_count_for(value);
    if buf.len() < count + 1 {
        trace!(
            required = count + 1,
            capacity = buf.len(),
            "Hex buffer too small"
        );
        return 0;
    }
    render_terminated(value, buf, count)
}

/// Same as [`try_to_hex`], reporting a short buffer as an error
pub fn to_hex_checked<T: HexInt, C: HexUnit>(value: T, buf: &mut [C]) -> Result<usize> {
    let count = digit_count_for(value);
    if buf.len() < count + 1 {
        return Err(HexError::buffer_too_small(count + 1, buf.len()));
    }
    Ok(render_terminated(value, buf, count))
}

/// Render into an array large enough for any value of `T`
///
/// `N` must be at least `T::MAX_DIGITS + 1`; smaller arrays fail to compile.
///
/// ```rust
/// let mut buf = [0_u8; 17];
/// let n = hex_codec::to_hex_array(0xabc_u64, &mut buf);
/// assert_eq!(&buf[..n], b"abc");
/// assert_eq!(buf[n], 0);
/// ```
///
/// ```compile_fail
/// let mut buf = [0_u8; 16];
/// hex_codec::to_hex_array(0xabc_u64, &mut buf);
/// ```
#[inline]
pub fn to_hex_array<T: HexInt, C: HexUnit, const N: usize>(value: T, buf: &mut [C; N]) -> usize {
    const {
        assert!(
            N > T::MAX_DIGITS,
            "to_hex_array buffer must hold max_digit_count_for::<T>() + 1 units"
        )
    };
    render_terminated(value, buf, digit_count_for(value))
}

/// Render to a new `String` of exactly `digit_count_for(value)` bytes
pub fn to_hex<T: HexInt>(value: T) -> String {
    let bits = value.to_bits();
    if bits == 0 {
        return String::from("0");
    }

    let count = digit_count_for(value);
    let mut digits = [0_u8; MAX_HEX_DIGITS];
    write_digits(bits, &mut digits[..count]);

    let mut text = String::with_capacity(count);
    text.extend(digits[..count].iter().map(|&b| char::from(b)));
    text
}

/// Render to new UTF-16 text of exactly `digit_count_for(value)` units
pub fn to_hex_wide<T: HexInt>(value: T) -> Vec<u16> {
    let count = digit_count_for(value);
    let mut text = vec![0_u16; count];
    write_digits(value.to_bits(), &mut text);
    text
}

/// Reusable stack buffer for rendering without allocation
///
/// Holds enough room for the widest supported type, so [`format`] never
/// fails. Shaped like `itoa::Buffer`.
///
/// [`format`]: HexBuffer::format
///
/// ```rust
/// use hex_codec::HexBuffer;
///
/// let mut buffer = HexBuffer::new();
/// assert_eq!(buffer.format(u64::MAX), "ffffffffffffffff");
/// assert_eq!(buffer.format(-2_i16), "fffe");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexBuffer {
    bytes: [u8; MAX_HEX_DIGITS + 1],
}

impl HexBuffer {
    /// Create an empty buffer
    #[inline]
    pub const fn new() -> Self {
        Self {
            bytes: [0; MAX_HEX_DIGITS + 1],
        }
    }

    /// Render `value`, returning the digits as a `&str` borrowed from the buffer
    #[inline]
    pub fn format<T: HexInt>(&mut self, value: T) -> &str {
        let count = to_hex_array(value, &mut self.bytes);
        // Digits are ASCII
        std::str::from_utf8(&self.bytes[..count]).unwrap_or_default()
    }
}

impl Default for HexBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_basic() {
        assert_eq!(to_hex(0_u64), "0");
        assert_eq!(to_hex(0xf_u64), "f");
        assert_eq!(to_hex(0xf0_u64), "f0");
        assert_eq!(to_hex(0x0123_4567_89ab_cdef_u64), "123456789abcdef");
        assert_eq!(to_hex(u64::MAX), "ffffffffffffffff");
    }

    #[test]
    fn test_to_hex_signed() {
        assert_eq!(to_hex(-1_i8), "ff");
        assert_eq!(to_hex(i16::MIN), "8000");
        assert_eq!(to_hex(-2_i32), "fffffffe");
        assert_eq!(to_hex(i64::MIN), "8000000000000000");
        assert_eq!(to_hex(127_i8), "7f");
    }

    #[test]
    fn test_to_hex_length_is_digit_count() {
        for value in [0_u32, 0xa, 0xabc, 0x0abc_def0, u32::MAX] {
            assert_eq!(to_hex(value).len(), digit_count_for(value));
        }
    }

    #[test]
    fn test_to_hex_wide() {
        let expected: Vec<u16> = "beef".encode_utf16().collect();
        assert_eq!(to_hex_wide(0xbeef_u16), expected);
        assert_eq!(to_hex_wide(0_u8), vec![u16::from(b'0')]);
    }

    #[test]
    fn test_try_to_hex_capacity_boundary() {
        // 0x1234 needs 4 digits + terminator
        let mut exact = [b'x'; 4];
        assert_eq!(try_to_hex(0x1234_u32, &mut exact), 0);
        assert_eq!(exact, [b'x'; 4]);

        let mut enough = [b'x'; 5];
        assert_eq!(try_to_hex(0x1234_u32, &mut enough), 4);
        assert_eq!(&enough, b"1234\0");
    }

    #[test]
    fn test_try_to_hex_zero() {
        let mut one = [b'x'; 1];
        assert_eq!(try_to_hex(0_u8, &mut one), 0);

        let mut two = [b'x'; 2];
        assert_eq!(try_to_hex(0_u8, &mut two), 1);
        assert_eq!(&two, b"0\0");

        let mut empty: [u8; 0] = [];
        assert_eq!(try_to_hex(0_u8, &mut empty), 0);
    }

    #[test]
    fn test_try_to_hex_leaves_tail_untouched() {
        let mut buf = [b'x'; 8];
        assert_eq!(try_to_hex(0xab_u8, &mut buf), 2);
        assert_eq!(&buf, b"ab\0xxxxx");
    }

    #[test]
    fn test_try_to_hex_wide_and_char() {
        let mut wide = [0_u16; 9];
        let n = try_to_hex(0xcafe_u32, &mut wide);
        assert_eq!(String::from_utf16_lossy(&wide[..n]), "cafe");

        let mut chars = ['x'; 5];
        let n = try_to_hex(-1_i16, &mut chars);
        assert_eq!(chars[..n].iter().collect::<String>(), "ffff");
        assert_eq!(chars[n], '\0');
    }

    #[test]
    fn test_to_hex_checked() {
        let mut small = [0_u8; 2];
        assert_eq!(
            to_hex_checked(0x100_u16, &mut small),
            Err(HexError::buffer_too_small(4, 2))
        );

        let mut buf = [0_u8; 4];
        assert_eq!(to_hex_checked(0x100_u16, &mut buf), Ok(3));
        assert_eq!(&buf, b"100\0");
    }

    #[test]
    fn test_to_hex_array_every_width() {
        let mut buf = [0_u8; 17];
        let n = to_hex_array(0x8_u8, &mut buf);
        assert_eq!(&buf[..=n], b"8\0");

        let mut buf = [0_u16; 5];
        let n = to_hex_array(0xa0b0_u16, &mut buf);
        assert_eq!(String::from_utf16_lossy(&buf[..n]), "a0b0");

        let mut buf = [0_u8; 9];
        let n = to_hex_array(i32::MIN, &mut buf);
        assert_eq!(&buf[..n], b"80000000");
    }

    #[test]
    fn test_hex_buffer_reuse() {
        let mut buffer = HexBuffer::new();
        assert_eq!(buffer.format(0xffff_ffff_u64), "ffffffff");
        // Shorter value after a longer one must not show stale digits
        assert_eq!(buffer.format(0x1_u64), "1");
        assert_eq!(buffer.format(0_u8), "0");
        assert_eq!(buffer.format(-1_i64), "ffffffffffffffff");
    }
}
