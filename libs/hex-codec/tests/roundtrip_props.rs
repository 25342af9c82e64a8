//! Property tests for the hex codec
//!
//! - Round trip: parsing rendered text gives back the value and consumes
//!   exactly the digit count
//! - Minimality: rendered text has no leading zero unless it is "0"
//! - Digit count agrees with a leading-zeros reference
//! - Normalization equals `v mod 2^W`

use hex_codec::{
    digit_count_for, from_hex_counted, from_hex_wide_counted, to_hex, to_hex_wide, try_to_hex,
    HexInt, Width,
};
use proptest::prelude::*;

fn reference_digits(bits: u64) -> usize {
    let significant = 64 - bits.leading_zeros() as usize;
    significant.div_ceil(4).max(1)
}

macro_rules! roundtrip_props {
    ($($name:ident: $t:ty),* $(,)?) => {$(
        mod $name {
            use super::*;

            proptest! {
                #[test]
                fn parse_inverts_render(v in any::<$t>()) {
                    let text = to_hex(v);
                    prop_assert_eq!(from_hex_counted::<$t>(&text), (v, digit_count_for(v)));
                }

                #[test]
                fn wide_parse_inverts_wide_render(v in any::<$t>()) {
                    let text = to_hex_wide(v);
                    prop_assert_eq!(from_hex_wide_counted::<$t>(&text), (v, digit_count_for(v)));
                }

                #[test]
                fn render_is_minimal(v in any::<$t>()) {
                    let text = to_hex(v);
                    prop_assert_eq!(text.len(), digit_count_for(v));
                    prop_assert!(text == "0" || !text.starts_with('0'));
                    prop_assert!(text.len() <= <$t as HexInt>::MAX_DIGITS);
                    prop_assert!(text.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
                }

                #[test]
                fn digit_count_matches_leading_zeros(v in any::<$t>()) {
                    prop_assert_eq!(digit_count_for(v), reference_digits(v.to_bits()));
                }

                #[test]
                fn buffer_render_matches_owned(v in any::<$t>(), extra in 0_usize..4) {
                    let digits = digit_count_for(v);
                    let mut buf = vec![0_u8; digits + 1 + extra];
                    let n = try_to_hex(v, buf.as_mut_slice());
                    prop_assert_eq!(n, digits);
                    let expected = to_hex(v);
                    prop_assert_eq!(&buf[..n], expected.as_bytes());
                }

                #[test]
                fn uppercase_parses_the_same(v in any::<$t>()) {
                    let upper = to_hex(v).to_ascii_uppercase();
                    prop_assert_eq!(from_hex_counted::<$t>(&upper).0, v);
                }
            }
        }
    )*};
}

roundtrip_props! {
    props_u8: u8,
    props_u16: u16,
    props_u32: u32,
    props_u64: u64,
    props_i8: i8,
    props_i16: i16,
    props_i32: i32,
    props_i64: i64,
}

proptest! {
    #[test]
    fn normalize_i64_is_modular(v in any::<i64>()) {
        let expected = i128::from(v).rem_euclid(1_i128 << 64) as u64;
        prop_assert_eq!(v.normalize(), expected);
        prop_assert_eq!(i64::denormalize(v.normalize()), v);
    }

    #[test]
    fn normalize_i32_is_modular(v in any::<i32>()) {
        let expected = i64::from(v).rem_euclid(1_i64 << 32) as u32;
        prop_assert_eq!(v.normalize(), expected);
    }

    #[test]
    fn normalize_i16_is_modular(v in any::<i16>()) {
        let expected = i32::from(v).rem_euclid(1_i32 << 16) as u16;
        prop_assert_eq!(v.normalize(), expected);
    }

    #[test]
    fn trailing_garbage_is_not_consumed(v in any::<u64>(), tail in "[g-zG-Z ,;]{1,8}") {
        let text = format!("{}{}", to_hex(v), tail);
        prop_assert_eq!(from_hex_counted::<u64>(&text), (v, digit_count_for(v)));
    }

    #[test]
    fn width_parse_matches_render(bits in any::<u64>(), index in 0_usize..4) {
        let width = Width::ALL[index];
        let truncated = width.truncate(bits);
        let text = width.render(bits);
        prop_assert_eq!(width.parse(&text), (truncated, width.digit_count(bits)));
    }
}
