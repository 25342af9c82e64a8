//! Unsigned normalization for fixed-width integers
//!
//! Every supported integer is rendered and parsed through its unsigned bit
//! pattern. For signed types the pattern is rebuilt from the sign bit and the
//! magnitude bits explicitly, so the result is `v mod 2^W` without going
//! through a signed-to-unsigned `as` cast of a negative value.

use std::fmt;

use crate::digits::MaskTree;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer that can be written as hex
///
/// Implemented for `u8`..`u64` and `i8`..`i64`. The trait is sealed: the
/// digit search relies on `MASK_TREE` matching the type's width.
pub trait HexInt: Copy + sealed::Sealed {
    /// Unsigned type of the same width
    type Unsigned: Copy + Eq + fmt::Debug + fmt::LowerHex;

    /// Upper bound on rendered digits: `2 * size_of::<Self>()`
    const MAX_DIGITS: usize;

    /// Precomputed nibble masks for this width
    const MASK_TREE: &'static MaskTree;

    /// Bit-identical unsigned value (`self mod 2^W`)
    fn normalize(self) -> Self::Unsigned;

    /// Inverse of [`normalize`](HexInt::normalize)
    fn denormalize(bits: Self::Unsigned) -> Self;

    /// Normalized value, zero-extended to 64 bits
    fn to_bits(self) -> u64;

    /// Takes the low `W` bits of `bits` and denormalizes them
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_hex_int_unsigned {
    ($($t:ty => $tree:expr),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl HexInt for $t {
            type Unsigned = $t;

            const MAX_DIGITS: usize = std::mem::size_of::<$t>() * 2;
            const MASK_TREE: &'static MaskTree = $tree;

            #[inline]
            fn normalize(self) -> $t {
                self
            }

            #[inline]
            fn denormalize(bits: $t) -> $t {
                bits
            }

            #[inline]
            fn to_bits(self) -> u64 {
                u64::from(self)
            }

            #[inline]
            fn from_bits(bits: u64) -> $t {
                bits as $t
            }
        }
    )*};
}

macro_rules! impl_hex_int_signed {
    ($($s:ty => $u:ty),* $(,)?) => {$(
        impl sealed::Sealed for $s {}

        impl HexInt for $s {
            type Unsigned = $u;

            const MAX_DIGITS: usize = std::mem::size_of::<$s>() * 2;
            const MASK_TREE: &'static MaskTree = <$u as HexInt>::MASK_TREE;

            #[inline]
            fn normalize(self) -> $u {
                // Sign bit moved to bit 0 first; both halves are non-negative
                // before the cast.
                let sign = ((self >> (<$s>::BITS - 1)) & 1) as $u;
                let magnitude = (self & <$s>::MAX) as $u;
                magnitude | (sign << (<$u>::BITS - 1))
            }

            #[inline]
            fn denormalize(bits: $u) -> $s {
                let magnitude = (bits & (<$s>::MAX as $u)) as $s;
                if bits >> (<$u>::BITS - 1) == 1 {
                    magnitude | <$s>::MIN
                } else {
                    magnitude
                }
            }

            #[inline]
            fn to_bits(self) -> u64 {
                u64::from(self.normalize())
            }

            #[inline]
            fn from_bits(bits: u64) -> $s {
                Self::denormalize(bits as $u)
            }
        }
    )*};
}

impl_hex_int_unsigned! {
    u8 => &MaskTree::W8,
    u16 => &MaskTree::W16,
    u32 => &MaskTree::W32,
    u64 => &MaskTree::W64,
}

impl_hex_int_signed! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
}
