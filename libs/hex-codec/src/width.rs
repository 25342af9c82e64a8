//! Runtime width selection
//!
//! The generic API picks the width from the Rust type. `Width` covers callers
//! that only learn the width at runtime (command-line flags, config). Values
//! travel as normalized `u64` bit patterns.

use std::fmt;
use std::str::FromStr;

use crate::digits::MaskTree;
use crate::error::HexError;
use crate::parse::from_hex_counted;
use crate::render::to_hex;
use crate::unsigned::HexInt;

/// Integer width in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Width {
    W8,
    W16,
    W32,
    #[default]
    W64,
}

impl Width {
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Upper bound on rendered digits for this width
    pub const fn max_digits(self) -> usize {
        self.bits() as usize / 4
    }

    pub const fn mask_tree(self) -> &'static MaskTree {
        match self {
            Width::W8 => &MaskTree::W8,
            Width::W16 => &MaskTree::W16,
            Width::W32 => &MaskTree::W32,
            Width::W64 => &MaskTree::W64,
        }
    }

    /// Keep only the low `bits()` bits
    pub const fn truncate(self, bits: u64) -> u64 {
        match self {
            Width::W64 => bits,
            _ => bits & ((1_u64 << self.bits()) - 1),
        }
    }

    /// Digit count of `bits` after truncation to this width
    pub fn digit_count(self, bits: u64) -> usize {
        self.mask_tree().search(self.truncate(bits))
    }

    /// Bit pattern of an unsigned value, `None` if it does not fit
    pub fn normalize_unsigned(self, value: u64) -> Option<u64> {
        match self {
            Width::W8 => u8::try_from(value).ok().map(HexInt::to_bits),
            Width::W16 => u16::try_from(value).ok().map(HexInt::to_bits),
            Width::W32 => u32::try_from(value).ok().map(HexInt::to_bits),
            Width::W64 => Some(value),
        }
    }

    /// Bit pattern of a signed value, `None` if it does not fit
    pub fn normalize_signed(self, value: i64) -> Option<u64> {
        match self {
            Width::W8 => i8::try_from(value).ok().map(HexInt::to_bits),
            Width::W16 => i16::try_from(value).ok().map(HexInt::to_bits),
            Width::W32 => i32::try_from(value).ok().map(HexInt::to_bits),
            Width::W64 => Some(value.to_bits()),
        }
    }

    /// Sign-extend a bit pattern of this width
    pub fn to_signed(self, bits: u64) -> i64 {
        match self {
            Width::W8 => i64::from(i8::from_bits(bits)),
            Width::W16 => i64::from(i16::from_bits(bits)),
            Width::W32 => i64::from(i32::from_bits(bits)),
            Width::W64 => i64::from_bits(bits),
        }
    }

    /// Render a bit pattern truncated to this width
    pub fn render(self, bits: u64) -> String {
        match self {
            Width::W8 => to_hex(u8::from_bits(bits)),
            Width::W16 => to_hex(u16::from_bits(bits)),
            Width::W32 => to_hex(u32::from_bits(bits)),
            Width::W64 => to_hex(bits),
        }
    }

    /// Best-effort parse at this width, returning bits and units consumed
    pub fn parse(self, text: &str) -> (u64, usize) {
        match self {
            Width::W8 => widen(from_hex_counted::<u8>(text)),
            Width::W16 => widen(from_hex_counted::<u16>(text)),
            Width::W32 => widen(from_hex_counted::<u32>(text)),
            Width::W64 => from_hex_counted::<u64>(text),
        }
    }
}

fn widen<T: HexInt>((value, consumed): (T, usize)) -> (u64, usize) {
    (value.to_bits(), consumed)
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl FromStr for Width {
    type Err = HexError;

    /// Accepts `8`, `u8`, `i8` and the same forms for 16, 32 and 64
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['u', 'i', 'U', 'I'])
            .unwrap_or(trimmed);
        match digits {
            "8" => Ok(Width::W8),
            "16" => Ok(Width::W16),
            "32" => Ok(Width::W32),
            "64" => Ok(Width::W64),
            _ => Err(HexError::unknown_width(s)),
        }
    }
}
