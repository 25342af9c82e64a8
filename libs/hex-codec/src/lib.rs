//! hex-codec - Minimal hexadecimal text for fixed-width integers
//!
//! Converts 8/16/32/64-bit integers (signed or unsigned) into lowercase hex
//! with leading zeros suppressed, and parses hex text back into integers.
//!
//! # Key Components
//!
//! - **Normalization**: [`HexInt`] maps every integer to the unsigned value with
//!   the same bit pattern, so signed and unsigned inputs share one code path
//! - **Digit count**: [`MaskTree`] finds the highest nonzero nibble with a
//!   binary search over masks built at compile time
//! - **Render**: buffer, array, stack-buffer and owned-text variants, for
//!   narrow (`u8`), wide (`u16`) and `char` text
//! - **Parse**: best-effort, stops at the first non-hex character or after the
//!   target type's digit count
//!
//! # Example
//!
//! ```rust
//! use hex_codec::{digit_count_for, from_hex_counted, to_hex, HexBuffer};
//!
//! assert_eq!(to_hex(0xbeef_u32), "beef");
//! assert_eq!(to_hex(-1_i8), "ff");
//! assert_eq!(digit_count_for(0_u64), 1);
//!
//! let (value, consumed) = from_hex_counted::<u16>("BEEFcake");
//! assert_eq!((value, consumed), (0xbeef, 4));
//!
//! let mut buffer = HexBuffer::new();
//! assert_eq!(buffer.format(0x57fc_u64), "57fc");
//! ```

pub mod digits;
pub mod error;
pub mod parse;
pub mod render;
pub mod unit;
pub mod unsigned;
pub mod width;

// Re-exports for convenience
pub use digits::{digit_count_for, max_digit_count_for, MaskTree, MAX_HEX_DIGITS};
pub use error::{HexError, Result};
pub use parse::{from_hex, from_hex_counted, from_hex_wide, from_hex_wide_counted, parse_hex};
pub use render::{to_hex, to_hex_array, to_hex_checked, to_hex_wide, try_to_hex, HexBuffer};
pub use unit::HexUnit;
pub use unsigned::HexInt;
pub use width::Width;
