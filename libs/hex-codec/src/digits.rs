//! Minimal hex digit count via binary search over nibble masks
//!
//! Nibble positions are numbered from 1 (least significant). A search window
//! is described by `start` (its most significant nibble) and `count`. Each
//! step tests the upper half of the window, then the lower half, and descends
//! into the first half that has a set bit. After `log2(W/4)` steps the window
//! is a single nibble and `start` is the answer.
//!
//! The masks for every window the search can visit are laid out as an implicit
//! binary tree (root at index 1, children of `n` at `2n` and `2n + 1`) and
//! built by a `const fn`, so each width's tree is a compile-time constant.
//!
//! | Width | Nibbles | Mask tests |
//! |-------|---------|------------|
//! | 8     | 2       | 1-2        |
//! | 16    | 4       | 2-4        |
//! | 32    | 8       | 3-6        |
//! | 64    | 16      | 4-8        |

use crate::unsigned::HexInt;

/// Most digits any supported integer renders to (64-bit)
pub const MAX_HEX_DIGITS: usize = 16;

/// Node slots for a 16-nibble tree (nodes 1..=31, slot 0 unused)
const TREE_LEN: usize = MAX_HEX_DIGITS * 2;

const ROOT: usize = 1;

/// Mask of `count` low nibbles
const fn low_nibbles(count: usize) -> u64 {
    if count == 0 {
        0
    } else if count >= MAX_HEX_DIGITS {
        u64::MAX
    } else {
        (1_u64 << (count * 4)) - 1
    }
}

/// Mask of the `count` nibbles ending at position `start`
const fn window_mask(start: usize, count: usize) -> u64 {
    low_nibbles(count) << ((start - count) * 4)
}

/// Search masks for one integer width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskTree {
    nibbles: usize,
    masks: [u64; TREE_LEN],
}

impl MaskTree {
    pub const W8: MaskTree = MaskTree::build(2);
    pub const W16: MaskTree = MaskTree::build(4);
    pub const W32: MaskTree = MaskTree::build(8);
    pub const W64: MaskTree = MaskTree::build(16);

    /// Build the tree for a width of `nibbles` hex digits
    ///
    /// `nibbles` must be a power of two no larger than 16; anything else
    /// fails const evaluation.
    pub const fn build(nibbles: usize) -> Self {
        assert!(
            nibbles.is_power_of_two() && nibbles <= MAX_HEX_DIGITS,
            "nibble count must be 1, 2, 4, 8 or 16"
        );

        let mut masks = [0_u64; TREE_LEN];
        let mut starts = [0_usize; TREE_LEN];
        let mut counts = [0_usize; TREE_LEN];

        masks[ROOT] = window_mask(nibbles, nibbles);
        starts[ROOT] = nibbles;
        counts[ROOT] = nibbles;

        // Parents always precede children, so one forward pass fills the tree.
        let mut node = ROOT;
        while node < TREE_LEN / 2 {
            let count = counts[node];
            if count > 1 {
                let start = starts[node];
                let half = count / 2;
                let upper = node * 2;
                let lower = upper + 1;

                masks[upper] = window_mask(start, half);
                starts[upper] = start;
                counts[upper] = half;

                masks[lower] = window_mask(start - half, half);
                starts[lower] = start - half;
                counts[lower] = half;
            }
            node += 1;
        }

        Self { nibbles, masks }
    }

    /// Digits in this tree's width
    #[inline]
    pub const fn nibbles(&self) -> usize {
        self.nibbles
    }

    /// Minimal digit count for `bits`, in `[1, nibbles]`
    ///
    /// Bits above the tree's width are ignored.
    #[inline]
    pub const fn search(&self, bits: u64) -> usize {
        let mut node = ROOT;
        let mut start = self.nibbles;
        let mut count = self.nibbles;

        while count > 1 {
            let half = count / 2;
            let upper = node * 2;
            if bits & self.masks[upper] != 0 {
                node = upper;
            } else if bits & self.masks[upper + 1] != 0 {
                node = upper + 1;
                start -= half;
            } else {
                return 1;
            }
            count = half;
        }

        if bits & self.masks[node] != 0 {
            start
        } else {
            1
        }
    }
}

/// Number of hex digits `value` renders to, in `[1, T::MAX_DIGITS]`
///
/// Zero needs one digit.
#[inline]
pub fn digit_count_for<T: HexInt>(value: T) -> usize {
    T::MASK_TREE.search(value.to_bits())
}

/// Upper bound on [`digit_count_for`] for `T`: `2 * size_of::<T>()`
#[inline]
pub const fn max_digit_count_for<T: HexInt>() -> usize {
    T::MAX_DIGITS
}
