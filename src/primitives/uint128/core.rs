//! 128-bit unsigned integer primitive
//!
//! This module defines a fixed-size 128-bit unsigned integer type
//! (`Uint128`) for code that wants explicit two-word semantics instead of
//! relying on a native 128-bit integer.
//!
//! It is designed as a **simple, explicit value type**, not as a
//! big-integer arithmetic library. The value is split into a high and a low
//! 64-bit word and every operation is expressed in terms of those words.

/// Fixed-size 128-bit unsigned integer.
///
/// The represented value is `h · 2⁶⁴ + l`. Every `(h, l)` pair is a valid,
/// unique value, so both fields are public and can be set directly.
///
/// Field order matters: the derived `Ord` compares `h` first and falls back
/// to `l`, which is exactly numeric order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint128 {
    /// Most significant 64 bits.
    pub h: u64,
    /// Least significant 64 bits.
    pub l: u64,
}

impl Uint128 {
    /// The size of this integer type in bits.
    pub const BITS: u32 = 128;

    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(0, 1);

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Builds a value from its high and low words.
    pub const fn new(h: u64, l: u64) -> Self {
        Uint128 { h, l }
    }

    /// Returns `true` if both words are zero.
    pub const fn is_zero(&self) -> bool {
        self.h == 0 && self.l == 0
    }

    /// Splits the value into four 32-bit limbs, most significant first.
    ///
    /// Limb arithmetic keeps every intermediate product and quotient inside
    /// a `u64`, which is what decimal rendering and parsing rely on.
    pub(crate) const fn to_limbs(self) -> [u32; 4] {
        [
            (self.h >> 32) as u32,
            self.h as u32,
            (self.l >> 32) as u32,
            self.l as u32,
        ]
    }

    /// Reassembles a value from four 32-bit limbs, most significant first.
    pub(crate) const fn from_limbs(limbs: [u32; 4]) -> Self {
        Uint128 {
            h: ((limbs[0] as u64) << 32) | limbs[1] as u64,
            l: ((limbs[2] as u64) << 32) | limbs[3] as u64,
        }
    }
}

/// Returns the value zero.
pub const fn zero() -> Uint128 {
    Uint128::ZERO
}

/// Returns the all-ones value, 2¹²⁸ − 1.
pub const fn max_uint128() -> Uint128 {
    Uint128::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limbs_split_high_word_first() {
        let v = Uint128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);

        assert_eq!(v.to_limbs(), [0x0123_4567, 0x89AB_CDEF, 0xFEDC_BA98, 0x7654_3210]);
        assert_eq!(Uint128::from_limbs(v.to_limbs()), v);
    }
}
