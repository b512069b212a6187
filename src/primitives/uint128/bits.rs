//! Bit inspection and reordering for `Uint128`
//!
//! Every operation here is a pair of 64-bit operations on the high and low
//! words, combined across the word boundary.
//!
//! The zero value is handled uniformly: `len` is 0, both zero counts are
//! 128 and the ones count is 0.
//!
//! The free functions mirror the methods for callers that prefer a flat,
//! `bits`-style API.

use super::core::Uint128;

impl Uint128 {
    /// Number of bits needed to represent the value.
    ///
    /// Equivalent to the 1-based position of the highest set bit, and 0 for
    /// the zero value.
    pub const fn bit_len(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Counts the zero bits above the highest set bit.
    ///
    /// Returns 128 for the zero value.
    pub const fn leading_zeros(&self) -> u32 {
        if self.h != 0 {
            return self.h.leading_zeros();
        }

        64 + self.l.leading_zeros()
    }

    /// Counts the zero bits below the lowest set bit.
    ///
    /// Returns 128 for the zero value.
    pub const fn trailing_zeros(&self) -> u32 {
        if self.l != 0 {
            return self.l.trailing_zeros();
        }

        64 + self.h.trailing_zeros()
    }

    /// Population count of both words.
    pub const fn count_ones(&self) -> u32 {
        self.h.count_ones() + self.l.count_ones()
    }

    pub const fn count_zeros(&self) -> u32 {
        Self::BITS - self.count_ones()
    }

    /// Reverses the order of all 128 bits.
    ///
    /// Bit `i` moves to bit `127 - i`, so the reversed low word becomes the
    /// new high word and vice versa.
    pub const fn reverse_bits(&self) -> Self {
        Uint128 {
            h: self.l.reverse_bits(),
            l: self.h.reverse_bits(),
        }
    }

    /// Reverses the order of the 16 bytes, leaving bits inside each byte
    /// untouched.
    pub const fn swap_bytes(&self) -> Self {
        Uint128 {
            h: self.l.swap_bytes(),
            l: self.h.swap_bytes(),
        }
    }
}

/// Minimum number of bits needed to represent `x`; 0 when `x` is zero.
pub const fn len(x: Uint128) -> u32 {
    x.bit_len()
}

/// Number of leading zero bits in `x`; 128 when `x` is zero.
pub const fn leading_zeros(x: Uint128) -> u32 {
    x.leading_zeros()
}

/// Number of trailing zero bits in `x`; 128 when `x` is zero.
pub const fn trailing_zeros(x: Uint128) -> u32 {
    x.trailing_zeros()
}

/// Number of one bits in `x`.
pub const fn ones_count(x: Uint128) -> u32 {
    x.count_ones()
}

/// `x` with its bits in reverse order.
pub const fn reverse(x: Uint128) -> Uint128 {
    x.reverse_bits()
}

/// `x` with its bytes in reverse order.
pub const fn reverse_bytes(x: Uint128) -> Uint128 {
    x.swap_bytes()
}
