//! Conversions between `Uint128` and 64-bit words
//!
//! A `Uint128` is made of two 64-bit words, so these conversions are plain
//! field moves.

use crate::primitives::Uint128;

/// Converts a `Uint128` into its two words, ordered `[h, l]`.
impl From<Uint128> for [u64; 2] {
    fn from(value: Uint128) -> Self {
        [value.h, value.l]
    }
}

/// Builds a `Uint128` from two words ordered `[h, l]`.
impl From<[u64; 2]> for Uint128 {
    fn from(value: [u64; 2]) -> Self {
        Uint128::new(value[0], value[1])
    }
}

/// Attempts to convert a `Uint128` into a `u64`.
///
/// The conversion succeeds only if the high word is zero.
impl TryFrom<Uint128> for u64 {
    type Error = ();

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.h != 0 {
            return Err(());
        }

        Ok(value.l)
    }
}

/// Converts a `u64` into a `Uint128`.
///
/// The value becomes the low word; the high word is zero.
impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Uint128::new(0, value)
    }
}
