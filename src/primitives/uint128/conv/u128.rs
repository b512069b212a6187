//! Conversions between `Uint128` and the native `u128`
//!
//! These are the bridge used by the `speed` feature and by callers that
//! already hold native 128-bit values. Both directions are lossless.

use crate::primitives::Uint128;

impl Uint128 {
    /// Returns the value as a native `u128`.
    pub const fn to_u128(self) -> u128 {
        ((self.h as u128) << 64) | self.l as u128
    }

    /// Builds a value from a native `u128`.
    pub const fn from_u128(value: u128) -> Self {
        Uint128::new((value >> 64) as u64, value as u64)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        value.to_u128()
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Uint128::from_u128(value)
    }
}
