//! Widening conversions from the narrow native unsigned integers.

use crate::primitives::Uint128;

/// Converts a `u8` into a `Uint128`, zero-extended.
impl From<u8> for Uint128 {
    fn from(value: u8) -> Self {
        Uint128::new(0, value as u64)
    }
}

/// Converts a `u16` into a `Uint128`, zero-extended.
impl From<u16> for Uint128 {
    fn from(value: u16) -> Self {
        Uint128::new(0, value as u64)
    }
}

/// Converts a `u32` into a `Uint128`, zero-extended.
impl From<u32> for Uint128 {
    fn from(value: u32) -> Self {
        Uint128::new(0, value as u64)
    }
}
