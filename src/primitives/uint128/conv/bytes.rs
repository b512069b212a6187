//! Conversions between `Uint128` and byte representations
//!
//! The `From` conversions use big-endian order, matching the usual
//! human-readable layout. Explicit little-endian helpers are provided for
//! wire formats that need them.

use crate::primitives::Uint128;

impl Uint128 {
    /// Returns the 16 bytes of the value, most significant first.
    pub const fn to_be_bytes(self) -> [u8; 16] {
        self.to_u128().to_be_bytes()
    }

    /// Returns the 16 bytes of the value, least significant first.
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.to_u128().to_le_bytes()
    }

    /// Builds a value from 16 bytes, most significant first.
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Uint128::from_u128(u128::from_be_bytes(bytes))
    }

    /// Builds a value from 16 bytes, least significant first.
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Uint128::from_u128(u128::from_le_bytes(bytes))
    }
}

/// Converts a `Uint128` into a 16-byte big-endian array.
impl From<Uint128> for [u8; 16] {
    fn from(value: Uint128) -> Self {
        value.to_be_bytes()
    }
}

/// Converts a 16-byte big-endian array into a `Uint128`.
impl From<[u8; 16]> for Uint128 {
    fn from(value: [u8; 16]) -> Self {
        Uint128::from_be_bytes(value)
    }
}
