//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `Uint128` primitive and native integer and byte types.
//!
//! Each submodule is responsible for conversions to and from a specific
//! width, following these principles:
//! - widening conversions are infallible and zero-extend
//! - narrowing conversions are fallible and never truncate silently
//! - word arrays and big-endian byte arrays list the high half first

mod bytes;
mod u128;
mod u32;
mod u64;
