//! Primitive types
//!
//! This module defines the low-level primitive types provided by this
//! crate.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full standard
//! library abstractions or full-featured big-integer libraries.
//!
//! Current primitives include:
//! - `Uint128`: a fixed-size 128-bit unsigned integer made of two 64-bit
//!   words
//!
//! The flat, function-style bit API lives in [`bits`].

mod uint128;

pub use uint128::bits;
pub use uint128::{ParseUint128Error, Uint128, add128, max_uint128, sub128, zero};
