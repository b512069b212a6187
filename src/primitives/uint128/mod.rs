//! 128-bit unsigned integer primitive
//!
//! This module defines the `Uint128` type, a fixed-size 128-bit unsigned
//! integer built from two 64-bit words.
//!
//! `Uint128` is designed as a low-level, dependency-free primitive rather
//! than a full big-integer abstraction. It provides bit inspection,
//! carry-propagating addition and subtraction, and multi-base formatting,
//! with explicit semantics and predictable behavior. Multiplication and
//! division are deliberately absent.

pub mod bits;

mod conv;
mod core;
mod fmt;
mod ops;
mod parse;

/// Fixed-size 128-bit unsigned integer.
pub use self::core::{Uint128, max_uint128, zero};

pub use ops::{add128, sub128};
pub use parse::ParseUint128Error;
