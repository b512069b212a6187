//! Fixed-width 128-bit unsigned integers built from 64-bit words
//!
//! This crate provides `Uint128`, a 128-bit unsigned integer represented as
//! a high and a low `u64`, together with the bit-level and arithmetic
//! primitives needed to work with it where 64 bits is the widest native
//! word.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The `Uint128` value type and everything defined on it:
//!   - bit length, leading/trailing zero counts and population count
//!   - bit reversal and byte reversal
//!   - addition and subtraction with explicit carry/borrow (`add128`,
//!     `sub128`), wrapping operators, `incr` / `decr`
//!   - ordering and equality
//!   - binary, octal, decimal and hexadecimal formatting, and parsing
//!
//! # Design goals
//!
//! - No heap allocations, including when formatting
//! - Overflow is reported (carry-out) or wraps, it never panics
//! - Every operation is a pure function of its operands
//!
//! Multiplication, division, signed values and arbitrary precision are out
//! of scope.
//!
//! # Features
//!
//! - `speed`: routes the carry chains and decimal formatting through the
//!   native `u128` type. Results are identical to the default two-word
//!   implementation.

pub mod primitives;
