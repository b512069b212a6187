//! Parsing `Uint128` from text
//!
//! This is the inverse of the formatting in `fmt`: it accepts the
//! canonical digit strings produced there (plus leading zeros and an
//! optional `+`) in any radix from 2 to 36.
//!
//! Digits are accumulated into four 32-bit limbs so that every
//! intermediate step fits inside a `u64`.

use super::core::Uint128;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Errors that can occur while parsing a `Uint128`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseUint128Error {
    /// The input (after an optional `+`) contained no digits.
    Empty,
    /// The input contained a character that is not a digit in the radix.
    InvalidDigit,
    /// The value does not fit in 128 bits.
    Overflow,
    /// The radix is outside `2..=36`.
    InvalidRadix(u32),
}

impl Display for ParseUint128Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseUint128Error::Empty => f.write_str("cannot parse integer from empty string"),
            ParseUint128Error::InvalidDigit => f.write_str("invalid digit found in string"),
            ParseUint128Error::Overflow => f.write_str("number too large to fit in 128 bits"),
            ParseUint128Error::InvalidRadix(radix) => {
                write!(f, "radix {radix} is not in the range 2..=36")
            }
        }
    }
}

impl Error for ParseUint128Error {}

/// Computes `limbs * mul + add` in place.
///
/// Returns `true` if the result no longer fits in 128 bits.
fn mul_add_small(limbs: &mut [u32; 4], mul: u32, add: u32) -> bool {
    let mut carry = add as u64;

    for limb in limbs.iter_mut().rev() {
        let cur = *limb as u64 * mul as u64 + carry;
        *limb = cur as u32;
        carry = cur >> 32;
    }

    carry != 0
}

impl Uint128 {
    /// Parses a string of digits in the given radix.
    ///
    /// Letters are accepted in either case for radices above 10. Unlike the
    /// native integer types, an out-of-range radix is reported as an error
    /// instead of panicking.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseUint128Error> {
        if !(2..=36).contains(&radix) {
            return Err(ParseUint128Error::InvalidRadix(radix));
        }

        let digits = src.strip_prefix('+').unwrap_or(src);

        if digits.is_empty() {
            return Err(ParseUint128Error::Empty);
        }

        let mut limbs = [0u32; 4];

        for c in digits.chars() {
            let digit = c.to_digit(radix).ok_or(ParseUint128Error::InvalidDigit)?;

            if mul_add_small(&mut limbs, radix, digit) {
                return Err(ParseUint128Error::Overflow);
            }
        }

        Ok(Uint128::from_limbs(limbs))
    }
}

/// Parses a decimal string.
impl FromStr for Uint128 {
    type Err = ParseUint128Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uint128::from_str_radix(s, 10)
    }
}
