//! Text formatting for `Uint128`
//!
//! The value is always rendered as a single 128-bit number, never as two
//! independently formatted words:
//! - decimal digits come from repeated division of the whole value by 10⁹
//! - binary, octal and hex digits are peeled off the whole value by shifting,
//!   so octal digits that straddle the 64-bit seam come out right
//!
//! Digits are rendered into a stack buffer and handed to
//! `Formatter::pad_integral`, so width, fill, zero-padding and the `#`
//! prefixes behave as they do for the native integer types.

use super::core::Uint128;

use std::fmt::{Binary, Display, Formatter, LowerHex, Octal, Result, UpperHex};
use std::str;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// 128 binary digits is the widest rendering.
const MAX_DIGITS: usize = 128;

/// `u128::MAX` has 39 decimal digits.
#[cfg(not(feature = "speed"))]
const MAX_DECIMAL_DIGITS: usize = 39;

/// Largest power of ten whose remainders fit a 32-bit limb.
#[cfg(not(feature = "speed"))]
const DECIMAL_CHUNK: u64 = 1_000_000_000;

#[cfg(not(feature = "speed"))]
const DECIMAL_CHUNK_DIGITS: usize = 9;

fn emit(f: &mut Formatter<'_>, prefix: &str, digits: &[u8]) -> Result {
    // Digits are ASCII by construction.
    let digits = str::from_utf8(digits).map_err(|_| std::fmt::Error)?;
    f.pad_integral(true, prefix, digits)
}

/// Formats `value` in a power-of-two radix of `1 << shift`.
fn fmt_pow2(
    value: Uint128,
    shift: u32,
    table: &[u8; 16],
    prefix: &str,
    f: &mut Formatter<'_>,
) -> Result {
    let mask = (1u64 << shift) - 1;

    let mut buf = [0u8; MAX_DIGITS];
    let mut pos = MAX_DIGITS;
    let mut rest = value;

    loop {
        pos -= 1;
        buf[pos] = table[(rest.l & mask) as usize];
        rest = rest >> shift;

        if rest.is_zero() {
            break;
        }
    }

    emit(f, prefix, &buf[pos..])
}

/// Divides the limbs in place by 10⁹ and returns the remainder.
#[cfg(not(feature = "speed"))]
fn div_rem_chunk(limbs: &mut [u32; 4]) -> u64 {
    let mut rem = 0u64;

    for limb in limbs.iter_mut() {
        // rem < 10⁹ < 2³², so the partial dividend fits in a u64 and the
        // partial quotient fits in a u32.
        let cur = (rem << 32) | *limb as u64;
        *limb = (cur / DECIMAL_CHUNK) as u32;
        rem = cur % DECIMAL_CHUNK;
    }

    rem
}

/// Writes the decimal digits of `value` to the end of `buf` and returns
/// the index of the first digit.
#[cfg(not(feature = "speed"))]
fn render_decimal(value: Uint128, buf: &mut [u8; MAX_DECIMAL_DIGITS]) -> usize {
    let mut limbs = value.to_limbs();
    let mut pos = MAX_DECIMAL_DIGITS;

    loop {
        let mut chunk = div_rem_chunk(&mut limbs);

        if limbs.iter().all(|&limb| limb == 0) {
            // Most significant chunk: no zero padding.
            loop {
                pos -= 1;
                buf[pos] = b'0' + (chunk % 10) as u8;
                chunk /= 10;

                if chunk == 0 {
                    return pos;
                }
            }
        }

        for _ in 0..DECIMAL_CHUNK_DIGITS {
            pos -= 1;
            buf[pos] = b'0' + (chunk % 10) as u8;
            chunk /= 10;
        }
    }
}

/// Formats the value in decimal, the default human-readable form.
#[cfg(not(feature = "speed"))]
impl Display for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut buf = [0u8; MAX_DECIMAL_DIGITS];
        let start = render_decimal(*self, &mut buf);

        emit(f, "", &buf[start..])
    }
}

/// Formats the value in decimal, the default human-readable form.
#[cfg(feature = "speed")]
impl Display for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.to_u128(), f)
    }
}

impl Binary for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        fmt_pow2(*self, 1, LOWER_DIGITS, "0b", f)
    }
}

impl Octal for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        fmt_pow2(*self, 3, LOWER_DIGITS, "0o", f)
    }
}

impl LowerHex for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        fmt_pow2(*self, 4, LOWER_DIGITS, "0x", f)
    }
}

impl UpperHex for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        fmt_pow2(*self, 4, UPPER_DIGITS, "0x", f)
    }
}
