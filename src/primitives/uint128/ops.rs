//! Arithmetic and bitwise operations for `Uint128`
//!
//! Addition and subtraction are expressed as two 64-bit operations with an
//! explicit carry (or borrow) passed from the low word to the high word.
//! Overflow out of the high word is never an error:
//! - `add128` / `sub128` report it as a carry-out / borrow-out value
//! - the operator traits and `incr` / `decr` wrap modulo 2¹²⁸
//!
//! With the `speed` feature the carry chains are delegated to the native
//! `u128` type. Both paths produce identical results.
//!
//! # Carry-in policy
//!
//! `add128` and `sub128` take the incoming carry as a full `Uint128` so
//! that the carry-out of one call can be fed straight into the next. Only
//! bit 0 of the low word is meaningful; every other bit of the carry-in is
//! ignored.

use super::core::Uint128;

use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/// Three-operand addition: returns `(x + y + carry, carry_out)`.
///
/// `carry_out` is either `Uint128::ZERO` or `Uint128::ONE`. Only bit 0 of
/// `carry.l` is added.
#[cfg(not(feature = "speed"))]
pub const fn add128(x: Uint128, y: Uint128, carry: Uint128) -> (Uint128, Uint128) {
    let (l, c0) = x.l.overflowing_add(y.l);
    let (l, c1) = l.overflowing_add(carry.l & 1);

    let (h, c2) = x.h.overflowing_add(y.h);
    let (h, c3) = h.overflowing_add((c0 | c1) as u64);

    (
        Uint128 { h, l },
        Uint128 {
            h: 0,
            l: (c2 | c3) as u64,
        },
    )
}

/// Three-operand addition: returns `(x + y + carry, carry_out)`.
///
/// `carry_out` is either `Uint128::ZERO` or `Uint128::ONE`. Only bit 0 of
/// `carry.l` is added.
#[cfg(feature = "speed")]
pub const fn add128(x: Uint128, y: Uint128, carry: Uint128) -> (Uint128, Uint128) {
    let (sum, c0) = x.to_u128().overflowing_add(y.to_u128());
    let (sum, c1) = sum.overflowing_add((carry.l & 1) as u128);

    (
        Uint128::from_u128(sum),
        Uint128 {
            h: 0,
            l: (c0 | c1) as u64,
        },
    )
}

/// Three-operand subtraction: returns `(x - y - borrow, borrow_out)`.
///
/// `borrow_out` is either `Uint128::ZERO` or `Uint128::ONE`. Only bit 0 of
/// `borrow.l` is subtracted.
#[cfg(not(feature = "speed"))]
pub const fn sub128(x: Uint128, y: Uint128, borrow: Uint128) -> (Uint128, Uint128) {
    let (l, b0) = x.l.overflowing_sub(y.l);
    let (l, b1) = l.overflowing_sub(borrow.l & 1);

    let (h, b2) = x.h.overflowing_sub(y.h);
    let (h, b3) = h.overflowing_sub((b0 | b1) as u64);

    (
        Uint128 { h, l },
        Uint128 {
            h: 0,
            l: (b2 | b3) as u64,
        },
    )
}

/// Three-operand subtraction: returns `(x - y - borrow, borrow_out)`.
///
/// `borrow_out` is either `Uint128::ZERO` or `Uint128::ONE`. Only bit 0 of
/// `borrow.l` is subtracted.
#[cfg(feature = "speed")]
pub const fn sub128(x: Uint128, y: Uint128, borrow: Uint128) -> (Uint128, Uint128) {
    let (diff, b0) = x.to_u128().overflowing_sub(y.to_u128());
    let (diff, b1) = diff.overflowing_sub((borrow.l & 1) as u128);

    (
        Uint128::from_u128(diff),
        Uint128 {
            h: 0,
            l: (b0 | b1) as u64,
        },
    )
}

impl Uint128 {
    /// Addition modulo 2¹²⁸.
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        add128(self, rhs, Uint128::ZERO).0
    }

    /// Addition returning the wrapped sum and whether it overflowed.
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (sum, carry) = add128(self, rhs, Uint128::ZERO);
        (sum, !carry.is_zero())
    }

    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Subtraction modulo 2¹²⁸.
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        sub128(self, rhs, Uint128::ZERO).0
    }

    /// Subtraction returning the wrapped difference and whether it
    /// underflowed.
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (diff, borrow) = sub128(self, rhs, Uint128::ZERO);
        (diff, !borrow.is_zero())
    }

    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Returns `self + 1`, wrapping `MAX` to `ZERO`.
    pub const fn incr(self) -> Self {
        self.wrapping_add(Uint128::ONE)
    }

    /// Returns `self - 1`, wrapping `ZERO` to `MAX`.
    pub const fn decr(self) -> Self {
        self.wrapping_sub(Uint128::ONE)
    }

    /// Bit clear: `self & !rhs`.
    pub const fn and_not(self, rhs: Self) -> Self {
        Uint128 {
            h: self.h & !rhs.h,
            l: self.l & !rhs.l,
        }
    }
}

/// Addition modulo 2¹²⁸. The carry-out is discarded.
impl Add for Uint128 {
    type Output = Uint128;

    fn add(self, rhs: Uint128) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for Uint128 {
    fn add_assign(&mut self, rhs: Uint128) {
        *self = self.wrapping_add(rhs);
    }
}

/// Subtraction modulo 2¹²⁸. The borrow-out is discarded.
impl Sub for Uint128 {
    type Output = Uint128;

    fn sub(self, rhs: Uint128) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for Uint128 {
    fn sub_assign(&mut self, rhs: Uint128) {
        *self = self.wrapping_sub(rhs);
    }
}

impl BitAnd for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: Uint128) -> Self::Output {
        Uint128 {
            h: self.h & rhs.h,
            l: self.l & rhs.l,
        }
    }
}

impl BitOr for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: Uint128) -> Self::Output {
        Uint128 {
            h: self.h | rhs.h,
            l: self.l | rhs.l,
        }
    }
}

impl BitXor for Uint128 {
    type Output = Uint128;

    fn bitxor(self, rhs: Uint128) -> Self::Output {
        Uint128 {
            h: self.h ^ rhs.h,
            l: self.l ^ rhs.l,
        }
    }
}

impl Not for Uint128 {
    type Output = Uint128;

    fn not(self) -> Self::Output {
        Uint128 {
            h: !self.h,
            l: !self.l,
        }
    }
}

/// Logical left shift.
///
/// Bits shifted out of the low word move into the high word. Shifts of
/// 128 bits or more yield zero.
impl Shl<u32> for Uint128 {
    type Output = Uint128;

    fn shl(self, shift: u32) -> Self::Output {
        match shift {
            0 => self,
            1..=63 => Uint128 {
                h: (self.h << shift) | (self.l >> (64 - shift)),
                l: self.l << shift,
            },
            64..=127 => Uint128 {
                h: self.l << (shift - 64),
                l: 0,
            },
            _ => Uint128::ZERO,
        }
    }
}

/// Logical right shift.
///
/// Bits shifted out of the high word move into the low word. Shifts of
/// 128 bits or more yield zero.
impl Shr<u32> for Uint128 {
    type Output = Uint128;

    fn shr(self, shift: u32) -> Self::Output {
        match shift {
            0 => self,
            1..=63 => Uint128 {
                h: self.h >> shift,
                l: (self.l >> shift) | (self.h << (64 - shift)),
            },
            64..=127 => Uint128 {
                h: 0,
                l: self.h >> (shift - 64),
            },
            _ => Uint128::ZERO,
        }
    }
}

impl ShlAssign<u32> for Uint128 {
    fn shl_assign(&mut self, shift: u32) {
        *self = *self << shift;
    }
}

impl ShrAssign<u32> for Uint128 {
    fn shr_assign(&mut self, shift: u32) {
        *self = *self >> shift;
    }
}
