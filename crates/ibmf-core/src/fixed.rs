//! 26.6 fixed-point numbers.
//!
//! IBMF stores advances, kerning values and the em size with 6 fractional
//! bits: a raw value of 64 is one pixel.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 6;

/// Raw value of one pixel.
pub const ONE: i32 = 1 << FRAC_BITS;

const HALF: i32 = ONE / 2;

/// A signed 26.6 fixed-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fix16(i32);

impl Fix16 {
    pub const ZERO: Fix16 = Fix16(0);
    pub const MAX: Fix16 = Fix16(i32::MAX);
    pub const MIN: Fix16 = Fix16(i32::MIN);

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fix16(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whole pixels to fixed point, saturating outside the 26-bit range.
    #[inline]
    pub const fn from_pixels(pixels: i32) -> Self {
        if pixels > i32::MAX >> FRAC_BITS {
            Self::MAX
        } else if pixels < i32::MIN >> FRAC_BITS {
            Self::MIN
        } else {
            Fix16(pixels << FRAC_BITS)
        }
    }

    pub fn from_f32(value: f32) -> Self {
        Fix16((value * ONE as f32).round() as i32)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / ONE as f32
    }

    /// `(v + 32) >> 6`: rounds half up, floors negative values.
    ///
    /// This is how IBMF turns advances into pixel steps.
    #[inline]
    pub const fn round_shift(self) -> i32 {
        ((self.0 as i64 + HALF as i64) >> FRAC_BITS) as i32
    }

    /// Rounds half away from zero.
    ///
    /// Used for kerning shifts so that `-0.5` and `0.5` move the pen by the
    /// same distance in opposite directions.
    #[inline]
    pub const fn to_pixels_round(self) -> i32 {
        let bias = if self.0 < 0 { -HALF } else { HALF };
        ((self.0 as i64 + bias as i64) / ONE as i64) as i32
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Fix16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_f32())
    }
}

impl Add for Fix16 {
    type Output = Fix16;

    fn add(self, rhs: Fix16) -> Fix16 {
        Fix16(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Fix16 {
    fn add_assign(&mut self, rhs: Fix16) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Fix16 {
    type Output = Fix16;

    fn sub(self, rhs: Fix16) -> Fix16 {
        Fix16(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Fix16 {
    fn sub_assign(&mut self, rhs: Fix16) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Fix16 {
    type Output = Fix16;

    fn neg(self) -> Fix16 {
        Fix16(self.0.saturating_neg())
    }
}
