//! Exact fixed-point scalars for orientation-critical arithmetic.
//!
//! Purpose
//! - Coordinates live on a fixed grid with `FRACTION_BITS` binary digits after
//!   the point, stored as `i64`. Differences of coordinates stay in `i64`;
//!   products of differences are widened to `i128`.
//! - Every sign that decides orientation or crossing is therefore computed
//!   without rounding. No tolerances anywhere.
//!
//! Degrees
//! - `ScalarDeg1`: an input coordinate or the difference of two coordinates.
//! - `ScalarDeg2`: a product of two degree-1 values, or a sum/difference of such
//!   products (a cross or dot product of two vectors).
//!
//! Headroom
//! - Coordinates satisfy `|raw| <= MAX_RAW = 2^61`, so differences are below
//!   `2^62`, products below `2^124` and the difference of two products below
//!   `2^125`, which fits `i128`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg, Sub};

use thiserror::Error;

/// Number of binary fraction digits of a coordinate.
pub const FRACTION_BITS: u32 = 24;

/// Largest raw magnitude accepted for a coordinate.
pub const MAX_RAW: i64 = 1 << 61;

const SCALE_DEG1: f64 = (1u64 << FRACTION_BITS) as f64;
const SCALE_DEG2: f64 = SCALE_DEG1 * SCALE_DEG1;

/// Conversion failures into the fixed-point domain.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ScalarError {
    #[error("coordinate {0} is not finite")]
    NotFinite(f64),
    #[error("coordinate {0} is outside the representable range")]
    OutOfRange(f64),
    #[error("raw coordinate {0} exceeds the fixed-point domain")]
    RawOutOfRange(i64),
}

/// Degree-1 fixed-point scalar (`raw * 2^-FRACTION_BITS`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScalarDeg1(i64);

impl ScalarDeg1 {
    pub const ZERO: ScalarDeg1 = ScalarDeg1(0);

    /// Smallest positive representable value.
    pub const EPSILON: ScalarDeg1 = ScalarDeg1(1);

    /// Construct from a raw grid value; rejects values outside the coordinate domain.
    pub fn from_raw(raw: i64) -> Result<Self, ScalarError> {
        if raw.unsigned_abs() > MAX_RAW as u64 {
            return Err(ScalarError::RawOutOfRange(raw));
        }
        Ok(Self(raw))
    }

    /// Round `value` to the nearest grid point.
    pub fn try_from_f64(value: f64) -> Result<Self, ScalarError> {
        if !value.is_finite() {
            return Err(ScalarError::NotFinite(value));
        }
        let scaled = (value * SCALE_DEG1).round();
        if scaled.abs() > MAX_RAW as f64 {
            return Err(ScalarError::OutOfRange(value));
        }
        Ok(Self(scaled as i64))
    }

    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE_DEG1
    }
}

impl Sub for ScalarDeg1 {
    type Output = ScalarDeg1;
    /// Difference of two coordinates. Fits `i64` because both operands are
    /// bounded by `MAX_RAW`.
    #[inline]
    fn sub(self, rhs: ScalarDeg1) -> ScalarDeg1 {
        ScalarDeg1(self.0 - rhs.0)
    }
}

impl Neg for ScalarDeg1 {
    type Output = ScalarDeg1;
    #[inline]
    fn neg(self) -> ScalarDeg1 {
        ScalarDeg1(-self.0)
    }
}

impl Mul for ScalarDeg1 {
    type Output = ScalarDeg2;
    #[inline]
    fn mul(self, rhs: ScalarDeg1) -> ScalarDeg2 {
        ScalarDeg2(i128::from(self.0) * i128::from(rhs.0))
    }
}

impl fmt::Display for ScalarDeg1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// Degree-2 fixed-point scalar (`raw * 2^-(2 * FRACTION_BITS)`).
///
/// Only produced by multiplying degree-1 values, so its sign is always exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScalarDeg2(i128);

impl ScalarDeg2 {
    pub const ZERO: ScalarDeg2 = ScalarDeg2(0);

    #[inline]
    pub fn raw(self) -> i128 {
        self.0
    }

    /// Sign as an ordering against zero.
    #[inline]
    pub fn sign(self) -> Ordering {
        self.0.cmp(&0)
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Two's-complement sum. Intermediate wraps cancel whenever the final
    /// value of an accumulation fits `i128`.
    #[inline]
    pub fn wrapping_add(self, rhs: ScalarDeg2) -> ScalarDeg2 {
        ScalarDeg2(self.0.wrapping_add(rhs.0))
    }

    /// Lossy conversion, for display and reporting only.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE_DEG2
    }
}

impl std::ops::Add for ScalarDeg2 {
    type Output = ScalarDeg2;
    #[inline]
    fn add(self, rhs: ScalarDeg2) -> ScalarDeg2 {
        ScalarDeg2(self.0 + rhs.0)
    }
}

impl Sub for ScalarDeg2 {
    type Output = ScalarDeg2;
    #[inline]
    fn sub(self, rhs: ScalarDeg2) -> ScalarDeg2 {
        ScalarDeg2(self.0 - rhs.0)
    }
}

impl Neg for ScalarDeg2 {
    type Output = ScalarDeg2;
    #[inline]
    fn neg(self) -> ScalarDeg2 {
        ScalarDeg2(-self.0)
    }
}

impl fmt::Display for ScalarDeg2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_round_trips_on_grid() {
        let s = ScalarDeg1::try_from_f64(1.5).unwrap();
        assert_eq!(s.raw(), 3 << (FRACTION_BITS - 1));
        assert_eq!(s.to_f64(), 1.5);
        let t = ScalarDeg1::try_from_f64(-0.25).unwrap();
        assert_eq!(t.to_f64(), -0.25);
    }

    #[test]
    fn rejects_non_finite_and_out_of_range() {
        assert!(matches!(
            ScalarDeg1::try_from_f64(f64::NAN),
            Err(ScalarError::NotFinite(_))
        ));
        assert!(matches!(
            ScalarDeg1::try_from_f64(f64::INFINITY),
            Err(ScalarError::NotFinite(_))
        ));
        assert!(matches!(
            ScalarDeg1::try_from_f64(1e300),
            Err(ScalarError::OutOfRange(_))
        ));
        assert!(ScalarDeg1::from_raw(MAX_RAW).is_ok());
        assert!(ScalarDeg1::from_raw(-MAX_RAW).is_ok());
        assert_eq!(
            ScalarDeg1::from_raw(MAX_RAW + 1),
            Err(ScalarError::RawOutOfRange(MAX_RAW + 1))
        );
    }

    #[test]
    fn extreme_products_do_not_overflow() {
        let hi = ScalarDeg1::from_raw(MAX_RAW).unwrap();
        let lo = ScalarDeg1::from_raw(-MAX_RAW).unwrap();
        let d = hi - lo;
        assert_eq!(d.raw(), 2 * MAX_RAW);
        // Worst case of a 2x2 determinant: d*d - (-d)*d.
        let det = d * d - (-d) * d;
        assert!(det.is_positive());
        assert_eq!(det.raw(), 2 * i128::from(2 * MAX_RAW) * i128::from(2 * MAX_RAW));
    }

    #[test]
    fn tiny_determinants_keep_their_sign() {
        // A product that an f64 evaluation at this magnitude would round to zero.
        let big = ScalarDeg1::from_raw(1 << 60).unwrap();
        let big1 = ScalarDeg1::from_raw((1 << 60) + 1).unwrap();
        let det = big1 * big1 - big * big;
        assert!(det.is_positive());
        assert_eq!(det.sign(), Ordering::Greater);
        assert!((big * big - big1 * big1).is_negative());
        assert!((big * big1 - big1 * big).is_zero());
    }
}
