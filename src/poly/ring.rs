use error::PolyError;
use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// Trait for coefficient rings.
///
/// All operations return fresh values. Exact division is fallible: it fails
/// when the divisor is zero or, in a ring that is not a field, when the
/// divisor does not divide the dividend.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Zero test used by the reduction engine. Exact rings ignore the
    /// tolerance; inexact ones treat everything within it as zero.
    fn is_negligible(&self, _tolerance: f64) -> bool {
        self.is_zero()
    }

    /// Exact division `self / other`.
    fn try_div(&self, other: &Self) -> Result<Self, PolyError>;
}

/// A ring with division with remainder.
pub trait EuclideanRing: Ring {
    /// Returns `(q, r)` with `self = q * other + r` and `r` smaller than `other`.
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), PolyError>;

    fn quotient(&self, other: &Self) -> Result<Self, PolyError> {
        Ok(self.div_rem(other)?.0)
    }

    fn remainder(&self, other: &Self) -> Result<Self, PolyError> {
        Ok(self.div_rem(other)?.1)
    }
}

/// A ring in which every nonzero element is invertible.
pub trait Field: EuclideanRing {
    fn inv(&self) -> Result<Self, PolyError>;
}

impl Ring for i64 {
    fn try_div(&self, other: &i64) -> Result<i64, PolyError> {
        if *other == 0 {
            return Err(PolyError::arithmetic("division by zero"));
        }
        match self.checked_rem(*other) {
            Some(0) => {}
            Some(_) => {
                return Err(PolyError::arithmetic(format!(
                    "{} is not divisible by {}",
                    self, other
                )))
            }
            None => {
                return Err(PolyError::arithmetic(format!(
                    "overflow in {} / {}",
                    self, other
                )))
            }
        }
        self.checked_div(*other)
            .ok_or_else(|| PolyError::arithmetic(format!("overflow in {} / {}", self, other)))
    }
}

impl EuclideanRing for i64 {
    /// Euclidean division: the remainder is always non-negative.
    fn div_rem(&self, other: &i64) -> Result<(i64, i64), PolyError> {
        if *other == 0 {
            return Err(PolyError::arithmetic("division by zero"));
        }
        match (self.checked_div_euclid(*other), self.checked_rem_euclid(*other)) {
            (Some(q), Some(r)) => Ok((q, r)),
            _ => Err(PolyError::arithmetic(format!(
                "overflow in {} / {}",
                self, other
            ))),
        }
    }
}

impl Ring for f64 {
    #[inline]
    fn is_negligible(&self, tolerance: f64) -> bool {
        self.abs() <= tolerance
    }

    fn try_div(&self, other: &f64) -> Result<f64, PolyError> {
        if *other == 0. {
            return Err(PolyError::arithmetic("division by zero"));
        }
        Ok(self / other)
    }
}

impl EuclideanRing for f64 {
    fn div_rem(&self, other: &f64) -> Result<(f64, f64), PolyError> {
        Ok((self.try_div(other)?, 0.))
    }
}

impl Field for f64 {
    fn inv(&self) -> Result<f64, PolyError> {
        f64::one().try_div(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::pow;

    #[test]
    fn integer_division() {
        assert_eq!(7i64.div_rem(&3), Ok((2, 1)));
        assert_eq!((-7i64).div_rem(&3), Ok((-3, 2)));
        assert_eq!(12i64.try_div(&4), Ok(3));
        assert!(12i64.try_div(&5).is_err());
        assert!(1i64.div_rem(&0).is_err());
        assert_eq!(pow(3i64, 5), 243);
        assert_eq!(pow(-2i64, 0), 1);
    }

    #[test]
    fn integer_overflow() {
        assert!(i64::min_value().try_div(&-1).is_err());
        assert!(i64::min_value().div_rem(&-1).is_err());
        assert_eq!(i64::min_value().try_div(&1), Ok(i64::min_value()));
        assert_eq!(i64::min_value().try_div(&2), Ok(i64::min_value() / 2));
    }

    #[test]
    fn float_tolerance() {
        assert!(1e-12f64.is_negligible(1e-9));
        assert!(!1e-12f64.is_negligible(0.));
        assert!(!1e-12f64.is_zero());
        assert_eq!(4f64.inv(), Ok(0.25));
        assert!(0f64.inv().is_err());
    }
}
