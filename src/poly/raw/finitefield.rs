use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use error::PolyError;
use poly::raw::euclid;
use poly::ring::{EuclideanRing, Field, Ring};

/// An element of the prime field Z/pZ, stored as its representative in `[0, p)`.
///
/// The modulus is part of the type, so elements of different fields cannot
/// be mixed. `P` must be a prime below 2^63; inverting an element fails with
/// an arithmetic error when it is not.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FiniteField<const P: u64> {
    n: u64,
}

impl<const P: u64> FiniteField<P> {
    pub fn new(n: u64) -> FiniteField<P> {
        FiniteField { n: n % P }
    }

    /// Maps a signed integer into the field.
    pub fn from_i64(n: i64) -> FiniteField<P> {
        FiniteField {
            n: i128::from(n).rem_euclid(i128::from(P)) as u64,
        }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.n
    }

    #[inline]
    pub fn prime() -> u64 {
        P
    }

    /// Compute the multiplicative inverse of an element in the field, using
    /// the extended Euclidean algorithm on the representatives.
    pub fn inverse(n: u64) -> Result<u64, PolyError> {
        let (r, _, g) = euclid::extended_gcd(&(n as i64), &(P as i64))?;
        if g != 1 {
            return Err(PolyError::arithmetic(format!(
                "{} is not invertible in ring of size {}",
                n, P
            )));
        }
        Ok(r.rem_euclid(P as i64) as u64)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.n)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        FiniteField {
            n: ((u128::from(self.n) * u128::from(other.n)) % u128::from(P)) as u64,
        }
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        FiniteField {
            n: ((u128::from(self.n) + u128::from(other.n)) % u128::from(P)) as u64,
        }
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        FiniteField {
            n: if self.n >= other.n {
                self.n - other.n
            } else {
                self.n + (P - other.n)
            },
        }
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FiniteField {
            n: if self.n == 0 { 0 } else { P - self.n },
        }
    }
}

impl<const P: u64> Zero for FiniteField<P> {
    #[inline]
    fn zero() -> Self {
        FiniteField { n: 0 }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.n == 0
    }
}

impl<const P: u64> One for FiniteField<P> {
    #[inline]
    fn one() -> Self {
        FiniteField::new(1)
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn try_div(&self, other: &Self) -> Result<Self, PolyError> {
        Ok(*self * other.inv()?)
    }
}

impl<const P: u64> EuclideanRing for FiniteField<P> {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), PolyError> {
        Ok((self.try_div(other)?, FiniteField::zero()))
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Result<Self, PolyError> {
        if self.n == 0 {
            return Err(PolyError::arithmetic("0 is not invertible"));
        }
        Ok(FiniteField {
            n: FiniteField::<P>::inverse(self.n)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F7 = FiniteField<7>;

    #[test]
    fn arithmetic() {
        assert_eq!(F7::new(5) + F7::new(4), F7::new(2));
        assert_eq!(F7::new(2) - F7::new(5), F7::new(4));
        assert_eq!(F7::new(3) * F7::new(5), F7::new(1));
        assert_eq!(-F7::new(3), F7::new(4));
        assert_eq!(-F7::zero(), F7::zero());
        assert_eq!(F7::from_i64(-1), F7::new(6));
    }

    #[test]
    fn inverse() {
        for n in 1..7 {
            let x = F7::new(n);
            assert_eq!(x * x.inv().unwrap(), F7::one());
        }
        assert!(F7::zero().inv().is_err());
        // 2 has no inverse modulo 6
        assert!(FiniteField::<6>::new(2).inv().is_err());
    }
}
