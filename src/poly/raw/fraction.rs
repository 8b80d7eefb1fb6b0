//! Exact rational coefficients.

use rug::Rational;

use error::PolyError;
use poly::ring::{EuclideanRing, Field, Ring};

/// A rational number with arbitrary precision numerator and denominator,
/// always kept in lowest terms with a positive denominator.
pub type Fraction = Rational;

impl Ring for Rational {
    fn try_div(&self, other: &Rational) -> Result<Rational, PolyError> {
        Ok(self.clone() * other.inv()?)
    }
}

impl EuclideanRing for Rational {
    fn div_rem(&self, other: &Rational) -> Result<(Rational, Rational), PolyError> {
        Ok((self.try_div(other)?, Rational::new()))
    }
}

impl Field for Rational {
    fn inv(&self) -> Result<Rational, PolyError> {
        if *self == 0 {
            return Err(PolyError::arithmetic("0 is not invertible"));
        }
        Ok(self.clone().recip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};
    use poly::raw::groebner::groebner_basis;
    use poly::raw::multivar::MultivariatePolynomial;
    use poly::raw::order::MonomialOrder;
    use rug::Integer;

    #[test]
    fn normalization() {
        let a = Fraction::from((6, -4));
        assert_eq!(*a.numer(), -3);
        assert_eq!(*a.denom(), 2);
        assert_eq!(Fraction::from((0, -5)), Fraction::zero());
    }

    #[test]
    fn arithmetic() {
        let a = Fraction::from((1, 2));
        let b = Fraction::from((1, 3));
        assert_eq!(a.clone() + b.clone(), Fraction::from((5, 6)));
        assert_eq!(a.clone() - b.clone(), Fraction::from((1, 6)));
        assert_eq!(a.clone() * b.clone(), Fraction::from((1, 6)));
        assert_eq!(a.try_div(&b), Ok(Fraction::from((3, 2))));
        assert_eq!(a.inv(), Ok(Fraction::from(2)));
        assert!(Fraction::zero().inv().is_err());
        assert!(a.try_div(&Fraction::zero()).is_err());
        assert!(Fraction::from((2, 2)).is_one());
        assert_eq!(format!("{}", Fraction::from((-4, 2))), "-2");
        assert_eq!(format!("{}", Fraction::from((3, 9))), "1/3");
    }

    #[test]
    fn no_overflow() {
        // (2^40 / 3)^4 does not fit in 64 bits
        let x = Fraction::from((Integer::from(1) << 40u32, Integer::from(3)));
        let y = x.clone() * x.clone() * x.clone() * x;
        assert_eq!(*y.denom(), 81);
        assert_eq!(*y.numer(), Integer::from(1) << 160u32);
        assert_eq!(y.inv().unwrap().inv().unwrap(), y);
    }

    #[test]
    fn rational_basis() {
        let f = MultivariatePolynomial::from_terms(
            2,
            vec![
                (Fraction::from(1), vec![2u32, 0]),
                (Fraction::from(1), vec![0, 2]),
                (Fraction::from(-1), vec![0, 0]),
            ],
        )
        .unwrap();
        let g = MultivariatePolynomial::from_terms(
            2,
            vec![(Fraction::from(1), vec![1u32, 0]), (Fraction::from(-1), vec![0, 1])],
        )
        .unwrap();
        let basis = groebner_basis(&[f, g], MonomialOrder::Lex).unwrap();
        assert_eq!(basis.len(), 2);
        assert_eq!(
            basis[1].coefficient_of(&[0, 0]),
            Some(&Fraction::from((-1, 2)))
        );
    }
}
