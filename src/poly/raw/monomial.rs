use std::fmt;
use std::ops::Mul;

use error::PolyError;
use poly::exponent::{self, Exponent};

/// A monomial `x0^e0 * x1^e1 * ... * x{n-1}^e{n-1}`, identified by its
/// exponent vector. Monomials are only meaningful relative to others of the
/// same arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Monomial<E: Exponent> {
    exponents: Vec<E>,
}

impl<E: Exponent> Monomial<E> {
    #[inline]
    pub fn new(exponents: Vec<E>) -> Monomial<E> {
        Monomial { exponents }
    }

    /// The monomial 1 in `nvars` variables.
    pub fn one(nvars: usize) -> Monomial<E> {
        Monomial {
            exponents: vec![E::zero(); nvars],
        }
    }

    /// The variable `x{var}` in `nvars` variables.
    pub fn var(var: usize, nvars: usize) -> Monomial<E> {
        assert!(var < nvars, "variable {} out of range {}", var, nvars);
        let mut exponents = vec![E::zero(); nvars];
        exponents[var] = E::one();
        Monomial { exponents }
    }

    #[inline]
    pub fn exponents(&self) -> &[E] {
        &self.exponents
    }

    #[inline]
    pub fn into_exponents(self) -> Vec<E> {
        self.exponents
    }

    #[inline]
    pub fn nvars(&self) -> usize {
        self.exponents.len()
    }

    #[inline]
    pub fn total_degree(&self) -> u32 {
        exponent::total_degree(&self.exponents)
    }

    pub fn is_one(&self) -> bool {
        self.exponents.iter().all(|e| e.is_zero())
    }

    /// Returns true if `self` divides `other`.
    #[inline]
    pub fn divides(&self, other: &[E]) -> bool {
        divides(&self.exponents, other)
    }

    /// Returns `self / other` if `other` divides `self`.
    pub fn checked_div(&self, other: &Monomial<E>) -> Option<Monomial<E>> {
        if self.nvars() != other.nvars() || !other.divides(&self.exponents) {
            return None;
        }
        Some(Monomial {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(a, b)| *a - *b)
                .collect(),
        })
    }

    /// The least common multiple: the componentwise maximum.
    pub fn lcm(&self, other: &Monomial<E>) -> Monomial<E> {
        debug_assert_eq!(self.nvars(), other.nvars());
        Monomial {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(a, b)| *a.max(b))
                .collect(),
        }
    }

    /// Returns true if no variable occurs in both monomials.
    pub fn is_coprime(&self, other: &Monomial<E>) -> bool {
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(a, b)| a.is_zero() || b.is_zero())
    }

    pub fn checked_mul(&self, other: &Monomial<E>) -> Result<Monomial<E>, PolyError> {
        PolyError::check_nvars(self.nvars(), other.nvars())?;
        Ok(self * other)
    }
}

/// Returns true if the monomial with exponents `a` divides the one with exponents `b`.
#[inline]
pub fn divides<E: Exponent>(a: &[E], b: &[E]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(x, y)| x <= y)
}

impl<E: Exponent> From<Vec<E>> for Monomial<E> {
    fn from(exponents: Vec<E>) -> Monomial<E> {
        Monomial::new(exponents)
    }
}

impl<'a, 'b, E: Exponent> Mul<&'b Monomial<E>> for &'a Monomial<E> {
    type Output = Monomial<E>;

    /// # Panics
    ///
    /// Panics if the arities differ or an exponent overflows.
    fn mul(self, other: &'b Monomial<E>) -> Monomial<E> {
        assert_eq!(self.nvars(), other.nvars(), "nvars mismatched");
        Monomial {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(a, b)| a.checked_add(b).expect("overflow in adding exponents"))
                .collect(),
        }
    }
}

impl<E: Exponent> Mul for Monomial<E> {
    type Output = Monomial<E>;

    fn mul(self, other: Monomial<E>) -> Monomial<E> {
        &self * &other
    }
}

impl<E: Exponent> fmt::Display for Monomial<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut is_first_factor = true;
        for (i, e) in self.exponents.iter().enumerate() {
            if e.is_zero() {
                continue;
            }
            if !is_first_factor {
                write!(f, "*")?;
            }
            is_first_factor = false;
            write!(f, "x{}", i)?;
            if !e.is_one() {
                write!(f, "^{}", e)?;
            }
        }
        if is_first_factor {
            write!(f, "1")?;
        }
        Ok(())
    }
}
