use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Add, Mul, Neg, Sub};

use itertools::Itertools;
use num_traits::pow;

use error::PolyError;
use poly::exponent::{self, Exponent};
use poly::raw::monomial::Monomial;
use poly::raw::order::MonomialOrder;
use poly::ring::{Field, Ring};

/// Multivariate polynomial with a degree sparse and variable dense representation.
///
/// Values are never modified by arithmetic: every operation builds a new
/// polynomial. Only `append_monomial` mutates, for use while constructing.
#[derive(Clone)]
pub struct MultivariatePolynomial<R: Ring, E: Exponent> {
    // Data format: the i-th monomial is stored as coefficients[i] and
    // exponents[i * nvars .. (i + 1) * nvars]. Terms are sorted ascending in lex
    // order via cmp_exponents() and no stored coefficient is zero.
    coefficients: Vec<R>,
    exponents: Vec<E>,
    nvars: usize,
}

impl<R: Ring, E: Exponent> MultivariatePolynomial<R, E> {
    /// Constructs a zero polynomial.
    #[inline]
    pub fn new() -> Self {
        Self::with_nvars(0)
    }

    /// Constructs a zero polynomial with the given number of variables.
    #[inline]
    pub fn with_nvars(nvars: usize) -> Self {
        Self {
            coefficients: Vec::new(),
            exponents: Vec::new(),
            nvars,
        }
    }

    /// Constructs a constant polynomial with the given number of variables.
    #[inline]
    pub fn from_constant_with_nvars(constant: R, nvars: usize) -> Self {
        Self::from_monomial(constant, vec![E::zero(); nvars])
    }

    /// Constructs a polynomial with a single term.
    #[inline]
    pub fn from_monomial(coefficient: R, exponents: Vec<E>) -> Self {
        if coefficient.is_zero() {
            return Self::with_nvars(exponents.len());
        }
        Self {
            coefficients: vec![coefficient],
            nvars: exponents.len(),
            exponents,
        }
    }

    /// Constructs the polynomial `x{var}`.
    pub fn var(var: usize, nvars: usize) -> Self {
        Self::from_monomial(R::one(), Monomial::var(var, nvars).into_exponents())
    }

    /// Constructs a polynomial from a list of terms. Terms with equal exponents
    /// are added together.
    pub fn from_terms<I>(nvars: usize, terms: I) -> Result<Self, PolyError>
    where
        I: IntoIterator<Item = (R, Vec<E>)>,
    {
        let mut res = Self::with_nvars(nvars);
        for (c, e) in terms {
            PolyError::check_nvars(nvars, e.len())?;
            res.append_monomial(c, e);
        }
        Ok(res)
    }

    /// Returns the number of terms in the polynomial.
    #[inline]
    pub fn nterms(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the number of variables in the polynomial.
    #[inline]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.nterms() == 1
            && self.coefficients[0].is_one()
            && self.exponents.iter().all(|x| x.is_zero())
    }

    /// Returns true if the polynomial is constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.get_constant().is_some()
    }

    #[inline]
    pub fn get_constant(&self) -> Option<R> {
        if self.is_zero() {
            return Some(R::zero());
        }
        if self.nterms() >= 2 {
            return None;
        }
        if self.exponents.iter().all(|e| e.is_zero()) {
            return Some(self.coefficients[0].clone());
        }
        None
    }

    /// Returns the coefficient of the specified term.
    #[inline]
    pub fn coefficient(&self, index: usize) -> &R {
        &self.coefficients[index]
    }

    /// Returns the slice for the exponents of the specified term.
    #[inline]
    pub fn exponents(&self, index: usize) -> &[E] {
        &self.exponents[index * self.nvars..(index + 1) * self.nvars]
    }

    /// Returns the coefficient of the term with the given exponents, if it occurs.
    pub fn coefficient_of(&self, exponents: &[E]) -> Option<&R> {
        if exponents.len() != self.nvars {
            return None;
        }
        match self.position(exponents) {
            Ok(i) => Some(&self.coefficients[i]),
            Err(_) => None,
        }
    }

    /// Returns the exponent vectors of all terms.
    pub fn monomials(&self) -> Vec<Monomial<E>> {
        (0..self.nterms())
            .map(|i| Monomial::new(self.exponents(i).to_vec()))
            .collect()
    }

    #[inline]
    pub fn iter(&self) -> Terms<R, E> {
        self.into_iter()
    }

    /// Compares exponent vectors of two monomials in the storage order.
    #[inline]
    fn cmp_exponents(a: &[E], b: &[E]) -> Ordering {
        debug_assert!(a.len() == b.len());
        a.cmp(b)
    }

    /// Binary search for the term with the given exponents. Returns the
    /// insert point if it does not occur.
    fn position(&self, exponents: &[E]) -> Result<usize, usize> {
        let mut l = 0;
        let mut r = self.nterms();
        while l < r {
            let m = (l + r) / 2;
            match Self::cmp_exponents(self.exponents(m), exponents) {
                Ordering::Less => l = m + 1,
                Ordering::Greater => r = m,
                Ordering::Equal => return Ok(m),
            }
        }
        Err(l)
    }

    fn remove_index(&mut self, index: usize) {
        self.coefficients.remove(index);
        let i = index * self.nvars;
        self.exponents.drain(i..i + self.nvars);
    }

    /// Keep only the terms whose coefficient satisfies `keep`.
    fn retain_terms<F: FnMut(&R) -> bool>(&mut self, mut keep: F) {
        let nvars = self.nvars;
        let mut new_coefficients = Vec::with_capacity(self.coefficients.len());
        let mut new_exponents = Vec::with_capacity(self.exponents.len());
        for (i, c) in mem::replace(&mut self.coefficients, vec![])
            .into_iter()
            .enumerate()
        {
            if keep(&c) {
                new_coefficients.push(c);
                new_exponents.extend_from_slice(&self.exponents[i * nvars..(i + 1) * nvars]);
            }
        }
        self.coefficients = new_coefficients;
        self.exponents = new_exponents;
    }

    /// Appends a monomial to the polynomial.
    ///
    /// # Panics
    ///
    /// Panics if the number of exponents does not match the number of variables.
    pub fn append_monomial(&mut self, coefficient: R, exponents: Vec<E>) {
        if coefficient.is_zero() {
            return;
        }
        if self.nvars != exponents.len() {
            panic!(
                "nvars mismatched: got {}, expected {}",
                exponents.len(),
                self.nvars
            );
        }

        match self.position(&exponents) {
            Ok(m) => {
                let new_coeff = mem::replace(&mut self.coefficients[m], R::zero()) + coefficient;
                if new_coeff.is_zero() {
                    // The coefficient becomes zero. Remove this monomial.
                    self.remove_index(m);
                } else {
                    self.coefficients[m] = new_coeff;
                }
            }
            Err(l) => {
                self.coefficients.insert(l, coefficient);
                let i = l * self.nvars;
                self.exponents.splice(i..i, exponents);
            }
        }
    }

    /// The total degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        (0..self.nterms())
            .map(|t| exponent::total_degree(self.exponents(t)))
            .max()
    }

    /// Get the degree of the variable `x`.
    /// This operation is O(n).
    pub fn degree_in(&self, x: usize) -> E {
        let mut max = E::zero();
        for t in 0..self.nterms() {
            if max < self.exponents(t)[x] {
                max = self.exponents(t)[x];
            }
        }
        max
    }

    /// Term indices sorted in descending order under `order`.
    pub fn descending_terms(&self, order: MonomialOrder) -> Vec<usize> {
        match order {
            MonomialOrder::Lex => (0..self.nterms()).rev().collect(),
            _ => (0..self.nterms())
                .sorted_by(|&i, &j| order.cmp_exponents(self.exponents(j), self.exponents(i)))
                .collect(),
        }
    }

    /// Index of the leading term under `order`.
    pub fn leading_term(&self, order: MonomialOrder) -> Option<usize> {
        if self.is_zero() {
            return None;
        }
        if order == MonomialOrder::Lex {
            return Some(self.nterms() - 1);
        }
        (0..self.nterms()).max_by(|&i, &j| order.cmp_exponents(self.exponents(i), self.exponents(j)))
    }

    pub fn leading_exponents(&self, order: MonomialOrder) -> Option<&[E]> {
        self.leading_term(order).map(|i| self.exponents(i))
    }

    /// The leading monomial l(f) under `order`.
    pub fn leading_monomial(&self, order: MonomialOrder) -> Option<Monomial<E>> {
        self.leading_exponents(order)
            .map(|e| Monomial::new(e.to_vec()))
    }

    /// The leading coefficient lc(f) under `order`.
    pub fn leading_coefficient(&self, order: MonomialOrder) -> Option<&R> {
        self.leading_term(order).map(|i| &self.coefficients[i])
    }

    /// Multiply every term by `coefficient * x^exponents`.
    pub fn mul_monomial(mut self, coefficient: &R, exponents: &[E]) -> Self {
        debug_assert!(self.nvars == exponents.len());
        if coefficient.is_zero() {
            return Self::with_nvars(self.nvars);
        }
        for c in &mut self.coefficients {
            *c = mem::replace(c, R::zero()) * coefficient.clone();
        }
        let nvars = self.nvars;
        for ee in self.exponents.chunks_mut(nvars.max(1)) {
            for (e1, e2) in ee.iter_mut().zip(exponents) {
                *e1 = e1.checked_add(e2).expect("overflow in adding exponents");
            }
        }
        // a ring with zero divisors can annihilate terms
        self.retain_terms(|c| !c.is_zero());
        self
    }

    /// Multiply all coefficients by `c`.
    pub fn scale(&self, c: &R) -> Self {
        self.clone().mul_monomial(c, &vec![E::zero(); self.nvars])
    }

    /// Remove the term with the given exponents, if it occurs.
    pub fn remove_term(mut self, exponents: &[E]) -> Self {
        if let Ok(i) = self.position(exponents) {
            self.remove_index(i);
        }
        self
    }

    /// Drop every term whose coefficient is negligible under `tolerance`.
    pub fn prune(mut self, tolerance: f64) -> Self {
        self.retain_terms(|c| !c.is_negligible(tolerance));
        self
    }

    /// Evaluate the polynomial at a point.
    pub fn evaluate(&self, point: &[R]) -> Result<R, PolyError> {
        PolyError::check_nvars(self.nvars, point.len())?;
        let mut res = R::zero();
        for t in self {
            let mut c = t.coefficient.clone();
            for (x, e) in point.iter().zip(t.exponents) {
                if !e.is_zero() {
                    c = c * pow(x.clone(), e.as_() as usize);
                }
            }
            res = res + c;
        }
        Ok(res)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, PolyError> {
        PolyError::check_nvars(self.nvars, other.nvars)?;
        Ok(self + other)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, PolyError> {
        PolyError::check_nvars(self.nvars, other.nvars)?;
        Ok(self - other)
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self, PolyError> {
        PolyError::check_nvars(self.nvars, other.nvars)?;
        Ok(self * other)
    }

    /// Merge two sorted term lists, negating the terms of `other` if requested.
    fn merge(&self, other: &Self, negate: bool) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return if negate { -other } else { other.clone() };
        }
        if self.nvars != other.nvars {
            panic!(
                "nvars mismatched: got {}, expected {}",
                other.nvars, self.nvars
            );
        }

        let mut new_coefficients = Vec::with_capacity(self.nterms() + other.nterms());
        let mut new_exponents: Vec<E> =
            Vec::with_capacity(self.nvars * (self.nterms() + other.nterms()));
        let other_coeff = |j: usize| {
            if negate {
                -other.coefficients[j].clone()
            } else {
                other.coefficients[j].clone()
            }
        };

        let mut i = 0;
        let mut j = 0;
        while i < self.nterms() && j < other.nterms() {
            match Self::cmp_exponents(self.exponents(i), other.exponents(j)) {
                Ordering::Less => {
                    new_coefficients.push(self.coefficients[i].clone());
                    new_exponents.extend_from_slice(self.exponents(i));
                    i += 1;
                }
                Ordering::Greater => {
                    new_coefficients.push(other_coeff(j));
                    new_exponents.extend_from_slice(other.exponents(j));
                    j += 1;
                }
                Ordering::Equal => {
                    let new_c = self.coefficients[i].clone() + other_coeff(j);
                    if !new_c.is_zero() {
                        new_coefficients.push(new_c);
                        new_exponents.extend_from_slice(self.exponents(i));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        // the excess terms are copied
        for i in i..self.nterms() {
            new_coefficients.push(self.coefficients[i].clone());
            new_exponents.extend_from_slice(self.exponents(i));
        }
        for j in j..other.nterms() {
            new_coefficients.push(other_coeff(j));
            new_exponents.extend_from_slice(other.exponents(j));
        }

        Self {
            coefficients: new_coefficients,
            exponents: new_exponents,
            nvars: self.nvars,
        }
    }
}

impl<R: Field, E: Exponent> MultivariatePolynomial<R, E> {
    /// Divide by the leading coefficient under `order`.
    pub fn make_monic(&self, order: MonomialOrder) -> Result<Self, PolyError> {
        match self.leading_coefficient(order) {
            None => Ok(self.clone()),
            Some(lc) if lc.is_one() => Ok(self.clone()),
            Some(lc) => Ok(self.scale(&lc.inv()?)),
        }
    }
}

impl<R: Ring, E: Exponent> Default for MultivariatePolynomial<R, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// View object for a term in a multivariate polynomial.
#[derive(Clone, Debug)]
pub struct Term<'a, R: 'a, E: 'a> {
    pub coefficient: &'a R,
    pub exponents: &'a [E],
}

/// Iterator over the terms of a multivariate polynomial, in storage order.
pub struct Terms<'a, R: 'a + Ring, E: 'a + Exponent> {
    poly: &'a MultivariatePolynomial<R, E>,
    index: usize,
}

impl<'a, R: Ring, E: Exponent> Iterator for Terms<'a, R, E> {
    type Item = Term<'a, R, E>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.poly.nterms() {
            None
        } else {
            let view = Term {
                coefficient: &self.poly.coefficients[self.index],
                exponents: self.poly.exponents(self.index),
            };
            self.index += 1;
            Some(view)
        }
    }
}

impl<'a, R: Ring, E: Exponent> IntoIterator for &'a MultivariatePolynomial<R, E> {
    type Item = Term<'a, R, E>;
    type IntoIter = Terms<'a, R, E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Terms {
            poly: self,
            index: 0,
        }
    }
}

impl<R: Ring, E: Exponent> fmt::Debug for MultivariatePolynomial<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "[]");
        }
        let mut first = true;
        write!(f, "[ ")?;
        for monomial in self {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{{ {:?}, {:?} }}",
                monomial.coefficient, monomial.exponents
            )?;
        }
        write!(f, " ]")
    }
}

impl<R: Ring, E: Exponent> fmt::Display for MultivariatePolynomial<R, E> {
    /// Prints the terms in descending lex order, as in `x0^2-3*x1+1`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut is_first_term = true;
        for t in (0..self.nterms()).rev() {
            let coefficient = &self.coefficients[t];
            let monomial = Monomial::new(self.exponents(t).to_vec());

            if monomial.is_one() {
                if is_first_term {
                    write!(f, "{}", coefficient)?;
                } else {
                    write!(f, "+({})", coefficient)?;
                }
            } else if coefficient.is_one() {
                if !is_first_term {
                    write!(f, "+")?;
                }
                write!(f, "{}", monomial)?;
            } else if *coefficient == -R::one() {
                write!(f, "-{}", monomial)?;
            } else {
                if !is_first_term {
                    write!(f, "+")?;
                }
                write!(f, "({})*{}", coefficient, monomial)?;
            }
            is_first_term = false;
        }
        if is_first_term {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl<R: Ring, E: Exponent> PartialEq for MultivariatePolynomial<R, E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.nvars != other.nvars {
            // zero polynomials of any arity are equal
            return self.is_zero() && other.is_zero();
        }
        self.exponents == other.exponents && self.coefficients == other.coefficients
    }
}

impl<R: Ring + Eq, E: Exponent> Eq for MultivariatePolynomial<R, E> {}

impl<'a, 'b, R: Ring, E: Exponent> Add<&'b MultivariatePolynomial<R, E>>
    for &'a MultivariatePolynomial<R, E>
{
    type Output = MultivariatePolynomial<R, E>;

    fn add(self, other: &'b MultivariatePolynomial<R, E>) -> Self::Output {
        self.merge(other, false)
    }
}

impl<R: Ring, E: Exponent> Add for MultivariatePolynomial<R, E> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        &self + &other
    }
}

impl<'a, 'b, R: Ring, E: Exponent> Sub<&'b MultivariatePolynomial<R, E>>
    for &'a MultivariatePolynomial<R, E>
{
    type Output = MultivariatePolynomial<R, E>;

    fn sub(self, other: &'b MultivariatePolynomial<R, E>) -> Self::Output {
        self.merge(other, true)
    }
}

impl<R: Ring, E: Exponent> Sub for MultivariatePolynomial<R, E> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        &self - &other
    }
}

impl<R: Ring, E: Exponent> Neg for MultivariatePolynomial<R, E> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        // Negate coefficients of all terms.
        for c in &mut self.coefficients {
            *c = -mem::replace(c, R::zero());
        }
        self
    }
}

impl<'a, R: Ring, E: Exponent> Neg for &'a MultivariatePolynomial<R, E> {
    type Output = MultivariatePolynomial<R, E>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<'a, 'b, R: Ring, E: Exponent> Mul<&'b MultivariatePolynomial<R, E>>
    for &'a MultivariatePolynomial<R, E>
{
    type Output = MultivariatePolynomial<R, E>;

    fn mul(self, other: &'b MultivariatePolynomial<R, E>) -> Self::Output {
        if self.is_zero() {
            return MultivariatePolynomial::with_nvars(other.nvars);
        }
        if other.is_zero() {
            return MultivariatePolynomial::with_nvars(self.nvars);
        }
        if self.nvars != other.nvars {
            panic!(
                "nvars mismatched: got {}, expected {}",
                other.nvars, self.nvars
            );
        }

        let mut new_poly = MultivariatePolynomial::with_nvars(self.nvars);
        for m in other {
            let p = self.clone().mul_monomial(m.coefficient, m.exponents);
            new_poly = &new_poly + &p;
        }
        new_poly
    }
}

impl<R: Ring, E: Exponent> Mul for MultivariatePolynomial<R, E> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        &self * &other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use poly::raw::fraction::Fraction;

    type P = MultivariatePolynomial<i64, u32>;

    fn poly(terms: &[(i64, [u32; 2])]) -> P {
        P::from_terms(2, terms.iter().map(|&(c, e)| (c, e.to_vec()))).unwrap()
    }

    #[test]
    fn construction() {
        let p = poly(&[(1, [0, 1]), (2, [1, 0]), (3, [0, 1]), (-2, [1, 0])]);
        assert_eq!(p.nterms(), 1);
        assert_eq!(p.coefficient_of(&[0, 1]), Some(&4));
        assert_eq!(p.coefficient_of(&[1, 0]), None);
        assert!(P::from_terms(2, vec![(1, vec![1])]).is_err());
        assert_eq!(P::with_nvars(2).degree(), None);
        assert_eq!(P::from_constant_with_nvars(5, 2).get_constant(), Some(5));
        assert!(P::from_constant_with_nvars(0, 2).is_zero());
    }

    #[test]
    fn arithmetic() {
        // (x + y)(x - y) = x^2 - y^2
        let a = poly(&[(1, [1, 0]), (1, [0, 1])]);
        let b = poly(&[(1, [1, 0]), (-1, [0, 1])]);
        assert_eq!(&a * &b, poly(&[(1, [2, 0]), (-1, [0, 2])]));
        assert_eq!(&a + &b, poly(&[(2, [1, 0])]));
        assert_eq!(&a - &b, poly(&[(2, [0, 1])]));
        assert!((&a - &a).is_zero());
        assert!((&a * &P::with_nvars(2)).is_zero());
        assert_eq!(-a.clone(), poly(&[(-1, [1, 0]), (-1, [0, 1])]));

        // operands are left untouched
        assert_eq!(a, poly(&[(1, [1, 0]), (1, [0, 1])]));

        assert!(a.checked_add(&P::var(0, 3)).is_err());
        assert!(a.checked_mul(&P::var(0, 3)).is_err());
        assert_eq!(a.checked_sub(&b), Ok(poly(&[(2, [0, 1])])));
    }

    #[test]
    fn leading_terms() {
        // x*y^2 + x^2 + y^3
        let p = poly(&[(3, [1, 2]), (1, [2, 0]), (5, [0, 3])]);
        assert_eq!(p.degree(), Some(3));
        assert_eq!(p.degree_in(1), 3);
        assert_eq!(
            p.leading_monomial(MonomialOrder::Lex),
            Some(Monomial::new(vec![2, 0]))
        );
        assert_eq!(p.leading_coefficient(MonomialOrder::Lex), Some(&1));
        assert_eq!(
            p.leading_monomial(MonomialOrder::DegLex),
            Some(Monomial::new(vec![1, 2]))
        );
        assert_eq!(
            p.leading_monomial(MonomialOrder::RevLex),
            Some(Monomial::new(vec![0, 3]))
        );
        let d = p.descending_terms(MonomialOrder::DegLex);
        assert_eq!(p.exponents(d[0]), &[1, 2]);
        assert_eq!(p.exponents(d[1]), &[0, 3]);
        assert_eq!(p.exponents(d[2]), &[2, 0]);
    }

    #[test]
    fn monic_and_evaluate() {
        let p = MultivariatePolynomial::from_terms(
            2,
            vec![
                (Fraction::from(2), vec![1u32, 0]),
                (Fraction::from(3), vec![0, 1]),
            ],
        )
        .unwrap();
        let m = p.make_monic(MonomialOrder::Lex).unwrap();
        assert_eq!(m.coefficient_of(&[1, 0]), Some(&Fraction::one()));
        assert_eq!(m.coefficient_of(&[0, 1]), Some(&Fraction::from((3, 2))));
        assert_eq!(
            p.evaluate(&[Fraction::from(1), Fraction::from(2)]),
            Ok(Fraction::from(8))
        );
        assert!(p.evaluate(&[Fraction::from(1)]).is_err());
    }

    #[test]
    fn prune() {
        let p = MultivariatePolynomial::from_terms(
            1,
            vec![(1e-12f64, vec![1u32]), (1., vec![0])],
        )
        .unwrap();
        assert_eq!(p.nterms(), 2);
        let p = p.prune(1e-9);
        assert_eq!(p.nterms(), 1);
        assert_eq!(p.get_constant(), Some(1.));
    }

    #[test]
    fn display() {
        let p = poly(&[(1, [2, 0]), (-3, [0, 1]), (1, [0, 0]), (-1, [1, 1])]);
        assert_eq!(format!("{}", p), "x0^2-x0*x1+(-3)*x1+(1)");
        assert_eq!(format!("{}", P::with_nvars(2)), "0");
    }
}
