//! Dense univariate polynomials.

use std::cmp;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use error::PolyError;
use poly::exponent::Exponent;
use poly::raw::multivar::MultivariatePolynomial;
use poly::ring::{EuclideanRing, Field, Ring};

/// A univariate polynomial stored as its dense list of coefficients, lowest
/// degree first. The list never ends in a zero, so the zero polynomial is the
/// empty list.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct UnivariatePolynomial<R: Ring> {
    coefficients: Vec<R>,
}

impl<R: Ring> UnivariatePolynomial<R> {
    /// Build the polynomial `sum coefficients[i] * x^i`, trimming zero
    /// high-order coefficients.
    pub fn representative(mut coefficients: Vec<R>) -> Self {
        while coefficients.last().map_or(false, |c| c.is_zero()) {
            coefficients.pop();
        }
        UnivariatePolynomial { coefficients }
    }

    pub fn constant(c: R) -> Self {
        Self::representative(vec![c])
    }

    /// The polynomial `c * x^degree`.
    pub fn monomial(c: R, degree: usize) -> Self {
        let mut coefficients = vec![R::zero(); degree + 1];
        coefficients[degree] = c;
        Self::representative(coefficients)
    }

    #[inline]
    pub fn coefficients(&self) -> &[R] {
        &self.coefficients
    }

    /// The coefficient of `x^i`.
    pub fn coefficient(&self, i: usize) -> R {
        self.coefficients.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// The degree, or `None` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn leading_coefficient(&self) -> Option<&R> {
        self.coefficients.last()
    }

    /// Evaluate with Horner's scheme.
    pub fn evaluate(&self, x: &R) -> R {
        self.coefficients
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    pub fn scale(&self, c: &R) -> Self {
        Self::representative(
            self.coefficients
                .iter()
                .map(|x| x.clone() * c.clone())
                .collect(),
        )
    }

    /// Multiply by convolving the coefficient lists.
    pub fn mul_convolution(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::representative(convolution(&self.coefficients, &other.coefficients))
    }

    /// Multiply with Karatsuba's algorithm. The result is identical to
    /// `mul_convolution`.
    pub fn mul_karatsuba(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::representative(karatsuba(&self.coefficients, &other.coefficients))
    }

    /// Convert to a sparse polynomial in one variable.
    pub fn to_multivariate<E: Exponent>(&self) -> MultivariatePolynomial<R, E> {
        let mut res = MultivariatePolynomial::with_nvars(1);
        for (i, c) in self.coefficients.iter().enumerate() {
            let e = E::from_usize(i).expect("degree does not fit in the exponent type");
            res.append_monomial(c.clone(), vec![e]);
        }
        res
    }

    /// Convert from a sparse polynomial, which must have exactly one variable.
    pub fn from_multivariate<E: Exponent>(
        p: &MultivariatePolynomial<R, E>,
    ) -> Result<Self, PolyError> {
        if p.is_zero() {
            return Ok(Self::zero());
        }
        PolyError::check_nvars(1, p.nvars())?;

        let mut coefficients = vec![R::zero(); p.degree_in(0).as_() as usize + 1];
        for t in p {
            coefficients[t.exponents[0].as_() as usize] = t.coefficient.clone();
        }
        Ok(Self::representative(coefficients))
    }
}

impl<R: Field> UnivariatePolynomial<R> {
    /// Euclidean division: returns `(q, r)` with `self = q * divisor + r` and
    /// `r` zero or of lower degree than `divisor`.
    pub fn divmod(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let n = match divisor.degree() {
            Some(n) => n,
            None => return Err(PolyError::arithmetic("division by zero polynomial")),
        };
        let m = match self.degree() {
            Some(m) if m >= n => m,
            _ => return Ok((Self::zero(), self.clone())),
        };

        let lc_inv = divisor.coefficients[n].inv()?;
        let mut quotient = vec![R::zero(); m - n + 1];
        let mut remainder = self.coefficients.clone();

        for k in (0..m - n + 1).rev() {
            if remainder.iter().all(|c| c.is_zero()) {
                // the rest of the quotient stays zero
                break;
            }

            let q = remainder[n + k].clone() * lc_inv.clone();
            if q.is_zero() {
                continue;
            }
            for (j, c) in divisor.coefficients.iter().enumerate() {
                remainder[j + k] = remainder[j + k].clone() - q.clone() * c.clone();
            }
            // exact, also for inexact coefficients
            remainder[n + k] = R::zero();
            quotient[k] = q;
        }

        remainder.truncate(n);
        Ok((
            Self::representative(quotient),
            Self::representative(remainder),
        ))
    }

    pub fn quotient(&self, divisor: &Self) -> Result<Self, PolyError> {
        Ok(self.divmod(divisor)?.0)
    }

    pub fn modulo(&self, divisor: &Self) -> Result<Self, PolyError> {
        Ok(self.divmod(divisor)?.1)
    }

    /// Divide by the leading coefficient.
    pub fn make_monic(&self) -> Result<Self, PolyError> {
        match self.leading_coefficient() {
            None => Ok(self.clone()),
            Some(lc) => Ok(self.scale(&lc.inv()?)),
        }
    }
}

/// Schoolbook product: `result[i] = sum_k a[k] * b[i - k]`.
fn convolution<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }
    let mut result = vec![R::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            result[i + j] = result[i + j].clone() + x.clone() * y.clone();
        }
    }
    result
}

/// Karatsuba product. Both operands are split at `h = ceil(n / 2)`, with `n`
/// the longest length, into `a = a1 * x^h + a0` and `b = b1 * x^h + b0`:
/// `ab = ac * x^2h + (t - ac - bd) * x^h + bd` with `ac = a1 * b1`,
/// `bd = a0 * b0` and `t = (a1 + a0)(b1 + b0)`.
fn karatsuba<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }
    if a.len() == 1 || b.len() == 1 {
        return convolution(a, b);
    }

    let half = (cmp::max(a.len(), b.len()) + 1) / 2;
    let (a0, a1) = a.split_at(cmp::min(half, a.len()));
    let (b0, b1) = b.split_at(cmp::min(half, b.len()));

    let ac = karatsuba(a1, b1);
    let bd = karatsuba(a0, b0);
    let t = karatsuba(&add_slices(a1, a0), &add_slices(b1, b0));

    // the partial products may reach past the final length, where they cancel
    let len = cmp::max(
        cmp::max(bd.len(), half + t.len()),
        2 * half + ac.len(),
    );
    let mut result = vec![R::zero(); len];
    accumulate(&mut result, &bd, 0, false);
    accumulate(&mut result, &t, half, false);
    accumulate(&mut result, &ac, half, true);
    accumulate(&mut result, &bd, half, true);
    accumulate(&mut result, &ac, 2 * half, false);
    result.truncate(a.len() + b.len() - 1);
    result
}

fn add_slices<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut res = long.to_vec();
    for (x, y) in res.iter_mut().zip(short) {
        *x = x.clone() + y.clone();
    }
    res
}

fn accumulate<R: Ring>(target: &mut [R], source: &[R], offset: usize, subtract: bool) {
    for (i, c) in source.iter().enumerate() {
        let t = &mut target[i + offset];
        *t = if subtract {
            t.clone() - c.clone()
        } else {
            t.clone() + c.clone()
        };
    }
}

impl<R: Ring> fmt::Display for UnivariatePolynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_multivariate::<u32>())
    }
}

impl<'a, 'b, R: Ring> Add<&'b UnivariatePolynomial<R>> for &'a UnivariatePolynomial<R> {
    type Output = UnivariatePolynomial<R>;

    fn add(self, other: &'b UnivariatePolynomial<R>) -> Self::Output {
        let mut res = self.coefficients.clone();
        for (i, c) in other.coefficients.iter().enumerate() {
            if i < res.len() {
                res[i] = res[i].clone() + c.clone();
            } else {
                res.push(c.clone());
            }
        }
        UnivariatePolynomial::representative(res)
    }
}

impl<'a, 'b, R: Ring> Sub<&'b UnivariatePolynomial<R>> for &'a UnivariatePolynomial<R> {
    type Output = UnivariatePolynomial<R>;

    fn sub(self, other: &'b UnivariatePolynomial<R>) -> Self::Output {
        let mut res = self.coefficients.clone();
        for (i, c) in other.coefficients.iter().enumerate() {
            if i < res.len() {
                res[i] = res[i].clone() - c.clone();
            } else {
                res.push(-c.clone());
            }
        }
        UnivariatePolynomial::representative(res)
    }
}

impl<'a, 'b, R: Ring> Mul<&'b UnivariatePolynomial<R>> for &'a UnivariatePolynomial<R> {
    type Output = UnivariatePolynomial<R>;

    fn mul(self, other: &'b UnivariatePolynomial<R>) -> Self::Output {
        self.mul_convolution(other)
    }
}

impl<R: Ring> Add for UnivariatePolynomial<R> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl<R: Ring> Sub for UnivariatePolynomial<R> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl<R: Ring> Mul for UnivariatePolynomial<R> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl<R: Ring> Neg for UnivariatePolynomial<R> {
    type Output = Self;

    fn neg(self) -> Self {
        UnivariatePolynomial {
            coefficients: self.coefficients.into_iter().map(|c| -c).collect(),
        }
    }
}

impl<R: Ring> Zero for UnivariatePolynomial<R> {
    #[inline]
    fn zero() -> Self {
        UnivariatePolynomial {
            coefficients: vec![],
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl<R: Ring> One for UnivariatePolynomial<R> {
    fn one() -> Self {
        UnivariatePolynomial::constant(R::one())
    }
}

impl<R: Field> Ring for UnivariatePolynomial<R> {
    /// Exact division, failing when the remainder is not zero.
    fn try_div(&self, other: &Self) -> Result<Self, PolyError> {
        let (q, r) = self.divmod(other)?;
        if !r.is_zero() {
            return Err(PolyError::arithmetic(format!(
                "{} is not divisible by {}",
                self, other
            )));
        }
        Ok(q)
    }
}

impl<R: Field> EuclideanRing for UnivariatePolynomial<R> {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), PolyError> {
        self.divmod(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poly::raw::crt;
    use poly::raw::euclid;
    use poly::raw::fraction::Fraction;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    type Q = UnivariatePolynomial<Fraction>;

    fn q(coeffs: &[i64]) -> Q {
        UnivariatePolynomial::representative(coeffs.iter().map(|&c| Fraction::from(c)).collect())
    }

    #[test]
    fn representative() {
        let p = UnivariatePolynomial::representative(vec![1i64, 2, 0, 0]);
        assert_eq!(p.coefficients(), &[1, 2]);
        assert_eq!(p.degree(), Some(1));
        let z = UnivariatePolynomial::representative(vec![0i64, 0]);
        assert!(z.is_zero());
        assert_eq!(z.degree(), None);
        assert_eq!(z, UnivariatePolynomial::zero());
    }

    #[test]
    fn arithmetic() {
        let a = UnivariatePolynomial::representative(vec![1i64, 2, 3]);
        let b = UnivariatePolynomial::representative(vec![-1i64, 0, -3, 4]);
        assert_eq!((&a + &b).coefficients(), &[0, 2, 0, 4]);
        assert_eq!((&a - &a), UnivariatePolynomial::zero());
        assert_eq!((&b - &a).coefficients(), &[-2, -2, -6, 4]);
        assert_eq!((&a * &b).coefficients(), &[-1, -2, -6, -2, -1, 12]);
        assert!((&a * &UnivariatePolynomial::zero()).is_zero());
        assert_eq!(a.evaluate(&2), 17);
    }

    #[test]
    fn karatsuba_agrees() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let n = rng.gen_range(0..24);
            let m = rng.gen_range(0..24);
            let a = UnivariatePolynomial::representative(
                (0..n).map(|_| rng.gen_range(-50i64..50)).collect(),
            );
            let b = UnivariatePolynomial::representative(
                (0..m).map(|_| rng.gen_range(-50i64..50)).collect(),
            );
            assert_eq!(a.mul_karatsuba(&b), a.mul_convolution(&b));
        }
    }

    #[test]
    fn division() {
        // (x^2 + 3x + 2) / (x + 1) = x + 2
        let (quo, rem) = q(&[2, 3, 1]).divmod(&q(&[1, 1])).unwrap();
        assert_eq!(quo, q(&[2, 1]));
        assert!(rem.is_zero());

        // (x^3 - 2x + 5) / (2x^2 + 1)
        let f = q(&[5, -2, 0, 1]);
        let g = q(&[1, 0, 2]);
        let (quo, rem) = f.divmod(&g).unwrap();
        assert_eq!(&(&quo * &g) + &rem, f);
        assert!(rem.degree() < g.degree());

        assert_eq!(g.divmod(&f).unwrap(), (Q::zero(), g.clone()));
        assert!(f.divmod(&Q::zero()).is_err());
    }

    #[test]
    fn division_law() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let n = rng.gen_range(0..10);
            let m = rng.gen_range(1..6);
            let f = q(&(0..n).map(|_| rng.gen_range(-9..10)).collect::<Vec<_>>());
            let g = q(&(0..m).map(|_| rng.gen_range(-9..10)).collect::<Vec<_>>());
            if g.is_zero() {
                continue;
            }
            let (quo, rem) = f.divmod(&g).unwrap();
            assert_eq!(&(&quo * &g) + &rem, f);
            assert!(rem.is_zero() || rem.degree() < g.degree());
        }
    }

    #[test]
    fn polynomial_gcd() {
        // gcd(x^2 - 1, x^2 + 2x + 1) = x + 1 up to a unit
        let a = q(&[-1, 0, 1]);
        let b = q(&[1, 2, 1]);
        let (r, s, g) = euclid::extended_gcd(&a, &b).unwrap();
        assert_eq!(&(&r * &a) + &(&s * &b), g);
        assert_eq!(g.make_monic().unwrap(), q(&[1, 1]));
        assert!(a.try_div(&b).is_err());
        assert_eq!(a.try_div(&q(&[1, 1])), Ok(q(&[-1, 1])));
    }

    #[test]
    fn polynomial_crt() {
        // p = 1 mod (x - 1), p = 2 mod (x - 2)  =>  p = x
        let (p, m) = crt::chinese_remainder(&[q(&[1]), q(&[2])], &[q(&[-1, 1]), q(&[-2, 1])])
            .unwrap();
        assert_eq!(p, q(&[0, 1]));
        assert_eq!(m, q(&[2, -3, 1]));
    }

    #[test]
    fn conversion() {
        let p = q(&[3, 0, 1]);
        let m = p.to_multivariate::<u8>();
        assert_eq!(m.nterms(), 2);
        assert_eq!(UnivariatePolynomial::from_multivariate(&m), Ok(p.clone()));
        assert!(UnivariatePolynomial::from_multivariate(&MultivariatePolynomial::<Fraction, u8>::var(0, 2)).is_err());
        assert_eq!(format!("{}", p), "x0^2+(3)");
    }
}
