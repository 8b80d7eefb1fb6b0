use std::cmp;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use ndarray::{ArrayD, Dimension, IxDyn};

use error::PolyError;
use poly::exponent::Exponent;
use poly::raw::multivar::MultivariatePolynomial;
use poly::ring::Ring;

/// A dense multivariate polynomial. The coefficient of `x0^i0 * ... * x{n-1}^i{n-1}`
/// is stored at index `[i0, ..., i{n-1}]` of an `n` dimensional tensor, which is
/// kept trimmed: along every axis the last slice holds a nonzero coefficient.
#[derive(Clone, Debug, PartialEq)]
pub struct Multinomial<R: Ring> {
    coefficients: ArrayD<R>,
}

impl<R: Ring> Multinomial<R> {
    /// The zero polynomial in `nvars` variables.
    pub fn zero(nvars: usize) -> Multinomial<R> {
        Multinomial {
            coefficients: ArrayD::from_elem(IxDyn(&vec![0; nvars]), R::zero()),
        }
    }

    /// Build a polynomial from a coefficient tensor, trimming trailing zero
    /// slices along every axis.
    pub fn representative(tensor: ArrayD<R>) -> Multinomial<R> {
        if tensor.ndim() == 0 {
            return Multinomial {
                coefficients: tensor,
            };
        }

        let mut shape = vec![0; tensor.ndim()];
        for (pos, c) in tensor.indexed_iter() {
            if !c.is_zero() {
                for (s, i) in shape.iter_mut().zip(pos.slice()) {
                    *s = cmp::max(*s, i + 1);
                }
            }
        }

        if shape.as_slice() == tensor.shape() {
            return Multinomial {
                coefficients: tensor,
            };
        }

        if shape.iter().any(|&s| s == 0) {
            return Multinomial::zero(tensor.ndim());
        }

        Multinomial {
            coefficients: ArrayD::from_shape_fn(IxDyn(&shape), |pos| tensor[pos].clone()),
        }
    }

    #[inline]
    pub fn nvars(&self) -> usize {
        self.coefficients.ndim()
    }

    #[inline]
    pub fn tensor(&self) -> &ArrayD<R> {
        &self.coefficients
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// The coefficient at the given exponents; zero outside the stored tensor.
    pub fn coefficient(&self, exponents: &[usize]) -> R {
        match self.coefficients.get(IxDyn(exponents)) {
            Some(c) => c.clone(),
            None => R::zero(),
        }
    }

    /// The total degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.coefficients
            .indexed_iter()
            .filter(|&(_, c)| !c.is_zero())
            .map(|(pos, _)| pos.slice().iter().sum::<usize>() as u32)
            .max()
    }

    /// Convert to the sparse representation.
    pub fn to_sparse<E: Exponent>(&self) -> MultivariatePolynomial<R, E> {
        let mut res = MultivariatePolynomial::with_nvars(self.nvars());
        for (pos, c) in self.coefficients.indexed_iter() {
            if c.is_zero() {
                continue;
            }
            let exponents = pos
                .slice()
                .iter()
                .map(|&i| E::from_usize(i).expect("degree does not fit in the exponent type"))
                .collect();
            res.append_monomial(c.clone(), exponents);
        }
        res
    }

    /// Convert from the sparse representation.
    pub fn from_sparse<E: Exponent>(p: &MultivariatePolynomial<R, E>) -> Multinomial<R> {
        if p.is_zero() {
            return Multinomial::zero(p.nvars());
        }
        let shape: Vec<usize> = (0..p.nvars())
            .map(|v| p.degree_in(v).as_() as usize + 1)
            .collect();
        let mut coefficients = ArrayD::from_elem(IxDyn(&shape), R::zero());
        for t in p {
            let pos: Vec<usize> = t.exponents.iter().map(|e| e.as_() as usize).collect();
            coefficients[IxDyn(&pos)] = t.coefficient.clone();
        }
        Multinomial { coefficients }
    }

    pub fn checked_add(&self, other: &Multinomial<R>) -> Result<Multinomial<R>, PolyError> {
        PolyError::check_nvars(self.nvars(), other.nvars())?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn checked_sub(&self, other: &Multinomial<R>) -> Result<Multinomial<R>, PolyError> {
        PolyError::check_nvars(self.nvars(), other.nvars())?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Multiply by shifting a scaled copy of `other` to the position of every
    /// nonzero coefficient of `self` and summing the copies.
    pub fn checked_mul(&self, other: &Multinomial<R>) -> Result<Multinomial<R>, PolyError> {
        PolyError::check_nvars(self.nvars(), other.nvars())?;
        if self.is_zero() || other.is_zero() {
            return Ok(Multinomial::zero(self.nvars()));
        }

        let shape: Vec<usize> = self
            .coefficients
            .shape()
            .iter()
            .zip(other.coefficients.shape())
            .map(|(a, b)| a + b - 1)
            .collect();
        let mut res = ArrayD::from_elem(IxDyn(&shape), R::zero());

        let mut target = vec![0; shape.len()];
        for (shift, c) in self.coefficients.indexed_iter() {
            if c.is_zero() {
                continue;
            }
            for (pos, d) in other.coefficients.indexed_iter() {
                for ((t, s), p) in target.iter_mut().zip(shift.slice()).zip(pos.slice()) {
                    *t = s + p;
                }
                let r = &mut res[IxDyn(&target)];
                *r = r.clone() + c.clone() * d.clone();
            }
        }

        Ok(Multinomial::representative(res))
    }

    /// Combine the coefficients of two polynomials of the same arity entry by entry.
    fn zip_with<F: Fn(R, R) -> R>(&self, other: &Multinomial<R>, f: F) -> Multinomial<R> {
        let shape: Vec<usize> = self
            .coefficients
            .shape()
            .iter()
            .zip(other.coefficients.shape())
            .map(|(a, b)| cmp::max(*a, *b))
            .collect();
        Multinomial::representative(ArrayD::from_shape_fn(IxDyn(&shape), |pos| {
            f(self.coefficient(pos.slice()), other.coefficient(pos.slice()))
        }))
    }
}

impl<R: Ring> fmt::Display for Multinomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_sparse::<u32>())
    }
}

impl<'a, 'b, R: Ring> Add<&'b Multinomial<R>> for &'a Multinomial<R> {
    type Output = Multinomial<R>;

    fn add(self, other: &'b Multinomial<R>) -> Multinomial<R> {
        match self.checked_add(other) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b, R: Ring> Sub<&'b Multinomial<R>> for &'a Multinomial<R> {
    type Output = Multinomial<R>;

    fn sub(self, other: &'b Multinomial<R>) -> Multinomial<R> {
        match self.checked_sub(other) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b, R: Ring> Mul<&'b Multinomial<R>> for &'a Multinomial<R> {
    type Output = Multinomial<R>;

    fn mul(self, other: &'b Multinomial<R>) -> Multinomial<R> {
        match self.checked_mul(other) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(shape: &[usize], coeffs: Vec<i64>) -> Multinomial<i64> {
        Multinomial::representative(ArrayD::from_shape_vec(IxDyn(shape), coeffs).unwrap())
    }

    #[test]
    fn trimming() {
        // 1 + y, stored with padding
        let p = dense(&[3, 3], vec![1, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(p.tensor().shape(), &[1, 2]);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.coefficient(&[0, 1]), 1);
        assert_eq!(p.coefficient(&[5, 1]), 0);

        let z = dense(&[2, 2], vec![0; 4]);
        assert!(z.is_zero());
        assert_eq!(z.degree(), None);
        assert_eq!(z, Multinomial::zero(2));
    }

    #[test]
    fn arithmetic() {
        // a = 1 + x + y, b = x - y
        let a = dense(&[2, 2], vec![1, 1, 1, 0]);
        let b = dense(&[2, 2], vec![0, -1, 1, 0]);

        assert_eq!(&a + &b, dense(&[2, 1], vec![1, 2]));
        assert_eq!(&a - &a, Multinomial::zero(2));

        // (1 + x + y)(x - y) = x - y + x^2 - y^2
        let c = &a * &b;
        assert_eq!(
            c,
            dense(&[3, 3], vec![0, -1, -1, 1, 0, 0, 1, 0, 0])
        );
        assert_eq!(c.degree(), Some(2));

        let sparse = a.to_sparse::<u32>() * b.to_sparse::<u32>();
        assert_eq!(c.to_sparse::<u32>(), sparse);
        assert_eq!(Multinomial::from_sparse(&sparse), c);

        assert!(a.checked_mul(&Multinomial::zero(3)).is_err());
        assert!((&a * &Multinomial::zero(2)).is_zero());
    }
}
