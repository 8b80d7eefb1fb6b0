//! Greatest common divisors over Euclidean rings.
//!
//! The gcd is only determined up to a unit: over the integers the sign of the
//! result follows the division steps, over polynomials the result is not
//! made monic.

use error::PolyError;
use poly::ring::EuclideanRing;

/// Compute the gcd of `a` and `b` with Euclid's algorithm.
pub fn gcd<R: EuclideanRing>(a: &R, b: &R) -> Result<R, PolyError> {
    if a.is_zero() && b.is_zero() {
        return Err(PolyError::arithmetic("gcd(0, 0) is undefined"));
    }

    let mut c = a.clone();
    let mut d = b.clone();
    while !d.is_zero() {
        let r = c.remainder(&d)?;
        c = d;
        d = r;
    }
    Ok(c)
}

/// Extended Euclidean algorithm.
///
/// Returns `(r, s, g)` such that `g = r * a + s * b` is a gcd of `a` and `b`.
/// Throughout the loop `a0 = r0 * a + s0 * b` and `a1 = r1 * a + s1 * b`.
pub fn extended_gcd<R: EuclideanRing>(a: &R, b: &R) -> Result<(R, R, R), PolyError> {
    if a.is_zero() && b.is_zero() {
        return Err(PolyError::arithmetic("gcd(0, 0) is undefined"));
    }

    let (mut a0, mut a1) = (a.clone(), b.clone());
    let (mut r0, mut r1) = (R::one(), R::zero());
    let (mut s0, mut s1) = (R::zero(), R::one());

    while !a1.is_zero() {
        let q = a0.quotient(&a1)?;

        let a2 = a0 - q.clone() * a1.clone();
        a0 = a1;
        a1 = a2;

        let r2 = r0 - q.clone() * r1.clone();
        r0 = r1;
        r1 = r2;

        let s2 = s0 - q * s1.clone();
        s0 = s1;
        s1 = s2;

        trace!("extended gcd step: {} = ({})*a + ({})*b", a0, r0, s0);
    }

    Ok((r0, s0, a0))
}

/// Least common multiple `a * b / gcd(a, b)`.
pub fn lcm<R: EuclideanRing>(a: &R, b: &R) -> Result<R, PolyError> {
    let g = gcd(a, b)?;
    (a.clone() * b.clone()).quotient(&g)
}

/// The inverse of `a` modulo `m`, if `a` and `m` are coprime.
pub fn inverse_mod<R: EuclideanRing>(a: &R, m: &R) -> Result<R, PolyError> {
    let (r, _, g) = extended_gcd(a, m)?;

    // g is a unit exactly when it divides one
    let (u, rest) = R::one().div_rem(&g)?;
    if !rest.is_zero() {
        return Err(PolyError::arithmetic(format!(
            "{} is not invertible modulo {}: gcd is {}",
            a, m, g
        )));
    }

    (r * u).remainder(m)
}

/// Gcd of a list of elements.
///
/// Only one or two operands are supported: combining the cofactors of more
/// operands is left open, so longer lists are rejected rather than guessed at.
pub fn gcd_n<R: EuclideanRing>(xs: &[R]) -> Result<R, PolyError> {
    match xs.len() {
        0 => Err(PolyError::invalid_argument("gcd of an empty list")),
        1 => gcd(&xs[0], &R::zero()),
        2 => gcd(&xs[0], &xs[1]),
        n => Err(PolyError::unsupported(format!(
            "gcd of {} operands; only two are supported",
            n
        ))),
    }
}

/// Extended gcd of a list of elements: returns the cofactors and the gcd.
/// See `gcd_n` for the supported lengths.
pub fn extended_gcd_n<R: EuclideanRing>(xs: &[R]) -> Result<(Vec<R>, R), PolyError> {
    match xs.len() {
        0 => Err(PolyError::invalid_argument("gcd of an empty list")),
        1 => {
            let (r, _, g) = extended_gcd(&xs[0], &R::zero())?;
            Ok((vec![r], g))
        }
        2 => {
            let (r, s, g) = extended_gcd(&xs[0], &xs[1])?;
            Ok((vec![r, s], g))
        }
        n => Err(PolyError::unsupported(format!(
            "extended gcd of {} operands; only two are supported",
            n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error::PolyError;

    #[test]
    fn integer_gcd() {
        assert_eq!(extended_gcd(&12i64, &8), Ok((1, -1, 4)));
        assert_eq!(gcd(&12i64, &8), Ok(4));
        assert_eq!(extended_gcd(&5i64, &0), Ok((1, 0, 5)));
        assert_eq!(extended_gcd(&0i64, &5), Ok((0, 1, 5)));
        assert_eq!(lcm(&4i64, &6), Ok(12));
    }

    #[test]
    fn bezout() {
        for a in -30i64..30 {
            for b in -30i64..30 {
                if a == 0 && b == 0 {
                    continue;
                }
                let (r, s, g) = extended_gcd(&a, &b).unwrap();
                assert_eq!(r * a + s * b, g);
                assert_eq!(a % g, 0);
                assert_eq!(b % g, 0);
            }
        }
    }

    #[test]
    fn failures() {
        match gcd(&0i64, &0) {
            Err(PolyError::ArithmeticFailure(_)) => {}
            x => panic!("unexpected {:?}", x),
        }
        match gcd_n(&[2i64, 4, 6]) {
            Err(PolyError::UnsupportedOperation(_)) => {}
            x => panic!("unexpected {:?}", x),
        }
        match extended_gcd_n(&[2i64, 4, 6]) {
            Err(PolyError::UnsupportedOperation(_)) => {}
            x => panic!("unexpected {:?}", x),
        }
        assert!(gcd_n::<i64>(&[]).is_err());
        assert_eq!(gcd_n(&[6i64, 4]), Ok(2));
        assert_eq!(extended_gcd_n(&[6i64]), Ok((vec![1], 6)));
    }

    #[test]
    fn modular_inverse() {
        assert_eq!(inverse_mod(&3i64, &5), Ok(2));
        assert_eq!(inverse_mod(&3i64, &7), Ok(5));
        assert!(inverse_mod(&4i64, &6).is_err());
    }
}
