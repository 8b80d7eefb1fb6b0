use std::cmp::Ordering;

use error::PolyError;
use poly::exponent::{self, Exponent};
use poly::raw::multivar::MultivariatePolynomial;
use poly::ring::Ring;

/// An admissible order on monomials of a fixed arity: total, compatible with
/// multiplication, and with 1 as the minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MonomialOrder {
    /// The first differing exponent from the left decides.
    Lex,
    /// The first differing exponent from the right decides.
    RevLex,
    /// Total degree first, ties broken by `Lex`.
    DegLex,
}

impl MonomialOrder {
    pub const ALL: [MonomialOrder; 3] = [
        MonomialOrder::Lex,
        MonomialOrder::RevLex,
        MonomialOrder::DegLex,
    ];

    /// Compares two exponent vectors, failing when their arities differ.
    pub fn compare<E: Exponent>(&self, a: &[E], b: &[E]) -> Result<Ordering, PolyError> {
        PolyError::check_nvars(a.len(), b.len())?;
        Ok(self.cmp_exponents(a, b))
    }

    /// Compares two exponent vectors of the same arity.
    #[inline]
    pub fn cmp_exponents<E: Exponent>(&self, a: &[E], b: &[E]) -> Ordering {
        debug_assert!(a.len() == b.len());
        match *self {
            MonomialOrder::Lex => a.cmp(b),
            MonomialOrder::RevLex => a.iter().rev().cmp(b.iter().rev()),
            MonomialOrder::DegLex => exponent::total_degree(a)
                .cmp(&exponent::total_degree(b))
                .then_with(|| a.cmp(b)),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::RevLex => "revlex",
            MonomialOrder::DegLex => "deglex",
        }
    }

    /// The order this monomial order induces on polynomials.
    pub fn induced(self) -> InducedOrder {
        InducedOrder { order: self }
    }
}

/// Order on polynomials induced by a monomial order.
///
/// The occurring monomials of both polynomials are sorted in descending order
/// and compared pairwise; coefficients play no role. The zero polynomial is
/// the minimum. When one sequence is a proper prefix of the other the
/// polynomials are reported as incomparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InducedOrder {
    order: MonomialOrder,
}

impl InducedOrder {
    pub fn new(order: MonomialOrder) -> InducedOrder {
        InducedOrder { order }
    }

    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    pub fn compare<R: Ring, E: Exponent>(
        &self,
        f: &MultivariatePolynomial<R, E>,
        g: &MultivariatePolynomial<R, E>,
    ) -> Result<Ordering, PolyError> {
        match (f.is_zero(), g.is_zero()) {
            (true, true) => return Ok(Ordering::Equal),
            (true, false) => return Ok(Ordering::Less),
            (false, true) => return Ok(Ordering::Greater),
            (false, false) => {}
        }
        PolyError::check_nvars(f.nvars(), g.nvars())?;

        let fs = f.descending_terms(self.order);
        let gs = g.descending_terms(self.order);
        for (&i, &j) in fs.iter().zip(&gs) {
            match self.order.cmp_exponents(f.exponents(i), g.exponents(j)) {
                Ordering::Equal => {}
                o => return Ok(o),
            }
        }

        if fs.len() == gs.len() {
            Ok(Ordering::Equal)
        } else {
            Err(PolyError::Incomparable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poly::raw::monomial::Monomial;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_monomial(rng: &mut StdRng, nvars: usize) -> Monomial<u16> {
        Monomial::new((0..nvars).map(|_| rng.gen_range(0..4)).collect())
    }

    #[test]
    fn orders() {
        let a = [2u32, 0, 1];
        let b = [1u32, 3, 0];
        assert_eq!(MonomialOrder::Lex.cmp_exponents(&a, &b), Ordering::Greater);
        assert_eq!(MonomialOrder::RevLex.cmp_exponents(&a, &b), Ordering::Greater);
        assert_eq!(MonomialOrder::DegLex.cmp_exponents(&a, &b), Ordering::Less);

        let c = [0u32, 1, 0];
        let d = [1u32, 0, 0];
        assert_eq!(MonomialOrder::Lex.cmp_exponents(&c, &d), Ordering::Less);
        assert_eq!(MonomialOrder::RevLex.cmp_exponents(&c, &d), Ordering::Greater);
        assert_eq!(MonomialOrder::DegLex.cmp_exponents(&c, &d), Ordering::Less);
        assert_eq!(MonomialOrder::DegLex.name(), "deglex");
    }

    #[test]
    fn arity_mismatch() {
        match MonomialOrder::Lex.compare(&[1u32, 2], &[1u32]) {
            Err(PolyError::InvalidArgument(_)) => {}
            x => panic!("unexpected {:?}", x),
        }
    }

    #[test]
    fn admissible() {
        let mut rng = StdRng::seed_from_u64(17);
        for order in MonomialOrder::ALL.iter() {
            for _ in 0..500 {
                let m1 = random_monomial(&mut rng, 3);
                let m2 = random_monomial(&mut rng, 3);
                let m3 = random_monomial(&mut rng, 3);

                let c = order.cmp_exponents(m1.exponents(), m2.exponents());
                assert_eq!(
                    c.reverse(),
                    order.cmp_exponents(m2.exponents(), m1.exponents())
                );
                assert_eq!(c == Ordering::Equal, m1 == m2);

                // compatible with multiplication
                let p1 = &m1 * &m3;
                let p2 = &m2 * &m3;
                assert_eq!(order.cmp_exponents(p1.exponents(), p2.exponents()), c);

                // 1 is the minimum
                assert_ne!(
                    order.cmp_exponents(m1.exponents(), Monomial::one(3).exponents()),
                    Ordering::Less
                );
            }
        }
    }

    #[test]
    fn induced() {
        let f = MultivariatePolynomial::from_terms(
            2,
            vec![(1i64, vec![2u32, 0]), (1, vec![0, 1])],
        )
        .unwrap();
        let g = MultivariatePolynomial::from_terms(
            2,
            vec![(5i64, vec![2u32, 0]), (1, vec![1, 0])],
        )
        .unwrap();
        let zero = MultivariatePolynomial::with_nvars(2);
        let order = MonomialOrder::Lex.induced();

        assert_eq!(order.compare(&f, &g), Ok(Ordering::Less));
        assert_eq!(order.compare(&g, &f), Ok(Ordering::Greater));
        assert_eq!(order.compare(&zero, &f), Ok(Ordering::Less));
        assert_eq!(order.compare(&f, &f), Ok(Ordering::Equal));

        let h = MultivariatePolynomial::from_monomial(3i64, vec![2u32, 0]);
        assert_eq!(order.compare(&f, &h), Err(PolyError::Incomparable));
    }
}
