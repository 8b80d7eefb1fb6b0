//! Normal forms of polynomials modulo a finite basis.
//!
//! A reduction step picks the largest monomial `v` of `f` (with coefficient `c`)
//! that is divisible by the leading monomial of some basis element `g` whose
//! leading coefficient divides `c`, and returns
//! `f - (c / lc(g)) * x^(v - l(g)) * g`. The step removes `v` and makes the
//! polynomial strictly smaller in the induced order, so repeating it reaches a
//! fixed point: the normal form.

use error::PolyError;
use poly::config::Config;
use poly::exponent::Exponent;
use poly::raw::monomial;
use poly::raw::multivar::MultivariatePolynomial;
use poly::raw::order::MonomialOrder;
use poly::ring::Ring;

/// A basis prepared for reduction: the leading monomial and leading
/// coefficient of every element are computed once.
pub struct Reducer<'a, R: Ring + 'a, E: Exponent + 'a> {
    basis: Vec<&'a MultivariatePolynomial<R, E>>,
    leads: Vec<(Vec<E>, R)>,
    nvars: Option<usize>,
    order: MonomialOrder,
    config: Config,
}

impl<'a, R: Ring, E: Exponent> Reducer<'a, R, E> {
    pub fn new(
        basis: &'a [MultivariatePolynomial<R, E>],
        order: MonomialOrder,
        config: &Config,
    ) -> Result<Reducer<'a, R, E>, PolyError> {
        Reducer::from_refs(basis.iter().collect(), order, config)
    }

    /// Prepare a basis given by references. Zero elements are skipped, since
    /// they reduce nothing.
    pub fn from_refs(
        basis: Vec<&'a MultivariatePolynomial<R, E>>,
        order: MonomialOrder,
        config: &Config,
    ) -> Result<Reducer<'a, R, E>, PolyError> {
        let mut nvars = None;
        let mut elements = Vec::with_capacity(basis.len());
        let mut leads = Vec::with_capacity(basis.len());

        for g in basis {
            let t = match g.leading_term(order) {
                Some(t) => t,
                None => continue,
            };
            match nvars {
                Some(n) => PolyError::check_nvars(n, g.nvars())?,
                None => nvars = Some(g.nvars()),
            }
            leads.push((g.exponents(t).to_vec(), g.coefficient(t).clone()));
            elements.push(g);
        }

        Ok(Reducer {
            basis: elements,
            leads,
            nvars,
            order,
            config: *config,
        })
    }

    #[inline]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Perform one elementary reduction step. Returns `None` if `f` is
    /// already in normal form.
    pub fn step(
        &self,
        f: &MultivariatePolynomial<R, E>,
    ) -> Result<Option<MultivariatePolynomial<R, E>>, PolyError> {
        if f.is_zero() {
            return Ok(None);
        }
        if let Some(n) = self.nvars {
            PolyError::check_nvars(n, f.nvars())?;
        }

        for i in f.descending_terms(self.order) {
            let v = f.exponents(i);
            let c = f.coefficient(i);

            for (g, &(ref lm, ref lc)) in self.basis.iter().zip(&self.leads) {
                if !monomial::divides(lm, v) {
                    continue;
                }

                // a coefficient that does not divide simply means this element
                // cannot be used
                let q = match c.try_div(lc) {
                    Ok(q) => q,
                    Err(_) => continue,
                };

                let shift: Vec<E> = v.iter().zip(lm).map(|(a, b)| *a - *b).collect();
                trace!("reduce term {} with ({})*x^{:?} * ({})", i, q, shift, g);

                let h = f - &(*g).clone().mul_monomial(&q, &shift);

                // the eliminated monomial is dropped, even when rounding left a residue
                return Ok(Some(h.remove_term(v).prune(self.config.tolerance)));
            }
        }

        Ok(None)
    }

    /// Compute the normal form of `f`.
    pub fn reduce(
        &self,
        f: &MultivariatePolynomial<R, E>,
    ) -> Result<MultivariatePolynomial<R, E>, PolyError> {
        let mut r = f.clone().prune(self.config.tolerance);
        let mut steps = 0;
        while let Some(h) = self.step(&r)? {
            r = h;
            steps += 1;
        }
        if steps > 0 {
            debug!("normal form after {} steps: {}", steps, r);
        }
        Ok(r)
    }
}

/// Compute the normal form of `f` modulo `basis`, with exact zero tests.
pub fn reduce<R: Ring, E: Exponent>(
    f: &MultivariatePolynomial<R, E>,
    basis: &[MultivariatePolynomial<R, E>],
    order: MonomialOrder,
) -> Result<MultivariatePolynomial<R, E>, PolyError> {
    reduce_with(f, basis, order, &Config::default())
}

/// Compute the normal form of `f` modulo `basis`.
pub fn reduce_with<R: Ring, E: Exponent>(
    f: &MultivariatePolynomial<R, E>,
    basis: &[MultivariatePolynomial<R, E>],
    order: MonomialOrder,
    config: &Config,
) -> Result<MultivariatePolynomial<R, E>, PolyError> {
    Reducer::new(basis, order, config)?.reduce(f)
}

/// The reduction modulo `basis` as a function.
pub fn reducer<'a, R: Ring + 'a, E: Exponent + 'a>(
    basis: &'a [MultivariatePolynomial<R, E>],
    order: MonomialOrder,
) -> Result<
    impl Fn(&MultivariatePolynomial<R, E>) -> Result<MultivariatePolynomial<R, E>, PolyError> + 'a,
    PolyError,
> {
    reducer_with(basis, order, &Config::default())
}

pub fn reducer_with<'a, R: Ring + 'a, E: Exponent + 'a>(
    basis: &'a [MultivariatePolynomial<R, E>],
    order: MonomialOrder,
    config: &Config,
) -> Result<
    impl Fn(&MultivariatePolynomial<R, E>) -> Result<MultivariatePolynomial<R, E>, PolyError> + 'a,
    PolyError,
> {
    let r = Reducer::new(basis, order, config)?;
    Ok(move |f: &MultivariatePolynomial<R, E>| r.reduce(f))
}
