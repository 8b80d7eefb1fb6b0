//! Reduced Groebner bases with Buchberger's algorithm.

use std::cmp::Ordering;

use hashbrown::HashSet;
use itertools::Itertools;

use error::PolyError;
use poly::config::Config;
use poly::exponent::Exponent;
use poly::raw::monomial::Monomial;
use poly::raw::multivar::MultivariatePolynomial;
use poly::raw::order::MonomialOrder;
use poly::raw::reduce::Reducer;
use poly::ring::Field;

/// The reduced Groebner basis of a polynomial ideal under a fixed monomial order.
///
/// The basis is computed in two phases. First critical pairs are completed
/// until every S-polynomial reduces to zero, which yields a Groebner basis.
/// Then every element is reduced modulo the others until nothing changes,
/// which leaves the unique reduced basis. Its elements are monic and sorted by
/// descending leading monomial.
#[derive(Clone, Debug)]
pub struct GroebnerBasis<R: Field, E: Exponent> {
    system: Vec<MultivariatePolynomial<R, E>>,
    order: MonomialOrder,
    config: Config,
}

impl<R: Field, E: Exponent> GroebnerBasis<R, E> {
    /// Construct the reduced Groebner basis of the ideal generated by `generators`.
    pub fn new(
        generators: &[MultivariatePolynomial<R, E>],
        order: MonomialOrder,
    ) -> Result<GroebnerBasis<R, E>, PolyError> {
        GroebnerBasis::with_config(generators, order, &Config::default())
    }

    pub fn with_config(
        generators: &[MultivariatePolynomial<R, E>],
        order: MonomialOrder,
        config: &Config,
    ) -> Result<GroebnerBasis<R, E>, PolyError> {
        let system: Vec<_> = generators
            .iter()
            .map(|g| g.clone().prune(config.tolerance))
            .filter(|g| !g.is_zero())
            .collect();
        if let Some((first, rest)) = system.split_first() {
            for g in rest {
                PolyError::check_nvars(first.nvars(), g.nvars())?;
            }
        }

        info!(
            "Computing Groebner basis of {} generators in {} order",
            system.len(),
            order.name()
        );

        let mut b = GroebnerBasis {
            system,
            order,
            config: *config,
        };
        b.buchberger()?;
        b.reduce_basis()?;

        info!("Reduced Groebner basis has {} elements", b.system.len());
        Ok(b)
    }

    /// Complete the critical pairs until every S-polynomial reduces to zero.
    ///
    /// A nonzero remainder is appended and the scan restarts from the first
    /// pair. Pairs that already reduced to zero are not scanned again, and pairs
    /// with coprime leading monomials are skipped without forming their
    /// S-polynomial. The intermediate list can therefore differ from a full
    /// rescan of every pair after each insertion; the reduced basis computed
    /// from it afterwards is unique and does not.
    fn buchberger(&mut self) -> Result<(), PolyError> {
        // pairs whose S-polynomial reduced to zero stay reduced as the basis grows
        let mut processed: HashSet<(usize, usize)> = HashSet::new();

        'restart: loop {
            for (i, j) in (0..self.system.len()).tuple_combinations() {
                if !processed.insert((i, j)) {
                    continue;
                }

                let (li, lj) = (
                    leading_monomial(&self.system[i], self.order)?,
                    leading_monomial(&self.system[j], self.order)?,
                );
                if li.is_coprime(&lj) {
                    debug!("Skipping pair ({}, {}): coprime leading monomials", i, j);
                    continue;
                }

                let s = s_polynomial(&self.system[i], &self.system[j], self.order)?;
                let h = Reducer::new(&self.system, self.order, &self.config)?.reduce(&s)?;

                if !h.is_zero() {
                    debug!(
                        "Pair ({}, {}) adds basis element {}: {}",
                        i,
                        j,
                        self.system.len(),
                        h
                    );
                    self.system.push(h);
                    continue 'restart;
                }
            }

            return Ok(());
        }
    }

    /// Reduce every element modulo the others until nothing changes, then
    /// normalize the leading coefficients and sort.
    fn reduce_basis(&mut self) -> Result<(), PolyError> {
        'restart: loop {
            for i in 0..self.system.len() {
                let h = {
                    let rest = self
                        .system
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, g)| g)
                        .collect();
                    Reducer::from_refs(rest, self.order, &self.config)?.reduce(&self.system[i])?
                };

                if h != self.system[i] {
                    if h.is_zero() {
                        debug!("Dropping redundant basis element {}", self.system[i]);
                        self.system.remove(i);
                    } else {
                        debug!("Replacing basis element {} by {}", self.system[i], h);
                        self.system[i] = h;
                    }
                    continue 'restart;
                }
            }
            break;
        }

        let order = self.order;
        let mut basis = self
            .system
            .iter()
            .map(|g| g.make_monic(order))
            .collect::<Result<Vec<_>, _>>()?;
        basis.sort_by(
            |a, b| match (a.leading_exponents(order), b.leading_exponents(order)) {
                (Some(x), Some(y)) => order.cmp_exponents(y, x),
                _ => Ordering::Equal,
            },
        );
        self.system = basis;
        Ok(())
    }

    #[inline]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    #[inline]
    pub fn polynomials(&self) -> &[MultivariatePolynomial<R, E>] {
        &self.system
    }

    pub fn into_polynomials(self) -> Vec<MultivariatePolynomial<R, E>> {
        self.system
    }

    /// The normal form of `f` modulo the basis. It is zero exactly when `f`
    /// lies in the ideal.
    pub fn normal_form(
        &self,
        f: &MultivariatePolynomial<R, E>,
    ) -> Result<MultivariatePolynomial<R, E>, PolyError> {
        Reducer::new(&self.system, self.order, &self.config)?.reduce(f)
    }

    /// Ideal membership.
    pub fn contains(&self, f: &MultivariatePolynomial<R, E>) -> Result<bool, PolyError> {
        Ok(self.normal_form(f)?.is_zero())
    }

    /// The basis elements free of the variables `x0, ..., x{k-1}`. For the lex
    /// order they form a Groebner basis of the `k`-th elimination ideal.
    pub fn eliminate(&self, k: usize) -> Result<Vec<MultivariatePolynomial<R, E>>, PolyError> {
        if self.order != MonomialOrder::Lex {
            return Err(PolyError::unsupported(format!(
                "elimination in {} order",
                self.order.name()
            )));
        }
        if let Some(g) = self.system.first() {
            if k > g.nvars() {
                return Err(PolyError::invalid_argument(format!(
                    "cannot eliminate {} of {} variables",
                    k,
                    g.nvars()
                )));
            }
        }

        Ok(self
            .system
            .iter()
            .filter(|g| (0..k).all(|v| g.degree_in(v).is_zero()))
            .cloned()
            .collect())
    }

    /// Check that every S-polynomial of `system` reduces to zero.
    pub fn is_groebner_basis(
        system: &[MultivariatePolynomial<R, E>],
        order: MonomialOrder,
        config: &Config,
    ) -> Result<bool, PolyError> {
        let system: Vec<_> = system.iter().filter(|g| !g.is_zero()).collect();
        let reducer = Reducer::from_refs(system.clone(), order, config)?;

        for (f, g) in system.iter().tuple_combinations() {
            let s = s_polynomial(f, g, order)?;
            if !reducer.reduce(&s)?.is_zero() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn leading_monomial<R: Field, E: Exponent>(
    f: &MultivariatePolynomial<R, E>,
    order: MonomialOrder,
) -> Result<Monomial<E>, PolyError> {
    f.leading_monomial(order)
        .ok_or_else(|| PolyError::invalid_argument("zero polynomial has no leading monomial"))
}

/// The S-polynomial `x^v f / lc(f) - x^u g / lc(g)`, where `x^v l(f) = x^u l(g)`
/// is the least common multiple of the leading monomials.
pub fn s_polynomial<R: Field, E: Exponent>(
    f: &MultivariatePolynomial<R, E>,
    g: &MultivariatePolynomial<R, E>,
    order: MonomialOrder,
) -> Result<MultivariatePolynomial<R, E>, PolyError> {
    PolyError::check_nvars(f.nvars(), g.nvars())?;
    let (i, j) = match (f.leading_term(order), g.leading_term(order)) {
        (Some(i), Some(j)) => (i, j),
        _ => return Err(PolyError::invalid_argument("S-polynomial of a zero polynomial")),
    };

    let (lf, lg) = (f.exponents(i), g.exponents(j));
    let lcm: Vec<E> = lf.iter().zip(lg).map(|(a, b)| *a.max(b)).collect();
    let v: Vec<E> = lcm.iter().zip(lf).map(|(a, b)| *a - *b).collect();
    let u: Vec<E> = lcm.iter().zip(lg).map(|(a, b)| *a - *b).collect();

    let a = f.clone().mul_monomial(&f.coefficient(i).inv()?, &v);
    let b = g.clone().mul_monomial(&g.coefficient(j).inv()?, &u);
    debug_assert_eq!(a.leading_exponents(order), b.leading_exponents(order));

    // the leading terms cancel; drop whatever rounding leaves behind
    Ok((&a - &b).remove_term(&lcm))
}

/// Compute the reduced Groebner basis of `generators`, with exact zero tests.
pub fn groebner_basis<R: Field, E: Exponent>(
    generators: &[MultivariatePolynomial<R, E>],
    order: MonomialOrder,
) -> Result<Vec<MultivariatePolynomial<R, E>>, PolyError> {
    Ok(GroebnerBasis::new(generators, order)?.into_polynomials())
}

pub fn groebner_basis_with<R: Field, E: Exponent>(
    generators: &[MultivariatePolynomial<R, E>],
    order: MonomialOrder,
    config: &Config,
) -> Result<Vec<MultivariatePolynomial<R, E>>, PolyError> {
    Ok(GroebnerBasis::with_config(generators, order, config)?.into_polynomials())
}
