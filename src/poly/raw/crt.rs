//! Chinese remainder reconstruction over Euclidean rings.

use error::PolyError;
use poly::raw::euclid;
use poly::ring::EuclideanRing;

/// Incremental solution of a system of congruences `x = x_i mod m_i`
/// with pairwise coprime moduli.
///
/// Each new congruence is merged in mixed-radix form: with `M` the product of
/// the moduli seen so far, `x' = x + s * M` where
/// `s = (x_i - x) * M^-1 mod m_i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChineseRemainder<R: EuclideanRing> {
    value: R,
    modulus: R,
}

impl<R: EuclideanRing> ChineseRemainder<R> {
    /// Starts from the single congruence `x = residue mod modulus`.
    pub fn new(residue: R, modulus: R) -> Result<ChineseRemainder<R>, PolyError> {
        if modulus.is_zero() {
            return Err(PolyError::arithmetic("zero modulus"));
        }
        Ok(ChineseRemainder {
            value: residue,
            modulus,
        })
    }

    /// Merges the congruence `x = residue mod modulus`.
    ///
    /// Fails with an arithmetic error if `modulus` is not coprime to the
    /// moduli already merged.
    pub fn add(&mut self, residue: &R, modulus: &R) -> Result<(), PolyError> {
        let c = euclid::inverse_mod(&self.modulus, modulus)?;
        let s = ((residue.clone() - self.value.clone()) * c).remainder(modulus)?;
        self.value = self.value.clone() + s * self.modulus.clone();
        self.modulus = self.modulus.clone() * modulus.clone();
        Ok(())
    }

    /// The solution, reduced modulo the product of all moduli.
    pub fn value(&self) -> Result<R, PolyError> {
        self.value.remainder(&self.modulus)
    }

    /// The product of all moduli.
    pub fn modulus(&self) -> &R {
        &self.modulus
    }
}

/// Find `x` with `x = residues[i] mod moduli[i]` for all `i`.
///
/// Returns `(x, M)` with `M` the product of the moduli and `x` reduced modulo `M`.
pub fn chinese_remainder<R: EuclideanRing>(
    residues: &[R],
    moduli: &[R],
) -> Result<(R, R), PolyError> {
    if residues.len() != moduli.len() {
        return Err(PolyError::invalid_argument(format!(
            "got {} residues for {} moduli",
            residues.len(),
            moduli.len()
        )));
    }
    if residues.is_empty() {
        return Err(PolyError::invalid_argument("no congruences given"));
    }

    let mut crt = ChineseRemainder::new(residues[0].clone(), moduli[0].clone())?;
    for (x, m) in residues.iter().zip(moduli).skip(1) {
        crt.add(x, m)?;
        debug!("CRT: {} mod {}", crt.value, crt.modulus);
    }

    Ok((crt.value()?, crt.modulus))
}
