//! Arbitrary precision integer coefficients.

use rug::Integer;

use error::PolyError;
use poly::ring::{EuclideanRing, Ring};

impl Ring for Integer {
    fn try_div(&self, other: &Integer) -> Result<Integer, PolyError> {
        let (q, r) = EuclideanRing::div_rem(self, other)?;
        if r != 0 {
            return Err(PolyError::arithmetic(format!(
                "{} is not divisible by {}",
                self, other
            )));
        }
        Ok(q)
    }
}

impl EuclideanRing for Integer {
    /// Euclidean division: the remainder is always non-negative.
    fn div_rem(&self, other: &Integer) -> Result<(Integer, Integer), PolyError> {
        if *other == 0 {
            return Err(PolyError::arithmetic("division by zero"));
        }
        Ok(self.clone().div_rem_euc(other.clone()))
    }
}
