use num_traits::cast::{AsPrimitive, FromPrimitive};
use num_traits::{CheckedAdd, One, Zero};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Sub;

/// Trait for exponents in monomials.
pub trait Exponent:
    Hash
    + Zero
    + Debug
    + Display
    + One
    + FromPrimitive
    + AsPrimitive<u32>
    + CheckedAdd
    + Sub<Output = Self>
    + Ord
    + Copy
{
}

impl<
        T: Hash
            + Zero
            + Debug
            + Display
            + One
            + FromPrimitive
            + AsPrimitive<u32>
            + CheckedAdd
            + Sub<Output = Self>
            + Ord
            + Copy,
    > Exponent for T
{
}

/// Sum of the exponents of a monomial.
#[inline]
pub fn total_degree<E: Exponent>(exponents: &[E]) -> u32 {
    exponents.iter().map(|e| e.as_()).sum()
}
