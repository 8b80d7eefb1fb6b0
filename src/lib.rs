//! Polynomial ideals over commutative rings: monomial orders, normal forms,
//! reduced Groebner bases, and the Euclidean algorithm with Chinese
//! remaindering over any Euclidean ring.

extern crate hashbrown;
extern crate itertools;
extern crate ndarray;
extern crate num_traits;
extern crate rug;

#[macro_use]
extern crate log;

#[cfg(test)]
extern crate env_logger;
#[cfg(test)]
extern crate rand;

pub mod error;
pub mod poly;


pub use error::PolyError;
