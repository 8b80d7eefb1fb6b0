pub mod bigint;
pub mod crt;
pub mod euclid;
pub mod finitefield;
pub mod fraction;
pub mod groebner;
pub mod monomial;
pub mod multinomial;
pub mod multivar;
pub mod order;
pub mod reduce;
pub mod univar;

pub use poly::raw::groebner::{groebner_basis, groebner_basis_with, GroebnerBasis};
pub use poly::raw::monomial::Monomial;
pub use poly::raw::multinomial::Multinomial;
pub use poly::raw::multivar::MultivariatePolynomial;
pub use poly::raw::order::{InducedOrder, MonomialOrder};
pub use poly::raw::reduce::{reduce, reduce_with, reducer, reducer_with, Reducer};
pub use poly::raw::univar::UnivariatePolynomial;
