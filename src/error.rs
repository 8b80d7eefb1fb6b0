use std::error::Error;
use std::fmt;

/// Error raised by polynomial arithmetic, the Euclidean tools and the
/// Groebner basis engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// Mismatched arity or variable count, or a degenerate input shape.
    InvalidArgument(String),
    /// A division that cannot be carried out: gcd(0, 0), a non-invertible
    /// element, a modulus that is not coprime to the others.
    ArithmeticFailure(String),
    /// An operation that is deliberately left unimplemented.
    UnsupportedOperation(String),
    /// Two polynomials share every leading term but have a different number
    /// of terms, so the induced order cannot rank them.
    Incomparable,
}

impl PolyError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> PolyError {
        PolyError::InvalidArgument(msg.into())
    }

    pub fn arithmetic<S: Into<String>>(msg: S) -> PolyError {
        PolyError::ArithmeticFailure(msg.into())
    }

    pub fn unsupported<S: Into<String>>(msg: S) -> PolyError {
        PolyError::UnsupportedOperation(msg.into())
    }

    /// Returns an `InvalidArgument` error when two arities differ.
    pub fn check_nvars(expected: usize, got: usize) -> Result<(), PolyError> {
        if expected != got {
            return Err(PolyError::InvalidArgument(format!(
                "nvars mismatched: got {}, expected {}",
                got, expected
            )));
        }
        Ok(())
    }
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PolyError::InvalidArgument(ref m) => write!(f, "invalid argument: {}", m),
            PolyError::ArithmeticFailure(ref m) => write!(f, "arithmetic failure: {}", m),
            PolyError::UnsupportedOperation(ref m) => write!(f, "unsupported operation: {}", m),
            PolyError::Incomparable => write!(f, "incomparable arguments"),
        }
    }
}

impl Error for PolyError {}
