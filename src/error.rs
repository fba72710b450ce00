use std::sync::Arc;

use thiserror::Error;

pub(crate) const CAST_OVERFLOW: &str = "index does not fit into the scalar type";
pub(crate) const INFALLIBLE_CONVERSION: &str = "conversion from f64 cannot fail for this scalar";

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A checked evaluation was attempted outside of the basis domain.
    #[error("argument is outside of the domain [-1, 1] of the {basis} basis")]
    Domain { basis: &'static str },

    #[error("cannot combine a polynomial in the {lhs} basis with one in the {rhs} basis")]
    MismatchedBasis {
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("cannot combine a polynomial in `{lhs}` with a polynomial in `{rhs}`")]
    MismatchedVariable { lhs: Arc<str>, rhs: Arc<str> },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("attempted to divide a polynomial by zero")]
    Divide,

    #[error("invalid argument: {0}")]
    Argument(&'static str),

    /// The eigenvalue solver gave up before the companion matrix converged.
    #[error("eigenvalue solver did not converge within the given number of iterations")]
    NoConverge,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
