#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Univariate polynomials in the monomial and Chebyshev bases.
//!
//! The central type is [`BasePoly`], generic over its coefficient storage and
//! its basis. The [`aliases`] cover the usual combinations.
//!
//! ```
//! use polybasis::{cheb, poly};
//!
//! let c = cheb![1.0, 0.0, 3.0, 4.0];
//! assert_eq!(c.eval(0.5).unwrap(), -4.5);
//!
//! let p = poly![-1.0, 0.0, 1.0];
//! let (q, r) = p.div_rem(&poly![1.0, 1.0]).unwrap();
//! assert_eq!(q, poly![-1.0, 1.0]);
//! assert!(r.is_zero());
//! ```

pub use na;
pub use num;

pub mod aliases;
mod basis;
mod error;
mod poly;
mod scalar;
mod storage;
mod util;

pub use aliases::{
    ChebPoly, ChebPoly64, FrozenPoly, LaurentPoly, Poly, Poly64, PolyView, SparsePoly,
};
pub use basis::{Basis, BasisKind, ChebyshevT, Standard};
pub use error::{Error, Result};
pub use poly::{
    map_domain, BasePoly, DomainCheck, EigenConfig, EigenvalueSolver, EvalRing, Get, SchurSolver,
    DEFAULT_VARIABLE,
};
pub use scalar::{BasicScalar, FieldScalar, RealScalar};
pub use storage::{BasicStorage, ContiguousStorage, LaurentStore, OwnedStorage, SparseStore};

#[doc(hidden)]
pub use util::__testing;

/// A dense polynomial in the monomial basis, coefficients lowest degree first.
///
/// ```
/// use polybasis::poly;
///
/// let p = poly![1.0, 2.0, 3.0];
/// assert_eq!(p.eval(2.0).unwrap(), 17.0);
/// ```
#[macro_export]
macro_rules! poly {
    ($($c:expr),* $(,)?) => {
        $crate::BasePoly::<::std::vec::Vec<_>, $crate::Standard>::from_coeffs([$($c),*])
    };
}

/// A dense Chebyshev series, coefficients lowest index first.
///
/// ```
/// use polybasis::cheb;
///
/// let c = cheb![2.5, 1.5, 1.0];
/// assert_eq!(c.eval(0.0).unwrap(), 1.5);
/// ```
#[macro_export]
macro_rules! cheb {
    ($($c:expr),* $(,)?) => {
        $crate::BasePoly::<::std::vec::Vec<_>, $crate::ChebyshevT>::from_coeffs([$($c),*])
    };
}
