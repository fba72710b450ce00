//! Shorthands for the common combinations of storage and basis.

use std::sync::Arc;

use crate::{
    basis::{ChebyshevT, Standard},
    storage::{BasicStorage, LaurentStore, SparseStore},
    BasePoly, BasicScalar, FieldScalar,
};

/// A growable polynomial in the monomial basis.
pub type Poly<T> = BasePoly<Vec<T>, Standard>;

/// A growable Chebyshev series.
pub type ChebPoly<T> = BasePoly<Vec<T>, ChebyshevT>;

/// An immutable polynomial that can be cloned cheaply and shared between
/// threads.
pub type FrozenPoly<T> = BasePoly<Arc<[T]>, Standard>;

/// A polynomial borrowing its coefficients.
pub type PolyView<'a, T> = BasePoly<&'a [T], Standard>;

/// A polynomial storing only its nonzero terms, for high degrees with few
/// terms.
pub type SparsePoly<T> = BasePoly<SparseStore<T>, Standard>;

/// A polynomial that may have negative powers of the variable.
pub type LaurentPoly<T> = BasePoly<LaurentStore<T>, Standard>;

pub type Poly64 = Poly<f64>;
pub type ChebPoly64 = ChebPoly<f64>;

/// Scalar type of the results of operations that divide.
pub(crate) type F<S> = <<S as BasicStorage>::T as BasicScalar>::Field;

/// Real type underlying [`F`].
pub(crate) type R<S> = <F<S> as FieldScalar>::Real;
