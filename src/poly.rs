use std::{fmt, marker::PhantomData, sync::Arc};

use num::{One, Zero};

use crate::{
    basis::Basis,
    storage::{BasicStorage, OwnedStorage},
    util::casting::usize_to_isize,
    BasicScalar, Error, Result,
};

mod calculus;
mod companion;
mod conversions;
mod eval;
mod impl_num;
mod indexing;
pub(crate) mod internals;
mod roots;
mod vander;

pub use eval::{map_domain, DomainCheck, EvalRing};
pub use indexing::Get;
pub use roots::{EigenConfig, EigenvalueSolver, SchurSolver};

use internals::Dense;

/// The indeterminate used when none is given.
pub const DEFAULT_VARIABLE: &str = "x";

/// A univariate polynomial whose coefficients are held in storage `S` and
/// expressed in basis `B`.
///
/// The storage decides the container shape (dense, frozen, borrowed, sparse
/// or Laurent), the basis decides which recurrences every algorithm uses.
/// Shape and basis are orthogonal, any combination is valid.
///
/// Polynomials are always kept in canonical form: trailing zeros (and for
/// Laurent storage, leading zeros) are trimmed, so the zero polynomial has no
/// stored coefficients and degree `-1`.
pub struct BasePoly<S, B> {
    pub(crate) storage: S,
    pub(crate) var: Arc<str>,
    _basis: PhantomData<B>,
}

impl<S, B> BasePoly<S, B> {
    /// Assemble a polynomial from storage that is already canonical.
    pub(crate) fn from_parts(storage: S, var: Arc<str>) -> Self {
        Self {
            storage,
            var,
            _basis: PhantomData,
        }
    }

    /// The name of the indeterminate.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.var
    }

    /// Rename the indeterminate.
    #[must_use]
    pub fn with_variable(self, name: impl Into<Arc<str>>) -> Self {
        Self {
            var: name.into(),
            ..self
        }
    }

    /// The backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: BasicStorage, B: Basis> BasePoly<S, B> {
    /// The degree of a polynomial (the index of the highest nonzero
    /// coefficient), `-1` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> i64 {
        let (first, end) = (self.storage.first_index(), self.storage.end_index());
        if end <= first {
            return -1;
        }
        (end - 1) as i64
    }

    /// The lowest stored index. Only Laurent storage can report a nonzero
    /// value.
    #[must_use]
    pub fn first_index(&self) -> isize {
        self.storage.first_index()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.storage.end_index() <= self.storage.first_index()
    }

    /// Coefficient of the `idx`-th basis function, or zero if nothing is
    /// stored there.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] when `idx` is negative and the storage
    /// is not Laurent.
    pub fn coeff(&self, idx: isize) -> Result<S::T> {
        if idx < 0 && !S::SIGNED {
            return Err(Error::UnsupportedOperation(
                "negative indices are only supported by Laurent storage",
            ));
        }
        Ok(self
            .storage
            .get_coeff(idx)
            .cloned()
            .unwrap_or_else(S::T::zero))
    }

    /// The coefficient of the highest degree term, zero for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> S::T {
        self.storage
            .get_coeff(self.storage.end_index() - 1)
            .cloned()
            .unwrap_or_else(S::T::zero)
    }

    /// The nonzero `(index, coefficient)` pairs, lowest index first.
    pub fn nonzero_terms(&self) -> impl Iterator<Item = (isize, &S::T)> {
        self.storage.terms().filter(|(_, c)| !c.is_zero())
    }

    /// Coefficients from [`Self::first_index`] up to the degree, with
    /// interior zeros filled in.
    #[must_use]
    pub fn to_vec(&self) -> Vec<S::T> {
        Dense::from_storage(&self.storage).coeffs
    }

    pub(crate) fn to_dense(&self) -> Dense<S::T> {
        Dense::from_storage(&self.storage)
    }

    /// Wrap a working run into the owned storage of this shape, keeping the
    /// variable.
    pub(crate) fn wrap<U: BasicScalar>(&self, dense: Dense<U>) -> BasePoly<S::Owned<U>, B> {
        BasePoly::from_parts(dense.into_storage(), self.var.clone())
    }

    /// Like [`Self::wrap`], for runs that may extend below index 0 because
    /// they were combined with a foreign operand.
    pub(crate) fn try_wrap<U: BasicScalar>(
        &self,
        dense: Dense<U>,
    ) -> Result<BasePoly<S::Owned<U>, B>> {
        if dense.first < 0 && !<S::Owned<U> as BasicStorage>::SIGNED {
            return Err(Error::UnsupportedOperation(
                "result has negative indices, use Laurent storage",
            ));
        }
        Ok(self.wrap(dense))
    }

    /// Check that two polynomials can be combined.
    pub(crate) fn check_compatible<S2: BasicStorage, B2: Basis>(
        &self,
        other: &BasePoly<S2, B2>,
    ) -> Result<()> {
        if B::KIND != B2::KIND {
            return Err(Error::MismatchedBasis {
                lhs: B::NAME,
                rhs: B2::NAME,
            });
        }
        if self.var != other.var {
            return Err(Error::MismatchedVariable {
                lhs: self.var.clone(),
                rhs: other.var.clone(),
            });
        }
        Ok(())
    }
}

impl<S: OwnedStorage, B: Basis> BasePoly<S, B> {
    /// Create a polynomial from coefficients of increasing index, starting
    /// at 0.
    ///
    /// ```
    /// use polybasis::{ChebPoly, Poly};
    ///
    /// let p = Poly::<f64>::from_coeffs([1.0, 2.0, 0.0]);
    /// assert_eq!(p.degree(), 1);
    /// let c = ChebPoly::<f64>::from_coeffs([1.0, 0.0, 3.0, 4.0]);
    /// assert_eq!(c.degree(), 3);
    /// ```
    pub fn from_coeffs(coeffs: impl IntoIterator<Item = S::T>) -> Self {
        Self::from_run(0, coeffs.into_iter().collect())
    }

    /// Create a polynomial from coefficients of increasing index, starting at
    /// `first`.
    ///
    /// # Panics
    /// If `first` is negative and the storage is not Laurent.
    pub fn from_run(first: isize, coeffs: Vec<S::T>) -> Self {
        Self::from_parts(S::from_run(first, coeffs), DEFAULT_VARIABLE.into())
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::from_run(0, vec![])
    }

    #[must_use]
    pub fn constant(c: S::T) -> Self {
        Self::from_run(0, vec![c])
    }

    #[must_use]
    pub fn one() -> Self {
        Self::constant(S::T::one())
    }

    /// The degree-1 generator of the basis, `[0, 1]`. This is `x` in the
    /// standard basis and `T_1(x) = x` in the Chebyshev basis.
    #[must_use]
    pub fn variable_poly() -> Self {
        Self::basis_function(1)
    }

    /// The `k`-th basis function on its own, `x^k` or `T_k(x)`.
    #[must_use]
    pub fn basis_function(k: usize) -> Self {
        Self::from_run(usize_to_isize(k), vec![S::T::one()])
    }
}

impl<S: Clone, B> Clone for BasePoly<S, B> {
    fn clone(&self) -> Self {
        Self::from_parts(self.storage.clone(), self.var.clone())
    }
}

impl<S: fmt::Debug, B: Basis> fmt::Debug for BasePoly<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasePoly")
            .field("basis", &B::NAME)
            .field("variable", &self.var)
            .field("storage", &self.storage)
            .finish()
    }
}

/// Polynomials are equal when they are in the same variable and have the same
/// nonzero terms, regardless of storage.
impl<S, S2, B> PartialEq<BasePoly<S2, B>> for BasePoly<S, B>
where
    S: BasicStorage,
    S2: BasicStorage<T = S::T>,
    B: Basis,
{
    fn eq(&self, other: &BasePoly<S2, B>) -> bool {
        self.var == other.var && self.nonzero_terms().eq(other.nonzero_terms())
    }
}

impl<S: OwnedStorage, B: Basis> FromIterator<S::T> for BasePoly<S, B> {
    fn from_iter<I: IntoIterator<Item = S::T>>(iter: I) -> Self {
        Self::from_coeffs(iter)
    }
}
