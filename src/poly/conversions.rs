use std::sync::Arc;

use num::Zero;

use crate::{
    aliases::F,
    basis::{Basis, ChebyshevT, Standard},
    storage::{BasicStorage, ContiguousStorage, LaurentStore, OwnedStorage, SparseStore},
    BasePoly, BasicScalar, Error, FieldScalar, Result, DEFAULT_VARIABLE,
};

use super::internals::{trim_trailing_zeros, Dense};

impl<S: BasicStorage, B: Basis> BasePoly<S, B> {
    fn convert<S2: OwnedStorage<T = S::T>>(&self) -> Result<BasePoly<S2, B>> {
        let dense = self.to_dense();
        if dense.first < 0 && !S2::SIGNED {
            return Err(Error::UnsupportedOperation(
                "target storage cannot hold negative indices",
            ));
        }
        Ok(BasePoly::from_parts(dense.into_storage(), self.var.clone()))
    }

    /// Copy into a dense `Vec`.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] if there are negative indices.
    pub fn to_owned_dense(&self) -> Result<BasePoly<Vec<S::T>, B>> {
        self.convert()
    }

    /// Copy into immutable storage that can be shared across threads without
    /// copying again.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] if there are negative indices.
    pub fn freeze(&self) -> Result<BasePoly<Arc<[S::T]>, B>> {
        self.convert()
    }

    /// Copy the nonzero terms into sparse storage.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] if there are negative indices.
    pub fn to_sparse(&self) -> Result<BasePoly<SparseStore<S::T>, B>> {
        self.convert()
    }

    #[must_use]
    pub fn to_laurent(&self) -> BasePoly<LaurentStore<S::T>, B> {
        BasePoly::from_parts(self.to_dense().into_storage(), self.var.clone())
    }

    /// Convert coefficients to [`BasicScalar::Field`], keeping the shape.
    #[must_use]
    pub fn promote(&self) -> BasePoly<S::Owned<F<S>>, B> {
        self.wrap(self.to_dense().to_field())
    }

    /// Re-express in the monomial basis.
    ///
    /// Computed by evaluating the series at the generator `x` of the standard
    /// basis.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] if there are negative indices in a
    /// Chebyshev series.
    ///
    /// ```
    /// use polybasis::{cheb, poly};
    ///
    /// // T_2 = 2x^2 - 1
    /// assert_eq!(cheb![0.0, 0.0, 1.0].to_standard().unwrap(), poly![-1.0, 0.0, 2.0]);
    /// ```
    pub fn to_standard(&self) -> Result<BasePoly<S::Owned<F<S>>, Standard>> {
        self.change_basis::<Standard>()
    }

    /// Re-express in the Chebyshev basis.
    ///
    /// Computed by evaluating the polynomial at the generator `T_1` of the
    /// Chebyshev basis.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] if there are negative indices.
    pub fn to_chebyshev(&self) -> Result<BasePoly<S::Owned<F<S>>, ChebyshevT>> {
        self.change_basis::<ChebyshevT>()
    }

    fn change_basis<B2: Basis>(&self) -> Result<BasePoly<S::Owned<F<S>>, B2>> {
        let dense = self.to_dense().to_field();
        if B::KIND == B2::KIND {
            return Ok(BasePoly::from_parts(dense.into_storage(), self.var.clone()));
        }
        if dense.first < 0 {
            return Err(Error::UnsupportedOperation(
                "basis conversion of a polynomial with negative indices",
            ));
        }
        let generator = BasePoly::<Vec<F<S>>, B2>::variable_poly();
        let generator = generator.with_variable(self.var.clone());
        let source = BasePoly::<Vec<F<S>>, B>::from_parts(
            Vec::from_run(dense.first, dense.coeffs),
            self.var.clone(),
        );
        let converted = source.eval_unchecked(generator)?;
        Ok(BasePoly::from_parts(
            Dense::from_vec(converted.storage).into_storage(),
            self.var.clone(),
        ))
    }
}

impl<S: BasicStorage, B: Basis> BasePoly<S, B>
where
    S::T: FieldScalar,
{
    /// Zero every coefficient whose magnitude is at most `tolerance`, then
    /// trim.
    #[must_use]
    pub fn chop(&self, tolerance: <S::T as FieldScalar>::Real) -> BasePoly<S::Owned<S::T>, B> {
        self.wrap(self.to_dense().map(|c| {
            if c.taxicab_norm() <= tolerance {
                S::T::zero()
            } else {
                c
            }
        }))
    }
}

impl<S: ContiguousStorage, B: Basis> BasePoly<S, B> {
    /// Borrow the coefficients without copying.
    #[must_use]
    pub fn view(&self) -> BasePoly<&[S::T], B> {
        BasePoly::from_parts(self.storage.as_slice(), self.var.clone())
    }
}

impl<'a, T: BasicScalar, B: Basis> BasePoly<&'a [T], B> {
    /// View a slice of coefficients, lowest index first. Trailing zeros are
    /// excluded from the view.
    #[must_use]
    pub fn from_slice(coeffs: &'a [T]) -> Self {
        let end = coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(0, |i| i + 1);
        Self::from_parts(&coeffs[..end], DEFAULT_VARIABLE.into())
    }
}

impl<T: BasicScalar, B: Basis> BasePoly<SparseStore<T>, B> {
    /// Sparse polynomial from `(index, coefficient)` pairs, see
    /// [`SparseStore::from_terms`].
    pub fn from_terms(terms: impl IntoIterator<Item = (usize, T)>) -> Self {
        Self::from_parts(SparseStore::from_terms(terms), DEFAULT_VARIABLE.into())
    }
}

impl<T: BasicScalar, B: Basis> From<Vec<T>> for BasePoly<Vec<T>, B> {
    fn from(mut value: Vec<T>) -> Self {
        trim_trailing_zeros(&mut value);
        Self::from_parts(value, DEFAULT_VARIABLE.into())
    }
}

impl<T: BasicScalar, B: Basis> From<BasePoly<Vec<T>, B>> for BasePoly<Arc<[T]>, B> {
    fn from(value: BasePoly<Vec<T>, B>) -> Self {
        Self::from_parts(value.storage.into(), value.var)
    }
}

#[cfg(test)]
mod test {
    use std::thread;

    use crate::{
        aliases::{ChebPoly, FrozenPoly, LaurentPoly, Poly, PolyView, SparsePoly},
        Error,
    };

    #[test]
    fn shape_round_trip() {
        let p = Poly::from_coeffs([1.0, 0.0, 0.0, 2.0]);
        let s = p.to_sparse().unwrap();
        assert_eq!(s.storage().nnz(), 2);
        assert_eq!(s.to_owned_dense().unwrap(), p);
        assert_eq!(p.to_laurent(), p);
        assert_eq!(p.freeze().unwrap(), p);
    }

    #[test]
    fn negative_indices_do_not_fit() {
        let l = LaurentPoly::from_run(-1, vec![1.0, 2.0]);
        assert!(matches!(
            l.to_owned_dense(),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(l.to_sparse().is_err());
        let shifted = LaurentPoly::from_run(1, vec![1.0, 2.0]);
        let dense = shifted.to_owned_dense().unwrap();
        assert_eq!(dense.to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn frozen_is_shareable() {
        let frozen: FrozenPoly<f64> = Poly::from_coeffs([1.0, 2.0]).into();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let p = frozen.clone();
                thread::spawn(move || p.eval(f64::from(i)).unwrap())
            })
            .collect();
        let values: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(values, vec![1.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn views() {
        let coeffs = [1.0, 2.0, 0.0];
        let v = PolyView::from_slice(&coeffs);
        assert_eq!(v.degree(), 1);
        let p = Poly::from_coeffs([1.0, 2.0]);
        assert_eq!(p.view(), v);
        assert_eq!(v.eval(2.0).unwrap(), 5.0);
        // arithmetic on views produces owned storage
        let sum: Poly<f64> = v.try_add(&p).unwrap();
        assert_eq!(sum.to_vec(), vec![2.0, 4.0]);
    }

    #[test]
    fn basis_round_trip() {
        let c = ChebPoly::from_coeffs([1.0, -2.0, 0.5, 3.0]);
        let s = c.to_standard().unwrap();
        // T_3 = 4x^3 - 3x, T_2 = 2x^2 - 1
        assert_eq!(s, Poly::from_coeffs([0.5, -11.0, 1.0, 12.0]));
        let back = s.to_chebyshev().unwrap();
        for (a, b) in back.to_vec().iter().zip(c.to_vec()) {
            assert!(f64::abs(a - b) < 1E-14);
        }
    }

    #[test]
    fn basis_conversion_keeps_shape_and_variable() {
        let c = SparsePoly::from_terms([(0, 1), (2, 1)]).with_variable("t");
        let cheb = c.to_chebyshev().unwrap();
        // 1 + t^2 = 1.5 T_0 + 0.5 T_2
        assert_eq!(cheb.storage().nnz(), 2);
        assert_eq!(cheb.coeff(0).unwrap(), 1.5);
        assert_eq!(cheb.variable(), "t");
    }

    #[test]
    fn chop() {
        let p = Poly::from_coeffs([1.0, 1E-17, 2.0, -1E-16]);
        assert_eq!(p.chop(1E-15), Poly::from_coeffs([1.0, 0.0, 2.0]));
    }

    #[test]
    fn promote() {
        let p = Poly::from_coeffs([1, 2]);
        assert_eq!(p.promote(), Poly::from_coeffs([1.0, 2.0]));
    }
}
