use na::{ComplexField, DMatrix, DVector};

use crate::{
    basis::{Basis, BasisKind},
    BasePoly, Error, FieldScalar, Result,
};

impl<T: FieldScalar, B: Basis> BasePoly<Vec<T>, B> {
    /// Generalized Vandermonde matrix of the basis.
    ///
    /// Row `r` holds the first `degree + 1` basis functions evaluated at
    /// `points[r]`, built with the recurrence of the basis (`x^i = x x^(i-1)`
    /// or `T_i = 2x T_(i-1) - T_(i-2)`). Multiplying it with a coefficient
    /// vector evaluates the polynomial at every point.
    ///
    /// ```
    /// use polybasis::ChebPoly;
    ///
    /// let v = ChebPoly::vander(&[0.5], 3);
    /// assert_eq!(v.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 0.5, -0.5, -1.0]);
    /// ```
    #[must_use]
    pub fn vander(points: &[T], degree: usize) -> DMatrix<T> {
        let mut a = DMatrix::zeros(points.len(), degree + 1);
        for (r, x) in points.iter().enumerate() {
            a[(r, 0)] = T::one();
            if degree == 0 {
                continue;
            }
            a[(r, 1)] = x.clone();
            for i in 2..=degree {
                a[(r, i)] = match B::KIND {
                    BasisKind::Standard => x.clone() * a[(r, i - 1)].clone(),
                    BasisKind::ChebyshevT => {
                        (x.clone() + x.clone()) * a[(r, i - 1)].clone() - a[(r, i - 2)].clone()
                    }
                };
            }
        }
        a
    }
}

impl<T: FieldScalar + ComplexField, B: Basis> BasePoly<Vec<T>, B> {
    /// Least squares fit of a polynomial of at most `degree` to the samples
    /// `(xs[i], ys[i])`, solved through the singular value decomposition of
    /// the Vandermonde matrix.
    ///
    /// Chebyshev fits are best conditioned when `xs` lie in `[-1, 1]`, see
    /// [`crate::map_domain`].
    ///
    /// # Errors
    /// - [`Error::Argument`] if there are no samples or `xs` and `ys` have
    ///   different lengths.
    /// - [`Error::Other`] if the decomposition fails.
    ///
    /// ```
    /// use polybasis::{Poly, poly};
    ///
    /// let xs = [0.0, 1.0, 2.0, 3.0];
    /// let ys = [1.0, 3.0, 7.0, 13.0];
    /// let p = Poly::fit(&xs, &ys, 2).unwrap().chop(1E-10);
    /// assert_eq!(p.degree(), 2);
    /// assert!(f64::abs(p.coeff(2).unwrap() - 1.0) < 1E-10);
    /// ```
    pub fn fit(xs: &[T], ys: &[T], degree: usize) -> Result<Self> {
        if xs.is_empty() {
            return Err(Error::Argument("cannot fit a polynomial without samples"));
        }
        if xs.len() != ys.len() {
            return Err(Error::Argument("number of abscissae and ordinates differ"));
        }
        let a = Self::vander(xs, degree);
        let b = DVector::from_column_slice(ys);
        let svd = a.svd(true, true);
        let coeffs = svd
            .solve(&b, na::convert(f64::EPSILON))
            .map_err(|e| anyhow::anyhow!(e))?;
        log::trace!("fitted {} samples with degree {degree}", xs.len());
        Ok(Self::from_coeffs(coeffs.iter().cloned()))
    }
}
