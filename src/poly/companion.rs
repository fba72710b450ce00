use na::DMatrix;
use num::{FromPrimitive, One};

use crate::{
    aliases::F,
    basis::{Basis, BasisKind},
    error::INFALLIBLE_CONVERSION,
    storage::BasicStorage,
    util::linalg::set_subdiagonal,
    BasePoly, Error, FieldScalar, Result,
};

impl<S: BasicStorage, B: Basis> BasePoly<S, B> {
    /// Companion matrix of the polynomial, a `degree x degree` matrix whose
    /// eigenvalues are the roots of the polynomial.
    ///
    /// In the standard basis this is the Frobenius companion matrix:
    /// ```text
    /// [
    ///     [0, 0, ..., 0, -c_0 / c_n],
    ///     [1, 0, ..., 0, -c_1 / c_n],
    ///     [0, 1, ..., 0, -c_2 / c_n],
    ///     [:, :, ..., :,   :       ],
    ///     [0, 0, ..., 1, -c_{n-1} / c_n]
    /// ]
    /// ```
    ///
    /// In the Chebyshev basis this is the symmetrically scaled comrade
    /// matrix, whose off-diagonals are `0.5` except for the first entries
    /// that are `sqrt(0.5)`.
    ///
    /// # Errors
    /// - [`Error::Argument`] if the degree is smaller than 1.
    /// - [`Error::UnsupportedOperation`] if the polynomial has negative indices.
    ///
    /// # Examples
    /// ```
    /// use polybasis::{na::DMatrix, poly};
    ///
    /// let c = poly![2.0, -3.0, 1.0].companion().unwrap();
    /// assert_eq!(c, DMatrix::from_row_slice(2, 2, &[0.0, -2.0, 1.0, 3.0]));
    /// ```
    pub fn companion(&self) -> Result<DMatrix<F<S>>> {
        let Some(c) = self.to_dense().to_field().into_unsigned() else {
            return Err(Error::UnsupportedOperation(
                "companion matrix of a polynomial with negative indices",
            ));
        };
        if c.len() < 2 {
            return Err(Error::Argument(
                "companion matrix needs a polynomial of degree at least 1",
            ));
        }
        let n = c.len() - 1;
        let lead = c[n].clone();
        if n == 1 {
            return Ok(DMatrix::from_element(1, 1, -c[0].clone() / lead));
        }

        let mut mat = DMatrix::zeros(n, n);
        match B::KIND {
            BasisKind::Standard => {
                set_subdiagonal(&mut mat.as_view_mut(), -1, &vec![F::<S>::one(); n - 1]);
                for (i, ci) in c[..n].iter().enumerate() {
                    mat[(i, n - 1)] = -ci.clone() / lead.clone();
                }
            }
            BasisKind::ChebyshevT => {
                let half = F::<S>::from_f64(0.5).expect(INFALLIBLE_CONVERSION);
                let sqrt_half = half.sqrt();

                let mut diag = vec![half.clone(); n - 1];
                diag[0] = sqrt_half.clone();
                set_subdiagonal(&mut mat.as_view_mut(), 1, &diag);
                set_subdiagonal(&mut mat.as_view_mut(), -1, &diag);

                let mut scl = vec![sqrt_half; n];
                scl[0] = F::<S>::one();
                let last = scl[n - 1].clone() * lead.clone();
                for (i, ci) in c[..n].iter().enumerate() {
                    let correction = ci.clone() * scl[i].clone() / last.clone() * half.clone();
                    mat[(i, n - 1)] = mat[(i, n - 1)].clone() - correction;
                }
            }
        }
        Ok(mat)
    }
}

#[cfg(test)]
mod test {
    use na::DMatrix;

    use crate::{
        aliases::{ChebPoly, LaurentPoly, Poly},
        Error,
    };

    #[test]
    fn frobenius() {
        let p = Poly::from_coeffs([1.0, 2.0, 3.0, 2.0]);
        assert_eq!(
            p.companion().unwrap(),
            DMatrix::from_row_slice(3, 3, &[0.0, 0.0, -0.5, 1.0, 0.0, -1.0, 0.0, 1.0, -1.5])
        );
    }

    #[test]
    fn linear() {
        let p = Poly::from_coeffs([3, 2]);
        assert_eq!(p.companion().unwrap(), DMatrix::from_element(1, 1, -1.5));
        let c = ChebPoly::from_coeffs([1.0, 4.0]);
        assert_eq!(c.companion().unwrap(), DMatrix::from_element(1, 1, -0.25));
    }

    #[test]
    fn degree_too_low() {
        assert!(matches!(
            Poly::from_coeffs([1.0]).companion(),
            Err(Error::Argument(_))
        ));
        assert!(matches!(
            ChebPoly::<f64>::zero().companion(),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn comrade() {
        let h = 0.5f64.sqrt();
        let t2 = ChebPoly::<f64>::basis_function(2);
        assert_eq!(
            t2.companion().unwrap(),
            DMatrix::from_row_slice(2, 2, &[0.0, h, h, 0.0])
        );

        // T_3 + T_0, only the last column picks up a correction
        let p = ChebPoly::from_coeffs([1.0, 0.0, 0.0, 1.0]);
        let m = p.companion().unwrap();
        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[0.0, h, -1.0 / h * 0.5, h, 0.0, 0.5, 0.0, 0.5, 0.0],
        );
        assert!((m - expected).abs().max() < 1E-15);
    }

    #[test]
    fn laurent_negative_powers() {
        let p = LaurentPoly::from_run(-1, vec![1.0, 1.0, 1.0]);
        let err = p.companion().unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation(_)));
        // positive offsets are padded with zero coefficients
        let q = LaurentPoly::from_run(1, vec![1.0, 1.0]);
        assert_eq!(
            q.companion().unwrap(),
            DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, -1.0])
        );
    }
}
