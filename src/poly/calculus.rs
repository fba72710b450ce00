use crate::{
    aliases::F,
    basis::{Basis, BasisKind},
    storage::BasicStorage,
    util::casting::{isize_to_scalar, usize_to_isize, usize_to_scalar},
    BasePoly, Error, FieldScalar, Result,
};

use super::internals::Dense;

fn unsigned_chebyshev<T: FieldScalar>(d: &Dense<T>) -> Result<Vec<T>> {
    d.clone().into_unsigned().ok_or(Error::UnsupportedOperation(
        "calculus on Chebyshev series with negative indices",
    ))
}

fn derivative_dense<T: FieldScalar>(kind: BasisKind, d: &Dense<T>) -> Result<Dense<T>> {
    if d.has_nan() {
        log::debug!("NaN coefficient, derivative is NaN");
        return Ok(Dense::nan());
    }
    if d.degree() <= 0 && d.first >= 0 {
        return Ok(Dense::zero());
    }
    match kind {
        BasisKind::Standard => {
            let mut out = Dense::zero();
            for (i, c) in d.coeffs.iter().enumerate() {
                let k = d.first + usize_to_isize(i);
                if k != 0 && !c.is_zero() {
                    *out.get_mut(k - 1) = c.clone() * isize_to_scalar(k);
                }
            }
            Ok(out.normalize())
        }
        BasisKind::ChebyshevT => {
            let mut q = unsigned_chebyshev(d)?;
            let n = q.len() - 1;
            let mut der = vec![T::zero(); n];
            for j in (3..=n).rev() {
                der[j - 1] = q[j].clone() * usize_to_scalar(2 * j);
                let folded = q[j].clone() * usize_to_scalar(j) / usize_to_scalar(j - 2);
                q[j - 2] = q[j - 2].clone() + folded;
            }
            if n > 1 {
                der[1] = q[2].clone() * usize_to_scalar(4);
            }
            der[0] = q[1].clone();
            Ok(Dense::from_vec(der))
        }
    }
}

fn integral_dense<T: FieldScalar>(kind: BasisKind, d: &Dense<T>) -> Result<Dense<T>> {
    if d.has_nan() {
        log::debug!("NaN coefficient, integral is NaN");
        return Ok(Dense::nan());
    }
    if d.is_zero() {
        return Ok(Dense::zero());
    }
    match kind {
        BasisKind::Standard => {
            let mut out = Dense::zero();
            for (i, c) in d.coeffs.iter().enumerate() {
                let k = d.first + usize_to_isize(i);
                if c.is_zero() {
                    continue;
                }
                if k == -1 {
                    return Err(Error::UnsupportedOperation(
                        "the antiderivative of x^-1 is not a polynomial",
                    ));
                }
                *out.get_mut(k + 1) = c.clone() / isize_to_scalar(k + 1);
            }
            Ok(out.normalize())
        }
        BasisKind::ChebyshevT => {
            let c = unsigned_chebyshev(d)?;
            let n = c.len();
            let mut a = vec![T::zero(); n + 1];
            a[1] = c[0].clone();
            if n > 1 {
                a[2] = c[1].clone() / usize_to_scalar(4);
            }
            for j in 2..n {
                a[j + 1] = c[j].clone() / usize_to_scalar(2 * (j + 1));
                a[j - 1] = a[j - 1].clone() - c[j].clone() / usize_to_scalar(2 * (j - 1));
            }
            Ok(Dense::from_vec(a))
        }
    }
}

impl<S: BasicStorage, B: Basis> BasePoly<S, B> {
    /// Derivative with respect to the variable.
    ///
    /// Constants differentiate to the zero polynomial. If any coefficient is
    /// NaN, the result is the constant NaN.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] for Chebyshev series with negative
    /// indices.
    ///
    /// # Examples
    /// ```
    /// use polybasis::{cheb, poly};
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].derivative().unwrap(), poly![2.0, 6.0]);
    /// // T_3' = 3 T_0 + 6 T_2
    /// assert_eq!(cheb![0.0, 0.0, 0.0, 1.0].derivative().unwrap(), cheb![3.0, 0.0, 6.0]);
    /// ```
    pub fn derivative(&self) -> Result<BasePoly<S::Owned<F<S>>, B>> {
        self.derivative_n(1)
    }

    /// The `k`-th derivative.
    ///
    /// # Errors
    /// Same as [`Self::derivative`].
    pub fn derivative_n(&self, k: usize) -> Result<BasePoly<S::Owned<F<S>>, B>> {
        let mut d = self.to_dense().to_field();
        for _ in 0..k {
            d = derivative_dense(B::KIND, &d)?;
        }
        Ok(self.wrap(d))
    }

    /// Antiderivative whose constant term is zero. The result has one degree
    /// more than `self`, NaN coefficients propagate as in
    /// [`Self::derivative`].
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] when integrating an `x^-1` term, or for
    /// Chebyshev series with negative indices.
    pub fn integrate(&self) -> Result<BasePoly<S::Owned<F<S>>, B>> {
        self.integrate_n(1)
    }

    /// Integrate `k` times.
    ///
    /// # Errors
    /// Same as [`Self::integrate`].
    pub fn integrate_n(&self, k: usize) -> Result<BasePoly<S::Owned<F<S>>, B>> {
        let mut d = self.to_dense().to_field();
        for _ in 0..k {
            d = integral_dense(B::KIND, &d)?;
        }
        Ok(self.wrap(d))
    }

    /// Antiderivative with the given constant term.
    ///
    /// # Errors
    /// Same as [`Self::integrate`].
    pub fn integrate_with(&self, constant: F<S>) -> Result<BasePoly<S::Owned<F<S>>, B>> {
        let mut d = integral_dense(B::KIND, &self.to_dense().to_field())?;
        let slot = d.get_mut(0);
        *slot = slot.clone() + constant;
        Ok(self.wrap(d.normalize()))
    }
}

#[cfg(test)]
mod test {
    use crate::{
        aliases::{ChebPoly, LaurentPoly, Poly, SparsePoly},
        BasePoly, ChebyshevT, Error, LaurentStore,
    };

    #[test]
    fn standard_derivative() {
        let p = Poly::from_coeffs([1.0, 2.0, 3.0]);
        assert_eq!(p.derivative().unwrap(), Poly::from_coeffs([2.0, 6.0]));
        assert_eq!(p.derivative_n(2).unwrap(), Poly::from_coeffs([6.0]));
        assert!(p.derivative_n(3).unwrap().is_zero());
    }

    // constants differentiate to the zero polynomial, not to `[0]`
    #[test]
    fn derivative_of_constant() {
        let one = Poly::from_coeffs([1.0]);
        assert_eq!(one.derivative().unwrap().degree(), -1);
        let one = ChebPoly::from_coeffs([1.0]);
        assert_eq!(one.derivative().unwrap().degree(), -1);
    }

    #[test]
    fn integer_promotion() {
        let p = Poly::from_coeffs([1, 2, 3]);
        assert_eq!(
            p.integrate().unwrap(),
            Poly::from_coeffs([0.0, 1.0, 1.0, 1.0])
        );
        assert_eq!(p.derivative().unwrap(), Poly::from_coeffs([2.0, 6.0]));
    }

    #[test]
    fn integral_diff() {
        let p = Poly::from_coeffs([1.0, 2.0, 3.0]);
        let q = p.integrate().unwrap().derivative().unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn integrate_with_constant() {
        let p = Poly::from_coeffs([2.0]);
        let q = p.integrate_with(5.0).unwrap();
        assert_eq!(q, Poly::from_coeffs([5.0, 2.0]));
        let q = p.integrate_n(2).unwrap();
        assert_eq!(q, Poly::from_coeffs([0.0, 0.0, 1.0]));
    }

    #[test]
    fn chebyshev_derivative() {
        // T_2 = 2x^2 - 1, T_2' = 4x = 4 T_1
        let t2 = ChebPoly::<f64>::basis_function(2);
        assert_eq!(t2.derivative().unwrap(), ChebPoly::from_coeffs([0.0, 4.0]));
        // T_4' = 8 T_3 + 8 T_1
        let t4 = ChebPoly::<f64>::basis_function(4);
        assert_eq!(
            t4.derivative().unwrap(),
            ChebPoly::from_coeffs([0.0, 8.0, 0.0, 8.0])
        );
        assert_eq!(
            ChebPoly::<f64>::variable_poly().derivative().unwrap(),
            ChebPoly::from_coeffs([1.0])
        );
    }

    #[test]
    fn chebyshev_integral() {
        // int T_0 = T_1
        assert_eq!(
            ChebPoly::from_coeffs([1.0]).integrate().unwrap(),
            ChebPoly::from_coeffs([0.0, 1.0])
        );
        // int T_1 = T_2 / 4 + constant
        assert_eq!(
            ChebPoly::from_coeffs([0.0, 1.0]).integrate().unwrap(),
            ChebPoly::from_coeffs([0.0, 0.0, 0.25])
        );
        // int T_2 = T_3 / 6 - T_1 / 2
        assert_eq!(
            ChebPoly::from_coeffs([0.0, 0.0, 1.0]).integrate().unwrap(),
            ChebPoly::from_coeffs([0.0, -0.5, 0.0, 1.0 / 6.0])
        );
    }

    #[test]
    fn chebyshev_round_trip() {
        let p = ChebPoly::from_coeffs([3.0, -1.0, 0.5, 2.0, 0.25]);
        let q = p.derivative().unwrap().integrate().unwrap();
        let expected = p.sub_scalar(3.0);
        for (a, b) in q.to_vec().iter().zip(expected.to_vec()) {
            assert!(f64::abs(a - b) < 1E-14);
        }
        assert_eq!(q.degree(), p.degree());
    }

    #[test]
    fn nan_propagates() {
        let p = ChebPoly::from_coeffs([1.0, f64::NAN, 2.0]);
        let d = p.derivative().unwrap();
        assert_eq!(d.degree(), 0);
        assert!(d.coeff(0).unwrap().is_nan());
        let i = p.integrate().unwrap();
        assert_eq!(i.degree(), 0);
        assert!(i.coeff(0).unwrap().is_nan());

        // checked before the degree
        let c = Poly::from_coeffs([f64::NAN]);
        assert!(c.derivative().unwrap().coeff(0).unwrap().is_nan());
    }

    #[test]
    fn laurent_calculus() {
        // (x^-2 + x)' = -2 x^-3 + 1
        let p = LaurentPoly::from_run(-2, vec![1.0, 0.0, 0.0, 1.0]);
        let d = p.derivative().unwrap();
        assert_eq!(d.first_index(), -3);
        assert_eq!(d.to_vec(), vec![-2.0, 0.0, 0.0, 1.0]);

        // int x^-2 = -x^-1
        let i = LaurentPoly::from_run(-2, vec![1.0]).integrate().unwrap();
        assert_eq!(i.first_index(), -1);
        assert_eq!(i.to_vec(), vec![-1.0]);

        let inv = LaurentPoly::from_run(-1, vec![1.0]);
        assert!(matches!(
            inv.integrate(),
            Err(Error::UnsupportedOperation(_))
        ));

        let cheb = BasePoly::<LaurentStore<f64>, ChebyshevT>::from_run(-1, vec![1.0, 1.0]);
        assert!(matches!(
            cheb.derivative(),
            Err(Error::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn sparse_calculus() {
        let p = SparsePoly::from_terms([(0, 1.0), (100, 1.0)]);
        let d = p.derivative().unwrap();
        assert_eq!(d.storage().nnz(), 1);
        assert_eq!(d.coeff(99).unwrap(), 100.0);
    }
}
