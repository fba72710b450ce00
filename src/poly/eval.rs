use std::ops::{Add, Mul, Sub};

use na::DMatrix;
use num::{
    complex::{Complex32, Complex64},
    Complex, One, Zero,
};

use crate::{
    basis::{Basis, BasisKind},
    storage::BasicStorage,
    BasePoly, BasicScalar, Error, FieldScalar, Result,
};

use super::internals::Dense;

/// Types a polynomial with coefficients `T` can be evaluated at.
///
/// The argument and the coefficients must form a ring. Coefficients are lifted
/// into the argument's type and combined using the argument's own arithmetic,
/// so the same recurrences evaluate at scalars, square matrices and other
/// polynomials.
pub trait EvalRing<T>:
    Clone + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Embed a coefficient, e.g. as a multiple of the identity matrix.
    fn lift(&self, c: &T) -> Self;

    /// Multiplicative inverse, only needed for negative powers of Laurent
    /// polynomials. `None` if the value is not invertible.
    fn try_inverse(&self) -> Option<Self>;
}

/// Whether an evaluation argument lies on the real segment `[-1, 1]`.
///
/// Arguments that cannot be placed on the real line (matrices, polynomials)
/// never pass the check and must go through
/// [`BasePoly::eval_unchecked`] in bounded bases.
pub trait DomainCheck {
    fn within_unit_interval(&self) -> bool;
}

macro_rules! impl_eval_field {
    ($t:ty) => {
        impl EvalRing<$t> for $t {
            fn lift(&self, c: &$t) -> Self {
                *c
            }

            fn try_inverse(&self) -> Option<Self> {
                if self.is_zero() {
                    None
                } else {
                    Some(Self::one() / *self)
                }
            }
        }
    };
}
impl_eval_field!(f32);
impl_eval_field!(f64);
impl_eval_field!(Complex32);
impl_eval_field!(Complex64);

// real coefficients at complex arguments
macro_rules! impl_eval_real_at_complex {
    ($re:ty, $c:ty) => {
        impl EvalRing<$re> for $c {
            fn lift(&self, c: &$re) -> Self {
                Complex::new(*c, 0.0)
            }

            fn try_inverse(&self) -> Option<Self> {
                <Self as EvalRing<$c>>::try_inverse(self)
            }
        }
    };
}
impl_eval_real_at_complex!(f32, Complex32);
impl_eval_real_at_complex!(f64, Complex64);

macro_rules! impl_eval_integer {
    ($t:ty) => {
        impl EvalRing<$t> for $t {
            fn lift(&self, c: &$t) -> Self {
                *c
            }

            fn try_inverse(&self) -> Option<Self> {
                // units are the only invertible integers
                (*self == 1 || *self == -1).then_some(*self)
            }
        }

        impl EvalRing<$t> for f64 {
            fn lift(&self, c: &$t) -> Self {
                c.to_field()
            }

            fn try_inverse(&self) -> Option<Self> {
                <Self as EvalRing<f64>>::try_inverse(self)
            }
        }

        impl DomainCheck for $t {
            fn within_unit_interval(&self) -> bool {
                (-1..=1).contains(self)
            }
        }
    };
}
impl_eval_integer!(i32);
impl_eval_integer!(i64);

macro_rules! impl_eval_matrix {
    ($t:ty) => {
        impl EvalRing<$t> for DMatrix<$t> {
            fn lift(&self, c: &$t) -> Self {
                DMatrix::from_diagonal_element(self.nrows(), self.ncols(), *c)
            }

            fn try_inverse(&self) -> Option<Self> {
                na::Matrix::try_inverse(self.clone())
            }
        }
    };
}
impl_eval_matrix!(f32);
impl_eval_matrix!(f64);
impl_eval_matrix!(Complex32);
impl_eval_matrix!(Complex64);

/// Composition: evaluating at a polynomial in the same coefficient field.
impl<T: FieldScalar, B: Basis> EvalRing<T> for BasePoly<Vec<T>, B> {
    fn lift(&self, c: &T) -> Self {
        Self::constant(c.clone()).with_variable(self.var.clone())
    }

    fn try_inverse(&self) -> Option<Self> {
        if self.degree() != 0 {
            return None;
        }
        let c = self.storage[0].clone();
        Some(self.lift(&(T::one() / c)))
    }
}

macro_rules! impl_domain_real {
    ($t:ty) => {
        impl DomainCheck for $t {
            fn within_unit_interval(&self) -> bool {
                (-1.0..=1.0).contains(self)
            }
        }
    };
}
impl_domain_real!(f32);
impl_domain_real!(f64);

macro_rules! impl_domain_complex {
    ($t:ty) => {
        impl DomainCheck for $t {
            fn within_unit_interval(&self) -> bool {
                self.im == 0.0 && (-1.0..=1.0).contains(&self.re)
            }
        }
    };
}
impl_domain_complex!(Complex32);
impl_domain_complex!(Complex64);

impl<T> DomainCheck for DMatrix<T> {
    fn within_unit_interval(&self) -> bool {
        false
    }
}

impl<S, B> DomainCheck for BasePoly<S, B> {
    fn within_unit_interval(&self) -> bool {
        false
    }
}

/// Map points from the interval `[a, b]` onto `[-1, 1]`, the domain of the
/// Chebyshev basis.
///
/// ```
/// use polybasis::map_domain;
///
/// assert_eq!(map_domain(3.0, 2.0, 4.0), 0.0);
/// assert_eq!(map_domain(4.0, 2.0, 4.0), 1.0);
/// ```
pub fn map_domain<T: FieldScalar>(x: T, a: T, b: T) -> T {
    (x.clone() + x - a.clone() - b.clone()) / (b - a)
}

// Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
fn horner<T: BasicScalar, X: EvalRing<T>>(coeffs: &[T], x: &X) -> X {
    let mut iter = coeffs.iter().rev();
    let Some(top) = iter.next() else {
        return x.lift(&T::zero());
    };
    let mut acc = x.lift(top);
    for c in iter {
        acc = acc * x.clone() + x.lift(c);
    }
    acc
}

// Clenshaw's recurrence for Chebyshev series of the first kind
fn clenshaw<T: BasicScalar, X: EvalRing<T>>(coeffs: &[T], x: &X) -> X {
    let n = coeffs.len();
    match n {
        0 => return x.lift(&T::zero()),
        1 => return x.lift(&coeffs[0]),
        _ => {}
    }
    let two_x = x.clone() + x.clone();
    let mut c0 = x.lift(&coeffs[n - 2]);
    let mut c1 = x.lift(&coeffs[n - 1]);
    for c in coeffs[..n - 2].iter().rev() {
        let next = x.lift(c) - c1.clone();
        c1 = c0 + c1 * two_x.clone();
        c0 = next;
    }
    c0 + c1 * x.clone()
}

fn power<T: BasicScalar, X: EvalRing<T>>(x: &X, n: usize) -> X {
    let mut acc = x.lift(&T::one());
    for _ in 0..n {
        acc = acc * x.clone();
    }
    acc
}

fn eval_dense<T: BasicScalar, X: EvalRing<T>, B: Basis>(dense: &Dense<T>, x: X) -> Result<X> {
    match B::KIND {
        BasisKind::Standard => {
            let value = horner(&dense.coeffs, &x);
            let shift = dense.first;
            if shift == 0 {
                return Ok(value);
            }
            if shift > 0 {
                return Ok(value * power(&x, shift.unsigned_abs()));
            }
            let Some(inv) = x.try_inverse() else {
                log::debug!("argument is not invertible, negative powers fail");
                return Err(Error::Divide);
            };
            Ok(value * power(&inv, shift.unsigned_abs()))
        }
        BasisKind::ChebyshevT => {
            let Some(coeffs) = dense.clone().into_unsigned() else {
                return Err(Error::UnsupportedOperation(
                    "Chebyshev series with negative indices cannot be evaluated",
                ));
            };
            Ok(clenshaw(&coeffs, &x))
        }
    }
}

impl<S: BasicStorage, B: Basis> BasePoly<S, B> {
    /// Evaluate the polynomial at `x`.
    ///
    /// # Errors
    /// - [`Error::Domain`] if the basis has a bounded domain and `x` is not
    ///   in `[-1, 1]`. Use [`Self::eval_unchecked`] to extrapolate.
    /// - Any error of [`Self::eval_unchecked`].
    ///
    /// # Panics
    /// Same as [`Self::eval_unchecked`].
    ///
    /// ```
    /// use polybasis::cheb;
    ///
    /// let p = cheb![1.0, 0.0, 3.0, 4.0];
    /// assert_eq!(p.eval(0.5).unwrap(), -4.5);
    /// assert!(p.eval(5.0).is_err());
    /// ```
    pub fn eval<X: EvalRing<S::T> + DomainCheck>(&self, x: X) -> Result<X> {
        self.check_domain(&x)?;
        self.eval_unchecked(x)
    }

    /// Evaluate the polynomial at `x` without checking the domain of the
    /// basis.
    ///
    /// # Errors
    /// - [`Error::Divide`] if the polynomial has negative powers and `x` is
    ///   not invertible.
    /// - [`Error::UnsupportedOperation`] for Chebyshev series with negative
    ///   indices.
    ///
    /// # Panics
    /// With integer coefficients at an integer `x`, intermediate sums and
    /// products use the integer type and overflow panics in debug builds.
    /// Evaluate at an `f64` instead when the result may not fit.
    pub fn eval_unchecked<X: EvalRing<S::T>>(&self, x: X) -> Result<X> {
        eval_dense::<_, _, B>(&self.to_dense(), x)
    }

    /// Evaluate at each of `xs` with the same checks as [`Self::eval`].
    ///
    /// # Errors
    /// Fails on the first point that [`Self::eval`] fails on.
    pub fn eval_many<X: EvalRing<S::T> + DomainCheck>(
        &self,
        xs: impl IntoIterator<Item = X>,
    ) -> Result<Vec<X>> {
        let dense = self.to_dense();
        xs.into_iter()
            .map(|x| {
                self.check_domain(&x)?;
                eval_dense::<_, _, B>(&dense, x)
            })
            .collect()
    }

    fn check_domain<X: DomainCheck>(&self, x: &X) -> Result<()> {
        if B::KIND.has_bounded_domain() && !x.within_unit_interval() {
            log::debug!("evaluation argument outside of [-1, 1]");
            return Err(Error::Domain { basis: B::NAME });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use na::DMatrix;
    use num::complex::Complex64;

    use crate::{
        aliases::{ChebPoly, LaurentPoly, Poly, SparsePoly},
        Error,
    };

    use super::map_domain;

    #[test]
    fn chebyshev_at_half() {
        let p = ChebPoly::from_coeffs([1.0, 0.0, 3.0, 4.0]);
        assert_eq!(p.eval(0.5).unwrap(), -4.5);
    }

    #[test]
    fn chebyshev_many() {
        let p = ChebPoly::from_coeffs([2.5, 1.5, 1.0]);
        assert_eq!(p.eval(0.0).unwrap(), 1.5);
        assert_eq!(
            p.eval_many([-1.0, -0.5, 0.0, 0.5, 1.0]).unwrap(),
            vec![2.0, 1.25, 1.5, 2.75, 5.0]
        );
    }

    #[test]
    fn chebyshev_domain() {
        let p = ChebPoly::from_coeffs([1.0, 0.0, 3.0, 4.0]);
        assert!(matches!(p.eval(5.0), Err(Error::Domain { .. })));
        assert_eq!(p.eval_unchecked(5.0).unwrap(), 2088.0);
        assert!(matches!(
            p.eval(Complex64::new(0.5, 0.1)),
            Err(Error::Domain { .. })
        ));
        assert!(p.eval(Complex64::new(0.5, 0.0)).is_ok());
    }

    #[test]
    fn low_degree_shortcuts() {
        assert_eq!(ChebPoly::<f64>::zero().eval(0.3).unwrap(), 0.0);
        assert_eq!(ChebPoly::constant(7.0).eval(0.3).unwrap(), 7.0);
        assert_eq!(Poly::<f64>::zero().eval(3.0).unwrap(), 0.0);
    }

    #[test]
    fn horner() {
        let p = Poly::from_coeffs([1.0, -2.0, 3.0]);
        assert_eq!(p.eval(2.0).unwrap(), 9.0);
        // no domain restriction in the standard basis
        assert_eq!(p.eval(100.0).unwrap(), 29801.0);
        let s = SparsePoly::from_terms([(0, 1.0), (10, 1.0)]);
        assert_eq!(s.eval(2.0).unwrap(), 1025.0);
    }

    #[test]
    fn integer_coefficients() {
        let p = Poly::from_coeffs([1, 2, 3]);
        assert_eq!(p.eval(2).unwrap(), 17);
        assert_eq!(p.eval(0.5).unwrap(), 2.75);
    }

    #[test]
    fn integer_coefficients_large_argument() {
        // 1 + x + x^2 overflows i32 at x = 100000
        let p = Poly::from_coeffs([1i32, 1, 1]);
        assert_eq!(p.eval(100_000.0).unwrap(), 10_000_100_001.0);
        let p = Poly::from_coeffs([1i64, 1, 1]);
        assert_eq!(p.eval(100_000i64).unwrap(), 10_000_100_001);
    }

    #[test]
    fn real_coefficients_complex_argument() {
        let p = Poly::from_coeffs([1.0, 0.0, 1.0]);
        let z = p.eval(Complex64::i()).unwrap();
        assert!(z.norm() < 1E-15);
    }

    #[test]
    fn matrix_argument() {
        let p = Poly::from_coeffs([1.0, 2.0, 1.0]);
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 0.0, 1.0]);
        assert_eq!(
            p.eval(a.clone()).unwrap(),
            DMatrix::from_row_slice(2, 2, &[4.0, 4.0, 0.0, 4.0])
        );

        let c = ChebPoly::from_coeffs([0.0, 0.0, 1.0]);
        assert!(matches!(c.eval(a.clone()), Err(Error::Domain { .. })));
        // T_2(A) = 2 A^2 - I
        assert_eq!(
            c.eval_unchecked(a).unwrap(),
            DMatrix::from_row_slice(2, 2, &[1.0, 4.0, 0.0, 1.0])
        );
    }

    #[test]
    fn laurent_negative_powers() {
        let p = LaurentPoly::from_run(-1, vec![1.0, 2.0]);
        assert_eq!(p.eval(2.0).unwrap(), 2.5);
        assert!(matches!(p.eval(0.0), Err(Error::Divide)));

        let q = LaurentPoly::from_run(2, vec![1.0]);
        assert_eq!(q.eval(3.0).unwrap(), 9.0);

        let singular = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        assert!(p.eval(singular).is_err());
    }

    #[test]
    fn composition() {
        // (x + 1) at (2y) is 2y + 1
        let p = Poly::from_coeffs([1.0, 1.0]);
        let arg = Poly::from_coeffs([0.0, 2.0]).with_variable("y");
        let r = p.eval(arg).unwrap();
        assert_eq!(r.to_vec(), vec![1.0, 2.0]);
        assert_eq!(r.variable(), "y");
    }

    #[test]
    fn domain_mapping() {
        assert_eq!(map_domain(0.0, -2.0, 2.0), 0.0);
        assert_eq!(map_domain(-2.0, -2.0, 2.0), -1.0);
        assert_eq!(map_domain(5.0, 0.0, 10.0), 0.0);
    }
}
