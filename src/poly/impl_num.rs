#![allow(clippy::op_ref)]

// Arithmetic between polynomials and with scalars, and the operator traits on
// owned dense polynomials

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num::One;

use crate::{
    aliases::F,
    basis::{Basis, BasisKind},
    storage::{BasicStorage, OwnedStorage},
    util::{
        linalg::convolve_1d,
        zseries::{c_to_z, z_div, z_to_c},
    },
    BasePoly, BasicScalar, Error, FieldScalar, RealScalar, Result,
};

use super::internals::Dense;

/// Product of two coefficient runs starting at index 0.
pub(crate) fn mul_coeffs<T: FieldScalar>(kind: BasisKind, a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }
    match kind {
        BasisKind::Standard => convolve_1d(a, b),
        BasisKind::ChebyshevT => z_to_c(&convolve_1d(&c_to_z(a), &c_to_z(b))),
    }
}

pub(crate) fn mul_dense<T: FieldScalar>(
    kind: BasisKind,
    a: &Dense<T>,
    b: &Dense<T>,
) -> Result<Dense<T>> {
    if a.is_zero() || b.is_zero() {
        return Ok(Dense::zero());
    }
    match kind {
        // x^i x^j = x^(i+j) holds for any sign, so the runs are multiplied
        // in place and the offsets added
        BasisKind::Standard => Ok(Dense {
            first: a.first + b.first,
            coeffs: mul_coeffs(kind, &a.coeffs, &b.coeffs),
        }
        .normalize()),
        BasisKind::ChebyshevT => {
            let (Some(a), Some(b)) = (a.clone().into_unsigned(), b.clone().into_unsigned()) else {
                return Err(Error::UnsupportedOperation(
                    "Chebyshev series with negative indices cannot be multiplied",
                ));
            };
            Ok(Dense::from_vec(mul_coeffs(kind, &a, &b)))
        }
    }
}

// schoolbook long division, `num` must be at least as long as `den` and `den`
// must have a nonzero leading coefficient
fn long_division<T: FieldScalar>(mut num: Vec<T>, den: &[T]) -> (Vec<T>, Vec<T>) {
    let dn = den.len();
    let lead = den[dn - 1].clone();
    let mut quo = vec![T::zero(); num.len() - dn + 1];
    for k in (0..quo.len()).rev() {
        let q = num[k + dn - 1].clone() / lead.clone();
        for (j, d) in den.iter().enumerate() {
            num[k + j] = num[k + j].clone() - q.clone() * d.clone();
        }
        quo[k] = q;
    }
    num.truncate(dn - 1);
    (quo, num)
}

pub(crate) fn div_rem_dense<T: FieldScalar>(
    kind: BasisKind,
    num: &Dense<T>,
    den: &Dense<T>,
) -> Result<(Dense<T>, Dense<T>)> {
    let (Some(num), Some(den)) = (num.clone().into_unsigned(), den.clone().into_unsigned()) else {
        return Err(Error::UnsupportedOperation(
            "division is not defined for polynomials with negative indices",
        ));
    };

    // edge cases, in order of priority
    if den.is_empty() || (den.len() == 1 && den[0].taxicab_norm().is_tiny()) {
        log::debug!("divisor is numerically zero");
        return Err(Error::Divide);
    }
    if num.len() < den.len() {
        log::trace!("dividend has lower degree than divisor, quotient is zero");
        return Ok((Dense::zero(), Dense::from_vec(num)));
    }
    if den.len() == 1 {
        log::trace!("constant divisor, dividing coefficients");
        let c = den[0].clone();
        let quo = num.into_iter().map(|n| n / c.clone()).collect();
        return Ok((Dense::from_vec(quo), Dense::zero()));
    }

    let (quo, rem) = match kind {
        BasisKind::Standard => long_division(num, &den),
        BasisKind::ChebyshevT => {
            let (quo, rem) = z_div(c_to_z(&num), c_to_z(&den));
            (z_to_c(&quo), z_to_c(&rem))
        }
    };
    Ok((Dense::from_vec(quo), Dense::from_vec(rem)))
}

impl<S: BasicStorage, B: Basis> BasePoly<S, B> {
    /// Coefficient-wise sum over the union of both index ranges.
    ///
    /// # Errors
    /// - [`Error::MismatchedBasis`] or [`Error::MismatchedVariable`] if the
    ///   operands cannot be combined.
    /// - [`Error::UnsupportedOperation`] if the sum has negative indices and
    ///   `Self` is not Laurent storage.
    pub fn try_add<S2: BasicStorage<T = S::T>, B2: Basis>(
        &self,
        rhs: &BasePoly<S2, B2>,
    ) -> Result<BasePoly<S::Owned<S::T>, B>> {
        self.check_compatible(rhs)?;
        let sum = self.to_dense().zip_with(&rhs.to_dense(), |a, b| a + b);
        self.try_wrap(sum)
    }

    /// Coefficient-wise difference, see [`Self::try_add`].
    ///
    /// # Errors
    /// Same as [`Self::try_add`].
    pub fn try_sub<S2: BasicStorage<T = S::T>, B2: Basis>(
        &self,
        rhs: &BasePoly<S2, B2>,
    ) -> Result<BasePoly<S::Owned<S::T>, B>> {
        self.check_compatible(rhs)?;
        let diff = self.to_dense().zip_with(&rhs.to_dense(), |a, b| a - b);
        self.try_wrap(diff)
    }

    /// Product of two polynomials. Coefficients are promoted to
    /// [`BasicScalar::Field`], products in orthogonal bases are not integral.
    ///
    /// # Errors
    /// - [`Error::MismatchedBasis`] or [`Error::MismatchedVariable`] if the
    ///   operands cannot be combined.
    /// - [`Error::UnsupportedOperation`] for Chebyshev series with negative
    ///   indices, or a product with negative indices into non-Laurent storage.
    ///
    /// ```
    /// use polybasis::{cheb, poly};
    ///
    /// let p = poly![1.0, 1.0].try_mul(&poly![-1.0, 1.0]).unwrap();
    /// assert_eq!(p, poly![-1.0, 0.0, 1.0]);
    ///
    /// // T_1 T_1 = (T_0 + T_2) / 2
    /// let c = cheb![0.0, 1.0].try_mul(&cheb![0.0, 1.0]).unwrap();
    /// assert_eq!(c, cheb![0.5, 0.0, 0.5]);
    /// ```
    pub fn try_mul<S2: BasicStorage<T = S::T>, B2: Basis>(
        &self,
        rhs: &BasePoly<S2, B2>,
    ) -> Result<BasePoly<S::Owned<F<S>>, B>> {
        self.check_compatible(rhs)?;
        let prod = mul_dense(
            B::KIND,
            &self.to_dense().to_field(),
            &rhs.to_dense().to_field(),
        )?;
        self.try_wrap(prod)
    }

    /// Quotient and remainder, such that `self = rhs * quotient + remainder`
    /// and the remainder has a lower degree than `rhs`.
    ///
    /// # Errors
    /// - [`Error::Divide`] if `rhs` is zero, or a constant whose magnitude is
    ///   at most [`RealScalar::TINY`].
    /// - [`Error::MismatchedBasis`] or [`Error::MismatchedVariable`] if the
    ///   operands cannot be combined.
    /// - [`Error::UnsupportedOperation`] if either operand has negative
    ///   indices.
    ///
    /// ```
    /// use polybasis::poly;
    ///
    /// let (q, r) = poly![1.0, 2.0, 3.0].div_rem(&poly![3.0, 2.0, 1.0]).unwrap();
    /// assert_eq!(q, poly![3.0]);
    /// assert_eq!(r, poly![-8.0, -4.0]);
    /// ```
    #[allow(clippy::type_complexity)]
    pub fn div_rem<S2: BasicStorage<T = S::T>, B2: Basis>(
        &self,
        rhs: &BasePoly<S2, B2>,
    ) -> Result<(BasePoly<S::Owned<F<S>>, B>, BasePoly<S::Owned<F<S>>, B>)> {
        self.check_compatible(rhs)?;
        let (quo, rem) = div_rem_dense(
            B::KIND,
            &self.to_dense().to_field(),
            &rhs.to_dense().to_field(),
        )?;
        Ok((self.wrap(quo), self.wrap(rem)))
    }

    /// Raise to a non-negative integer power.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] for Chebyshev series with negative
    /// indices.
    pub fn pow(&self, n: u32) -> Result<BasePoly<S::Owned<F<S>>, B>> {
        let base = self.to_dense().to_field();
        let mut acc = Dense::from_vec(vec![F::<S>::one()]);
        for _ in 0..n {
            acc = mul_dense(B::KIND, &acc, &base)?;
        }
        Ok(self.wrap(acc))
    }

    /// Add `c` to the constant term, creating it if it is not stored.
    ///
    /// In both supported bases the constant term is the coefficient of basis
    /// function 0.
    #[must_use]
    pub fn add_scalar(&self, c: S::T) -> BasePoly<S::Owned<S::T>, B> {
        let mut dense = self.to_dense();
        let slot = dense.get_mut(0);
        *slot = slot.clone() + c;
        self.wrap(dense.normalize())
    }

    #[must_use]
    pub fn sub_scalar(&self, c: S::T) -> BasePoly<S::Owned<S::T>, B> {
        self.add_scalar(-c)
    }

    /// Multiply every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: S::T) -> BasePoly<S::Owned<S::T>, B> {
        self.wrap(self.to_dense().map(|x| x * c.clone()))
    }

    /// Divide every coefficient by `c`, promoting to the field type.
    #[must_use]
    pub fn div_scalar(&self, c: F<S>) -> BasePoly<S::Owned<F<S>>, B> {
        self.wrap(self.to_dense().to_field().map(|x| x / c.clone()))
    }
}

impl<S: OwnedStorage, B: Basis> BasePoly<S, B>
where
    S::T: FieldScalar,
{
    /// The product of `(x - r)` over all `roots`, with `x` the degree-1
    /// generator of the basis.
    ///
    /// ```
    /// use polybasis::{Poly, poly};
    ///
    /// assert_eq!(Poly::from_roots(&[1.0, -1.0]), poly![-1.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[S::T]) -> Self {
        let prod = roots.iter().fold(vec![S::T::one()], |acc, r| {
            mul_coeffs(B::KIND, &acc, &[-r.clone(), S::T::one()])
        });
        Self::from_run(0, prod)
    }
}

impl<T: BasicScalar, B: Basis> Add<Self> for BasePoly<Vec<T>, B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
            .expect("cannot add polynomials in different variables")
    }
}

impl<T: BasicScalar, B: Basis> Sub<Self> for BasePoly<Vec<T>, B> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs)
            .expect("cannot subtract polynomials in different variables")
    }
}

impl<T: FieldScalar, B: Basis> Mul<Self> for BasePoly<Vec<T>, B> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(&rhs)
            .expect("cannot multiply polynomials in different variables")
    }
}

impl<T: FieldScalar, B: Basis> Div<Self> for BasePoly<Vec<T>, B> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).expect("Division by zero").0
    }
}

impl<T: FieldScalar, B: Basis> Rem<Self> for BasePoly<Vec<T>, B> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).expect("Division by zero").1
    }
}

impl<T: BasicScalar, B: Basis> Neg for BasePoly<Vec<T>, B> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrap(self.to_dense().map(|c| -c))
    }
}

impl<T: BasicScalar, B: Basis> Neg for &BasePoly<Vec<T>, B> {
    type Output = BasePoly<Vec<T>, B>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// by-reference variants of the binary operators
macro_rules! impl_ref_ops {
    ($bound:ident, $trait:ident, $method:ident) => {
        impl<T: $bound, B: Basis> $trait<&Self> for BasePoly<Vec<T>, B> {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                self.$method(rhs.clone())
            }
        }

        impl<T: $bound, B: Basis> $trait<BasePoly<Vec<T>, B>> for &BasePoly<Vec<T>, B> {
            type Output = BasePoly<Vec<T>, B>;

            fn $method(self, rhs: BasePoly<Vec<T>, B>) -> Self::Output {
                self.clone().$method(rhs)
            }
        }

        impl<T: $bound, B: Basis> $trait<&BasePoly<Vec<T>, B>> for &BasePoly<Vec<T>, B> {
            type Output = BasePoly<Vec<T>, B>;

            fn $method(self, rhs: &BasePoly<Vec<T>, B>) -> Self::Output {
                self.clone().$method(rhs.clone())
            }
        }
    };
}
impl_ref_ops!(BasicScalar, Add, add);
impl_ref_ops!(BasicScalar, Sub, sub);
impl_ref_ops!(FieldScalar, Mul, mul);
impl_ref_ops!(FieldScalar, Div, div);
impl_ref_ops!(FieldScalar, Rem, rem);
