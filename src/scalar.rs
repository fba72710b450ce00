use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num::{
    complex::{Complex32, Complex64},
    Complex, FromPrimitive, One, Zero,
};

/// Any scalar that can be stored as a polynomial coefficient.
///
/// Integers are allowed. Operations that need exact division (multiplication
/// in an orthogonal basis, division, calculus) promote the coefficients to
/// [`BasicScalar::Field`] first.
pub trait BasicScalar:
    Clone
    + Add<Output = Self>
    + Mul<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + PartialEq
    + Debug
    + FromPrimitive
    + Send
    + Sync
    + 'static
{
    /// The type this scalar is promoted to when it must go through a division.
    ///
    /// | scalar      | field       |
    /// |-------------|-------------|
    /// | `i32`       | `f64`       |
    /// | `i64`       | `f64`       |
    /// | `f32`       | `f32`       |
    /// | `f64`       | `f64`       |
    /// | `Complex32` | `Complex32` |
    /// | `Complex64` | `Complex64` |
    type Field: FieldScalar;

    fn to_field(&self) -> Self::Field;

    fn is_nan(&self) -> bool {
        false
    }
}

/// A scalar closed under division, real or complex.
pub trait FieldScalar: BasicScalar<Field = Self> {
    /// The type of the real part of a number. If the number is already real,
    /// this should just be `Self`.
    type Real: RealScalar;

    /// Canonical not-a-number value.
    fn nan() -> Self;

    fn sqrt(&self) -> Self;

    fn taxicab_norm(&self) -> Self::Real;

    fn from_real(re: Self::Real) -> Self;
}

pub trait RealScalar: FieldScalar<Real = Self> + PartialOrd {
    /// Smallest number that can be safely used in reciprocals without causing
    /// a division by zero error, NaN, infinite or similar.
    const TINY: Self;

    /// Is smaller than or equal to [`Self::TINY`]
    fn is_tiny(&self) -> bool {
        self <= &Self::TINY
    }
}

macro_rules! impl_float {
    ($t:ty) => {
        impl BasicScalar for $t {
            type Field = $t;

            fn to_field(&self) -> Self::Field {
                *self
            }

            fn is_nan(&self) -> bool {
                <$t>::is_nan(*self)
            }
        }

        impl FieldScalar for $t {
            type Real = $t;

            fn nan() -> Self {
                <$t>::NAN
            }

            fn sqrt(&self) -> Self {
                <$t>::sqrt(*self)
            }

            fn taxicab_norm(&self) -> Self::Real {
                self.abs()
            }

            fn from_real(re: Self::Real) -> Self {
                re
            }
        }

        impl RealScalar for $t {
            const TINY: Self = <$t>::MIN_POSITIVE;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

macro_rules! impl_complex {
    ($t:ty, $re:ty) => {
        impl BasicScalar for $t {
            type Field = $t;

            fn to_field(&self) -> Self::Field {
                *self
            }

            fn is_nan(&self) -> bool {
                Complex::<$re>::is_nan(*self)
            }
        }

        impl FieldScalar for $t {
            type Real = $re;

            fn nan() -> Self {
                Complex::new(<$re>::NAN, <$re>::NAN)
            }

            fn sqrt(&self) -> Self {
                Complex::<$re>::sqrt(*self)
            }

            fn taxicab_norm(&self) -> Self::Real {
                self.l1_norm()
            }

            fn from_real(re: Self::Real) -> Self {
                Complex::new(re, 0.0)
            }
        }
    };
}

impl_complex!(Complex32, f32);
impl_complex!(Complex64, f64);

macro_rules! impl_integer {
    ($t:ty) => {
        impl BasicScalar for $t {
            type Field = f64;

            #[allow(clippy::cast_precision_loss)]
            fn to_field(&self) -> Self::Field {
                *self as f64
            }
        }
    };
}

impl_integer!(i32);
impl_integer!(i64);
