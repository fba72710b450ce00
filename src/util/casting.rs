use num::FromPrimitive;

use crate::error::CAST_OVERFLOW;

/// Saturating conversion, only reachable for polynomials so large they would
/// not fit in memory anyway.
pub(crate) fn usize_to_isize(x: usize) -> isize {
    x.try_into().unwrap_or(isize::MAX)
}

/// Convert a degree or index to a scalar.
///
/// # Panics
/// If `T` cannot represent `x`. Never happens for the scalars of this crate.
pub(crate) fn usize_to_scalar<T: FromPrimitive>(x: usize) -> T {
    T::from_usize(x).expect(CAST_OVERFLOW)
}

/// Signed version of [`usize_to_scalar`].
pub(crate) fn isize_to_scalar<T: FromPrimitive>(x: isize) -> T {
    T::from_isize(x).expect(CAST_OVERFLOW)
}
