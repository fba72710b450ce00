use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

use num::Zero;

use crate::{basis::Basis, storage::BasicStorage, util::casting::usize_to_isize, BasePoly};

use super::internals::Dense;

mod sealed {
    pub trait Sealed {}
}

/// Indexing into the coefficients of a polynomial.
///
/// Single indices return the coefficient (zero outside of the stored range),
/// ranges return the polynomial made of the terms within the range, keeping
/// their indices.
///
/// ```
/// use polybasis::{poly, Get};
///
/// let p = poly![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(p.get(1), 2.0);
/// assert_eq!(p.get(9), 0.0);
/// assert_eq!(p.get(1..3), poly![0.0, 2.0, 3.0]);
/// ```
pub trait Get<I>: sealed::Sealed {
    type Output;

    fn get(&self, idx: I) -> Self::Output;
}

impl<S, B> sealed::Sealed for BasePoly<S, B> {}

impl<S: BasicStorage, B: Basis> BasePoly<S, B> {
    /// Implementation for all range-based indexing
    fn get_range_inner(
        &self,
        start: Bound<&usize>,
        end: Bound<&usize>,
    ) -> BasePoly<S::Owned<S::T>, B> {
        let lo = match start {
            Bound::Included(x) => usize_to_isize(*x),
            Bound::Excluded(x) => usize_to_isize(*x).saturating_add(1),
            Bound::Unbounded => isize::MIN,
        };
        let hi = match end {
            Bound::Included(x) => usize_to_isize(*x).saturating_add(1),
            Bound::Excluded(x) => usize_to_isize(*x),
            Bound::Unbounded => isize::MAX,
        };
        let mut dense = Dense::zero();
        for (i, c) in self.storage.terms() {
            if (lo..hi).contains(&i) && !c.is_zero() {
                *dense.get_mut(i) = c.clone();
            }
        }
        self.wrap(dense)
    }
}

impl<S: BasicStorage, B: Basis> Get<usize> for BasePoly<S, B> {
    type Output = S::T;

    fn get(&self, idx: usize) -> S::T {
        self.storage
            .get_coeff(usize_to_isize(idx))
            .cloned()
            .unwrap_or_else(S::T::zero)
    }
}

macro_rules! impl_get_for_bounds {
    ($r:ty) => {
        impl<S: BasicStorage, B: Basis> Get<$r> for BasePoly<S, B> {
            type Output = BasePoly<S::Owned<S::T>, B>;

            fn get(&self, idx: $r) -> Self::Output {
                self.get_range_inner(idx.start_bound(), idx.end_bound())
            }
        }
    };
}

impl_get_for_bounds!(Range<usize>);
impl_get_for_bounds!(RangeInclusive<usize>);
impl_get_for_bounds!(RangeFrom<usize>);
impl_get_for_bounds!(RangeTo<usize>);
impl_get_for_bounds!(RangeToInclusive<usize>);
impl_get_for_bounds!(RangeFull);
