use crate::{
    poly::internals::{trim_leading_zeros, trim_trailing_zeros},
    util::casting::usize_to_isize,
    BasicScalar,
};

use super::{BasicStorage, OwnedStorage};

/// Contiguous storage starting at an arbitrary, possibly negative, index.
///
/// Both leading and trailing zeros are trimmed, so `first` is always the
/// index of the lowest nonzero coefficient (or 0 for the zero polynomial).
#[derive(Clone, Debug, PartialEq)]
pub struct LaurentStore<T> {
    first: isize,
    coeffs: Vec<T>,
}

impl<T: BasicScalar> LaurentStore<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.coeffs
    }
}

impl<T: BasicScalar> BasicStorage for LaurentStore<T> {
    type T = T;
    type Owned<U: BasicScalar> = LaurentStore<U>;

    const SIGNED: bool = true;

    fn first_index(&self) -> isize {
        self.first
    }

    fn end_index(&self) -> isize {
        self.first + usize_to_isize(self.coeffs.len())
    }

    fn get_coeff(&self, idx: isize) -> Option<&T> {
        usize::try_from(idx - self.first)
            .ok()
            .and_then(|i| self.coeffs.get(i))
    }

    fn terms(&self) -> impl Iterator<Item = (isize, &T)> {
        self.coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| (self.first + usize_to_isize(i), c))
    }
}

impl<T: BasicScalar> OwnedStorage for LaurentStore<T> {
    fn from_run(first: isize, mut coeffs: Vec<T>) -> Self {
        trim_trailing_zeros(&mut coeffs);
        let skipped = trim_leading_zeros(&mut coeffs);
        if coeffs.is_empty() {
            return Self { first: 0, coeffs };
        }
        Self {
            first: first + usize_to_isize(skipped),
            coeffs,
        }
    }
}
