use std::sync::Arc;

use crate::{
    poly::internals::{pad_front, trim_trailing_zeros},
    util::casting::usize_to_isize,
    BasicScalar,
};

use super::{BasicStorage, ContiguousStorage, OwnedStorage};

fn slice_get<T>(slice: &[T], idx: isize) -> Option<&T> {
    usize::try_from(idx).ok().and_then(|i| slice.get(i))
}

fn slice_terms<T>(slice: &[T]) -> impl Iterator<Item = (isize, &T)> {
    slice
        .iter()
        .enumerate()
        .map(|(i, c)| (usize_to_isize(i), c))
}

impl<T: BasicScalar> BasicStorage for Vec<T> {
    type T = T;
    type Owned<U: BasicScalar> = Vec<U>;

    fn first_index(&self) -> isize {
        0
    }

    fn end_index(&self) -> isize {
        usize_to_isize(self.len())
    }

    fn get_coeff(&self, idx: isize) -> Option<&T> {
        slice_get(self, idx)
    }

    fn terms(&self) -> impl Iterator<Item = (isize, &T)> {
        slice_terms(self)
    }
}

impl<T: BasicScalar> OwnedStorage for Vec<T> {
    fn from_run(first: isize, coeffs: Vec<T>) -> Self {
        let mut coeffs = pad_front(first, coeffs);
        trim_trailing_zeros(&mut coeffs);
        coeffs
    }
}

impl<T: BasicScalar> ContiguousStorage for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: BasicScalar> BasicStorage for Arc<[T]> {
    type T = T;
    type Owned<U: BasicScalar> = Arc<[U]>;

    fn first_index(&self) -> isize {
        0
    }

    fn end_index(&self) -> isize {
        usize_to_isize(self.len())
    }

    fn get_coeff(&self, idx: isize) -> Option<&T> {
        slice_get(self, idx)
    }

    fn terms(&self) -> impl Iterator<Item = (isize, &T)> {
        slice_terms(self)
    }
}

impl<T: BasicScalar> OwnedStorage for Arc<[T]> {
    fn from_run(first: isize, coeffs: Vec<T>) -> Self {
        Vec::from_run(first, coeffs).into()
    }
}

impl<T: BasicScalar> ContiguousStorage for Arc<[T]> {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: BasicScalar> BasicStorage for &[T] {
    type T = T;
    type Owned<U: BasicScalar> = Vec<U>;

    fn first_index(&self) -> isize {
        0
    }

    fn end_index(&self) -> isize {
        usize_to_isize(self.len())
    }

    fn get_coeff(&self, idx: isize) -> Option<&T> {
        slice_get(self, idx)
    }

    fn terms(&self) -> impl Iterator<Item = (isize, &T)> {
        slice_terms(self)
    }
}

impl<T: BasicScalar> ContiguousStorage for &[T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
