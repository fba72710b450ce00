//! Private working representation that the public API is composed of.

use crate::{
    storage::{BasicStorage, OwnedStorage},
    util::casting::usize_to_isize,
    BasicScalar, FieldScalar,
};

/// Remove trailing zero coefficients in-place.
pub(crate) fn trim_trailing_zeros<T: BasicScalar>(coeffs: &mut Vec<T>) {
    let end = coeffs
        .iter()
        .rposition(|c| !c.is_zero())
        .map_or(0, |i| i + 1);
    coeffs.truncate(end);
}

/// Remove leading zero coefficients in-place, returning how many were removed.
pub(crate) fn trim_leading_zeros<T: BasicScalar>(coeffs: &mut Vec<T>) -> usize {
    let start = coeffs
        .iter()
        .position(|c| !c.is_zero())
        .unwrap_or(coeffs.len());
    coeffs.drain(..start);
    start
}

/// Prepend `first` zeros so that the run starts at index 0.
///
/// # Panics
/// If `first` is negative.
pub(crate) fn pad_front<T: BasicScalar>(first: isize, coeffs: Vec<T>) -> Vec<T> {
    let Ok(pad) = usize::try_from(first) else {
        panic!("negative first index {first} in unsigned storage");
    };
    if pad == 0 {
        return coeffs;
    }
    let mut ret = vec![T::zero(); pad];
    ret.extend(coeffs);
    ret
}

/// A contiguous run of coefficients starting at a signed index.
///
/// Every algorithm in this crate reads its operands into this shape, works on
/// owned buffers, and converts back into the storage of the caller.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Dense<T> {
    pub(crate) first: isize,
    pub(crate) coeffs: Vec<T>,
}

impl<T: BasicScalar> Dense<T> {
    pub(crate) fn zero() -> Self {
        Self {
            first: 0,
            coeffs: vec![],
        }
    }

    pub(crate) fn from_vec(coeffs: Vec<T>) -> Self {
        Self { first: 0, coeffs }.normalize()
    }

    pub(crate) fn from_storage<S: BasicStorage<T = T>>(storage: &S) -> Self {
        let first = storage.first_index();
        let len = usize::try_from(storage.end_index() - first).unwrap_or(0);
        let mut coeffs = vec![T::zero(); len];
        for (i, c) in storage.terms() {
            coeffs[(i - first).unsigned_abs()] = c.clone();
        }
        Self { first, coeffs }.normalize()
    }

    pub(crate) fn into_storage<S: OwnedStorage<T = T>>(self) -> S {
        S::from_run(self.first, self.coeffs)
    }

    /// One past the highest index.
    pub(crate) fn end(&self) -> isize {
        self.first + usize_to_isize(self.coeffs.len())
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of a normalized run, `-1` for zero.
    pub(crate) fn degree(&self) -> isize {
        if self.is_zero() {
            -1
        } else {
            self.end() - 1
        }
    }

    /// Coefficient at `idx`, zero outside of the run.
    pub(crate) fn get(&self, idx: isize) -> T {
        usize::try_from(idx - self.first)
            .ok()
            .and_then(|i| self.coeffs.get(i))
            .cloned()
            .unwrap_or_else(T::zero)
    }

    /// Mutable access to the coefficient at `idx`, growing the run as needed.
    pub(crate) fn get_mut(&mut self, idx: isize) -> &mut T {
        if self.coeffs.is_empty() {
            self.first = idx;
        }
        if idx < self.first {
            let grow = (self.first - idx).unsigned_abs();
            let mut coeffs = vec![T::zero(); grow];
            coeffs.append(&mut self.coeffs);
            self.coeffs = coeffs;
            self.first = idx;
        }
        let i = (idx - self.first).unsigned_abs();
        if i >= self.coeffs.len() {
            self.coeffs.resize(i + 1, T::zero());
        }
        &mut self.coeffs[i]
    }

    /// Remove trailing zeros. Leading zeros are kept, storages that need
    /// them trimmed do so on construction.
    pub(crate) fn normalize(mut self) -> Self {
        trim_trailing_zeros(&mut self.coeffs);
        if self.coeffs.is_empty() {
            self.first = 0;
        }
        self
    }

    /// Coefficients starting from index 0. Fails if anything is stored at a
    /// negative index.
    pub(crate) fn into_unsigned(self) -> Option<Vec<T>> {
        if self.first < 0 {
            return None;
        }
        Some(pad_front(self.first, self.coeffs))
    }

    pub(crate) fn map<U: BasicScalar>(self, f: impl FnMut(T) -> U) -> Dense<U> {
        Dense {
            first: self.first,
            coeffs: self.coeffs.into_iter().map(f).collect(),
        }
        .normalize()
    }

    pub(crate) fn to_field(&self) -> Dense<T::Field> {
        Dense {
            first: self.first,
            coeffs: self.coeffs.iter().map(BasicScalar::to_field).collect(),
        }
        .normalize()
    }

    pub(crate) fn has_nan(&self) -> bool {
        self.coeffs.iter().any(BasicScalar::is_nan)
    }

    /// Coefficient-wise combination over the union of both index ranges.
    pub(crate) fn zip_with(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
        if self.is_zero() && other.is_zero() {
            return Self::zero();
        }
        let first = match (self.is_zero(), other.is_zero()) {
            (true, _) => other.first,
            (_, true) => self.first,
            _ => self.first.min(other.first),
        };
        let end = self.end().max(other.end());
        let coeffs = (first..end).map(|i| f(self.get(i), other.get(i))).collect();
        Self { first, coeffs }.normalize()
    }
}

impl<T: FieldScalar> Dense<T> {
    /// Single coefficient not-a-number result.
    pub(crate) fn nan() -> Self {
        Self {
            first: 0,
            coeffs: vec![T::nan()],
        }
    }
}
