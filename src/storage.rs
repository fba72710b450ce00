//! Backing store traits

use std::fmt::Debug;

use crate::BasicScalar;

mod impl_storage;
mod laurent;
mod sparse;

pub use laurent::LaurentStore;
pub use sparse::SparseStore;

/// The base storage trait, makes no assumptions about ownership or lifetimes.
///
/// Indices are signed so that Laurent storage can be addressed the same way
/// as every other shape. Every shape except [`LaurentStore`] only ever holds
/// indices `>= 0`.
pub trait BasicStorage: Debug {
    type T: BasicScalar;

    /// The storage operations produce when given this storage as input.
    type Owned<U: BasicScalar>: OwnedStorage<T = U>;

    /// Can hold coefficients at negative indices
    const SIGNED: bool = false;

    /// Lowest stored index.
    fn first_index(&self) -> isize;

    /// One past the highest stored index.
    fn end_index(&self) -> isize;

    /// Coefficient at `idx`, or `None` when it is not stored.
    fn get_coeff(&self, idx: isize) -> Option<&Self::T>;

    /// Stored `(index, coefficient)` pairs in ascending index order. Dense
    /// shapes also yield interior zeros.
    fn terms(&self) -> impl Iterator<Item = (isize, &Self::T)>;
}

/// A [`BasicStorage`] that owns its data and can be built from scratch.
pub trait OwnedStorage: BasicStorage + Clone {
    /// Build canonical storage from a contiguous run of coefficients starting
    /// at index `first`. Zeros are trimmed as the shape requires.
    ///
    /// # Panics
    /// If `first` is negative and the storage is not [`BasicStorage::SIGNED`].
    fn from_run(first: isize, coeffs: Vec<Self::T>) -> Self;
}

/// Storage that is one contiguous slice starting at index 0.
pub trait ContiguousStorage: BasicStorage {
    fn as_slice(&self) -> &[Self::T];
}
