use std::collections::BTreeMap;

use crate::{util::casting::usize_to_isize, BasicScalar};

use super::{BasicStorage, OwnedStorage};

/// Sparse storage, only nonzero coefficients are kept, keyed by index.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseStore<T> {
    terms: BTreeMap<usize, T>,
}

impl<T: BasicScalar> SparseStore<T> {
    /// Collect `(index, coefficient)` pairs. Repeated indices are summed and
    /// zero coefficients are dropped.
    pub fn from_terms(terms: impl IntoIterator<Item = (usize, T)>) -> Self {
        let mut map: BTreeMap<usize, T> = BTreeMap::new();
        for (i, c) in terms {
            let acc = match map.remove(&i) {
                Some(prev) => prev + c,
                None => c,
            };
            if !acc.is_zero() {
                map.insert(i, acc);
            }
        }
        Self { terms: map }
    }

    /// Number of nonzero terms
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.terms.len()
    }
}

impl<T: BasicScalar> BasicStorage for SparseStore<T> {
    type T = T;
    type Owned<U: BasicScalar> = SparseStore<U>;

    fn first_index(&self) -> isize {
        0
    }

    fn end_index(&self) -> isize {
        self.terms
            .last_key_value()
            .map_or(0, |(i, _)| usize_to_isize(*i) + 1)
    }

    fn get_coeff(&self, idx: isize) -> Option<&T> {
        usize::try_from(idx).ok().and_then(|i| self.terms.get(&i))
    }

    fn terms(&self) -> impl Iterator<Item = (isize, &T)> {
        self.terms.iter().map(|(i, c)| (usize_to_isize(*i), c))
    }
}

impl<T: BasicScalar> OwnedStorage for SparseStore<T> {
    fn from_run(first: isize, coeffs: Vec<T>) -> Self {
        let first = usize::try_from(first)
            .unwrap_or_else(|_| panic!("sparse storage cannot hold negative indices"));
        Self::from_terms(coeffs.into_iter().enumerate().map(|(i, c)| (i + first, c)))
    }
}

#[cfg(test)]
mod test {
    use crate::storage::{BasicStorage, OwnedStorage};

    use super::SparseStore;

    #[test]
    fn from_terms_merges_and_drops_zeros() {
        let s = SparseStore::from_terms([(5, 1.0), (2, 3.0), (5, -1.0), (7, 0.0)]);
        assert_eq!(s.nnz(), 1);
        assert_eq!(s.get_coeff(2), Some(&3.0));
        assert_eq!(s.get_coeff(5), None);
        assert_eq!(s.end_index(), 3);
    }

    #[test]
    fn from_run_skips_gaps() {
        let s = SparseStore::from_run(1, vec![2, 0, 0, 4]);
        let terms: Vec<_> = s.terms().collect();
        assert_eq!(terms, vec![(1, &2), (4, &4)]);
    }
}
