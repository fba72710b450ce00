//! Chebyshev z-series.
//!
//! A Chebyshev series `c_0 T_0 + ... + c_{n-1} T_{n-1}` can be rewritten with
//! `T_k(x) = (z^k + z^-k) / 2`, `x = (z + 1/z) / 2` as a symmetric Laurent
//! series in `z` of length `2n - 1`. Products and quotients of Chebyshev
//! series then reduce to ordinary convolution and long division of these
//! symmetric sequences. The z-series never leave this crate.

use crate::{error::INFALLIBLE_CONVERSION, FieldScalar};

/// Chebyshev coefficients to z-series. The center holds `c_0`, the rest
/// holds `c_k / 2` mirrored around the center.
pub(crate) fn c_to_z<T: FieldScalar>(cs: &[T]) -> Vec<T> {
    let n = cs.len();
    if n == 0 {
        return vec![];
    }
    let half = T::from_f64(0.5).expect(INFALLIBLE_CONVERSION);
    let mut zs = vec![T::zero(); 2 * n - 1];
    for (i, c) in cs.iter().enumerate() {
        let h = c.clone() * half.clone();
        zs[n - 1 + i] = zs[n - 1 + i].clone() + h.clone();
        zs[n - 1 - i] = zs[n - 1 - i].clone() + h;
    }
    zs
}

/// Inverse of [`c_to_z`]: the upper half, with all but the constant term
/// doubled.
pub(crate) fn z_to_c<T: FieldScalar>(zs: &[T]) -> Vec<T> {
    if zs.is_empty() {
        return vec![];
    }
    let n = (zs.len() + 1) / 2;
    let two = T::one() + T::one();
    zs[n - 1..]
        .iter()
        .enumerate()
        .map(|(i, z)| {
            if i == 0 {
                z.clone()
            } else {
                z.clone() * two.clone()
            }
        })
        .collect()
}

/// Symmetric long division of z-series, returning `(quotient, remainder)`
/// z-series.
///
/// Both inputs are consumed as scratch space. Terms are peeled off from both
/// ends of the dividend at the same time, which keeps the working array
/// symmetric.
///
/// `den` must not be empty.
pub(crate) fn z_div<T: FieldScalar>(mut num: Vec<T>, mut den: Vec<T>) -> (Vec<T>, Vec<T>) {
    let lnum = num.len();
    let lden = den.len();
    debug_assert!(lden > 0, "cannot divide by an empty z-series");

    if lden == 1 {
        let scl = den[0].clone();
        num.iter_mut().for_each(|z| *z = z.clone() / scl.clone());
        return (num, vec![]);
    }
    if lnum < lden {
        return (vec![], num);
    }

    let dlen = lnum - lden;
    let scl = den[0].clone();
    den.iter_mut().for_each(|z| *z = z.clone() / scl.clone());

    let mut quo = vec![T::zero(); dlen + 1];
    let mut i = 0;
    let mut j = dlen;
    while i < j {
        let r = num[i].clone();
        quo[i] = r.clone();
        quo[dlen - i] = r.clone();
        for (k, d) in den.iter().enumerate() {
            let tmp = r.clone() * d.clone();
            num[i + k] = num[i + k].clone() - tmp.clone();
            num[j + k] = num[j + k].clone() - tmp;
        }
        i += 1;
        j -= 1;
    }

    let r = num[i].clone();
    quo[i] = r.clone();
    for (k, d) in den.iter().enumerate() {
        num[i + k] = num[i + k].clone() - r.clone() * d.clone();
    }
    quo.iter_mut().for_each(|q| *q = q.clone() / scl.clone());

    let rem = num[i + 1..i + lden - 1].to_vec();
    (quo, rem)
}
