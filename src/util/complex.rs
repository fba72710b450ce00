// internal utilities for dealing with Complex annoyances

use std::cmp::Ordering;

use num::Complex;

// sort a vector of complex numbers lexicographically, using their real part first
pub(crate) fn complex_sort_mut<T: PartialOrd>(v: &mut [Complex<T>]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use super::complex_sort_mut;

    #[test]
    fn sort() {
        let mut v = vec![
            Complex64::new(1.0, -1.0),
            Complex64::new(-2.0, 0.0),
            Complex64::new(1.0, -3.0),
        ];
        complex_sort_mut(&mut v);
        assert_eq!(
            v,
            vec![
                Complex64::new(-2.0, 0.0),
                Complex64::new(1.0, -3.0),
                Complex64::new(1.0, -1.0),
            ]
        );
    }
}
