use na::DMatrixViewMut;

use crate::BasicScalar;

/// Write `values` along the `k`-th diagonal (positive is above the main
/// diagonal, negative below).
// dimensions of anything that fits in memory fit in i128, and s, s + k are
// both in bounds by construction of the range
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub(crate) fn set_subdiagonal<T: Clone>(matrix: &mut DMatrixViewMut<T>, k: i128, values: &[T]) {
    let m = matrix.nrows() as i128;
    let n = matrix.ncols() as i128;
    for (i, s) in ((-k).max(0)..(n - k).min(m)).enumerate() {
        matrix[(s as usize, (s + k) as usize)] = values[i].clone();
    }
}

/// Full discrete convolution of two sequences, the output has length
/// `input.len() + kernel.len() - 1`.
pub(crate) fn convolve_1d<T: BasicScalar>(input: &[T], kernel: &[T]) -> Vec<T> {
    let input_len = input.len();
    let kernel_len = kernel.len();

    if input_len == 0 || kernel_len == 0 {
        return vec![];
    }
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![T::zero(); output_len];
    for (i, a) in input.iter().enumerate() {
        for (j, b) in kernel.iter().enumerate() {
            output[i + j] = output[i + j].clone() + a.clone() * b.clone();
        }
    }
    output
}

#[cfg(test)]
mod test {
    use na::DMatrix;

    use super::{convolve_1d, set_subdiagonal};

    #[test]
    fn test_set_subdiagonal() {
        let mut m = DMatrix::zeros(3, 4);
        set_subdiagonal(&mut m.as_view_mut(), 1, &[1.0f64, 2.0, 3.0]);
        set_subdiagonal(&mut m.as_view_mut(), -1, &[4.0f64, 5.0]);
        assert_eq!(
            m,
            DMatrix::from_row_slice(
                3,
                4,
                &[0.0, 1.0, 0.0, 0.0, 4.0, 0.0, 2.0, 0.0, 0.0, 5.0, 0.0, 3.0]
            )
        );
    }

    #[test]
    fn test_convolve() {
        assert_eq!(
            convolve_1d(&[1.0, 2.0], &[1.0, 3.0, 1.0]),
            vec![1.0, 5.0, 7.0, 2.0]
        );
        assert!(convolve_1d::<f64>(&[], &[1.0]).is_empty());
    }
}
