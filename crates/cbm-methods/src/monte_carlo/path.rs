//! Cumulative paths from increments.

use cbm_math::{Array, Matrix};

/// Running sum of each row: `P[i][t] = Σ_{s ≤ t} X[i][s]`.
///
/// Pure shape-preserving transform; an empty input gives an empty output.
pub fn accumulate_paths(increments: &Matrix) -> Matrix {
    let rows: Vec<Array> = (0..increments.rows())
        .map(|i| increments.row(i).cumulative_sum())
        .collect();
    Matrix::from_fn(increments.rows(), increments.cols(), |i, t| rows[i][t])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn prefix_sum_per_row() {
        let x = Matrix::from_row_slice(2, 4, &[1.0, 2.0, 3.0, 4.0, -1.0, 0.5, 0.5, -2.0]);
        let p = accumulate_paths(&x);
        assert_eq!(p.shape(), x.shape());
        assert_eq!(p.row(0).as_slice(), &[1.0, 3.0, 6.0, 10.0]);
        assert_eq!(p.row(1).as_slice(), &[-1.0, -0.5, 0.0, -2.0]);
    }

    #[test]
    fn first_column_equals_first_increment() {
        let x = Matrix::from_row_slice(3, 2, &[0.1, 0.2, -0.3, 0.4, 0.5, -0.6]);
        let p = accumulate_paths(&x);
        assert_eq!(p.column(0), x.column(0));
    }

    #[test]
    fn matches_array_cumulative_sum() {
        let x = Matrix::from_row_slice(1, 5, &[0.3, -0.1, 0.7, 0.2, -0.4]);
        assert_eq!(accumulate_paths(&x).row(0), x.row(0).cumulative_sum());
    }

    #[test]
    fn empty_inputs() {
        assert!(accumulate_paths(&Matrix::zeros(0, 5)).is_empty());
        assert!(accumulate_paths(&Matrix::zeros(3, 0)).is_empty());
    }

    proptest! {
        #[test]
        fn last_column_is_row_total(
            rows in 1usize..4,
            data in proptest::collection::vec(-10.0f64..10.0, 1..40),
        ) {
            let cols = data.len();
            let x = Matrix::from_fn(rows, cols, |i, t| data[t] * (i as f64 + 1.0));
            let p = accumulate_paths(&x);
            for i in 0..rows {
                prop_assert!((p[(i, cols - 1)] - x.row(i).iter().sum::<f64>()).abs() < 1e-9);
                for t in 1..cols {
                    prop_assert!((p[(i, t)] - p[(i, t - 1)] - x[(i, t)]).abs() < 1e-9);
                }
            }
        }
    }
}
