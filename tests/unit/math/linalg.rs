//! Tests for reduced row echelon form, null spaces and eigenspaces

#[cfg(test)]
mod tests {
    use maze_markov::math::linalg::{eigenspace, null_space, reduced_row_echelon};
    use ndarray::{Array1, array};

    fn assert_vector(actual: &Array1<f64>, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "Expected {expected:?}, got {actual}");
        }
    }

    #[test]
    fn test_full_rank_matrix_reduces_to_identity() {
        let matrix = array![[2.0, 4.0], [1.0, 3.0]];
        let (reduced, pivots) = reduced_row_echelon(&matrix.view(), 1e-12);

        assert_eq!(pivots, vec![0, 1]);
        for ((row, col), value) in reduced.indexed_iter() {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert!((value - expected).abs() < 1e-12);
        }
        assert!(null_space(&matrix.view(), 1e-12).is_empty());
    }

    // Tests that a rank-deficient matrix yields one basis vector per free column
    // Verified by dropping the row swap in partial pivoting
    #[test]
    fn test_null_space_of_rank_one_matrix() {
        let matrix = array![[1.0, 2.0], [2.0, 4.0]];
        let basis = null_space(&matrix.view(), 1e-12);

        assert_eq!(basis.len(), 1);
        let Some(vector) = basis.first() else {
            unreachable!("One basis vector expected");
        };
        assert_vector(vector, &[-2.0, 1.0]);
        assert!(matrix.dot(vector).iter().all(|value| value.abs() < 1e-12));
    }

    #[test]
    fn test_eigenspace_of_swap_matrix() {
        let swap = array![[0.0, 1.0], [1.0, 0.0]];

        let unit = eigenspace(&swap.view(), 1.0, 1e-12);
        assert_eq!(unit.len(), 1);
        if let Some(vector) = unit.first() {
            assert_vector(vector, &[1.0, 1.0]);
        }

        let negative = eigenspace(&swap.view(), -1.0, 1e-12);
        assert_eq!(negative.len(), 1);
        if let Some(vector) = negative.first() {
            assert_vector(vector, &[-1.0, 1.0]);
        }

        assert!(eigenspace(&swap.view(), 2.0, 1e-12).is_empty());
    }

    #[test]
    fn test_identity_eigenspace_is_ordered_by_free_column() {
        let identity = ndarray::Array2::<f64>::eye(3);
        let basis = eigenspace(&identity.view(), 1.0, 1e-12);

        assert_eq!(basis.len(), 3);
        for (column, vector) in basis.iter().enumerate() {
            let mut expected = [0.0; 3];
            if let Some(entry) = expected.get_mut(column) {
                *entry = 1.0;
            }
            assert_vector(vector, &expected);
        }
    }
}
