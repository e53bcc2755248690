//! Dense null-space extraction
//!
//! The steady-state solver needs the eigenvectors of `Pᵀ` belonging to the
//! eigenvalue 1, which is exactly the null space of `Pᵀ − I`. Reducing that
//! matrix to row echelon form gives the eigenspace directly without a full
//! spectral decomposition.

use ndarray::{Array1, Array2, ArrayView2, Zip, s};

/// Reduce a copy of `matrix` to reduced row echelon form
///
/// Uses partial pivoting; a candidate pivot whose magnitude is at or below
/// `tolerance` is treated as zero. Returns the reduced matrix and the pivot
/// column of each non-zero row, in row order.
pub fn reduced_row_echelon(matrix: &ArrayView2<'_, f64>, tolerance: f64) -> (Array2<f64>, Vec<usize>) {
    let (rows, cols) = matrix.dim();
    let mut reduced = matrix.to_owned();
    let mut pivot_columns = Vec::with_capacity(rows.min(cols));
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }

        let mut best_row = pivot_row;
        let mut best_magnitude = 0.0;
        for row in pivot_row..rows {
            let magnitude = reduced.get((row, col)).copied().unwrap_or(0.0).abs();
            if magnitude > best_magnitude {
                best_magnitude = magnitude;
                best_row = row;
            }
        }

        if best_magnitude <= tolerance {
            continue;
        }

        if best_row != pivot_row {
            swap_rows(&mut reduced, best_row, pivot_row);
        }

        let pivot_value = reduced.get((pivot_row, col)).copied().unwrap_or(1.0);
        reduced
            .row_mut(pivot_row)
            .mapv_inplace(|value| value / pivot_value);

        let pivot = reduced.row(pivot_row).to_owned();
        for row in 0..rows {
            if row == pivot_row {
                continue;
            }
            let factor = reduced.get((row, col)).copied().unwrap_or(0.0);
            if factor != 0.0 {
                reduced.row_mut(row).scaled_add(-factor, &pivot);
            }
        }

        pivot_columns.push(col);
        pivot_row += 1;
    }

    (reduced, pivot_columns)
}

/// Basis of the null space of `matrix`, one vector per free column
///
/// Vectors are ordered by their free column, so the first vector is the one
/// anchored at the lowest state index. Each vector has a 1 at its free
/// column and 0 at every other free column.
pub fn null_space(matrix: &ArrayView2<'_, f64>, tolerance: f64) -> Vec<Array1<f64>> {
    let cols = matrix.ncols();
    let (reduced, pivot_columns) = reduced_row_echelon(matrix, tolerance);

    let mut is_pivot = vec![false; cols];
    for &col in &pivot_columns {
        if let Some(flag) = is_pivot.get_mut(col) {
            *flag = true;
        }
    }

    is_pivot
        .iter()
        .enumerate()
        .filter(|&(_, &pivot)| !pivot)
        .map(|(free, _)| {
            let mut vector = Array1::zeros(cols);
            if let Some(entry) = vector.get_mut(free) {
                *entry = 1.0;
            }
            for (row, &pivot_col) in pivot_columns.iter().enumerate() {
                let coefficient = reduced.get((row, free)).copied().unwrap_or(0.0);
                if let Some(entry) = vector.get_mut(pivot_col) {
                    *entry = -coefficient;
                }
            }
            vector
        })
        .collect()
}

/// Basis of the eigenspace of `matrix` for `eigenvalue`
///
/// Computed as the null space of `matrix − eigenvalue·I`. An empty result
/// means no eigenvalue lies within `tolerance` of the requested one.
pub fn eigenspace(matrix: &ArrayView2<'_, f64>, eigenvalue: f64, tolerance: f64) -> Vec<Array1<f64>> {
    let mut shifted = matrix.to_owned();
    shifted.diag_mut().mapv_inplace(|value| value - eigenvalue);
    null_space(&shifted.view(), tolerance)
}

fn swap_rows(matrix: &mut Array2<f64>, a: usize, b: usize) {
    let (mut first, mut second) = matrix.multi_slice_mut((s![a, ..], s![b, ..]));
    Zip::from(&mut first)
        .and(&mut second)
        .for_each(std::mem::swap);
}
