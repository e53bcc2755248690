//! Transition matrix construction from an adjacency oracle

use crate::chain::index::{Coord, GridIndexer};
use crate::io::configuration::STOCHASTIC_TOLERANCE;
use crate::io::error::{MazeMarkovError, Result};
use crate::maze::direction::{Adjacency, Direction};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Immutable row-stochastic transition matrix over grid-indexed states
///
/// Entry `[i, j]` is the probability of moving from state `i` to state `j`
/// in one step. Every row sums to one; a state without viable moves is an
/// absorbing self-loop.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    probabilities: Array2<f64>,
    indexer: GridIndexer,
}

impl TransitionMatrix {
    /// Wrap an externally supplied matrix for a grid with `cols` columns
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The matrix is empty, not square, or its size is not a multiple of `cols`
    /// - Any entry is negative or not finite
    /// - Any row does not sum to one
    pub fn from_array(probabilities: Array2<f64>, cols: usize) -> Result<Self> {
        let (n, m) = probabilities.dim();
        if n == 0 || n != m {
            return Err(MazeMarkovError::InvalidMatrix {
                reason: format!("expected a non-empty square matrix, got {n}x{m}"),
            });
        }
        if cols == 0 || n % cols != 0 {
            return Err(MazeMarkovError::InvalidMatrix {
                reason: format!("{n} states cannot form a grid with {cols} columns"),
            });
        }
        if let Some(value) = probabilities
            .iter()
            .find(|value| !value.is_finite() || **value < 0.0)
        {
            return Err(MazeMarkovError::InvalidMatrix {
                reason: format!("entry {value} is not a probability"),
            });
        }

        let matrix = Self {
            probabilities,
            indexer: GridIndexer::new(n / cols, cols),
        };
        matrix.validate_rows()?;
        Ok(matrix)
    }

    /// Number of chain states
    pub fn size(&self) -> usize {
        self.probabilities.nrows()
    }

    /// Indexer shared by every consumer of this matrix
    pub const fn indexer(&self) -> &GridIndexer {
        &self.indexer
    }

    /// Read-only view of the probabilities
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.probabilities.view()
    }

    /// Outgoing transition probabilities of one state
    pub fn row(&self, state: usize) -> ArrayView1<'_, f64> {
        self.probabilities.row(state)
    }

    /// Probability of moving from `from` to `to`, zero if out of range
    pub fn probability(&self, from: usize, to: usize) -> f64 {
        self.probabilities.get((from, to)).copied().unwrap_or(0.0)
    }

    /// Consume the wrapper and return the raw probabilities
    pub fn into_inner(self) -> Array2<f64> {
        self.probabilities
    }

    fn validate_rows(&self) -> Result<()> {
        for (state, row) in self.probabilities.rows().into_iter().enumerate() {
            let row_sum = row.sum();
            if (row_sum - 1.0).abs() > STOCHASTIC_TOLERANCE {
                return Err(MazeMarkovError::Construction { state, row_sum });
            }
        }
        Ok(())
    }
}

/// Build the random-walk transition matrix of a maze
///
/// Each cell moves uniformly to the neighbours whose passage is open and
/// that lie inside the grid; a cell with no such neighbour becomes an
/// absorbing self-loop.
///
/// # Errors
///
/// Returns a construction error if a built row fails to sum to one
pub fn build_matrix(oracle: &impl Adjacency) -> Result<TransitionMatrix> {
    let (rows, cols) = (oracle.rows(), oracle.cols());
    let indexer = GridIndexer::new(rows, cols);
    let size = indexer.size();
    let mut probabilities = Array2::<f64>::zeros((size, size));
    let mut absorbing = 0usize;

    for row in 1..=rows {
        for col in 1..=cols {
            let coord = Coord::new(row, col);
            let current = indexer.to_index(coord);

            let moves: Vec<usize> = Direction::ALL
                .into_iter()
                .filter(|&direction| oracle.is_open(coord, direction))
                .filter_map(|direction| direction.step(coord, rows, cols))
                .map(|neighbour| indexer.to_index(neighbour))
                .collect();

            if moves.is_empty() {
                absorbing += 1;
                if let Some(entry) = probabilities.get_mut((current, current)) {
                    *entry = 1.0;
                }
            } else {
                let probability = 1.0 / moves.len() as f64;
                for next in moves {
                    if let Some(entry) = probabilities.get_mut((current, next)) {
                        *entry = probability;
                    }
                }
            }
        }
    }

    let matrix = TransitionMatrix {
        probabilities,
        indexer,
    };
    matrix.validate_rows()?;

    tracing::info!(rows, cols, states = size, absorbing, "built transition matrix");
    Ok(matrix)
}
