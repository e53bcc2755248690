//! Stationary distribution of a transition matrix
//!
//! The default solver extracts the eigenvector of `Pᵀ` for eigenvalue 1
//! directly from the null space of `Pᵀ − I`. For reducible chains (mazes
//! split into disconnected regions) that eigenspace has more than one
//! dimension; the basis vector anchored at the lowest state index is used
//! and the multiplicity is logged, so the result is one of several valid
//! stationary distributions rather than a unique one.

use crate::chain::matrix::TransitionMatrix;
use crate::io::configuration::{
    EIGEN_TOLERANCE, POWER_ITERATION_MAX_ITERATIONS, POWER_ITERATION_TOLERANCE,
};
use crate::io::error::{Result, numerical_error};
use crate::math::linalg::eigenspace;
use crate::math::tolerance::approx_eq;
use ndarray::{Array1, Array2};

/// Strategy used to find the stationary distribution
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SteadyStateMethod {
    /// Eigenvector of the transposed matrix for the eigenvalue closest to 1
    #[default]
    Eigen,
    /// Iterate the lazy chain `(P + I) / 2` from the uniform distribution
    ///
    /// The lazy chain shares the stationary distribution of `P` but is
    /// aperiodic, so bipartite grid mazes still converge.
    PowerIteration {
        /// Iteration cap before giving up
        max_iterations: usize,
        /// L1 change between iterations that counts as converged
        tolerance: f64,
    },
}

impl SteadyStateMethod {
    /// Power iteration with the default cap and tolerance
    pub const fn power_iteration() -> Self {
        Self::PowerIteration {
            max_iterations: POWER_ITERATION_MAX_ITERATIONS,
            tolerance: POWER_ITERATION_TOLERANCE,
        }
    }
}

/// Steady-state matrix using the eigenvector method
///
/// Every row of the returned `n × n` matrix is the stationary distribution.
///
/// # Errors
///
/// Returns a numerical error if no eigenvalue lies within tolerance of 1
pub fn steady_state(matrix: &TransitionMatrix) -> Result<Array2<f64>> {
    steady_state_with(matrix, SteadyStateMethod::Eigen)
}

/// Steady-state matrix using the given method
///
/// # Errors
///
/// Returns a numerical error if the chosen method finds no stationary
/// distribution
pub fn steady_state_with(matrix: &TransitionMatrix, method: SteadyStateMethod) -> Result<Array2<f64>> {
    let distribution = stationary_distribution(matrix, method)?;
    let n = distribution.len();
    Ok(Array2::from_shape_fn((n, n), |(_, state)| {
        distribution.get(state).copied().unwrap_or(0.0)
    }))
}

/// Stationary distribution vector using the given method
///
/// # Errors
///
/// Returns a numerical error if the chosen method finds no stationary
/// distribution
pub fn stationary_distribution(
    matrix: &TransitionMatrix,
    method: SteadyStateMethod,
) -> Result<Array1<f64>> {
    match method {
        SteadyStateMethod::Eigen => eigen_stationary(matrix),
        SteadyStateMethod::PowerIteration {
            max_iterations,
            tolerance,
        } => power_stationary(matrix, max_iterations, tolerance),
    }
}

fn eigen_stationary(matrix: &TransitionMatrix) -> Result<Array1<f64>> {
    let transposed = matrix.view().reversed_axes();
    let basis = eigenspace(&transposed, 1.0, EIGEN_TOLERANCE);

    if basis.len() > 1 {
        tracing::warn!(
            multiplicity = basis.len(),
            "eigenvalue 1 is not simple; chain is reducible, using the lowest-index eigenvector"
        );
    }

    let Some(vector) = basis.into_iter().next() else {
        return Err(numerical_error(
            "steady state",
            &format!("no eigenvalue within {EIGEN_TOLERANCE} of 1"),
        ));
    };

    let distribution = normalize(vector)?;
    let stepped = distribution.dot(&matrix.view());
    if let Some((state, (&before, &after))) = distribution
        .iter()
        .zip(&stepped)
        .enumerate()
        .find(|(_, (before, after))| !approx_eq(**after, **before))
    {
        return Err(numerical_error(
            "steady state",
            &format!("state {state} moves from {before} to {after} after one step"),
        ));
    }
    tracing::debug!(states = distribution.len(), "extracted stationary eigenvector");
    Ok(distribution)
}

fn power_stationary(
    matrix: &TransitionMatrix,
    max_iterations: usize,
    tolerance: f64,
) -> Result<Array1<f64>> {
    let n = matrix.size();
    if n == 0 {
        return Err(numerical_error("steady state", &"matrix has no states"));
    }

    let transitions = matrix.view();
    let mut distribution = Array1::from_elem(n, 1.0 / n as f64);

    for iteration in 1..=max_iterations {
        let mut next = distribution.dot(&transitions);
        next += &distribution;
        next *= 0.5;

        let change: f64 = (&next - &distribution).mapv(f64::abs).sum();
        distribution = next;

        if change < tolerance {
            tracing::debug!(iteration, change, "power iteration converged");
            return normalize(distribution);
        }
    }

    Err(numerical_error(
        "steady state",
        &format!("power iteration did not converge within {max_iterations} iterations"),
    ))
}

fn normalize(vector: Array1<f64>) -> Result<Array1<f64>> {
    let total = vector.sum();
    if !total.is_finite() || total.abs() <= EIGEN_TOLERANCE {
        return Err(numerical_error(
            "steady state",
            &format!("eigenvector sums to {total}; cannot normalise"),
        ));
    }
    Ok(vector / total)
}
