//! Step-by-step evolution of the agent's position distribution

use crate::chain::index::Coord;
use crate::chain::matrix::TransitionMatrix;
use crate::io::configuration::{SNAPSHOT_INTERVAL, STOCHASTIC_TOLERANCE};
use crate::io::error::{Result, invalid_parameter};
use crate::math::tolerance::sums_to_one;
use ndarray::Array1;

/// Copy of the distribution after a given step
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Step after which the copy was taken
    pub step: usize,
    /// Probability mass per state
    pub distribution: Array1<f64>,
}

/// Everything learned from propagating a start distribution
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationOutcome {
    /// First step at which the goal held positive mass, `None` if never
    pub goal_step: Option<usize>,
    /// Distribution at the goal-arrival step
    pub goal_snapshot: Option<Array1<f64>>,
    /// Most probable cell after the final step
    pub most_likely: Coord,
    /// Probability of the most probable cell after the final step
    pub most_likely_probability: f64,
    /// Distribution every [`SNAPSHOT_INTERVAL`] steps
    pub snapshots: Vec<Snapshot>,
    /// Distribution after the final step
    pub final_distribution: Array1<f64>,
}

impl PropagationOutcome {
    /// Whether the goal received positive mass within the step budget
    pub const fn reached_goal(&self) -> bool {
        self.goal_step.is_some()
    }
}

/// Advance a distribution by one step: `d · P`
pub fn advance(distribution: &Array1<f64>, matrix: &TransitionMatrix) -> Array1<f64> {
    distribution.dot(&matrix.view())
}

/// One-hot distribution concentrated on a single state
pub fn point_mass(size: usize, state: usize) -> Array1<f64> {
    let mut distribution = Array1::zeros(size);
    if let Some(mass) = distribution.get_mut(state) {
        *mass = 1.0;
    }
    distribution
}

/// Index and value of the largest entry, lowest index on ties
pub fn argmax(distribution: &Array1<f64>) -> Option<(usize, f64)> {
    distribution
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (index, value)| match best {
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((index, value)),
        })
}

/// Propagate a walker from `start` for `n_steps` and watch for `goal`
///
/// # Errors
///
/// Returns an error if `n_steps` is zero or either coordinate lies outside
/// the grid
pub fn propagate(
    matrix: &TransitionMatrix,
    start: Coord,
    goal: Coord,
    n_steps: usize,
) -> Result<PropagationOutcome> {
    let indexer = matrix.indexer();
    let start_index = indexer.checked_index("start", start)?;
    let goal_index = indexer.checked_index("goal", goal)?;
    if n_steps == 0 {
        return Err(invalid_parameter(
            "steps",
            &n_steps,
            &"at least one step is required",
        ));
    }

    let mut distribution = point_mass(matrix.size(), start_index);
    let mut goal_step = None;
    let mut goal_snapshot = None;
    let mut snapshots = Vec::with_capacity(n_steps / SNAPSHOT_INTERVAL);
    let mut most_likely = start;
    let mut most_likely_probability = 1.0;

    for step in 1..=n_steps {
        distribution = advance(&distribution, matrix);

        if step % SNAPSHOT_INTERVAL == 0 {
            snapshots.push(Snapshot {
                step,
                distribution: distribution.clone(),
            });
        }

        if goal_step.is_none() && distribution.get(goal_index).is_some_and(|&mass| mass > 0.0) {
            tracing::debug!(step, goal = %goal, "goal received positive mass");
            goal_step = Some(step);
            goal_snapshot = Some(distribution.clone());
        }

        if let Some((state, probability)) = argmax(&distribution) {
            most_likely = indexer.to_coord(state);
            most_likely_probability = probability;
        }
    }

    if !sums_to_one(distribution.iter(), STOCHASTIC_TOLERANCE) {
        tracing::warn!(
            total = distribution.sum(),
            "propagated distribution drifted away from unit mass"
        );
    }

    tracing::info!(
        start = %start,
        goal = %goal,
        steps = n_steps,
        goal_step = ?goal_step,
        most_likely = %most_likely,
        most_likely_probability,
        "propagated distribution"
    );

    Ok(PropagationOutcome {
        goal_step,
        goal_snapshot,
        most_likely,
        most_likely_probability,
        snapshots,
        final_distribution: distribution,
    })
}
