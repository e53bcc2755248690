//! Best-path tracking from a start cell to a goal cell
//!
//! The tracker keeps, for every state, the single best path ending there at
//! the current step. Each destination keeps the incoming candidate with the
//! highest last-hop probability, which is a per-step local choice: two paths
//! merging into a state are collapsed even if the discarded one would have
//! scored better later on.

use crate::chain::index::Coord;
use crate::chain::matrix::TransitionMatrix;
use crate::chain::propagation::{advance, point_mass};
use crate::io::error::{Result, invalid_parameter};

/// One move along a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStep {
    /// Cell entered by this move
    pub coord: Coord,
    /// Transition probability of this move (1.0 for the starting cell)
    pub probability: f64,
}

/// Ordered sequence of moves beginning at the start cell
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Path consisting only of the start cell with certainty
    pub fn starting_at(coord: Coord) -> Self {
        Self {
            steps: vec![PathStep {
                coord,
                probability: 1.0,
            }],
        }
    }

    /// Copy of this path with one more move appended
    pub fn extended(&self, coord: Coord, probability: f64) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(PathStep { coord, probability });
        Self { steps }
    }

    /// All moves, including the starting cell
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Cells visited, in order
    pub fn positions(&self) -> Vec<Coord> {
        self.steps.iter().map(|step| step.coord).collect()
    }

    /// Number of entries, which is one more than the number of moves
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no entries
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Probability of the final move
    pub fn last_probability(&self) -> f64 {
        self.steps.last().map_or(0.0, |step| step.probability)
    }

    /// Product of every incremental probability
    pub fn cumulative_probability(&self) -> f64 {
        self.steps.iter().map(|step| step.probability).product()
    }
}

/// Product of a path's incremental probabilities
pub fn cumulative_probability(path: &Path) -> f64 {
    path.cumulative_probability()
}

/// A path reduced to its cells and total probability
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath {
    /// Cells visited, in order
    pub positions: Vec<Coord>,
    /// Product of every incremental probability
    pub cumulative_probability: f64,
}

/// Order paths by cumulative probability, highest first, and keep `top_k`
///
/// The sort is stable, so equally probable paths keep the order in which
/// they were found.
pub fn rank_paths(paths: &[Path], top_k: usize) -> Vec<RankedPath> {
    let mut ranked: Vec<RankedPath> = paths
        .iter()
        .map(|path| RankedPath {
            positions: path.positions(),
            cumulative_probability: path.cumulative_probability(),
        })
        .collect();
    ranked.sort_by(|a, b| b.cumulative_probability.total_cmp(&a.cumulative_probability));
    ranked.truncate(top_k);
    ranked
}

/// Track the best known path into `goal` at every step it holds mass
///
/// Returns one path per step in `1..=n_steps` at which the goal state has
/// positive probability, in step order.
///
/// # Errors
///
/// Returns an error if `n_steps` is zero or either coordinate lies outside
/// the grid
pub fn track_paths(
    matrix: &TransitionMatrix,
    start: Coord,
    goal: Coord,
    n_steps: usize,
) -> Result<Vec<Path>> {
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

    let size = matrix.size();
    let mut mass = point_mass(size, start_index);
    let mut table: Vec<Option<Path>> = vec![None; size];
    if let Some(slot) = table.get_mut(start_index) {
        *slot = Some(Path::starting_at(start));
    }

    let mut goal_paths = Vec::new();

    for _ in 1..=n_steps {
        let next_mass = advance(&mass, matrix);
        let mut next_table: Vec<Option<Path>> = vec![None; size];

        for (source, (&source_mass, source_path)) in mass.iter().zip(&table).enumerate() {
            if source_mass <= 0.0 {
                continue;
            }
            let Some(source_path) = source_path else {
                continue;
            };

            for (destination, &probability) in matrix.row(source).iter().enumerate() {
                if probability <= 0.0 {
                    continue;
                }
                let Some(slot) = next_table.get_mut(destination) else {
                    continue;
                };
                let improves = slot
                    .as_ref()
                    .is_none_or(|current| current.last_probability() < probability);
                if improves {
                    *slot = Some(source_path.extended(indexer.to_coord(destination), probability));
                }
            }
        }

        mass = next_mass;
        table = next_table;

        if mass.get(goal_index).is_some_and(|&goal_mass| goal_mass > 0.0)
            && let Some(Some(path)) = table.get(goal_index)
        {
            goal_paths.push(path.clone());
        }
    }

    tracing::info!(
        start = %start,
        goal = %goal,
        steps = n_steps,
        goal_paths = goal_paths.len(),
        "tracked goal paths"
    );

    Ok(goal_paths)
}
