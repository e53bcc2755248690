//! Markov chain engine over grid-indexed states
//!
//! Data flows one way: an [`Adjacency`](crate::maze::Adjacency) oracle is
//! turned into an immutable [`TransitionMatrix`], which every solver then
//! borrows read-only.

/// Coordinate to state-index bijection
pub mod index;
/// Transition matrix construction and validation
pub mod matrix;
/// Best-path dynamic program and path ranking
pub mod paths;
/// Step-by-step distribution propagation
pub mod propagation;
/// Stationary distribution solvers
pub mod steady;

pub use index::{Coord, GridIndexer};
pub use matrix::{TransitionMatrix, build_matrix};
pub use paths::{Path, PathStep, RankedPath, cumulative_probability, rank_paths, track_paths};
pub use propagation::{PropagationOutcome, Snapshot, advance, propagate};
pub use steady::{SteadyStateMethod, steady_state, steady_state_with};
