//! Discrete-time Markov chain analysis of random walks through grid mazes
//!
//! A maze is read through a narrow adjacency oracle and turned into a
//! row-stochastic transition matrix. The chain engine then derives the
//! steady-state distribution, propagates an agent's position distribution
//! step by step, and tracks the most probable paths from a start cell to a
//! goal cell.

#![deny(unsafe_code)]

/// Markov chain engine: indexing, matrix construction, steady state, propagation and path tracking
pub mod chain;
/// Input/output operations, configuration and error handling
pub mod io;
/// Numerical helpers for tolerance comparisons and dense linear algebra
pub mod math;
/// Maze representation, adjacency oracle and seeded generation
pub mod maze;

pub use io::error::{MazeMarkovError, Result};
