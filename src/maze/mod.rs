//! Maze representation and generation
//!
//! The chain engine only depends on the [`Adjacency`] trait; [`Maze`] is the
//! concrete oracle produced by the seeded generator.

/// Compass directions and the adjacency oracle trait
pub mod direction;
/// Seeded maze carving with optional loops
pub mod generation;
/// Bit-packed passage storage
pub mod grid;

pub use direction::{Adjacency, Direction};
pub use grid::Maze;
