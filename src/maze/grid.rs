//! Bit-packed maze passages
//!
//! Each cell owns four passage flags (N, S, E, W). Carving through
//! [`Maze::set_passage`] keeps both sides of a wall consistent, while
//! [`Maze::set_flag`] edits a single side for callers that need raw,
//! possibly asymmetric connectivity.

use crate::chain::index::Coord;
use crate::maze::direction::{Adjacency, Direction};
use bitvec::prelude::*;

const FLAGS_PER_CELL: usize = 4;

/// Rectangular maze with per-direction passage flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    passages: BitVec,
}

impl Maze {
    /// Create a maze with every wall closed
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            passages: bitvec![0; rows * cols * FLAGS_PER_CELL],
        }
    }

    /// Create a maze where every in-bounds passage is open
    pub fn fully_open(rows: usize, cols: usize) -> Self {
        let mut maze = Self::new(rows, cols);
        for row in 1..=rows {
            for col in 1..=cols {
                let coord = Coord::new(row, col);
                for direction in [Direction::South, Direction::East] {
                    maze.set_passage(coord, direction, true);
                }
            }
        }
        maze
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a coordinate lies inside the maze
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row >= 1 && coord.row <= self.rows && coord.col >= 1 && coord.col <= self.cols
    }

    fn flag_index(&self, coord: Coord, direction: Direction) -> Option<usize> {
        self.contains(coord).then(|| {
            ((coord.row - 1) * self.cols + (coord.col - 1)) * FLAGS_PER_CELL + direction.offset()
        })
    }

    /// Set a single passage flag without touching the neighbouring cell
    ///
    /// Boundary flags may be set; the chain engine ignores passages that
    /// would leave the grid. Returns `false` if the coordinate is outside
    /// the maze.
    pub fn set_flag(&mut self, coord: Coord, direction: Direction, open: bool) -> bool {
        let Some(index) = self.flag_index(coord, direction) else {
            return false;
        };
        match self.passages.get_mut(index) {
            Some(mut bit) => {
                *bit = open;
                true
            }
            None => false,
        }
    }

    /// Open or close the wall between a cell and its neighbour
    ///
    /// Updates both sides of the wall. Returns `false` (and changes nothing)
    /// if the neighbour would lie outside the maze.
    pub fn set_passage(&mut self, coord: Coord, direction: Direction, open: bool) -> bool {
        let Some(neighbour) = direction.step(coord, self.rows, self.cols) else {
            return false;
        };
        if !self.contains(coord) {
            return false;
        }
        self.set_flag(coord, direction, open) && self.set_flag(neighbour, direction.opposite(), open)
    }

    /// Directions whose passage flag is set for a cell
    pub fn open_directions(&self, coord: Coord) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.is_open(coord, direction))
    }

    /// Number of open in-bounds walls, counting each shared wall once
    ///
    /// Only the South and East flags are inspected, so an asymmetric flag
    /// set through [`Maze::set_flag`] on the North or West side is not
    /// counted.
    pub fn passage_count(&self) -> usize {
        let mut count = 0;
        for row in 1..=self.rows {
            for col in 1..=self.cols {
                let coord = Coord::new(row, col);
                for direction in [Direction::South, Direction::East] {
                    if direction.step(coord, self.rows, self.cols).is_some()
                        && self.is_open(coord, direction)
                    {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

impl Adjacency for Maze {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.flag_index(coord, direction)
            .and_then(|index| self.passages.get(index))
            .is_some_and(|bit| *bit)
    }
}
