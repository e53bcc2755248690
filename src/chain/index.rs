//! Bijection between 1-based grid coordinates and 0-based chain states

use crate::io::error::{Result, invalid_parameter};
use std::fmt;

/// Grid cell position, 1-based in both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row, counted from the top starting at 1
    pub row: usize,
    /// Column, counted from the left starting at 1
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from a row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Maps grid coordinates to flat state indices and back
///
/// `index = (row - 1) * cols + (col - 1)`. The unchecked conversions assume
/// in-range input; [`GridIndexer::checked_index`] validates caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndexer {
    rows: usize,
    cols: usize,
}

impl GridIndexer {
    /// Create an indexer for a `rows` × `cols` grid
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of grid rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of chain states
    pub const fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat state index of an in-range coordinate
    pub const fn to_index(&self, coord: Coord) -> usize {
        (coord.row - 1) * self.cols + (coord.col - 1)
    }

    /// Grid coordinate of an in-range state index
    pub const fn to_coord(&self, index: usize) -> Coord {
        Coord {
            row: index / self.cols + 1,
            col: index % self.cols + 1,
        }
    }

    /// Check whether a coordinate lies inside the grid
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row >= 1 && coord.row <= self.rows && coord.col >= 1 && coord.col <= self.cols
    }

    /// Flat state index of a caller-supplied coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the grid
    pub fn checked_index(&self, parameter: &'static str, coord: Coord) -> Result<usize> {
        if self.contains(coord) {
            Ok(self.to_index(coord))
        } else {
            Err(invalid_parameter(
                parameter,
                &coord,
                &format!("outside the {}x{} grid", self.rows, self.cols),
            ))
        }
    }
}
