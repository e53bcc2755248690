//! Compass directions and the adjacency oracle consumed by the chain engine

use crate::chain::index::Coord;

/// Movement direction between orthogonally adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 1
    North,
    /// Towards the last row
    South,
    /// Towards the last column
    East,
    /// Towards column 1
    West,
}

impl Direction {
    /// All directions, in the order neighbours are enumerated
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Direction pointing back the way this one came
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Position of this direction's flag within a cell's passage bits
    pub const fn offset(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// Single-letter compass label
    pub const fn label(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Neighbouring coordinate in this direction, if it stays inside the grid
    ///
    /// North requires `row > 1`, South `row < rows`, East `col < cols`
    /// and West `col > 1`.
    pub const fn step(self, coord: Coord, rows: usize, cols: usize) -> Option<Coord> {
        match self {
            Self::North if coord.row > 1 => Some(Coord::new(coord.row - 1, coord.col)),
            Self::South if coord.row < rows => Some(Coord::new(coord.row + 1, coord.col)),
            Self::East if coord.col < cols => Some(Coord::new(coord.row, coord.col + 1)),
            Self::West if coord.col > 1 => Some(Coord::new(coord.row, coord.col - 1)),
            _ => None,
        }
    }
}

/// Read-only connectivity oracle over a rectangular grid
///
/// Implementors report whether the passage leaving `coord` in `direction`
/// is open. Flags are not required to be symmetric or to respect the grid
/// boundary; consumers check bounds themselves.
pub trait Adjacency {
    /// Number of grid rows
    fn rows(&self) -> usize;

    /// Number of grid columns
    fn cols(&self) -> usize;

    /// Whether the passage from `coord` towards `direction` is open
    fn is_open(&self, coord: Coord, direction: Direction) -> bool;
}
