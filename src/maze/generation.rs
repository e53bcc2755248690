//! Seeded maze generation
//!
//! A perfect maze is carved with an iterative recursive backtracker that
//! starts from a chosen origin cell (typically the goal). Afterwards a share
//! of the remaining interior walls is knocked down to introduce loops:
//! 0% keeps the maze perfect, 100% opens every wall.

use crate::chain::index::Coord;
use crate::io::configuration::MAX_LOOP_PERCENT;
use crate::io::error::{Result, invalid_parameter};
use crate::maze::direction::Direction;
use crate::maze::grid::Maze;
use bitvec::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters for a single maze generation run
#[derive(Clone, Copy, Debug)]
pub struct MazeConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Cell the backtracker starts carving from
    pub origin: Coord,
    /// Percentage of closed interior walls opened after carving
    pub loop_percent: u8,
    /// Seed for the random number generator
    pub seed: u64,
}

/// Generate a maze from the given configuration
///
/// # Errors
///
/// Returns an error if the grid is empty, the origin is outside the grid,
/// or the loop percentage exceeds 100
pub fn generate_maze(config: &MazeConfig) -> Result<Maze> {
    if config.rows == 0 || config.cols == 0 {
        return Err(invalid_parameter(
            "size",
            &format!("{}x{}", config.rows, config.cols),
            &"maze must have at least one cell",
        ));
    }
    if config.loop_percent > MAX_LOOP_PERCENT {
        return Err(invalid_parameter(
            "loop_percent",
            &config.loop_percent,
            &format!("must be at most {MAX_LOOP_PERCENT}"),
        ));
    }

    let mut maze = Maze::new(config.rows, config.cols);
    if !maze.contains(config.origin) {
        return Err(invalid_parameter(
            "origin",
            &config.origin,
            &"outside the maze",
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    carve_backtracker(&mut maze, config.origin, &mut rng);
    open_loops(&mut maze, config.loop_percent, &mut rng);

    tracing::debug!(
        rows = config.rows,
        cols = config.cols,
        loop_percent = config.loop_percent,
        passages = maze.passage_count(),
        "generated maze"
    );

    Ok(maze)
}

fn carve_backtracker(maze: &mut Maze, origin: Coord, rng: &mut StdRng) {
    let (rows, cols) = (maze.rows(), maze.cols());
    let cell = |coord: Coord| (coord.row - 1) * cols + (coord.col - 1);

    let mut visited = bitvec![0; rows * cols];
    visited.set(cell(origin), true);
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let mut candidates = [Direction::North; 4];
        let mut count = 0;
        for direction in Direction::ALL {
            if let Some(next) = direction.step(current, rows, cols)
                && !visited.get(cell(next)).is_some_and(|bit| *bit)
                && let Some(slot) = candidates.get_mut(count)
            {
                *slot = direction;
                count += 1;
            }
        }

        if count == 0 {
            stack.pop();
            continue;
        }

        let Some(&direction) = candidates.get(rng.random_range(0..count)) else {
            stack.pop();
            continue;
        };
        if let Some(next) = direction.step(current, rows, cols) {
            maze.set_passage(current, direction, true);
            tracing::trace!(from = %current, direction = %direction.label(), "carved passage");
            visited.set(cell(next), true);
            stack.push(next);
        }
    }
}

fn open_loops(maze: &mut Maze, loop_percent: u8, rng: &mut StdRng) {
    if loop_percent == 0 {
        return;
    }

    let (rows, cols) = (maze.rows(), maze.cols());
    let mut closed = Vec::new();
    for row in 1..=rows {
        for col in 1..=cols {
            let coord = Coord::new(row, col);
            for direction in [Direction::South, Direction::East] {
                if direction.step(coord, rows, cols).is_some()
                    && !maze.open_directions(coord).any(|open| open == direction)
                {
                    closed.push((coord, direction));
                }
            }
        }
    }

    let target = closed.len() * usize::from(loop_percent) / usize::from(MAX_LOOP_PERCENT);

    // Partial Fisher-Yates: the first `target` entries become a uniform sample
    for i in 0..target {
        let j = rng.random_range(i..closed.len());
        closed.swap(i, j);
    }

    for &(coord, direction) in closed.iter().take(target) {
        maze.set_passage(coord, direction, true);
    }
}
