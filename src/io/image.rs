//! Heatmap rendering of position distributions over a maze

use crate::chain::index::Coord;
use crate::chain::propagation::Snapshot;
use crate::io::error::{MazeMarkovError, Result, file_system_error};
use crate::maze::direction::{Adjacency, Direction};
use crate::maze::grid::Maze;
use image::{Frame, Rgba, RgbaImage};
use ndarray::Array1;
use std::path::Path;

const WALL_COLOR: Rgba<u8> = Rgba([20, 20, 20, 255]);
const COLD_COLOR: [u8; 3] = [30, 40, 90];
const HOT_COLOR: [u8; 3] = [250, 220, 60];

// Linear blend between the cold and hot colours, `intensity` in [0, 1]
fn heat_color(intensity: f64) -> Rgba<u8> {
    let t = intensity.clamp(0.0, 1.0);
    let channel = |cold: u8, hot: u8| {
        let value = (f64::from(hot) - f64::from(cold)).mul_add(t, f64::from(cold));
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(COLD_COLOR[0], HOT_COLOR[0]),
        channel(COLD_COLOR[1], HOT_COLOR[1]),
        channel(COLD_COLOR[2], HOT_COLOR[2]),
        255,
    ])
}

/// Render a distribution as a heatmap with the maze walls drawn on top
///
/// Cell brightness is scaled to the largest mass in the distribution, so a
/// one-hot distribution shows a single bright cell.
pub fn render_distribution(maze: &Maze, distribution: &Array1<f64>, cell_size: u32) -> RgbaImage {
    let cell_size = cell_size.max(2);
    let (rows, cols) = (maze.rows(), maze.cols());
    let width = cols as u32 * cell_size + 1;
    let height = rows as u32 * cell_size + 1;
    let peak = distribution.iter().copied().fold(0.0_f64, f64::max);

    let mut img = RgbaImage::from_pixel(width, height, WALL_COLOR);

    for row in 1..=rows {
        for col in 1..=cols {
            let coord = Coord::new(row, col);
            let state = (row - 1) * cols + (col - 1);
            let mass = distribution.get(state).copied().unwrap_or(0.0);
            let intensity = if peak > 0.0 { mass / peak } else { 0.0 };
            let color = heat_color(intensity);

            let x0 = (col as u32 - 1) * cell_size;
            let y0 = (row as u32 - 1) * cell_size;

            // Interior of the cell, leaving a one-pixel wall border
            for y in (y0 + 1)..(y0 + cell_size) {
                for x in (x0 + 1)..(x0 + cell_size) {
                    img.put_pixel(x, y, color);
                }
            }

            // Open passages erase the wall on the east and south borders
            if maze.is_open(coord, Direction::East)
                && Direction::East.step(coord, rows, cols).is_some()
            {
                for y in (y0 + 1)..(y0 + cell_size) {
                    img.put_pixel(x0 + cell_size, y, color);
                }
            }
            if maze.is_open(coord, Direction::South)
                && Direction::South.step(coord, rows, cols).is_some()
            {
                for x in (x0 + 1)..(x0 + cell_size) {
                    img.put_pixel(x, y0 + cell_size, color);
                }
            }
        }
    }

    img
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    Ok(())
}

/// Export a distribution heatmap as a PNG image
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved
pub fn export_heatmap_png(
    maze: &Maze,
    distribution: &Array1<f64>,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    ensure_parent(output_path)?;
    render_distribution(maze, distribution, cell_size)
        .save(output_path)
        .map_err(|e| MazeMarkovError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    tracing::info!(path = %output_path.display(), "exported heatmap");
    Ok(())
}

/// Export one heatmap frame per snapshot as an animated GIF
///
/// # Errors
///
/// Returns an error if:
/// - There are no snapshots to animate
/// - The parent directory or output file cannot be created
/// - GIF encoding fails
pub fn export_snapshots_gif(
    maze: &Maze,
    snapshots: &[Snapshot],
    cell_size: u32,
    delay_ms: u32,
    output_path: &Path,
) -> Result<()> {
    if snapshots.is_empty() {
        return Err(MazeMarkovError::InvalidParameter {
            parameter: "snapshots",
            value: "0".to_string(),
            reason: "at least one snapshot is required for an animation".to_string(),
        });
    }

    let frames: Vec<Frame> = snapshots
        .iter()
        .map(|snapshot| {
            Frame::from_parts(
                render_distribution(maze, &snapshot.distribution, cell_size),
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms, 1),
            )
        })
        .collect();

    ensure_parent(output_path)?;
    let file = std::fs::File::create(output_path)
        .map_err(|e| file_system_error(output_path, "create file", e))?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|e| MazeMarkovError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), frames = snapshots.len(), "exported animation");
    Ok(())
}
