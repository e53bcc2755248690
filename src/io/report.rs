//! Plain-text analysis report
//!
//! The same text is printed to the console and appended to the report file,
//! so repeated runs accumulate in one place.

use crate::chain::index::Coord;
use crate::chain::paths::RankedPath;
use crate::chain::propagation::PropagationOutcome;
use crate::io::error::{Result, file_system_error};
use ndarray::Array2;
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Results of one analysis run, borrowed for formatting
pub struct AnalysisReport<'a> {
    /// Maze height
    pub rows: usize,
    /// Maze width
    pub cols: usize,
    /// Share of extra passages opened after carving
    pub loop_percent: u8,
    /// Start cell of the walker
    pub start: Coord,
    /// Goal cell
    pub goal: Coord,
    /// Number of propagation steps
    pub n_steps: usize,
    /// Propagation results
    pub propagation: &'a PropagationOutcome,
    /// Broadcast steady-state matrix
    pub steady_state: &'a Array2<f64>,
    /// Highest-probability goal paths
    pub top_paths: &'a [RankedPath],
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Size of maze: {} by {}    Loop percentage: {}",
            self.rows, self.cols, self.loop_percent
        )?;
        writeln!(f, "Start: {}    Goal: {}", self.start, self.goal)?;

        match (self.propagation.goal_step, &self.propagation.goal_snapshot) {
            (Some(step), Some(snapshot)) => {
                writeln!(f, "Agent reached the goal at step: {step}")?;
                writeln!(f, "\nDistribution at step {step}:")?;
                writeln!(f, "{snapshot:.6}")?;
            }
            _ => writeln!(
                f,
                "Agent did not reach the goal within {} steps.",
                self.n_steps
            )?,
        }

        for snapshot in &self.propagation.snapshots {
            writeln!(f, "\nDistribution after {} steps:", snapshot.step)?;
            writeln!(f, "{:.6}", snapshot.distribution)?;
        }

        writeln!(
            f,
            "\nMost likely position after {} steps: {}",
            self.n_steps, self.propagation.most_likely
        )?;
        writeln!(
            f,
            "Probability of being in this position: {}",
            self.propagation.most_likely_probability
        )?;

        writeln!(f, "\nSteady-state matrix:")?;
        writeln!(f, "{:.6}", self.steady_state)?;

        if self.top_paths.is_empty() {
            writeln!(f, "\nNo path reached the goal.")?;
        } else {
            writeln!(f, "\nTop {} goal paths:", self.top_paths.len())?;
            for (rank, path) in self.top_paths.iter().enumerate() {
                let cells: Vec<String> = path.positions.iter().map(ToString::to_string).collect();
                writeln!(
                    f,
                    "  {}. p = {:.6e} ({} moves): {}",
                    rank + 1,
                    path.cumulative_probability,
                    path.positions.len().saturating_sub(1),
                    cells.join(" -> ")
                )?;
            }
        }

        Ok(())
    }
}

/// Append a report to `path`, creating the file and its directory if needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written
pub fn append_report(path: &Path, report: &AnalysisReport<'_>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| file_system_error(path, "open report", e))?;

    writeln!(file, "{report}").map_err(|e| file_system_error(path, "write report", e))?;

    tracing::info!(path = %path.display(), "appended report");
    Ok(())
}
