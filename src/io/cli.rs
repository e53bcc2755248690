//! Command-line interface and end-to-end analysis of one generated maze

use crate::chain::index::Coord;
use crate::chain::matrix::build_matrix;
use crate::chain::paths::{RankedPath, rank_paths, track_paths};
use crate::chain::propagation::propagate;
use crate::chain::steady::{SteadyStateMethod, steady_state_with};
use crate::io::configuration::{
    DEFAULT_REPORT_FILE, DEFAULT_SEED, DEFAULT_STEPS, DEFAULT_TOP_PATHS, GIF_FRAME_DELAY_MS,
    MAX_LOOP_PERCENT, MAX_MAZE_SIZE, RENDER_CELL_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_heatmap_png, export_snapshots_gif};
use crate::io::progress::{ANALYSIS_STAGES, StageProgress};
use crate::io::report::{AnalysisReport, append_report};
use crate::maze::generation::{MazeConfig, generate_maze};
use clap::{ArgAction, Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;

/// Steady-state solver selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Eigenvector of the transposed matrix for eigenvalue 1
    #[default]
    Eigen,
    /// Power iteration on the lazy chain
    Power,
}

impl From<MethodArg> for SteadyStateMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Eigen => Self::Eigen,
            MethodArg::Power => Self::power_iteration(),
        }
    }
}

/// Parse a `ROW,COL` pair into a coordinate
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated positive integers
pub fn parse_coord(text: &str) -> std::result::Result<Coord, String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{text}'"))?;
    let row: usize = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    let col: usize = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{col}': {e}"))?;
    if row == 0 || col == 0 {
        return Err(format!("coordinates are 1-based, got '{text}'"));
    }
    Ok(Coord::new(row, col))
}

#[derive(Parser)]
#[command(name = "maze-markov")]
#[command(
    author,
    version,
    about = "Analyse random walks through a generated maze as a Markov chain"
)]
/// Command-line arguments for the maze analysis tool
pub struct Cli {
    /// Side length of the square maze
    #[arg(value_name = "SIZE")]
    pub size: usize,

    /// Percentage of remaining walls opened to create loops (0-100)
    #[arg(value_name = "LOOP_PERCENT")]
    pub loop_percent: u8,

    /// Number of propagation steps
    #[arg(short = 'n', long, default_value_t = DEFAULT_STEPS)]
    pub steps: usize,

    /// Random seed for maze generation and start/goal selection
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Start cell as ROW,COL (random if omitted)
    #[arg(long, value_parser = parse_coord)]
    pub start: Option<Coord>,

    /// Goal cell as ROW,COL (random if omitted)
    #[arg(long, value_parser = parse_coord)]
    pub goal: Option<Coord>,

    /// Number of ranked goal paths to report
    #[arg(short, long, default_value_t = DEFAULT_TOP_PATHS)]
    pub top: usize,

    /// Steady-state solver
    #[arg(short, long, value_enum, default_value_t = MethodArg::Eigen)]
    pub method: MethodArg,

    /// Report file appended to after the run
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    pub report: PathBuf,

    /// Skip writing the report file
    #[arg(long)]
    pub no_report: bool,

    /// Write a PNG heatmap of the final distribution
    #[arg(long, value_name = "PATH")]
    pub heatmap: Option<PathBuf>,

    /// Write an animated GIF of the periodic snapshots
    #[arg(long, value_name = "PATH")]
    pub animation: Option<PathBuf>,

    /// Suppress the progress bar and console summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check that the numeric arguments are within supported bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the size, loop percentage or step count is out of range
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_MAZE_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between 1 and {MAX_MAZE_SIZE}"),
            ));
        }
        if self.loop_percent > MAX_LOOP_PERCENT {
            return Err(invalid_parameter(
                "loop_percent",
                &self.loop_percent,
                &format!("must be at most {MAX_LOOP_PERCENT}"),
            ));
        }
        if self.steps == 0 {
            return Err(invalid_parameter(
                "steps",
                &self.steps,
                &"at least one step is required",
            ));
        }
        Ok(())
    }

    /// Check if progress and the console summary should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary of a completed run, kept for callers that drive [`Runner`] directly
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Start cell used
    pub start: Coord,
    /// Goal cell used
    pub goal: Coord,
    /// First step with positive goal mass
    pub goal_step: Option<usize>,
    /// Highest-probability goal paths
    pub top_paths: Vec<RankedPath>,
}

/// Orchestrates maze generation, chain analysis and output
pub struct Runner {
    cli: Cli,
    progress: StageProgress,
}

impl Runner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            StageProgress::new(ANALYSIS_STAGES.len())
        } else {
            StageProgress::hidden(ANALYSIS_STAGES.len())
        };
        Self { cli, progress }
    }

    /// Run the analysis and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, any analysis stage, or
    /// writing an output file fails
    pub fn run(&mut self) -> Result<()> {
        self.execute().map(|_| ())
    }

    /// Run the analysis and return its summary
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, any analysis stage, or
    /// writing an output file fails
    // Allow print for the console summary
    #[allow(clippy::print_stdout)]
    pub fn execute(&mut self) -> Result<RunSummary> {
        self.cli.validate()?;
        let size = self.cli.size;
        let (start, goal) = self.endpoints()?;

        tracing::info!(
            size,
            loop_percent = self.cli.loop_percent,
            seed = self.cli.seed,
            start = %start,
            goal = %goal,
            "starting analysis"
        );

        let mut stages = ANALYSIS_STAGES.iter();
        let mut next_stage = |progress: &StageProgress| {
            if let Some(stage) = stages.next() {
                progress.start(stage);
            }
        };

        next_stage(&self.progress);
        let maze = generate_maze(&MazeConfig {
            rows: size,
            cols: size,
            origin: goal,
            loop_percent: self.cli.loop_percent,
            seed: self.cli.seed,
        })?;
        self.progress.complete();

        next_stage(&self.progress);
        let matrix = build_matrix(&maze)?;
        self.progress.complete();

        next_stage(&self.progress);
        let steady_state = steady_state_with(&matrix, self.cli.method.into())?;
        self.progress.complete();

        next_stage(&self.progress);
        let propagation = propagate(&matrix, start, goal, self.cli.steps)?;
        self.progress.complete();

        next_stage(&self.progress);
        let goal_paths = track_paths(&matrix, start, goal, self.cli.steps)?;
        let top_paths = rank_paths(&goal_paths, self.cli.top);
        self.progress.complete();
        tracing::debug!(stages = self.progress.completed(), "analysis stages complete");
        self.progress.finish();

        let report = AnalysisReport {
            rows: size,
            cols: size,
            loop_percent: self.cli.loop_percent,
            start,
            goal,
            n_steps: self.cli.steps,
            propagation: &propagation,
            steady_state: &steady_state,
            top_paths: &top_paths,
        };

        if self.cli.should_show_progress() {
            println!("{report}");
        }

        if !self.cli.no_report {
            append_report(&self.cli.report, &report)?;
        }

        if let Some(path) = &self.cli.heatmap {
            export_heatmap_png(
                &maze,
                &propagation.final_distribution,
                RENDER_CELL_SIZE,
                path,
            )?;
        }

        if let Some(path) = &self.cli.animation {
            export_snapshots_gif(
                &maze,
                &propagation.snapshots,
                RENDER_CELL_SIZE,
                GIF_FRAME_DELAY_MS,
                path,
            )?;
        }

        Ok(RunSummary {
            start,
            goal,
            goal_step: propagation.goal_step,
            top_paths,
        })
    }

    // Explicit endpoints are validated; missing ones are drawn from a seeded RNG
    fn endpoints(&self) -> Result<(Coord, Coord)> {
        let size = self.cli.size;
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut random_cell = || Coord::new(rng.random_range(1..=size), rng.random_range(1..=size));

        let start = self.cli.start.unwrap_or_else(&mut random_cell);
        let goal = self.cli.goal.unwrap_or_else(&mut random_cell);

        for (parameter, coord) in [("start", start), ("goal", goal)] {
            if coord.row > size || coord.col > size {
                return Err(invalid_parameter(
                    parameter,
                    &coord,
                    &format!("outside the {size}x{size} maze"),
                ));
            }
        }

        Ok((start, goal))
    }
}
