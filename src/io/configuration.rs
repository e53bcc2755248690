//! Analysis constants and runtime configuration defaults

// Chain engine
/// Steps between periodic distribution snapshots
pub const SNAPSHOT_INTERVAL: usize = 10;

/// Allowed deviation of a transition row sum from exactly one
pub const STOCHASTIC_TOLERANCE: f64 = 1e-9;

// Pivots at or below this magnitude count as zero when extracting the
// eigenspace of eigenvalue 1
/// Tolerance for treating an eigenvalue as equal to one
pub const EIGEN_TOLERANCE: f64 = 1e-8;

/// Relative tolerance for approximate float comparison
pub const RELATIVE_TOLERANCE: f64 = 1e-5;
/// Absolute tolerance for approximate float comparison
pub const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Iteration cap for the power-iteration steady-state solver
pub const POWER_ITERATION_MAX_ITERATIONS: usize = 100_000;
/// L1 convergence threshold for the power-iteration steady-state solver
pub const POWER_ITERATION_TOLERANCE: f64 = 1e-12;

// Default values for configurable parameters
/// Number of propagation steps
pub const DEFAULT_STEPS: usize = 100;
/// Fixed seed for reproducible maze generation
pub const DEFAULT_SEED: u64 = 42;
/// Number of ranked goal paths to report
pub const DEFAULT_TOP_PATHS: usize = 3;

// Maze generation
/// Maximum share of extra passages opened after carving, in percent
pub const MAX_LOOP_PERCENT: u8 = 100;

// Dense matrices grow with the fourth power of the side length
/// Maximum allowed maze side length
pub const MAX_MAZE_SIZE: usize = 32;

// Output settings
/// Report file appended to after each run
pub const DEFAULT_REPORT_FILE: &str = "readme.txt";
/// Pixels per maze cell in rendered images
pub const RENDER_CELL_SIZE: u32 = 16;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
