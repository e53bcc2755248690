//! Stage progress display for a single analysis run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Stages reported while analysing one maze
pub const ANALYSIS_STAGES: [&str; 5] = [
    "generating maze",
    "building transition matrix",
    "solving steady state",
    "propagating distribution",
    "tracking goal paths",
];

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advancing once per completed analysis stage
pub struct StageProgress {
    bar: ProgressBar,
}

impl StageProgress {
    /// Create a visible progress bar for `stages` stages
    pub fn new(stages: usize) -> Self {
        let bar = ProgressBar::new(stages as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(stages: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(stages as u64);
        Self { bar }
    }

    /// Announce the stage about to run
    pub fn start(&self, stage: &str) {
        self.bar.set_message(stage.to_string());
    }

    /// Mark the current stage as done
    pub fn complete(&self) {
        self.bar.inc(1);
    }

    /// Number of completed stages
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Fill the bar to its full length and remove it from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
