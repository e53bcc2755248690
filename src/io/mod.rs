//! Input/output, configuration and error handling

/// Command-line interface and analysis orchestration
pub mod cli;
/// Analysis constants and runtime configuration defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Heatmap and animation rendering of distributions
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Stage progress display
pub mod progress;
/// Plain-text analysis report
pub mod report;
