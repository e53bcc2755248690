//! Tracing subscriber setup for the command-line binary

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when `RUST_LOG` is not set
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "maze_markov=warn",
        1 => "maze_markov=info",
        2 => "maze_markov=debug",
        _ => "maze_markov=trace",
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG` or the verbosity level
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
