//! CLI entry point for maze random-walk analysis

use clap::Parser;
use maze_markov::io::cli::{Cli, Runner};
use maze_markov::io::logging::init_logging;

fn main() -> maze_markov::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut runner = Runner::new(cli);
    runner.run()
}
