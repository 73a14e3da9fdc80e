use clap::{Parser, ValueEnum};
use mazepath_core::Algorithm;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmChoice {
    Dfs,
    Bfs,
    #[default]
    Both,
}

impl AlgorithmChoice {
    /// Algorithms to run, in order.
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Dfs => vec![Algorithm::Dfs],
            AlgorithmChoice::Bfs => vec![Algorithm::Bfs],
            AlgorithmChoice::Both => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "mazepath")]
#[command(about = "Find a path from A to B through a text grid maze")]
pub struct Args {
    /// Maze file: a `<rows> <cols>` header, then rows of `#`, `.`, `A` and `B`
    pub maze_file: PathBuf,

    /// Search algorithm to run (both = DFS then BFS)
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Mark cells the search discovered but did not use
    #[arg(short = 'e', long)]
    pub show_explored: bool,

    /// Print a JSON report instead of the grid overlay
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search statistics and info logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}
