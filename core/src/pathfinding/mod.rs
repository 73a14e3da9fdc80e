pub mod bfs;
pub mod dfs;
pub mod state;
pub mod utils;

// Re-export the public functions
pub use bfs::bfs_find_path;
pub use dfs::dfs_find_path;
pub use state::SearchState;
pub use utils::{PathResult, SolutionPath, reconstruct_path};

use crate::algorithm::Algorithm;
use crate::grid::Grid;

/// Runs searches over a borrowed grid.
///
/// The solver keeps no state between calls: every search gets a fresh
/// [`SearchState`], or resets the one it is handed.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    grid: &'a Grid,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn depth_first_search(&self) -> PathResult {
        self.solve(Algorithm::Dfs)
    }

    pub fn breadth_first_search(&self) -> PathResult {
        self.solve(Algorithm::Bfs)
    }

    pub fn solve(&self, algorithm: Algorithm) -> PathResult {
        let mut state = SearchState::new(self.grid);
        self.solve_with_state(algorithm, &mut state)
    }

    /// Like [`Solver::solve`], but leaves the explored set and parent links
    /// in `state` for the caller to inspect afterwards.
    pub fn solve_with_state(&self, algorithm: Algorithm, state: &mut SearchState) -> PathResult {
        match algorithm {
            Algorithm::Dfs => dfs_find_path(self.grid, state),
            Algorithm::Bfs => bfs_find_path(self.grid, state),
        }
    }
}
