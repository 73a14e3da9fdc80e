use mazepath_core::{Algorithm, Cell, Grid, SearchState, SolutionPath, Solver};
use tracing::info;

use crate::args::Args;

pub struct SearchRequest {
    pub maze_name: String,
    pub algorithms: Vec<Algorithm>,
    pub search_args: Args,
}

pub struct SearchResult {
    pub algorithm: Algorithm,
    pub path: Option<SolutionPath>,
    pub cells_explored: usize,
    pub search_duration: f64,
    /// Discovered cells, kept only when the caller asked to see them.
    pub explored: Option<Vec<Cell>>,
}

pub fn create_search_request(args: Args) -> SearchRequest {
    let maze_name = args.maze_file.display().to_string();
    let algorithms = args.algorithm.algorithms();

    SearchRequest {
        maze_name,
        algorithms,
        search_args: args,
    }
}

/// Runs every requested algorithm over `grid`, sharing one search buffer.
pub fn execute_searches(grid: &Grid, request: &SearchRequest) -> Vec<SearchResult> {
    let solver = Solver::new(grid);
    let mut state = SearchState::new(grid);

    request
        .algorithms
        .iter()
        .map(|&algorithm| {
            let (path, cells_explored, search_duration) =
                solver.solve_with_state(algorithm, &mut state);
            info!(
                algorithm = algorithm.as_str(),
                found = path.is_some(),
                cells_explored,
                search_duration,
                "search finished"
            );

            let explored = request
                .search_args
                .show_explored
                .then(|| state.explored_cells(grid).collect());

            SearchResult {
                algorithm,
                path,
                cells_explored,
                search_duration,
                explored,
            }
        })
        .collect()
}
