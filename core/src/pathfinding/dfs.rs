use super::state::SearchState;
use super::utils::{PathResult, open_neighbors, reconstruct_path};
use crate::direction::EXPLORATION_ORDER;
use crate::grid::Grid;
use std::time::Instant;
use tracing::{debug, trace};

/// Depth-first search from the grid's start to its end.
///
/// Cells are marked explored when pushed, so each one is assigned a parent
/// at most once and never sits on the stack twice. The path returned is the
/// first one the North-first bias completes, not necessarily the shortest.
pub fn dfs_find_path(grid: &Grid, state: &mut SearchState) -> PathResult {
    let search_timer = Instant::now();
    let start = grid.start_cell();
    let target = grid.end_cell();

    state.reset();
    state.mark_start(grid, start);
    let mut stack = vec![start];

    while let Some(current_cell) = stack.pop() {
        trace!(row = current_cell.row, col = current_cell.col, "dfs pop");

        if current_cell == target {
            let path = reconstruct_path(state, grid, start, target);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            debug!(
                steps = path.as_ref().map(|path| path.steps()),
                discovered = state.discovered(),
                elapsed_time,
                "dfs reached end"
            );
            return (path, state.discovered(), elapsed_time);
        }

        // LIFO: push in reverse so the first direction in the order pops first.
        for neighbor in open_neighbors(grid, current_cell, EXPLORATION_ORDER.iter().rev()) {
            if state.discover(grid, neighbor, current_cell) {
                stack.push(neighbor);
            }
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(discovered = state.discovered(), elapsed_time, "dfs exhausted frontier");
    (None, state.discovered(), elapsed_time)
}
