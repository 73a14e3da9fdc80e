use super::state::SearchState;
use super::utils::{PathResult, open_neighbors, reconstruct_path};
use crate::direction::EXPLORATION_ORDER;
use crate::grid::Grid;
use std::{collections::VecDeque, time::Instant};
use tracing::{debug, trace};

/// Breadth-first search from the grid's start to its end.
///
/// Explores in rings of increasing distance, so the returned path has the
/// fewest possible cells.
pub fn bfs_find_path(grid: &Grid, state: &mut SearchState) -> PathResult {
    let search_timer = Instant::now();
    let start = grid.start_cell();
    let target = grid.end_cell();

    state.reset();
    state.mark_start(grid, start);
    let mut queue = VecDeque::from([start]);

    while let Some(current_cell) = queue.pop_front() {
        trace!(row = current_cell.row, col = current_cell.col, "bfs pop");

        if current_cell == target {
            let path = reconstruct_path(state, grid, start, target);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            debug!(
                steps = path.as_ref().map(|path| path.steps()),
                discovered = state.discovered(),
                elapsed_time,
                "bfs reached end"
            );
            return (path, state.discovered(), elapsed_time);
        }

        for neighbor in open_neighbors(grid, current_cell, EXPLORATION_ORDER.iter()) {
            if state.discover(grid, neighbor, current_cell) {
                queue.push_back(neighbor);
            }
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(discovered = state.discovered(), elapsed_time, "bfs exhausted frontier");
    (None, state.discovered(), elapsed_time)
}
