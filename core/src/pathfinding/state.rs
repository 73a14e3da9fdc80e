use crate::grid::{Cell, Grid};

/// Explored flags and parent links for one solve pass, indexed by the
/// grid's row-major cell index.
///
/// A state is sized for one grid. Searches call [`SearchState::reset`]
/// before they start, so a buffer can be reused across runs without
/// leaking the previous run's tree.
#[derive(Debug, Clone)]
pub struct SearchState {
    explored: Vec<bool>,
    parent: Vec<Option<usize>>,
    discovered: usize,
}

impl SearchState {
    pub fn new(grid: &Grid) -> Self {
        Self {
            explored: vec![false; grid.len()],
            parent: vec![None; grid.len()],
            discovered: 0,
        }
    }

    /// Marks every cell unexplored and parentless. Idempotent.
    pub fn reset(&mut self) {
        self.explored.fill(false);
        self.parent.fill(None);
        self.discovered = 0;
    }

    pub(crate) fn mark_start(&mut self, grid: &Grid, start: Cell) {
        self.explored[grid.index_of(start)] = true;
        self.discovered += 1;
    }

    /// Records `neighbor` as reached from `current` unless it was already
    /// discovered this pass. Returns whether it was newly discovered.
    pub(crate) fn discover(&mut self, grid: &Grid, neighbor: Cell, current: Cell) -> bool {
        let index = grid.index_of(neighbor);
        if self.explored[index] {
            return false;
        }
        self.explored[index] = true;
        self.parent[index] = Some(grid.index_of(current));
        self.discovered += 1;
        true
    }

    pub fn is_explored(&self, grid: &Grid, cell: Cell) -> bool {
        grid.in_bounds(cell.row, cell.col) && self.explored[grid.index_of(cell)]
    }

    pub fn parent(&self, grid: &Grid, cell: Cell) -> Option<Cell> {
        if !grid.in_bounds(cell.row, cell.col) {
            return None;
        }
        self.parent[grid.index_of(cell)].map(|index| grid.cell_at(index))
    }

    /// Number of cells discovered so far, start included.
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    pub fn explored_cells<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = Cell> + 'a {
        self.explored
            .iter()
            .enumerate()
            .filter(|&(_, &explored)| explored)
            .map(|(index, _)| grid.cell_at(index))
    }
}
