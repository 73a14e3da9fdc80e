use super::state::SearchState;
use crate::grid::{Cell, Grid};
use serde::Serialize;

/// `(path, cells discovered, elapsed seconds)`; the path is `None` when the
/// end cell is unreachable.
pub type PathResult = (Option<SolutionPath>, usize, f64);

/// Cells from start to end inclusive, one orthogonal step apart.
///
/// Only the searches build paths:
///
/// ```compile_fail
/// use mazepath_core::{Cell, SolutionPath};
///
/// let _ = SolutionPath::from(vec![Cell::new(0, 0), Cell::new(2, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SolutionPath {
    cells: Vec<Cell>,
}

impl SolutionPath {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Moves taken, one less than the cell count.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Checks the path against `grid`: right endpoints, only open cells, and
    /// orthogonal single steps throughout.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        self.start() == Some(grid.start_cell())
            && self.end() == Some(grid.end_cell())
            && self.cells.iter().all(|cell| grid.is_open(cell.row, cell.col))
            && self.cells.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]))
    }
}

impl<'a> IntoIterator for &'a SolutionPath {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Walks parent links back from `target` to `start`.
///
/// Returns `None` when the chain breaks before reaching `start`, which is
/// the case for any state that has not completed a search to `target`.
pub fn reconstruct_path(
    state: &SearchState,
    grid: &Grid,
    start: Cell,
    target: Cell,
) -> Option<SolutionPath> {
    let mut path = Vec::new();
    let mut current_cell = target;

    while current_cell != start {
        path.push(current_cell);
        current_cell = state.parent(grid, current_cell)?;
    }

    path.push(start);
    path.reverse();
    Some(SolutionPath::new(path))
}

/// Open, in-bounds neighbours of `cell`, in the order `directions` yields.
pub(crate) fn open_neighbors<'a, I>(
    grid: &'a Grid,
    cell: Cell,
    directions: I,
) -> impl Iterator<Item = Cell> + 'a
where
    I: IntoIterator<Item = &'a crate::direction::Direction>,
    I::IntoIter: 'a,
{
    directions
        .into_iter()
        .filter_map(move |&direction| grid.neighbor(cell, direction))
        .filter(move |neighbor| grid.is_open(neighbor.row, neighbor.col))
}
