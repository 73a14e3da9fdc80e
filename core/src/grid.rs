use crate::direction::Direction;
use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// A grid position. Equality is by coordinates only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Wall,
    Open,
    OutOfBounds,
}

/// A rectangular maze with a fixed start and end.
///
/// Construction guarantees that both endpoints are in bounds and open, so
/// every `Grid` that exists can be handed straight to a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
    start: Cell,
    end: Cell,
}

impl Grid {
    /// Builds a grid from row-major wall flags (`true` = wall).
    pub fn new(
        walls: Vec<Vec<bool>>,
        start: Cell,
        end: Cell,
    ) -> Result<Self, GridError> {
        let rows = walls.len();
        let cols = walls.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }

        if let Some((row, found)) = walls
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }

        let grid = Self {
            rows,
            cols,
            walls: walls.into_iter().flatten().collect(),
            start,
            end,
        };
        grid.check_endpoint("start", start)?;
        grid.check_endpoint("end", end)?;
        Ok(grid)
    }

    /// A grid with no walls at all.
    pub fn open(rows: usize, cols: usize, start: Cell, end: Cell) -> Result<Self, GridError> {
        Self::new(vec![vec![false; cols]; rows], start, end)
    }

    fn check_endpoint(&self, role: &'static str, cell: Cell) -> Result<(), GridError> {
        match self.classification(cell.row, cell.col) {
            Classification::Open => Ok(()),
            Classification::Wall => Err(GridError::OnWall {
                role,
                row: cell.row,
                col: cell.col,
            }),
            Classification::OutOfBounds => Err(GridError::OutOfBounds {
                role,
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start_cell(&self) -> Cell {
        self.start
    }

    pub fn end_cell(&self) -> Cell {
        self.end
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn classification(&self, row: usize, col: usize) -> Classification {
        if !self.in_bounds(row, col) {
            Classification::OutOfBounds
        } else if self.walls[row * self.cols + col] {
            Classification::Wall
        } else {
            Classification::Open
        }
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.classification(row, col) == Classification::Open
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col).then(|| Cell::new(row, col))
    }

    /// The in-bounds cell one step from `cell`, wall or not.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (row_delta, col_delta) = direction.offset();
        let row = cell.row.checked_add_signed(row_delta)?;
        let col = cell.col.checked_add_signed(col_delta)?;
        self.cell(row, col)
    }

    /// Row-major arena index of an in-bounds cell.
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    pub fn open_cell_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }
}
