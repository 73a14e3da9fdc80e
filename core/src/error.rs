use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{role} cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        role: &'static str,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("{role} cell ({row}, {col}) is a wall")]
    OnWall {
        role: &'static str,
        row: usize,
        col: usize,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Could not read maze file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Maze file is missing the `<rows> <cols>` header line")]
    MissingHeader,
    #[error("Malformed header {0:?}, expected `<rows> <cols>`")]
    BadHeader(String),
    #[error("Expected {expected} maze rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("Line {line}: expected {expected} characters, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}, column {column}: unknown maze character {symbol:?}")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },
    #[error("Maze has no {0} marker")]
    MissingMarker(char),
    #[error("Maze has more than one {0} marker")]
    DuplicateMarker(char),
    #[error(transparent)]
    Grid(#[from] GridError),
}
