use crate::error::{GridError, ParseError};
use crate::grid::{Cell, Grid};
use std::path::Path;

pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const OPEN_ALT: char = '*';
pub const START: char = 'A';
pub const END: char = 'B';

/// Reads and parses a maze file.
pub fn load_maze(maze_path: &Path) -> Result<Grid, ParseError> {
    let maze_text = std::fs::read_to_string(maze_path)?;
    parse_maze(&maze_text)
}

/// Parses a maze description: a `<rows> <cols>` header followed by one line
/// per row using `#` for walls, `.` or `*` for open cells, `A` for the start
/// and `B` for the end.
pub fn parse_maze(maze_text: &str) -> Result<Grid, ParseError> {
    let mut lines = maze_text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .enumerate()
        .map(|(index, line)| (index + 1, line));

    let (_, header) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or(ParseError::MissingHeader)?;
    let (rows, cols) = parse_header(header)?;

    let row_lines: Vec<(usize, &str)> = lines.collect();
    let row_lines = trim_trailing_blank_lines(&row_lines);
    if row_lines.len() != rows {
        return Err(ParseError::RowCount {
            expected: rows,
            found: row_lines.len(),
        });
    }

    let mut markers = Markers::default();
    let mut walls = Vec::with_capacity(rows);

    for (row, &(line_number, line)) in row_lines.iter().enumerate() {
        let width = line.chars().count();
        if width != cols {
            return Err(ParseError::RowWidth {
                line: line_number,
                expected: cols,
                found: width,
            });
        }

        let wall_row = line
            .chars()
            .enumerate()
            .map(|(col, symbol)| {
                classify_symbol(symbol, Cell::new(row, col), &mut markers).ok_or(
                    ParseError::UnknownSymbol {
                        line: line_number,
                        column: col + 1,
                        symbol,
                    },
                )
            })
            .collect::<Result<Vec<bool>, ParseError>>()?;
        markers.check_duplicates()?;
        walls.push(wall_row);
    }

    let start = markers.start.ok_or(ParseError::MissingMarker(START))?;
    let end = markers.end.ok_or(ParseError::MissingMarker(END))?;
    Ok(Grid::new(walls, start, end)?)
}

fn parse_header(header: &str) -> Result<(usize, usize), ParseError> {
    let bad_header = || ParseError::BadHeader(header.to_string());
    let mut fields = header.split_whitespace();

    let rows: usize = fields.next().and_then(|f| f.parse().ok()).ok_or_else(bad_header)?;
    let cols: usize = fields.next().and_then(|f| f.parse().ok()).ok_or_else(bad_header)?;
    if fields.next().is_some() {
        return Err(bad_header());
    }
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid { rows, cols }.into());
    }

    Ok((rows, cols))
}

fn trim_trailing_blank_lines<'a>(lines: &'a [(usize, &'a str)]) -> &'a [(usize, &'a str)] {
    let kept = lines
        .iter()
        .rposition(|(_, line)| !line.trim().is_empty())
        .map_or(0, |last| last + 1);
    &lines[..kept]
}

#[derive(Default)]
struct Markers {
    start: Option<Cell>,
    end: Option<Cell>,
    duplicate: Option<char>,
}

impl Markers {
    fn record(&mut self, symbol: char, cell: Cell) {
        let slot = if symbol == START { &mut self.start } else { &mut self.end };
        if slot.is_some() {
            self.duplicate.get_or_insert(symbol);
        }
        *slot = Some(cell);
    }

    fn check_duplicates(&self) -> Result<(), ParseError> {
        match self.duplicate {
            Some(symbol) => Err(ParseError::DuplicateMarker(symbol)),
            None => Ok(()),
        }
    }
}

/// Returns whether `symbol` is a wall, or `None` for an unknown character.
fn classify_symbol(symbol: char, cell: Cell, markers: &mut Markers) -> Option<bool> {
    match symbol {
        WALL => Some(true),
        OPEN | OPEN_ALT => Some(false),
        START | END => {
            markers.record(symbol, cell);
            Some(false)
        }
        _ => None,
    }
}
