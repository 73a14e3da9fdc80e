use mazepath_core::{Cell, Classification, Grid, SolutionPath};

use crate::colors::ColorScheme;
use crate::search::SearchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Start,
    End,
    Path,
    Explored,
}

impl Tile {
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => '.',
            Tile::Start => 'A',
            Tile::End => 'B',
            Tile::Path => 'o',
            Tile::Explored => '+',
        }
    }
}

/// Lays a path and, optionally, the explored set over the grid.
///
/// Start and end always keep their markers; path beats explored.
pub fn overlay(
    grid: &Grid,
    path: Option<&SolutionPath>,
    explored: Option<&[Cell]>,
) -> Vec<Vec<Tile>> {
    let mut tiles: Vec<Vec<Tile>> = (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| match grid.classification(row, col) {
                    Classification::Wall => Tile::Wall,
                    _ => Tile::Open,
                })
                .collect()
        })
        .collect();

    for cell in explored.into_iter().flatten() {
        tiles[cell.row][cell.col] = Tile::Explored;
    }
    for cell in path.into_iter().flatten() {
        tiles[cell.row][cell.col] = Tile::Path;
    }

    let start = grid.start_cell();
    let end = grid.end_cell();
    tiles[start.row][start.col] = Tile::Start;
    tiles[end.row][end.col] = Tile::End;
    tiles
}

/// Overlay for one search run: the path plus any explored cells that were
/// kept. `None` when the run has neither to show.
pub fn result_tiles(grid: &Grid, result: &SearchResult) -> Option<Vec<Vec<Tile>>> {
    if result.path.is_none() && result.explored.is_none() {
        return None;
    }
    Some(overlay(grid, result.path.as_ref(), result.explored.as_deref()))
}

pub fn render_tiles(tiles: &[Vec<Tile>]) -> String {
    tiles
        .iter()
        .map(|row| row.iter().map(|tile| tile.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tiles_colored(tiles: &[Vec<Tile>], colors: &ColorScheme) -> String {
    tiles
        .iter()
        .map(|row| {
            row.iter()
                .map(|&tile| {
                    let symbol = tile.symbol().to_string();
                    let colored = match tile {
                        Tile::Wall => colors.wall(&symbol),
                        Tile::Open => colors.open(&symbol),
                        Tile::Start | Tile::End => colors.endpoint(&symbol),
                        Tile::Path => colors.path(&symbol),
                        Tile::Explored => colors.explored(&symbol),
                    };
                    colored.to_string()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_grid(grid: &Grid) -> String {
    render_tiles(&overlay(grid, None, None))
}

pub fn render_solution(grid: &Grid, path: Option<&SolutionPath>) -> String {
    render_tiles(&overlay(grid, path, None))
}
