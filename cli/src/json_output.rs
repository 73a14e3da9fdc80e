use mazepath_core::{Algorithm, Cell, Grid};
use serde::{Deserialize, Serialize};

use crate::search::{SearchRequest, SearchResult};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub runs: Vec<JsonRun>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub maze_file: String,
    pub rows: usize,
    pub cols: usize,
    pub start: [usize; 2],
    pub end: [usize; 2],
    pub algorithms: Vec<Algorithm>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonRun {
    pub algorithm: Algorithm,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<[usize; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explored: Option<Vec<[usize; 2]>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub cells_explored: usize,
}

fn coords(cell: &Cell) -> [usize; 2] {
    [cell.row, cell.col]
}

pub fn create_json_output(
    grid: &Grid,
    request: &SearchRequest,
    results: &[SearchResult],
) -> JsonOutput {
    let runs = results
        .iter()
        .map(|result| JsonRun {
            algorithm: result.algorithm,
            result: JsonResult {
                found: result.path.is_some(),
                steps: result.path.as_ref().map(|path| path.steps()),
                path: result
                    .path
                    .as_ref()
                    .map(|path| path.cells().iter().map(coords).collect()),
                explored: result
                    .explored
                    .as_ref()
                    .map(|cells| cells.iter().map(coords).collect()),
            },
            stats: JsonStats {
                search_time_ms: (result.search_duration * 1000.0) as u64,
                cells_explored: result.cells_explored,
            },
        })
        .collect();

    JsonOutput {
        query: JsonQuery {
            maze_file: request.maze_name.clone(),
            rows: grid.rows(),
            cols: grid.cols(),
            start: coords(&grid.start_cell()),
            end: coords(&grid.end_cell()),
            algorithms: request.algorithms.clone(),
        },
        runs,
    }
}
