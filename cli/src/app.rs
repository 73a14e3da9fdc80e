use mazepath_core::{Grid, load_maze};
use std::{error::Error, path::PathBuf};
use tracing::info;

pub struct MazeApp {
    pub maze_path: PathBuf,
}

impl MazeApp {
    pub fn new(maze_path: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !maze_path.exists() {
            return Err(format!("Maze file does not exist: {:?}", maze_path).into());
        }
        if !maze_path.is_file() {
            return Err(format!("Maze path is not a file: {:?}", maze_path).into());
        }

        Ok(Self { maze_path })
    }

    pub fn load_grid(&self) -> Result<Grid, Box<dyn Error>> {
        let grid = load_maze(&self.maze_path)
            .map_err(|e| format!("{} ({})", e, self.maze_path.display()))?;
        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            open_cells = grid.open_cell_count(),
            "loaded maze"
        );
        Ok(grid)
    }
}
