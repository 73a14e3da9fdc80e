pub mod algorithm;
pub mod direction;
pub mod error;
pub mod grid;
pub mod parsing;
pub mod pathfinding;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use direction::{Direction, EXPLORATION_ORDER};
pub use error::{GridError, ParseError};
pub use grid::{Cell, Classification, Grid};
pub use parsing::{load_maze, parse_maze};
pub use pathfinding::{PathResult, SearchState, SolutionPath, Solver, bfs_find_path, dfs_find_path};
