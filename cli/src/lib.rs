pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod render;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::MazeApp;
pub use args::{AlgorithmChoice, Args};
pub use render::{Tile, overlay, render_grid, render_solution, render_tiles, result_tiles};
pub use search::{SearchRequest, SearchResult, create_search_request, execute_searches};
pub use utils::format_number;
