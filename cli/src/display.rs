use mazepath_core::{Grid, SolutionPath};

use crate::colors::ColorScheme;
use crate::render::{overlay, render_tiles_colored, result_tiles};
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, grid: &Grid, colors: &ColorScheme) {
    if request.search_args.quiet {
        return;
    }

    println!(
        "🧭 Solving {} ({}x{}) from {} to {}",
        colors.cell(&request.maze_name),
        colors.number(&grid.rows().to_string()),
        colors.number(&grid.cols().to_string()),
        colors.cell(&grid.start_cell().to_string()),
        colors.cell(&grid.end_cell().to_string())
    );
    println!();
    println!("{}", render_tiles_colored(&overlay(grid, None, None), colors));
}

pub fn display_search_results(
    results: &[SearchResult],
    request: &SearchRequest,
    grid: &Grid,
    colors: &ColorScheme,
) {
    for result in results {
        display_search_result(result, request, grid, colors);
    }
}

fn display_search_result(
    result: &SearchResult,
    request: &SearchRequest,
    grid: &Grid,
    colors: &ColorScheme,
) {
    let display_options = &request.search_args;

    if display_options.quiet {
        match &result.path {
            Some(path) => println!("{}", format_path_flow(path, colors)),
            None => display_no_path(grid, colors),
        }
        return;
    }

    println!("\n---\n");
    println!(
        "⚙️  Using {} ({})",
        result.algorithm.display_name(),
        result.algorithm.as_str().to_uppercase()
    );

    match &result.path {
        Some(path) => display_successful_path(path, colors),
        None => display_no_path(grid, colors),
    }

    if let Some(tiles) = result_tiles(grid, result) {
        println!();
        println!("{}", render_tiles_colored(&tiles, colors));
    }

    if display_options.verbose {
        display_search_statistics(result.cells_explored, result.search_duration, colors);
    }
}

fn display_no_path(grid: &Grid, colors: &ColorScheme) {
    println!(
        "{} {} and {}",
        colors.error("❌ No path found between"),
        colors.cell(&grid.start_cell().to_string()),
        colors.cell(&grid.end_cell().to_string())
    );
}

fn display_successful_path(path: &SolutionPath, colors: &ColorScheme) {
    println!(
        "{} Found path with {} steps:\n",
        colors.success("✅"),
        colors.number(&path.steps().to_string())
    );
    println!("{}", format_path_flow(path, colors));
}

pub fn format_path_flow(path: &SolutionPath, colors: &ColorScheme) -> String {
    path.cells()
        .iter()
        .map(|cell| colors.cell(&cell.to_string()).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn display_search_statistics(cells_explored: usize, search_duration: f64, colors: &ColorScheme) {
    println!(
        "\n{} Explored {} cells in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(cells_explored)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
