use clap::Parser;
use mazepath::colors::ColorScheme;
use mazepath::display::{display_search_info, display_search_results};
use mazepath::json_output::create_json_output;
use mazepath::logging::init_logging;
use mazepath::{Args, MazeApp, create_search_request, execute_searches};
use std::error::Error;

fn main() {
    let search_args = Args::parse();
    init_logging(search_args.verbose);
    let colors = ColorScheme::new(!search_args.no_color && !search_args.json);

    if let Err(error_message) = run(search_args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error_message);
        std::process::exit(1);
    }
}

fn run(search_args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = MazeApp::new(search_args.maze_file.clone())?;
    let grid = app.load_grid()?;

    let search_request = create_search_request(search_args);
    let json_mode = search_request.search_args.json;

    if !json_mode {
        display_search_info(&search_request, &grid, colors);
    }

    let search_results = execute_searches(&grid, &search_request);

    if json_mode {
        let json_output = create_json_output(&grid, &search_request, &search_results);
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else {
        display_search_results(&search_results, &search_request, &grid, colors);
    }

    Ok(())
}
