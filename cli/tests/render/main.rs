use clap::Parser;
use mazepath::{
    Args, Tile, create_search_request, execute_searches, overlay, render_grid, render_solution,
    render_tiles, result_tiles,
};
use mazepath_core::{Cell, Grid, Solver, parse_maze};

fn sample_grid() -> Grid {
    parse_maze("3 4\nA.#.\n..#.\n...B\n").unwrap()
}

#[test]
fn test_render_grid() {
    assert_eq!(render_grid(&sample_grid()), "A.#.\n..#.\n...B");
}

#[test]
fn test_render_bfs_solution() {
    let grid = sample_grid();
    let (path, _, _) = Solver::new(&grid).breadth_first_search();

    assert_eq!(render_solution(&grid, path.as_ref()), "A.#.\no.#.\noooB");
}

#[test]
fn test_render_without_path_is_bare_grid() {
    let grid = parse_maze("1 3\nA#B\n").unwrap();
    let (path, _, _) = Solver::new(&grid).breadth_first_search();

    assert!(path.is_none());
    assert_eq!(render_solution(&grid, path.as_ref()), "A#B");
}

#[test]
fn test_overlay_keeps_endpoint_markers() {
    let grid = sample_grid();
    let path = Solver::new(&grid).depth_first_search().0.unwrap();

    let tiles = overlay(&grid, Some(&path), None);

    assert_eq!(tiles[0][0], Tile::Start);
    assert_eq!(tiles[2][3], Tile::End);
    assert_eq!(tiles[0][2], Tile::Wall);
}

#[test]
fn test_explored_cells_are_marked() {
    let args = Args::parse_from([
        "mazepath",
        "maze.txt",
        "--algorithm",
        "bfs",
        "--show-explored",
    ]);
    let request = create_search_request(args);
    let grid = sample_grid();

    let results = execute_searches(&grid, &request);

    assert_eq!(results.len(), 1);
    let result = &results[0];
    let explored = result.explored.as_deref().unwrap();
    assert!(explored.contains(&Cell::new(1, 1)));
    assert!(!explored.contains(&Cell::new(0, 3)));

    let tiles = overlay(&grid, result.path.as_ref(), Some(explored));
    assert_eq!(render_tiles(&tiles), "A+#.\no+#.\noooB");
}

#[test]
fn test_both_algorithms_run_dfs_first() {
    let args = Args::parse_from(["mazepath", "maze.txt"]);
    let request = create_search_request(args);
    let grid = sample_grid();

    let results = execute_searches(&grid, &request);

    let algorithms: Vec<_> = results.iter().map(|r| r.algorithm.as_str()).collect();
    assert_eq!(algorithms, vec!["dfs", "bfs"]);
    assert!(results.iter().all(|r| r.path.as_ref().unwrap().is_valid_on(&grid)));
    assert!(results.iter().all(|r| r.explored.is_none()));
}

#[test]
fn test_explored_cells_shown_when_no_path() {
    let grid = parse_maze("1 3\nA#B\n").unwrap();
    let request = create_search_request(Args::parse_from(["mazepath", "blocked.txt", "-e"]));

    let results = execute_searches(&grid, &request);

    assert_eq!(results.len(), 2);
    for result in &results {
        assert!(result.path.is_none());
        let tiles = result_tiles(&grid, result).unwrap();
        assert_eq!(render_tiles(&tiles), "A#B");
    }
}

#[test]
fn test_explored_region_marked_in_unsolvable_maze() {
    let grid = parse_maze("2 4\nA.#.\n..#B\n").unwrap();
    let args = Args::parse_from(["mazepath", "pocket.txt", "-a", "bfs", "-e"]);
    let request = create_search_request(args);

    let results = execute_searches(&grid, &request);

    assert!(results[0].path.is_none());
    let tiles = result_tiles(&grid, &results[0]).unwrap();
    assert_eq!(render_tiles(&tiles), "A+#.\n++#B");
}

#[test]
fn test_no_overlay_without_path_or_explored_cells() {
    let grid = parse_maze("1 3\nA#B\n").unwrap();
    let request = create_search_request(Args::parse_from(["mazepath", "blocked.txt"]));

    let results = execute_searches(&grid, &request);

    assert!(results.iter().all(|result| result_tiles(&grid, result).is_none()));
}
