use super::{cells, maze, shortest_cell_count};
use mazepath_core::{Cell, Grid, SearchState, Solver, dfs_find_path};

#[test]
fn test_dfs_open_three_by_three_goes_north_first() {
    let grid = Grid::open(3, 3, Cell::new(0, 0), Cell::new(2, 2)).unwrap();

    let (path, _, _) = Solver::new(&grid).depth_first_search();

    let path = path.unwrap();
    assert_eq!(path.cells()[0], Cell::new(0, 0));
    assert_eq!(path.cells()[1], Cell::new(1, 0));
    assert_eq!(path.end(), Some(Cell::new(2, 2)));
    assert!(path.len() >= 5);
    assert!(path.is_valid_on(&grid));
}

#[test]
fn test_dfs_follows_directional_bias_not_shortest() {
    // North (down the page) is tried first, so DFS takes the long way
    // round even though the end sits two cells to the east.
    let grid = maze(&[
        "A.B",
        "...",
        "...",
    ]);

    let (path, _, _) = Solver::new(&grid).depth_first_search();

    let path = path.unwrap();
    assert!(path.is_valid_on(&grid));
    assert_eq!(
        path.cells(),
        cells(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]).as_slice()
    );
    assert!(path.len() > shortest_cell_count(&grid).unwrap());
}

#[test]
fn test_dfs_finds_valid_path_whenever_one_exists() {
    let mazes = [
        maze(&[
            "A.#.....",
            ".##.###.",
            "....#...",
            "##.##.#.",
            "...#..#B",
        ]),
        maze(&[
            "..A..",
            ".###.",
            ".#B#.",
            ".#.#.",
            ".....",
        ]),
        maze(&["A", ".", "B"]),
    ];

    for grid in &mazes {
        let (path, _, _) = Solver::new(grid).depth_first_search();
        let path = path.unwrap();
        assert!(path.is_valid_on(grid));
        assert!(path.len() >= shortest_cell_count(grid).unwrap());
    }
}

#[test]
fn test_dfs_no_path_through_wall_barrier() {
    let grid = maze(&[
        "A.#..",
        "..#..",
        "..#.B",
    ]);

    let (path, discovered, _) = Solver::new(&grid).depth_first_search();

    assert!(path.is_none());
    assert_eq!(discovered, 6);
}

#[test]
fn test_dfs_start_equals_end() {
    let grid = Grid::open(1, 1, Cell::new(0, 0), Cell::new(0, 0)).unwrap();

    let (path, _, _) = Solver::new(&grid).depth_first_search();

    assert_eq!(path.unwrap().cells(), &[Cell::new(0, 0)]);
}

#[test]
fn test_dfs_marks_each_cell_once() {
    let grid = Grid::open(4, 4, Cell::new(0, 0), Cell::new(3, 3)).unwrap();
    let mut state = SearchState::new(&grid);

    let (_, discovered, _) = dfs_find_path(&grid, &mut state);

    assert_eq!(discovered, state.explored_cells(&grid).count());
    assert!(discovered <= grid.open_cell_count());
}
