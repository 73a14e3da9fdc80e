use clap::Parser;
use mazepath::json_output::create_json_output;
use mazepath::{Args, create_search_request, execute_searches};
use mazepath_core::parse_maze;
use serde_json::json;

#[test]
fn test_json_output_for_solved_maze() {
    let grid = parse_maze("3 4\nA.#.\n..#.\n...B\n").unwrap();
    let request = create_search_request(Args::parse_from(["mazepath", "maze.txt", "-a", "bfs"]));
    let results = execute_searches(&grid, &request);

    let output = serde_json::to_value(create_json_output(&grid, &request, &results)).unwrap();

    assert_eq!(
        output["query"],
        json!({
            "maze_file": "maze.txt",
            "rows": 3,
            "cols": 4,
            "start": [0, 0],
            "end": [2, 3],
            "algorithms": ["bfs"],
        })
    );
    let run = &output["runs"][0];
    assert_eq!(run["algorithm"], "bfs");
    assert_eq!(run["result"]["found"], true);
    assert_eq!(run["result"]["steps"], 5);
    assert_eq!(
        run["result"]["path"],
        json!([[0, 0], [1, 0], [2, 0], [2, 1], [2, 2], [2, 3]])
    );
    assert!(run["result"].get("explored").is_none());
    assert_eq!(run["stats"]["cells_explored"], 8);
}

#[test]
fn test_json_output_for_unsolvable_maze() {
    let grid = parse_maze("1 3\nA#B\n").unwrap();
    let request = create_search_request(Args::parse_from(["mazepath", "blocked.txt"]));
    let results = execute_searches(&grid, &request);

    let output = serde_json::to_value(create_json_output(&grid, &request, &results)).unwrap();

    let runs = output["runs"].as_array().unwrap();
    assert_eq!(runs.len(), 2);
    for run in runs {
        assert_eq!(run["result"], json!({ "found": false }));
        assert_eq!(run["stats"]["cells_explored"], 1);
    }
}
