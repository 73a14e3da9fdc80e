use mazepath::MazeApp;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_app_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let result = MazeApp::new(dir.path().join("missing.txt"));

    let error = result.err().unwrap().to_string();
    assert!(error.contains("does not exist"));
}

#[test]
fn test_app_rejects_directory() {
    let dir = tempfile::tempdir().unwrap();

    let result = MazeApp::new(dir.path().to_path_buf());

    assert!(result.err().unwrap().to_string().contains("not a file"));
}

#[test]
fn test_app_loads_grid() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "2 3").unwrap();
    writeln!(file, "A#.").unwrap();
    writeln!(file, "..B").unwrap();

    let app = MazeApp::new(file.path().to_path_buf()).unwrap();
    let grid = app.load_grid().unwrap();

    assert_eq!((grid.rows(), grid.cols()), (2, 3));
    assert!(!grid.is_open(0, 1));
}

#[test]
fn test_app_reports_parse_errors_with_file_name() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1 3").unwrap();
    writeln!(file, "A?B").unwrap();

    let app = MazeApp::new(file.path().to_path_buf()).unwrap();
    let error = app.load_grid().unwrap_err().to_string();

    assert!(error.contains("unknown maze character '?'"));
    assert!(error.contains(&file.path().display().to_string()));
}
