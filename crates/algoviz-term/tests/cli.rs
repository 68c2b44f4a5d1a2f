//! Integration tests for the `algoviz` binary in headless mode.

use std::fs;
use std::process::Command;

fn algoviz_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_algoviz"))
}

fn run_ok(args: &[&str]) -> String {
    let output = algoviz_bin()
        .args(args)
        .output()
        .expect("failed to run algoviz");
    assert!(
        output.status.success(),
        "algoviz {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// algoviz path
// ---------------------------------------------------------------------------

#[test]
fn path_open_board_finds_corner_route() {
    for alg in ["astar", "dijkstra", "bfs"] {
        let stdout = run_ok(&["path", "--headless", "--algorithm", alg]);
        assert!(
            stdout.contains("path found (38 moves, 39 cells)"),
            "{alg}: {stdout}"
        );
    }
}

#[test]
fn path_json_summary() {
    let stdout = run_ok(&[
        "path", "--headless", "--json", "--rows", "5", "--cols", "5", "-a", "bfs",
    ]);
    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(summary["algorithm"], "Breadth-First Search");
    let route = summary["outcome"]["PathFound"]
        .as_array()
        .expect("route array");
    assert_eq!(route.len(), 8);
}

#[test]
fn path_maze_walled_off() {
    let dir = tempfile::tempdir().unwrap();
    let maze = dir.path().join("maze.txt");
    fs::write(&maze, "S.#\n..#\n###\n..E\n").unwrap();
    let stdout = run_ok(&[
        "path",
        "--headless",
        "--maze",
        maze.to_str().unwrap(),
    ]);
    assert!(stdout.contains("no path found"));
    assert!(stdout.contains("visited:     3"));
    // The visited cells stay on the printed board.
    assert!(stdout.contains("So#\noo#\n###\n..E"), "{stdout}");
}

#[test]
fn path_seeded_obstacles_are_reproducible() {
    let args = [
        "path", "--headless", "--density", "0.3", "--seed", "42", "--rows", "12", "--cols",
        "12",
    ];
    let a = run_ok(&args);
    let b = run_ok(&args);
    let board = |s: &str| s.lines().skip_while(|l| !l.is_empty()).collect::<Vec<_>>().join("\n");
    assert_eq!(board(&a), board(&b));
    assert!(board(&a).contains('#'));
}

#[test]
fn path_rejects_unknown_algorithm() {
    let output = algoviz_bin()
        .args(["path", "--headless", "--algorithm", "dfs"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid algorithm selected: dfs"), "{stderr}");
}

#[test]
fn path_bad_maze_character() {
    let dir = tempfile::tempdir().unwrap();
    let maze = dir.path().join("maze.txt");
    fs::write(&maze, "S.x\n..E\n").unwrap();
    let output = algoviz_bin()
        .args(["path", "--headless", "--maze", maze.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid maze"));
}

// ---------------------------------------------------------------------------
// algoviz sort
// ---------------------------------------------------------------------------

#[test]
fn sort_custom_array_bubble() {
    let stdout = run_ok(&["sort", "--headless", "--array", "5,3,8,1,2"]);
    assert!(stdout.contains("Bubble Sort"), "{stdout}");
    assert!(stdout.contains("sorted [1, 2, 3, 5, 8]"));
    assert!(stdout.contains("comparisons: 10"));
}

#[test]
fn sort_every_algorithm_json() {
    for alg in ["bubble", "selection", "insertion", "merge", "quick", "heap"] {
        let stdout = run_ok(&[
            "sort", "--headless", "--json", "--seed", "7", "--size", "30", "-a", alg,
        ]);
        let summary: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
        let values: Vec<i64> = summary["outcome"]["Sorted"]
            .as_array()
            .expect("sorted values")
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect();
        assert_eq!(values.len(), 30, "{alg}");
        assert!(values.is_sorted(), "{alg}: {values:?}");
    }
}

#[test]
fn sort_rejects_short_custom_array() {
    let output = algoviz_bin()
        .args(["sort", "--headless", "--array", "3,1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("got 2"));
}

#[test]
fn json_requires_headless() {
    let output = algoviz_bin().args(["sort", "--json"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn log_file_receives_records() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("algoviz.log");
    run_ok(&[
        "sort",
        "--headless",
        "--seed",
        "1",
        "--log-file",
        log.to_str().unwrap(),
    ]);
    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("sorting 50 values"), "{text}");
}
