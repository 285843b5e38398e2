//! Command-line behaviour of the `waypoint` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MAP: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/romania_map.json");
const HEURISTIC: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../data/heuristic_to_bucharest.json"
);

/// A `waypoint` command isolated from the user's config, run inside `dir`
fn bare(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("waypoint").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("WAYPOINT_CONFIG")
        .current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

/// Like [`bare`], loading the Romania data
fn waypoint(dir: &TempDir) -> Command {
    let mut cmd = bare(dir);
    cmd.args(["--map", MAP, "--heuristic", HEURISTIC]);
    cmd
}

#[test]
fn search_a_star_as_json() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["search", "Arad", "Bucharest", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rimnicu Vilcea"))
        .stdout(predicate::str::contains("418"))
        .stdout(predicate::str::contains("\"a-star\""));
}

#[test]
fn search_all_strategies_as_csv() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["search", "Arad", "Bucharest", "-s", "all", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "strategy,found,path,hops,cost,nodes_expanded,max_fringe_size,elapsed_secs\n",
        ))
        .stdout(predicate::str::contains("breadth-first,true,Arad -> Sibiu -> Fagaras -> Bucharest,3,450,8,5,"))
        .stdout(predicate::str::contains("depth-first,true"))
        .stdout(predicate::str::contains("best-first,true"))
        .stdout(predicate::str::contains("a-star,true"));
}

#[test]
fn search_unknown_start_fails() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["search", "Atlantis", "Bucharest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown start node: Atlantis"));
}

#[test]
fn search_unknown_goal_reports_no_path() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["search", "Arad", "Atlantis", "-s", "bfs", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\": false"))
        .stdout(predicate::str::contains("\"nodes_expanded\": 20"));
}

#[test]
fn informed_search_needs_heuristic() {
    let dir = TempDir::new().unwrap();
    bare(&dir)
        .args(["--map", MAP, "search", "Arad", "Bucharest", "-s", "greedy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a heuristic table"));
}

#[test]
fn estimate_uses_selected_bound() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["estimate", "Arad", "Pitesti", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arad,Pitesti,Bucharest,via-reference,466"));

    waypoint(&dir)
        .args(["estimate", "Arad", "Pitesti", "-f", "csv", "--bound", "reverse-triangle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reverse-triangle,266"));
}

#[test]
fn experiment_writes_metrics_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");
    waypoint(&dir)
        .args(["experiment", "--case", "Arad:Bucharest", "-n", "2", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("A*"));

    let metrics = std::fs::read_to_string(out.join("metrics_Arad_to_Bucharest.csv")).unwrap();
    let mut lines = metrics.lines();
    assert_eq!(
        lines.next(),
        Some("algorithm,path_found,nodes_expanded,max_fringe_size,time_secs,hops,path_cost")
    );
    assert_eq!(lines.count(), 4);
    assert!(metrics.contains("\nA*,true,5,7,"));
}

#[test]
fn experiment_rejects_malformed_case() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["experiment", "--case", "Arad", "--no-write"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("START:GOAL"));
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["config", "set", "repetitions", "5"])
        .assert()
        .success();

    waypoint(&dir)
        .args(["config", "get", "repetitions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));

    waypoint(&dir)
        .args(["config", "get", "colour"])
        .assert()
        .failure();
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("waypoint"));
}

#[test]
fn missing_map_fails() {
    let dir = TempDir::new().unwrap();
    bare(&dir)
        .args(["--map", "does/not/exist.json", "search", "Arad", "Bucharest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load road map"));
}
