//! Command-line integration tests: runs the built binary in a scratch
//! directory so no stray `playground.toml` is picked up.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nav-playground"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run nav-playground")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ===========================================================================
// window
// ===========================================================================

#[test]
fn window_prints_bracketed_current_page() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["window", "--current", "5", "--total", "9"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1 … 4 [5] 6 … 9\n");
}

#[test]
fn window_clamps_current() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["window", "--current", "42", "--total", "9"]);
    assert_eq!(stdout(&out), "1 … 8 [9]\n");
}

#[test]
fn window_json_uses_ellipsis_strings() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        tmp.path(),
        &["window", "--current", "5", "--total", "9", "--json"],
    );
    let markers: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(markers, serde_json::json!([1, "...", 4, 5, 6, "...", 9]));
}

#[test]
fn window_rejects_negative_radius() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        tmp.path(),
        &["window", "--current", "1", "--total", "9", "--radius=-1"],
    );
    assert!(!out.status.success());
}

// ===========================================================================
// render
// ===========================================================================

#[test]
fn render_json_is_page_model() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["render", "/carousel?slide=7", "--json"]);
    assert!(out.status.success());
    let view: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(view["page"], "carousel");
    assert_eq!(view["current_slide"], 5);
    assert_eq!(view["next_slide"], 1);
}

#[test]
fn render_html_page() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["render", "/pagination?page=3"]);
    assert!(out.status.success());
    let html = stdout(&out);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Page 3 of 9"));
}

#[test]
fn render_unknown_path_prints_not_found_page() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["render", "/missing"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Page not found"));
}

#[test]
fn render_unknown_path_json_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["render", "/missing", "--json"]);
    assert!(!out.status.success());
}

#[test]
fn render_reads_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("playground.toml"),
        "[pagination]\ntotal_items = 100\nper_page = 10\n",
    )
    .unwrap();
    let out = run(tmp.path(), &["render", "/pagination", "--json"]);
    let view: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(view["total_pages"], 10);
}

#[test]
fn invalid_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.toml");
    std::fs::write(&path, "[pagination]\nper_page = 0\n").unwrap();
    let out = run(
        tmp.path(),
        &["render", "/", "--config", path.to_str().unwrap()],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("per_page"));
}

// ===========================================================================
// gen-config
// ===========================================================================

#[test]
fn gen_config_round_trips_through_render() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    std::fs::write(tmp.path().join("playground.toml"), &out.stdout).unwrap();

    let out = run(tmp.path(), &["render", "/infinite-scroll", "--json"]);
    assert!(out.status.success());
    let view: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(view["total_items"], 30);
}
