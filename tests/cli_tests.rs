//! End-to-end tests for the `mapthemer` command line.

use std::path::Path;
use std::process::Command;

use mapthemer::layers::{LABEL_LAYER_COUNT, LAYER_COUNT};
use mapthemer::models::{Category, Palette};
use serde_json::Value;

mod fixtures;
use fixtures::*;

/// Path to the mapthemer binary
fn mapthemer_bin() -> &'static str {
    env!("CARGO_BIN_EXE_mapthemer")
}

/// Runs the binary with a scratch config directory so user config is ignored.
fn run(args: &[&str]) -> std::process::Output {
    let home = tempfile::TempDir::new().expect("Failed to create temp dir");
    run_in(home.path(), args)
}

/// Runs the binary with `home` as its home and config directory.
fn run_in(home: &Path, args: &[&str]) -> std::process::Output {
    Command::new(mapthemer_bin())
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

#[test]
fn test_export_palette_to_stdout() {
    let output = run(&["export-palette"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = String::from_utf8_lossy(&output.stdout);
    let palette = Palette::from_json(&text).unwrap();
    assert_eq!(palette, default_palette());
}

#[test]
fn test_export_theme_to_file() {
    let mut palette = default_palette();
    palette.set(Category::Water, "#000000");
    let (palette_path, temp_dir) = write_palette_file(&palette);
    let out = temp_dir.path().join("out").join("theme.json");

    let output = run(&[
        "export-theme",
        "--palette",
        palette_path.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let theme: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(theme["version"], 8);
    assert_eq!(theme["name"], "CustomTheme");
    assert_eq!(theme["sources"]["basemap"]["type"], "vector");
    assert_eq!(theme["layers"].as_array().unwrap().len(), LAYER_COUNT);

    let water = theme["layers"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["id"] == "basemap_water")
        .expect("water layer");
    assert_eq!(water["paint"]["fill-color"], "#000000");
}

#[test]
fn test_export_theme_custom_source() {
    let output = run(&["export-theme", "--source", "tiles", "--name", "Night"]);
    assert_eq!(output.status.code(), Some(0));

    let theme = stdout_json(&output);
    assert_eq!(theme["name"], "Night");
    assert!(theme["sources"]["tiles"].is_object());
    assert_eq!(theme["layers"][0]["id"], "tiles_background");
}

#[test]
fn test_export_theme_strict_rejects_partial_palette() {
    let (path, _temp_dir) = write_temp_file("p.json", &palette_json(&[("water", "#123456")]));

    let lenient = run(&["export-theme", "--palette", path.to_str().unwrap()]);
    assert_eq!(lenient.status.code(), Some(0));

    let strict = run(&["export-theme", "--palette", path.to_str().unwrap(), "--strict"]);
    assert_eq!(
        strict.status.code(),
        Some(1),
        "Partial palette should fail strict export"
    );
    assert!(String::from_utf8_lossy(&strict.stderr).contains("no color for category"));
}

#[test]
fn test_missing_palette_file_is_io_error() {
    let output = run(&["export-theme", "--palette", "/nonexistent/palette.json"]);
    assert_eq!(
        output.status.code(),
        Some(2),
        "Nonexistent file should exit with code 2"
    );
}

#[test]
fn test_invalid_palette_file_is_validation_error() {
    let (path, _temp_dir) = write_temp_file("bad.json", "[1, 2, 3]");
    let output = run(&["export-palette", "--palette", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_validate_default_palette() {
    let (path, _temp_dir) = write_palette_file(&default_palette());
    let output = run(&["validate", "--palette", path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let report = stdout_json(&output);
    assert_eq!(report["valid"], true);
    assert_eq!(report["missing"], Value::Array(vec![]));
}

#[test]
fn test_validate_partial_palette() {
    let (path, _temp_dir) = write_temp_file("p.json", &palette_json(&[("water", "#123456")]));
    let output = run(&["validate", "--palette", path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let report = stdout_json(&output);
    assert_eq!(report["valid"], false);
    assert_eq!(
        report["missing"].as_array().unwrap().len(),
        Category::COUNT - 1
    );
}

#[test]
fn test_validate_strict_unknown_key() {
    let mut palette = default_palette();
    palette.insert_raw("lava", "#ff0000");
    let (path, _temp_dir) = write_palette_file(&palette);

    let lenient = run(&["validate", "--palette", path.to_str().unwrap()]);
    assert_eq!(lenient.status.code(), Some(0));

    let strict = run(&["validate", "--palette", path.to_str().unwrap(), "--strict"]);
    assert_eq!(strict.status.code(), Some(1));
}

#[test]
fn test_layers_json() {
    let output = run(&["layers", "--labels-only", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let layers = stdout_json(&output);
    let layers = layers.as_array().unwrap();
    assert_eq!(layers.len(), LABEL_LAYER_COUNT);
    assert!(layers.iter().all(|l| l["type"] == "symbol" || l["type"] == "circle"));
}

#[test]
fn test_layers_conflicting_filters() {
    let output = run(&["layers", "--labels-only", "--no-labels"]);
    assert_eq!(output.status.code(), Some(2), "clap usage errors exit 2");
}

#[test]
fn test_categories_json() {
    let output = run(&["categories", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let entries = stdout_json(&output);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), Category::COUNT);
    assert_eq!(entries[0]["name"], "background");
    assert!(entries.iter().any(|e| e["name"] == "water" && e["color"] == "#80deea"));
}

#[test]
fn test_export_palette_to_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let out = temp_dir.path().join("nested").join("palette.json");

    let output = run(&["export-palette", "--output", out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let palette = Palette::from_json(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(palette, default_palette());
    assert!(!out.with_extension("json.tmp").exists());
}

#[test]
fn test_unwritable_output_is_io_error() {
    let (blocker, _temp_dir) = write_temp_file("blocker", "");
    let out = blocker.join("theme.json");

    let output = run(&["export-theme", "--output", out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to create"));
}

#[test]
fn test_config_set_is_used_by_later_commands() {
    let home = tempfile::TempDir::new().unwrap();

    let output = run_in(
        home.path(),
        &["config", "set", "--export-source", "tiles", "--port", "8080"],
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let path = run_in(home.path(), &["config", "path"]);
    let path = String::from_utf8_lossy(&path.stdout).trim().to_string();
    assert!(Path::new(&path).exists());

    let shown = stdout_json(&run_in(home.path(), &["config", "show", "--json"]));
    assert_eq!(shown["server"]["port"], 8080);
    assert_eq!(shown["style"]["export_source"], "tiles");
    assert_eq!(shown["style"]["export_name"], "CustomTheme");

    let theme = stdout_json(&run_in(home.path(), &["export-theme"]));
    assert!(theme["sources"]["tiles"].is_object());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let home = tempfile::TempDir::new().unwrap();

    let output = run_in(home.path(), &["config", "set", "--glyphs-url", "fonts.pbf"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run_in(home.path(), &["config", "set"]);
    assert_eq!(output.status.code(), Some(1));

    let path = run_in(home.path(), &["config", "path"]);
    let path = String::from_utf8_lossy(&path.stdout).trim().to_string();
    assert!(!Path::new(&path).exists(), "Nothing should be saved");
}
