//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use mapthemer::models::{Palette, StyleLayer};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The built-in palette, loaded the way the editor starts up.
pub fn default_palette() -> Palette {
    Palette::builtin().expect("built-in palette should parse")
}

/// Builds palette file text from `(key, color)` pairs, in the given order.
pub fn palette_json(entries: &[(&str, &str)]) -> String {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(key, color)| ((*key).to_string(), Value::String((*color).to_string())))
        .collect();
    serde_json::to_string_pretty(&Value::Object(map)).expect("palette should serialize")
}

/// Writes `contents` to a file in a fresh temp directory.
///
/// # Returns
/// The file path and the directory guard; keep the guard alive while the
/// file is in use.
pub fn write_temp_file(name: &str, contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (path, temp_dir)
}

/// Writes a palette file holding `palette`.
pub fn write_palette_file(palette: &Palette) -> (PathBuf, TempDir) {
    write_temp_file("palette.json", &palette.to_json())
}

/// Finds a layer by id, panicking with the id if it is missing.
pub fn layer<'a>(layers: &'a [StyleLayer], id: &str) -> &'a StyleLayer {
    layers
        .iter()
        .find(|layer| layer.id == id)
        .unwrap_or_else(|| panic!("layer {id} should exist"))
}

/// Returns a plain color paint property of a layer.
pub fn paint_color<'a>(layers: &'a [StyleLayer], id: &str, key: &str) -> Option<&'a str> {
    layer(layers, id).paint_color(key)
}
