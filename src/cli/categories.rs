//! Categories command: list the palette schema.

use crate::cli::common::{load_config, load_palette, print_json, CliResult};
use crate::models::{Category, Palette};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List every palette category and its color
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Palette file to read colors from (defaults to the built-in palette)
    #[arg(short, long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Only list label categories
    #[arg(long)]
    pub labels: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the category listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    /// Wire name of the category
    pub name: &'static str,
    /// Color assigned by the palette, if any
    pub color: Option<String>,
    /// True for text and halo categories
    pub label: bool,
}

/// Lists the categories in canonical order with their colors in `palette`.
#[must_use]
pub fn category_entries(palette: &Palette, labels_only: bool) -> Vec<CategoryEntry> {
    Category::ALL
        .iter()
        .filter(|category| !labels_only || category.is_label())
        .map(|&category| CategoryEntry {
            name: category.as_str(),
            color: palette.get(category).map(|c| c.as_str().to_string()),
            label: category.is_label(),
        })
        .collect()
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let palette = load_palette(self.palette.as_deref(), &config)?;
        let entries = category_entries(&palette, self.labels);

        if self.json {
            return print_json(&entries);
        }

        for entry in &entries {
            println!(
                "{:<28} {}",
                entry.name,
                entry.color.as_deref().unwrap_or("(none)")
            );
        }
        Ok(())
    }
}
