//! Layers command: inspect the generated style layers.

use crate::cli::common::{load_config, load_palette, print_json, CliResult};
use crate::layers;
use crate::models::StyleLayer;
use clap::Args;
use std::path::PathBuf;

/// List the layers generated for a palette
#[derive(Debug, Clone, Args)]
pub struct LayersArgs {
    /// Palette file (defaults to the built-in palette)
    #[arg(short, long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Source name the layers reference (defaults to the configured export source)
    #[arg(long, value_name = "NAME")]
    pub source: Option<String>,

    /// Only list geometry layers
    #[arg(long, conflicts_with = "labels_only")]
    pub no_labels: bool,

    /// Only list label layers
    #[arg(long)]
    pub labels_only: bool,

    /// Output the full layer objects as JSON
    #[arg(long)]
    pub json: bool,
}

impl LayersArgs {
    /// Execute the layers command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let palette = load_palette(self.palette.as_deref(), &config)?;
        let source = self
            .source
            .as_deref()
            .unwrap_or(config.style.export_source.as_str());

        let layers = self.select(source, &palette);

        if self.json {
            return print_json(&layers);
        }

        for layer in &layers {
            println!("{:<40} {}", layer.id, kind_name(layer));
        }
        println!("\n{} layers", layers.len());

        let degraded = layers::degraded_categories(&palette);
        if !degraded.is_empty() {
            let names: Vec<&str> = degraded.iter().map(|c| c.as_str()).collect();
            eprintln!("⚠ Palette lacks: {}", names.join(", "));
        }

        Ok(())
    }

    fn select(&self, source: &str, palette: &crate::models::Palette) -> Vec<StyleLayer> {
        if self.no_labels {
            layers::no_labels(source, palette)
        } else if self.labels_only {
            layers::labels(source, palette)
        } else {
            layers::create_layers(source, palette)
        }
    }
}

fn kind_name(layer: &StyleLayer) -> String {
    serde_json::to_value(layer.kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
