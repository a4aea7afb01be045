//! Export commands for palette and theme files.

use crate::cli::common::{load_config, load_palette, write_output, CliResult};
use crate::export::{self, StyleSettings};
use crate::services::PaletteFileService;
use clap::Args;
use std::path::PathBuf;

/// Write a palette as `palette.json`
#[derive(Debug, Clone, Args)]
pub struct ExportPaletteArgs {
    /// Palette file to start from (defaults to the built-in palette)
    #[arg(short, long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Output path (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportPaletteArgs {
    /// Execute the export-palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let palette = load_palette(self.palette.as_deref(), &config)?;

        match &self.output {
            Some(path) => {
                PaletteFileService::save(&palette, path)?;
                eprintln!("✓ Wrote {}", path.display());
                Ok(())
            }
            None => write_output(None, &export::export_palette(&palette)),
        }
    }
}

/// Write the MapLibre style for a palette as `theme.json`
#[derive(Debug, Clone, Args)]
pub struct ExportThemeArgs {
    /// Palette file to generate the style from (defaults to the built-in palette)
    #[arg(short, long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Output path (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Style name (defaults to the configured export name)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Source name the layers reference (defaults to the configured export source)
    #[arg(long, value_name = "NAME")]
    pub source: Option<String>,

    /// Fail if the palette lacks any category
    #[arg(long)]
    pub strict: bool,
}

impl ExportThemeArgs {
    /// Execute the export-theme command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let palette = load_palette(self.palette.as_deref(), &config)?;

        let mut settings = StyleSettings::export(&config.style);
        if let Some(name) = &self.name {
            settings.name = name.as_str();
        }
        if let Some(source) = &self.source {
            settings.source = source.as_str();
        }

        let document = if self.strict {
            export::build_style_checked(&settings, &palette)?
        } else {
            export::build_style(&settings, &palette)
        };

        write_output(self.output.as_deref(), &export::theme_to_json(&document)?)
    }
}
