//! Validation command for palette files.

use crate::cli::common::{load_config, load_palette, print_json, CliError, CliResult};
use crate::services::PaletteReport;
use clap::Args;
use std::path::PathBuf;

/// Check a palette file against the category schema
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Palette file to check
    #[arg(short, long, value_name = "FILE")]
    pub palette: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat unknown keys as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let palette = load_palette(Some(self.palette.as_path()), &config)?;
        let report = PaletteReport::build(&palette, self.strict);

        if self.json {
            print_json(&report)?;
        } else {
            if report.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }
            print_list("Missing categories", &report.missing);
            print_list("Unknown keys", &report.unknown);
            print_list("Invalid colors", &report.invalid_colors);
        }

        if report.valid {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "{} is not a valid palette",
                self.palette.display()
            )))
        }
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}:");
    for item in items {
        println!("  ✗ {item}");
    }
}
