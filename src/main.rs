//! MapThemer - color theme editor for vector basemaps
//!
//! Runs the browser editor or generates palettes and MapLibre styles from the
//! command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "web")]
use mapthemer::cli::ServeArgs;
use mapthemer::cli::{
    CategoriesArgs, CliResult, ConfigArgs, ExportPaletteArgs, ExportThemeArgs, LayersArgs,
    ValidateArgs,
};

/// MapThemer - color theme editor for vector basemaps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the browser editor
    #[cfg(feature = "web")]
    Serve(ServeArgs),
    /// Write a palette as palette.json
    ExportPalette(ExportPaletteArgs),
    /// Write the MapLibre style for a palette as theme.json
    ExportTheme(ExportThemeArgs),
    /// List the layers generated for a palette
    Layers(LayersArgs),
    /// Check a palette file against the category schema
    Validate(ValidateArgs),
    /// List every palette category and its color
    Categories(CategoriesArgs),
    /// Show or change the configuration file
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            #[cfg(feature = "web")]
            Self::Serve(args) => args.execute(),
            Self::ExportPalette(args) => args.execute(),
            Self::ExportTheme(args) => args.execute(),
            Self::Layers(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Categories(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so exported documents on stdout stay clean
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.code.code());
    }
}
