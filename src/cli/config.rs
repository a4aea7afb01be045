//! Configuration management commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Show or change the configuration file
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Display the current configuration
    Show(ConfigShowArgs),
    /// Change configuration values and save them
    Set(ConfigSetArgs),
    /// Print the path of the configuration file
    Path,
}

/// Display the current configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change configuration values and save them
#[derive(Debug, Clone, Args)]
pub struct ConfigSetArgs {
    /// Host the editor binds to
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Port the editor listens on
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Palette file loaded at startup
    #[arg(long, value_name = "FILE", conflicts_with = "clear_palette")]
    palette: Option<PathBuf>,

    /// Go back to the built-in palette at startup
    #[arg(long)]
    clear_palette: bool,

    /// Reject imported palettes that do not match the category schema
    #[arg(long, value_name = "BOOL")]
    strict_import: Option<bool>,

    /// Vector tile URL of generated styles
    #[arg(long, value_name = "URL")]
    tiles_url: Option<String>,

    /// Glyph URL template of generated styles
    #[arg(long, value_name = "URL")]
    glyphs_url: Option<String>,

    /// Name of the exported style
    #[arg(long, value_name = "NAME")]
    export_name: Option<String>,

    /// Source name of the exported style
    #[arg(long, value_name = "NAME")]
    export_source: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                println!("{}", config_path()?.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            return print_json(&config);
        }

        if !Config::exists() {
            println!("# No config file yet; showing defaults");
        }
        let text = toml::to_string_pretty(&config)
            .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
        print!("{text}");
        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.port.is_none()
            && self.palette.is_none()
            && !self.clear_palette
            && self.strict_import.is_none()
            && self.tiles_url.is_none()
            && self.glyphs_url.is_none()
            && self.export_name.is_none()
            && self.export_source.is_none()
    }

    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(palette) = &self.palette {
            config.palette.file = Some(palette.clone());
        }
        if self.clear_palette {
            config.palette.file = None;
        }
        if let Some(strict) = self.strict_import {
            config.palette.strict_import = strict;
        }
        if let Some(url) = &self.tiles_url {
            config.style.tiles_url.clone_from(url);
        }
        if let Some(url) = &self.glyphs_url {
            config.style.glyphs_url.clone_from(url);
        }
        if let Some(name) = &self.export_name {
            config.style.export_name.clone_from(name);
        }
        if let Some(source) = &self.export_source {
            config.style.export_source.clone_from(source);
        }
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified",
            ));
        }

        let mut config = load_config();
        self.apply(&mut config);
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        eprintln!("✓ Wrote {}", config_path()?.display());
        Ok(())
    }
}

fn config_path() -> CliResult<PathBuf> {
    Config::config_file_path().map_err(|e| CliError::io(format!("{e:#}")))
}
