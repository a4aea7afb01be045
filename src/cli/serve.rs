//! Serve command: run the browser editor.

use crate::cli::common::{load_config, load_palette, CliError, CliResult};
use crate::web;
use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Start the web editor
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    pub host: Option<String>,

    /// Palette file to start editing (defaults to the configured or built-in palette)
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,
}

impl ServeArgs {
    /// Execute the serve command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config();
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }

        let palette = load_palette(self.palette.as_deref(), &config)?;

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid listen address: {e}")))?;

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

        runtime
            .block_on(web::run_server(config, palette, addr))
            .map_err(|e| CliError::io(format!("Server error: {e:#}")))
    }
}
