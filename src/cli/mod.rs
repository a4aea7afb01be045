//! CLI command handlers for MapThemer.
//!
//! This module provides headless, scriptable access to palette checking and
//! style generation, plus the command that starts the browser editor.

pub mod categories;
pub mod common;
pub mod config;
pub mod export;
pub mod layers;
#[cfg(feature = "web")]
pub mod serve;
pub mod validate;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::{ExportPaletteArgs, ExportThemeArgs};
pub use layers::LayersArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
pub use validate::ValidateArgs;
