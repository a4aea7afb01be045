//! Application-wide constants.
//!
//! This module defines the application name and the fixed values of the
//! exported files and style documents.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "MapThemer";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "mapthemer";

/// Download name of an exported palette.
pub const PALETTE_FILE_NAME: &str = "palette.json";

/// Download name of an exported style document.
pub const THEME_FILE_NAME: &str = "theme.json";

/// Name of the exported style document.
pub const EXPORT_STYLE_NAME: &str = "CustomTheme";

/// Name of the style document shown in the live preview.
pub const PREVIEW_STYLE_NAME: &str = "Light";

/// Source name the exported style generates layers for.
pub const EXPORT_SOURCE_NAME: &str = "basemap";

/// Source name the live preview generates layers for.
pub const PREVIEW_SOURCE_NAME: &str = "protomaps";

/// Glyph URL template for text layers.
pub const DEFAULT_GLYPHS_URL: &str =
    "https://protomaps.github.io/basemaps-assets/fonts/{fontstack}/{range}.pbf";

/// Vector tile archive the styles point at.
pub const DEFAULT_TILES_URL: &str = "pmtiles://https://build.protomaps.com/20240221.pmtiles";
