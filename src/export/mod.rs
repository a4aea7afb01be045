//! Style document assembly and export.
//!
//! Builds complete MapLibre style documents around the generated layers and
//! produces the two downloadable files: `palette.json` and `theme.json`.

use std::collections::BTreeMap;

use crate::config::StyleConfig;
use crate::error::{Result, ThemeError};
use crate::layers;
use crate::models::{Palette, SourceDescriptor, StyleDocument, StyleLayer, STYLE_VERSION};

/// Fixed values wrapped around the layers of one style document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSettings<'a> {
    /// Style name
    pub name: &'a str,
    /// Source the layers are generated for; also the key of the source entry
    pub source: &'a str,
    /// Glyph URL template
    pub glyphs: &'a str,
    /// Vector tile URL of the source entry
    pub tiles_url: &'a str,
}

impl<'a> StyleSettings<'a> {
    /// Settings of the downloadable `theme.json`.
    #[must_use]
    pub fn export(config: &'a StyleConfig) -> Self {
        Self {
            name: &config.export_name,
            source: &config.export_source,
            glyphs: &config.glyphs_url,
            tiles_url: &config.tiles_url,
        }
    }

    /// Settings of the live preview style.
    #[must_use]
    pub fn preview(config: &'a StyleConfig) -> Self {
        Self {
            name: &config.preview_name,
            source: &config.preview_source,
            glyphs: &config.glyphs_url,
            tiles_url: &config.tiles_url,
        }
    }
}

/// Builds a style document holding every layer for `palette`.
///
/// The document has exactly one source, keyed by `settings.source`, which is
/// also the source every generated layer references.
#[must_use]
pub fn build_style(settings: &StyleSettings<'_>, palette: &Palette) -> StyleDocument {
    assemble(settings, layers::create_layers(settings.source, palette))
}

/// Like [`build_style`], but fails if the palette lacks any category.
pub fn build_style_checked(
    settings: &StyleSettings<'_>,
    palette: &Palette,
) -> Result<StyleDocument> {
    let layers = layers::create_layers_checked(settings.source, palette)?;
    Ok(assemble(settings, layers))
}

fn assemble(settings: &StyleSettings<'_>, layers: Vec<StyleLayer>) -> StyleDocument {
    let mut sources = BTreeMap::new();
    sources.insert(
        settings.source.to_string(),
        SourceDescriptor::vector(settings.tiles_url),
    );

    StyleDocument {
        version: STYLE_VERSION,
        name: settings.name.to_string(),
        glyphs: settings.glyphs.to_string(),
        sources,
        layers,
    }
}

/// Builds the style shown by the live preview.
#[must_use]
pub fn preview_style(config: &StyleConfig, palette: &Palette) -> StyleDocument {
    build_style(&StyleSettings::preview(config), palette)
}

/// Builds the style written to `theme.json`.
#[must_use]
pub fn export_theme(config: &StyleConfig, palette: &Palette) -> StyleDocument {
    build_style(&StyleSettings::export(config), palette)
}

/// Serializes a style document as two-space indented JSON.
pub fn theme_to_json(document: &StyleDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(ThemeError::Serialize)
}

/// Serializes a palette as `palette.json`.
#[must_use]
pub fn export_palette(palette: &Palette) -> String {
    palette.to_json()
}

/// Parses the contents of a palette file.
///
/// With `strict` the palette must hold exactly the known categories, each
/// with a valid hex color.
pub fn import_palette(text: &str, strict: bool) -> Result<Palette> {
    let palette = Palette::from_json(text)?;
    if strict {
        palette.validate()?;
    }
    Ok(palette)
}
