//! Palette health report.
//!
//! Summarizes how a palette deviates from the category schema and which
//! categories the generated style would have to do without.

use serde::Serialize;

use crate::layers;
use crate::models::Palette;

/// Validation outcome of one palette.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteReport {
    /// True if no errors were found
    pub valid: bool,
    /// Categories the palette has no color for
    pub missing: Vec<String>,
    /// Keys that are not categories
    pub unknown: Vec<String>,
    /// Keys whose value is not a hex color
    pub invalid_colors: Vec<String>,
    /// Categories whose layers would lose a paint property
    pub degraded: Vec<String>,
}

impl PaletteReport {
    /// Inspects `palette`. Unknown keys only invalidate a strict check.
    #[must_use]
    pub fn build(palette: &Palette, strict: bool) -> Self {
        let missing: Vec<String> = palette
            .missing_categories()
            .iter()
            .map(ToString::to_string)
            .collect();
        let unknown: Vec<String> = palette.extra_keys().map(str::to_string).collect();
        let invalid_colors: Vec<String> = palette
            .iter()
            .filter(|(_, color)| !color.is_valid())
            .map(|(key, _)| key.to_string())
            .collect();
        let degraded = layers::degraded_categories(palette)
            .iter()
            .map(ToString::to_string)
            .collect();

        let valid =
            missing.is_empty() && invalid_colors.is_empty() && (!strict || unknown.is_empty());

        Self {
            valid,
            missing,
            unknown,
            invalid_colors,
            degraded,
        }
    }
}
