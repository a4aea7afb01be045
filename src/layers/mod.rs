//! Style layer generation.
//!
//! Turns a palette into the ordered list of MapLibre layers for one vector
//! source. Output is the geometry layers followed by the label layers; both
//! tables have a fixed order and length, independent of the palette.
//!
//! Generation is pure: the same source name and palette always give the same
//! layers. Layer ids are prefixed with the source name so layers generated
//! for different sources can share one style document.
//!
//! A palette that lacks a category still yields every layer; the paint
//! property that would have used the missing color is left out. Use
//! [`create_layers_checked`] to treat that as an error instead.

mod base;
mod labels;
mod paint;

use std::collections::BTreeSet;

use crate::error::{Result, ThemeError};
use crate::models::{Category, Palette, StyleLayer};
use paint::Painter;

/// Number of geometry layers produced for any palette.
pub const NON_LABEL_LAYER_COUNT: usize = 66;

/// Number of label layers produced for any palette.
pub const LABEL_LAYER_COUNT: usize = 10;

/// Total number of layers produced for any palette.
pub const LAYER_COUNT: usize = NON_LABEL_LAYER_COUNT + LABEL_LAYER_COUNT;

/// Generates all layers for `source`: geometry first, then labels.
///
/// # Examples
///
/// ```
/// use mapthemer::layers::{create_layers, LAYER_COUNT};
/// use mapthemer::models::Palette;
///
/// let layers = create_layers("basemap", &Palette::default());
/// assert_eq!(layers.len(), LAYER_COUNT);
/// assert_eq!(layers[0].id, "basemap_background");
/// ```
#[must_use]
pub fn create_layers(source: &str, palette: &Palette) -> Vec<StyleLayer> {
    generate(source, palette).0
}

/// Generates only the geometry layers (fills, lines, casings).
#[must_use]
pub fn no_labels(source: &str, palette: &Palette) -> Vec<StyleLayer> {
    base::no_labels(&Painter::new(source, palette))
}

/// Generates only the label layers (text, halos, place circles).
#[must_use]
pub fn labels(source: &str, palette: &Palette) -> Vec<StyleLayer> {
    labels::labels(&Painter::new(source, palette))
}

/// Like [`create_layers`], but fails on the first category the palette
/// lacks instead of leaving the paint property out.
pub fn create_layers_checked(source: &str, palette: &Palette) -> Result<Vec<StyleLayer>> {
    let (layers, missing) = generate(source, palette);
    match missing.first() {
        Some(&category) => Err(ThemeError::MissingCategoryColor(category)),
        None => Ok(layers),
    }
}

/// Categories the palette lacks that some layer would have used.
#[must_use]
pub fn degraded_categories(palette: &Palette) -> Vec<Category> {
    let missing: BTreeSet<Category> = generate("", palette).1.into_iter().collect();
    missing.into_iter().collect()
}

/// Every layer, plus the categories looked up but absent, in lookup order.
fn generate(source: &str, palette: &Palette) -> (Vec<StyleLayer>, Vec<Category>) {
    let painter = Painter::new(source, palette);
    let mut layers = base::no_labels(&painter);
    layers.extend(labels::labels(&painter));
    (layers, painter.into_missing())
}

/// Every category some layer reads its color from, in canonical order.
#[must_use]
pub fn referenced_categories() -> Vec<Category> {
    degraded_categories(&Palette::empty())
}
