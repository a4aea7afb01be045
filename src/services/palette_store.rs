//! The palette store: owner of the palette being edited.
//!
//! Every mutation bumps a revision counter. Hosts compare revisions to know
//! when the style has to be regenerated; the store itself never calls out.

use crate::error::Result;
use crate::models::{Category, Color, Palette};

/// Holds the current palette and mediates all reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteStore {
    palette: Palette,
    revision: u64,
}

impl PaletteStore {
    /// Creates a store holding `palette`.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            revision: 0,
        }
    }

    /// Returns the current palette.
    #[must_use]
    pub const fn get(&self) -> &Palette {
        &self.palette
    }

    /// Number of mutations since the store was created.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the color of exactly one category.
    pub fn set_field(&mut self, category: Category, color: impl Into<Color>) {
        self.palette.set(category, color);
        self.bump();
    }

    /// Replaces the color of the category with the given wire name.
    ///
    /// # Errors
    /// Returns a validation error, and leaves the store unchanged, if `name`
    /// is not a category.
    pub fn set_field_by_name(&mut self, name: &str, color: impl Into<Color>) -> Result<Category> {
        let category: Category = name.parse()?;
        self.set_field(category, color);
        Ok(category)
    }

    /// Substitutes the whole palette without any validation.
    pub fn replace(&mut self, palette: Palette) {
        self.palette = palette;
        self.bump();
    }

    /// Substitutes the whole palette after checking it against the schema.
    ///
    /// # Errors
    /// Returns a validation error listing every problem; the store is left
    /// unchanged.
    pub fn replace_strict(&mut self, palette: Palette) -> Result<()> {
        palette.validate()?;
        self.replace(palette);
        Ok(())
    }

    /// Parses a palette document and substitutes it.
    ///
    /// The text is parsed completely before the store is touched, so a parse
    /// error leaves the previous palette in place.
    pub fn import(&mut self, text: &str) -> Result<()> {
        let palette = Palette::from_json(text)?;
        self.replace(palette);
        Ok(())
    }

    /// Like [`import`](Self::import), but also validates the parsed palette.
    pub fn import_strict(&mut self, text: &str) -> Result<()> {
        let palette = Palette::from_json(text)?;
        self.replace_strict(palette)
    }

    /// Restores the built-in default palette.
    pub fn reset(&mut self) {
        self.replace(Palette::default());
    }

    /// Serializes the current palette to its file form.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.palette.to_json()
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
