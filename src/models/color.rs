//! Palette color values.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;
use crate::error::Result;

/// A color as written in a palette file.
///
/// The text is kept verbatim so that palettes round-trip exactly through
/// export and import, whatever case or shorthand the author used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wraps a color string without checking it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the color text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the color text as a hex RGB value.
    pub fn to_rgb(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.0)
    }

    /// Returns true if the text parses as a hex RGB value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_rgb().is_ok()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<RgbColor> for Color {
    fn from(value: RgbColor) -> Self {
        Self(value.to_hex())
    }
}
