//! RGB color handling with hex parsing and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ThemeError};

/// RGB color value parsed from a CSS hex string.
///
/// Palettes keep their colors as text; `RgbColor` is only used to check that
/// the text is a usable hex color and to normalize it for color pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports `#rrggbb` and the CSS shorthand `#rgb`. The leading `#` is
    /// required and digits are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapthemer::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#80deea").unwrap(), RgbColor::new(128, 222, 234));
    /// assert_eq!(RgbColor::from_hex("#fff").unwrap(), RgbColor::new(255, 255, 255));
    /// assert!(RgbColor::from_hex("80deea").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ThemeError::validation(format!("color '{hex}' must start with '#'")))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::validation(format!(
                "color '{hex}' contains non-hex digits"
            )));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or_default();
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(&digits[i..=i]) * 17;
                Ok(Self::new(expand(0), expand(1), expand(2)))
            }
            _ => Err(ThemeError::validation(format!(
                "color '{hex}' must have 3 or 6 hex digits"
            ))),
        }
    }

    /// Formats the color as lowercase `#rrggbb`, the form HTML color inputs
    /// accept.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(
            RgbColor::from_hex("#80deea").unwrap(),
            RgbColor::new(128, 222, 234)
        );
        assert_eq!(
            RgbColor::from_hex("#A7B1B3").unwrap(),
            RgbColor::new(167, 177, 179)
        );
        assert_eq!(RgbColor::from_hex("#000").unwrap(), RgbColor::new(0, 0, 0));
        assert_eq!(
            RgbColor::from_hex("#f0a").unwrap(),
            RgbColor::new(255, 0, 170)
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("ffffff").is_err()); // missing '#'
        assert!(RgbColor::from_hex("#fffff").is_err()); // 5 digits
        assert!(RgbColor::from_hex("#gggggg").is_err());
        assert!(RgbColor::from_hex("#ffé").is_err());
        assert!(RgbColor::from_hex("red").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(167, 177, 179).to_string(), "#a7b1b3");
    }

    #[test]
    fn test_shorthand_normalizes() {
        let color = RgbColor::from_hex("#ABC").unwrap();
        assert_eq!(color.to_hex(), "#aabbcc");
    }
}
