//! The palette: one color per map-feature category.
//!
//! A palette file is a flat JSON object mapping category wire names to color
//! strings. Loading is permissive: keys outside the schema are carried along
//! in an `extra` table and missing categories are simply absent, so a file
//! round-trips exactly. [`Palette::validate`] reports both problems for
//! callers that want to be strict.

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Category, Color};
use crate::error::{Result, ThemeError};

/// Built-in light theme, in canonical category order.
const DEFAULT_PALETTE_JSON: &str = include_str!("../data/default_palette.json");

/// Mapping from category to color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<Category, Color>,
    extra: BTreeMap<String, Color>,
}

impl Palette {
    /// Creates a palette with no colors at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Loads the built-in default palette.
    ///
    /// # Errors
    /// Returns an error if the embedded JSON cannot be parsed.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_PALETTE_JSON)
    }

    /// Parses a palette document.
    ///
    /// The document must be a JSON object whose values are all strings.
    /// Nothing else is checked.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(ThemeError::Parse)
    }

    /// Serializes the palette as pretty-printed JSON with two-space
    /// indentation, schema keys first in canonical order.
    #[must_use]
    pub fn to_json(&self) -> String {
        let map: Map<String, Value> = self
            .iter()
            .map(|(key, color)| (key.to_string(), Value::String(color.as_str().to_string())))
            .collect();
        format!("{:#}", Value::Object(map))
    }

    /// Returns the color assigned to a category.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&Color> {
        self.colors.get(&category)
    }

    /// Returns the color stored under a raw key, schema or not.
    #[must_use]
    pub fn get_by_name(&self, key: &str) -> Option<&Color> {
        match Category::from_name(key) {
            Some(category) => self.get(category),
            None => self.extra.get(key),
        }
    }

    /// Assigns a color to a category, returning the previous one.
    pub fn set(&mut self, category: Category, color: impl Into<Color>) -> Option<Color> {
        self.colors.insert(category, color.into())
    }

    /// Stores a color under a raw key. Schema keys go to their category,
    /// anything else is kept as an out-of-schema entry.
    pub fn insert_raw(&mut self, key: impl Into<String>, color: impl Into<Color>) {
        let key = key.into();
        match Category::from_name(&key) {
            Some(category) => {
                self.colors.insert(category, color.into());
            }
            None => {
                self.extra.insert(key, color.into());
            }
        }
    }

    /// Removes a category's color.
    pub fn remove(&mut self, category: Category) -> Option<Color> {
        self.colors.remove(&category)
    }

    /// Total number of entries, including out-of-schema keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len() + self.extra.len()
    }

    /// Returns true if the palette has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.extra.is_empty()
    }

    /// Iterates over every entry as `(key, color)`: schema categories in
    /// canonical order, then out-of-schema keys alphabetically.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.colors
            .iter()
            .map(|(category, color)| (category.as_str(), color))
            .chain(self.extra.iter().map(|(key, color)| (key.as_str(), color)))
    }

    /// Keys that are not part of the category schema.
    pub fn extra_keys(&self) -> impl Iterator<Item = &str> {
        self.extra.keys().map(String::as_str)
    }

    /// Schema categories that have no color, in canonical order.
    #[must_use]
    pub fn missing_categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|category| !self.colors.contains_key(category))
            .collect()
    }

    /// Returns true if every schema category has a color.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.colors.len() == Category::COUNT
    }

    /// Checks the palette against the schema.
    ///
    /// Reports every missing category, every out-of-schema key and every
    /// color that is not a hex RGB value.
    pub fn validate(&self) -> Result<()> {
        let mut problems: Vec<String> = self
            .missing_categories()
            .into_iter()
            .map(|category| format!("missing category '{category}'"))
            .collect();

        problems.extend(self.extra_keys().map(|key| format!("unknown category '{key}'")));

        for (key, color) in self.iter() {
            if !color.is_valid() {
                problems.push(format!("invalid color '{color}' for '{key}'"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ThemeError::Validation(problems))
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin().unwrap_or_else(|_| Self::empty())
    }
}

impl FromIterator<(String, Color)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, Color)>>(iter: I) -> Self {
        let mut palette = Self::empty();
        for (key, color) in iter {
            palette.insert_raw(key, color);
        }
        palette
    }
}

impl FromIterator<(Category, Color)> for Palette {
    fn from_iter<I: IntoIterator<Item = (Category, Color)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
            extra: BTreeMap::new(),
        }
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, color) in self.iter() {
            map.serialize_entry(key, color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, Color>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_complete() {
        let palette = Palette::builtin().expect("built-in palette should parse");
        assert!(palette.is_complete());
        assert_eq!(palette.len(), Category::COUNT);
        assert!(palette.validate().is_ok());
    }

    #[test]
    fn test_builtin_colors() {
        let palette = Palette::default();
        assert_eq!(palette.get(Category::Water).unwrap().as_str(), "#80deea");
        assert_eq!(palette.get(Category::Highway).unwrap().as_str(), "#ffffff");
        assert_eq!(
            palette.get(Category::CountryLabel).unwrap().as_str(),
            "#a3a3a3"
        );
    }

    #[test]
    fn test_builtin_json_matches_canonical_order() {
        // Exporting the default must reproduce the embedded file byte for byte
        let palette = Palette::builtin().unwrap();
        assert_eq!(palette.to_json(), DEFAULT_PALETTE_JSON.trim_end());
    }

    #[test]
    fn test_from_json_accepts_partial_and_unknown() {
        let palette = Palette::from_json(r##"{"water": "#123456", "lava": "#ff0000"}"##).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(Category::Water).unwrap().as_str(), "#123456");
        assert_eq!(palette.get_by_name("lava").unwrap().as_str(), "#ff0000");
        assert_eq!(palette.extra_keys().collect::<Vec<_>>(), vec!["lava"]);
        assert_eq!(palette.missing_categories().len(), Category::COUNT - 1);
    }

    #[test]
    fn test_from_json_rejects_non_documents() {
        assert!(matches!(
            Palette::from_json("not json"),
            Err(ThemeError::Parse(_))
        ));
        assert!(matches!(
            Palette::from_json(r#"["water"]"#),
            Err(ThemeError::Parse(_))
        ));
        assert!(matches!(
            Palette::from_json(r#"{"water": 12}"#),
            Err(ThemeError::Parse(_))
        ));
        assert!(matches!(
            Palette::from_json(r#"{"water": {"r": 1}}"#),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_round_trip_keeps_extra_keys() {
        let mut palette = Palette::builtin().unwrap();
        palette.insert_raw("lava", "#FF0000");
        palette.set(Category::Water, "#ABCDEF");

        let reparsed = Palette::from_json(&palette.to_json()).unwrap();
        assert_eq!(reparsed, palette);
    }

    #[test]
    fn test_serde_matches_to_json() {
        let palette = Palette::builtin().unwrap();
        let via_serde = serde_json::to_string_pretty(&palette).unwrap();
        assert_eq!(via_serde, palette.to_json());
    }

    #[test]
    fn test_validate_lists_every_problem() {
        let mut palette = Palette::builtin().unwrap();
        palette.remove(Category::Water);
        palette.insert_raw("lava", "#ff0000");
        palette.set(Category::Earth, "brown");

        let Err(ThemeError::Validation(problems)) = palette.validate() else {
            panic!("expected validation error");
        };
        assert_eq!(problems.len(), 3);
        assert!(problems.contains(&"missing category 'water'".to_string()));
        assert!(problems.contains(&"unknown category 'lava'".to_string()));
        assert!(problems.contains(&"invalid color 'brown' for 'earth'".to_string()));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut palette = Palette::empty();
        assert!(palette.set(Category::Water, "#000000").is_none());
        let previous = palette.set(Category::Water, "#111111");
        assert_eq!(previous, Some(Color::from("#000000")));
    }
}
