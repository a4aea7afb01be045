//! Building blocks shared by the layer tables: palette lookups, zoom
//! expressions and feature filters.

use std::cell::RefCell;

use serde_json::{json, Value};

use crate::models::{Category, LayerKind, Palette, StyleLayer};

/// Resolves palette colors for one generation run and names layers after
/// the data source.
///
/// Lookups that miss are recorded instead of failing so that generation
/// always yields the full layer list.
pub(crate) struct Painter<'a> {
    source: &'a str,
    palette: &'a Palette,
    missing: RefCell<Vec<Category>>,
}

impl<'a> Painter<'a> {
    pub(crate) const fn new(source: &'a str, palette: &'a Palette) -> Self {
        Self {
            source,
            palette,
            missing: RefCell::new(Vec::new()),
        }
    }

    /// Layer id, prefixed with the source name.
    pub(crate) fn id(&self, name: &str) -> String {
        format!("{}_{name}", self.source)
    }

    /// A layer reading `source_layer` from the vector source.
    pub(crate) fn layer(&self, name: &str, kind: LayerKind, source_layer: &str) -> StyleLayer {
        StyleLayer::new(self.id(name), kind).with_source(self.source, source_layer)
    }

    /// The background layer, which never has a source.
    pub(crate) fn background(&self, name: &str) -> StyleLayer {
        StyleLayer::new(self.id(name), LayerKind::Background)
    }

    /// The color of a category as a paint value.
    pub(crate) fn color(&self, category: Category) -> Option<Value> {
        match self.palette.get(category) {
            Some(color) => Some(Value::String(color.as_str().to_string())),
            None => {
                self.missing.borrow_mut().push(category);
                None
            }
        }
    }

    /// A color that blends from `from` at zoom `low` to `to` at zoom `high`.
    ///
    /// `base` of 1.0 interpolates linearly, larger values exponentially.
    pub(crate) fn color_ramp(
        &self,
        base: f64,
        (low, from): (f64, Category),
        (high, to): (f64, Category),
    ) -> Option<Value> {
        // Look both up so every missing category is recorded
        let from = self.color(from);
        let to = self.color(to);
        let (from, to) = (from?, to?);
        Some(json!([
            "interpolate",
            curve(base),
            ["zoom"],
            number(low),
            from,
            number(high),
            to
        ]))
    }

    /// Categories that were looked up but absent, in lookup order.
    pub(crate) fn into_missing(self) -> Vec<Category> {
        self.missing.into_inner()
    }
}

fn curve(base: f64) -> Value {
    if (base - 1.0).abs() < f64::EPSILON {
        json!(["linear"])
    } else {
        json!(["exponential", number(base)])
    }
}

/// Emits whole numbers as JSON integers so styles read the way they are
/// usually hand-written.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

/// A numeric value interpolated over zoom.
pub(crate) fn zoom_ramp(base: f64, stops: &[(f64, f64)]) -> Value {
    let mut expression = vec![json!("interpolate"), curve(base), json!(["zoom"])];
    for &(zoom, value) in stops {
        expression.push(number(zoom));
        expression.push(number(value));
    }
    Value::Array(expression)
}

/// Line width ramp with the exponential base used for roads.
pub(crate) fn road_width(stops: &[(f64, f64)]) -> Value {
    zoom_ramp(1.6, stops)
}

/// `["in", "pmap:kind", ...]`
pub(crate) fn kind_in(kinds: &[&str]) -> Value {
    let mut filter = vec![json!("in"), json!("pmap:kind")];
    filter.extend(kinds.iter().map(|kind| json!(kind)));
    Value::Array(filter)
}

/// `["==", key, value]`
pub(crate) fn eq(key: &str, value: Value) -> Value {
    json!(["==", key, value])
}

/// `[op, key, value]` for any comparison operator.
pub(crate) fn cmp(op: &str, key: &str, value: Value) -> Value {
    json!([op, key, value])
}

/// `["all", ...]`
pub(crate) fn all(filters: Vec<Value>) -> Value {
    let mut combined = vec![json!("all")];
    combined.extend(filters);
    Value::Array(combined)
}

/// Standard text font stack.
pub(crate) fn font(name: &str) -> Value {
    json!([name])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color;

    #[test]
    fn test_id_is_prefixed_with_source() {
        let palette = Palette::empty();
        let painter = Painter::new("basemap", &palette);
        assert_eq!(painter.id("water"), "basemap_water");
        let layer = painter.layer("water", LayerKind::Fill, "water");
        assert_eq!(layer.source.as_deref(), Some("basemap"));
        assert_eq!(layer.source_layer.as_deref(), Some("water"));
        assert!(painter.background("background").source.is_none());
    }

    #[test]
    fn test_color_records_misses() {
        let palette: Palette = [(Category::Water, Color::from("#80deea"))]
            .into_iter()
            .collect();
        let painter = Painter::new("s", &palette);
        assert_eq!(painter.color(Category::Water), Some(json!("#80deea")));
        assert_eq!(painter.color(Category::Earth), None);
        assert_eq!(painter.into_missing(), vec![Category::Earth]);
    }

    #[test]
    fn test_color_ramp() {
        let palette = Palette::builtin().unwrap();
        let painter = Painter::new("s", &palette);
        let ramp = painter
            .color_ramp(1.0, (0.0, Category::ParkA), (12.0, Category::ParkB))
            .unwrap();
        assert_eq!(
            ramp,
            json!(["interpolate", ["linear"], ["zoom"], 0, "#cfddd5", 12, "#9cd3b4"])
        );
    }

    #[test]
    fn test_color_ramp_records_both_misses() {
        let palette = Palette::empty();
        let painter = Painter::new("s", &palette);
        assert!(painter
            .color_ramp(1.6, (11.0, Category::MinorA), (16.0, Category::MinorB))
            .is_none());
        assert_eq!(
            painter.into_missing(),
            vec![Category::MinorA, Category::MinorB]
        );
    }

    #[test]
    fn test_number_prefers_integers() {
        assert_eq!(number(14.0), json!(14));
        assert_eq!(number(0.5), json!(0.5));
        assert_eq!(number(-1.0), json!(-1));
    }

    #[test]
    fn test_zoom_ramp() {
        assert_eq!(
            road_width(&[(14.0, 0.0), (20.0, 7.0)]),
            json!(["interpolate", ["exponential", 1.6], ["zoom"], 14, 0, 20, 7])
        );
    }

    #[test]
    fn test_filters() {
        assert_eq!(kind_in(&["park", "zoo"]), json!(["in", "pmap:kind", "park", "zoo"]));
        assert_eq!(
            all(vec![eq("pmap:level", json!(0)), cmp("!=", "pmap:link", json!(1))]),
            json!(["all", ["==", "pmap:level", 0], ["!=", "pmap:link", 1]])
        );
    }
}
