//! MapLibre style document and style layer types.
//!
//! Only the parts of the MapLibre style specification this tool emits are
//! modelled. Filters, layout properties and paint properties are free-form
//! JSON because their values are expressions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Style specification version emitted in every document.
pub const STYLE_VERSION: u8 = 8;

/// Rendering kind of a style layer (the `type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Solid color behind everything else
    Background,
    /// Filled polygons
    Fill,
    /// Stroked lines
    Line,
    /// Text and icons
    Symbol,
    /// Circles at point features
    Circle,
}

impl LayerKind {
    /// Returns true for kinds that annotate the map rather than draw geometry.
    #[must_use]
    pub const fn is_label(self) -> bool {
        matches!(self, Self::Symbol | Self::Circle)
    }
}

/// One rendering instruction of a style document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleLayer {
    /// Unique layer identifier
    pub id: String,
    /// Rendering kind
    #[serde(rename = "type")]
    pub kind: LayerKind,
    /// Name of the data source; absent for background layers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Layer inside the vector tiles
    #[serde(
        rename = "source-layer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_layer: Option<String>,
    /// Minimum zoom at which the layer is drawn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<u8>,
    /// Zoom at which the layer stops being drawn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<u8>,
    /// Feature filter expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Layout properties
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub layout: Map<String, Value>,
    /// Paint properties
    #[serde(default)]
    pub paint: Map<String, Value>,
}

impl StyleLayer {
    /// Creates a layer with no source, filter, layout or paint.
    pub fn new(id: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            kind,
            source: None,
            source_layer: None,
            minzoom: None,
            maxzoom: None,
            filter: None,
            layout: Map::new(),
            paint: Map::new(),
        }
    }

    /// Reads features from `source_layer` of the vector source `source`.
    pub fn with_source(mut self, source: &str, source_layer: &str) -> Self {
        self.source = Some(source.to_string());
        self.source_layer = Some(source_layer.to_string());
        self
    }

    /// Sets the minimum zoom.
    pub fn minzoom(mut self, zoom: u8) -> Self {
        self.minzoom = Some(zoom);
        self
    }

    /// Sets the maximum zoom.
    pub fn maxzoom(mut self, zoom: u8) -> Self {
        self.maxzoom = Some(zoom);
        self
    }

    /// Sets the feature filter.
    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Adds a layout property.
    pub fn layout(mut self, key: &str, value: Value) -> Self {
        self.layout.insert(key.to_string(), value);
        self
    }

    /// Adds a paint property.
    pub fn paint(mut self, key: &str, value: Value) -> Self {
        self.paint.insert(key.to_string(), value);
        self
    }

    /// Adds a paint property if there is a value for it.
    pub fn paint_opt(self, key: &str, value: Option<Value>) -> Self {
        match value {
            Some(value) => self.paint(key, value),
            None => self,
        }
    }

    /// Returns a paint property.
    #[must_use]
    pub fn paint_value(&self, key: &str) -> Option<&Value> {
        self.paint.get(key)
    }

    /// Returns a paint property that holds a plain color string.
    #[must_use]
    pub fn paint_color(&self, key: &str) -> Option<&str> {
        self.paint.get(key).and_then(Value::as_str)
    }
}

/// Kind of a data source. Only vector tiles are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Mapbox vector tiles
    Vector,
}

/// A named data source of a style document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Source kind
    #[serde(rename = "type")]
    pub kind: SourceKind,
    /// TileJSON or `pmtiles://` URL
    pub url: String,
}

impl SourceDescriptor {
    /// Creates a vector source pointing at `url`.
    pub fn vector(url: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::Vector,
            url: url.into(),
        }
    }
}

/// A complete map style: metadata, sources and ordered layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    /// Style specification version (always 8)
    pub version: u8,
    /// Display name of the style
    pub name: String,
    /// Glyph URL template with `{fontstack}` and `{range}` placeholders
    pub glyphs: String,
    /// Data sources by name
    pub sources: BTreeMap<String, SourceDescriptor>,
    /// Layers in draw order
    pub layers: Vec<StyleLayer>,
}

impl StyleDocument {
    /// Finds a layer by id.
    #[must_use]
    pub fn layer(&self, id: &str) -> Option<&StyleLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }
}
