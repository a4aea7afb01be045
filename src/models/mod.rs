//! Data models for palettes and map styles.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of the web host and the command line.

pub mod category;
pub mod color;
pub mod palette;
pub mod rgb;
pub mod style;

// Re-export all model types
pub use category::Category;
pub use color::Color;
pub use palette::Palette;
pub use rgb::RgbColor;
pub use style::{LayerKind, SourceDescriptor, SourceKind, StyleDocument, StyleLayer, STYLE_VERSION};
