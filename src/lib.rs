//! MapThemer library
//!
//! Turns a palette of category colors into the layers of a MapLibre style
//! for protomaps vector basemaps, and exports palettes and styles as files.
//! The `web` feature adds the HTTP host behind the browser editor.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod layers;
pub mod models;
pub mod services;
#[cfg(feature = "web")]
pub mod web;

pub use error::{Result, ThemeError};
