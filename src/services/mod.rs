//! Service layer for palette state and file handling.
//!
//! This module contains services that encapsulate the stateful parts of the
//! application and coordinate between the models and the hosts.

pub mod palette_files;
pub mod palette_report;
pub mod palette_store;

// Re-export commonly used types
pub use palette_files::PaletteFileService;
pub use palette_report::PaletteReport;
pub use palette_store::PaletteStore;
