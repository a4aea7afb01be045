//! Palette and style file I/O.
//!
//! Centralizes reading palette files and writing exports so the command
//! line and the web host handle paths and errors the same way.

use std::fs;
use std::path::Path;

use crate::error::{Result, ThemeError};
use crate::models::Palette;

/// Service for palette and export file operations.
pub struct PaletteFileService;

impl PaletteFileService {
    /// Loads a palette from a JSON file.
    ///
    /// Loading is permissive: partial palettes and unknown keys are accepted.
    /// A file that cannot be read is [`ThemeError::Io`]; text that is not a
    /// palette is [`ThemeError::Parse`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use mapthemer::services::PaletteFileService;
    ///
    /// let palette = PaletteFileService::load(Path::new("palette.json"))?;
    /// # Ok::<(), mapthemer::ThemeError>(())
    /// ```
    pub fn load(path: &Path) -> Result<Palette> {
        let text = fs::read_to_string(path).map_err(|e| ThemeError::io("read", path, e))?;
        Palette::from_json(&text)
    }

    /// Loads the palette at `path`, or the built-in default when no path is
    /// given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Palette> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Palette::default()),
        }
    }

    /// Writes text to `path` atomically.
    ///
    /// The content goes to a sibling temp file first and is then renamed
    /// over the target, so a failed write never leaves a truncated file.
    pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ThemeError::io("create", parent, e))?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, contents).map_err(|e| ThemeError::io("write", &temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| ThemeError::io("replace", path, e))?;

        Ok(())
    }

    /// Saves a palette as pretty-printed JSON.
    pub fn save(palette: &Palette, path: &Path) -> Result<()> {
        Self::write_atomic(path, &palette.to_json())
    }
}
