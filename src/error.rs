//! Error types for palette handling and style generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Category;

/// Errors raised by the palette store, the layer generator and the
/// import/export helpers.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Palette text is not a JSON object whose values are all strings.
    #[error("failed to parse palette: {0}")]
    Parse(#[from] serde_json::Error),

    /// A palette or field edit does not fit the category schema.
    #[error("palette validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A style document could not be written as JSON.
    #[error("failed to serialize style: {0}")]
    Serialize(serde_json::Error),

    /// A generated layer needs a category the palette does not define.
    #[error("palette has no color for category '{0}'")]
    MissingCategoryColor(Category),

    /// Reading or writing a palette or style file failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// What was attempted: "read", "write", "create" or "replace"
        action: &'static str,
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    /// Creates a validation error with a single problem.
    pub fn validation(problem: impl Into<String>) -> Self {
        Self::Validation(vec![problem.into()])
    }

    /// Creates an I/O error for `path`; `action` reads as "failed to {action}".
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error was caused by bad user input rather than
    /// the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Serialize(_))
    }
}

/// Result alias for palette and style operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_problems() {
        let err = ThemeError::Validation(vec![
            "missing category 'water'".to_string(),
            "unknown key 'lava'".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "palette validation failed: missing category 'water'; unknown key 'lava'"
        );
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ThemeError::from(serde_err);
        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_missing_category_message() {
        let err = ThemeError::MissingCategoryColor(Category::Water);
        assert_eq!(err.to_string(), "palette has no color for category 'water'");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ThemeError::io("read", "palette.json", std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "failed to read palette.json: disk full");
        assert!(!err.is_user_error());
    }
}
