// SPDX-License-Identifier: LGPL-3.0-only

//! Theme and settings errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving the decoration theme or its settings.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Invalid color format.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// The `DarkTheme` setting holds a value outside `never`/`when-preferred`/`always`.
    ///
    /// This is a configuration-corruption signal; the decoration factory treats it as fatal.
    #[error("Unknown dark theme preference: {0}")]
    UnknownDarkThemePreference(String),

    /// Failed to read a settings file.
    #[error("Failed to read settings file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    /// Failed to parse a TOML settings file.
    #[error("Failed to parse settings file {0}: {1}")]
    ParseError(PathBuf, String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a parse error for the given file.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ParseError(path.into(), details.into())
    }
}
