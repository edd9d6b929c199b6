//! Error handling for the popup formatter.

pub mod util;

use std::io;
use std::path::PathBuf;

use parquet::errors::ParquetError;

use crate::project::LayerKind;

/// Specialized error type for popup formatting
#[derive(Debug, thiserror::Error)]
pub enum PopupError {
    /// Error opening a file, with the offending path attached
    #[error("IO error for {}: {message}", path.display())]
    FileError {
        /// Path of the file
        path: PathBuf,
        /// What went wrong
        message: String,
        /// Underlying IO error, if any
        #[source]
        source: Option<io::Error>,
    },

    /// Error parsing a JSON document (project manifest, dictionary, run config)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error reading Parquet metadata
    #[error("Parquet error: {0}")]
    ParquetError(#[from] ParquetError),

    /// No map with the requested name exists in the project
    #[error("Map not found: '{map}'")]
    MapNotFound {
        /// Requested map name
        map: String,
    },

    /// No layer or table with the requested name exists in the map
    #[error("{kind} '{name}' not found in map '{map}'")]
    LayerNotFound {
        /// Map that was searched
        map: String,
        /// Requested layer or table name
        name: String,
        /// Which list was searched
        kind: LayerKind,
    },

    /// Include mode was requested for a layer the feature dictionary does not know
    #[error("Feature dictionary has no entry for layer '{layer}'")]
    DictionaryEntryNotFound {
        /// Layer name used as the dictionary key
        layer: String,
    },

    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PopupError {
    /// Create a file error without an underlying IO error
    pub fn file_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a file error wrapping an IO error
    pub fn file_error_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Whether this error is one of the locator's not-found signals
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MapNotFound { .. } | Self::LayerNotFound { .. }
        )
    }
}

/// Result type for popup formatter operations
pub type Result<T> = std::result::Result<T, PopupError>;
