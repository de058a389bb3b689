use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error types for configuration and plugin registry loading.
///
/// Rendering itself never fails; these errors cover everything that
/// happens before the document pass starts.
#[derive(Error, Debug)]
pub enum PluginDocError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Plugin manifest could not be decoded
    #[error("invalid plugin manifest '{path}': {details}")]
    ManifestError {
        /// Path of the manifest
        path: PathBuf,
        /// Decoding error details
        details: String,
    },
}

/// A specialized `Result` type for plugindoc operations.
pub type Result<T> = std::result::Result<T, PluginDocError>;

impl PluginDocError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        PluginDocError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a manifest decoding error with file path context.
    pub fn manifest(error: impl std::fmt::Display, path: &Path) -> Self {
        let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        PluginDocError::ManifestError {
            path: clean_path,
            details: error.to_string(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        PluginDocError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
