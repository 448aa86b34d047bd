//! Error types for loading catalogs and configuration.
//!
//! Ranking itself can't fail; everything here is about getting data in.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog snapshot
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file couldn't be read
    #[error("Failed to read catalog file: {path}\n{source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON didn't parse as products
    #[error("Failed to parse catalog JSON{location}: {source}")]
    JsonError {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two products share an id
    #[error("Duplicate product id '{id}' in catalog")]
    DuplicateId { id: String },
}

impl CatalogError {
    pub(crate) fn json(source: serde_json::Error, path: Option<&std::path::Path>) -> Self {
        Self::JsonError {
            location: path
                .map(|p| format!(" in {}", p.display()))
                .unwrap_or_default(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("Failed to read configuration file: {path}\n{source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("Failed to parse JSON configuration in {path}: {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Value out of valid range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Rule weight above the allowed maximum
    #[error("{field} must be at most {max}, got {value}")]
    WeightTooLarge { field: String, value: u32, max: u32 },

    /// Invalid integer value
    #[error("{field} must be > {min}, got {value}")]
    InvalidInteger {
        field: String,
        value: usize,
        min: usize,
    },
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
