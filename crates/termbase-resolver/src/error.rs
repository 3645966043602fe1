//! Error types for resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading inputs or writing results
///
/// Collisions and unmapped categories are not errors; they are reported.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// The category map could not be opened or parsed
    #[error("Failed to read category map {}: {source}", .path.display())]
    CategoryMap {
        /// Path that was read
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
