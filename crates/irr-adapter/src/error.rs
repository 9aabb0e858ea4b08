//! Error types for the adapter layer

use std::path::PathBuf;

use irr_domain::ValidationError;
use thiserror::Error;

/// Everything that can fail while loading inputs or writing reports
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Column '{column}' not found in {}. Available columns: {}", .path.display(), .available.join(", "))]
    MissingColumn {
        column: String,
        path: PathBuf,
        available: Vec<String>,
    },

    #[error("Rater directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("No CSV files found under {}", .0.display())]
    NoCsvFiles(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid label delimiter: {0}")]
    Delimiter(#[from] regex::Error),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to scan directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
