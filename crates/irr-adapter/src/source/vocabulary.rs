//! Vocabulary file reader
//!
//! The file lists labels separated by commas, newlines, or both.
//! A leading UTF-8 byte-order mark is dropped, as the `csv` crate does
//! for rater files. Blank entries (trailing commas, empty lines) are
//! ignored; everything else goes to `Vocabulary::load`, which applies
//! the normalization and duplicate rules.

use std::path::Path;

use irr_domain::{ValidationError, Vocabulary};
use tracing::debug;

use crate::{AdapterError, Result};

/// Split file content into raw label tokens
pub fn vocabulary_tokens(content: &str) -> Vec<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    content
        .split(|c: char| c == ',' || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse vocabulary file content
pub fn parse_vocabulary(content: &str) -> std::result::Result<Vocabulary, ValidationError> {
    Vocabulary::load(vocabulary_tokens(content))
}

/// Read and parse a vocabulary file
pub fn read_vocabulary(path: &Path) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(path).map_err(|source| AdapterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let vocabulary = parse_vocabulary(&content)?;
    debug!(path = %path.display(), labels = vocabulary.len(), "loaded vocabulary");
    Ok(vocabulary)
}
