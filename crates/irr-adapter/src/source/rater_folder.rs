//! RaterFolderReader - Load one rater's annotations from a folder of CSV files
//!
//! Every `*.csv` under the rater directory (recursively, sorted by path)
//! is read. Column names are looked up once per file, against the
//! header row, into a `RecordSchema`; rows are then read by position
//! into a fixed `RaterRecord`.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use irr_domain::{AnnotationSet, ItemId, Label};
use regex::Regex;
use tracing::{debug, info, warn};

use crate::config::{ColumnSchema, RaterSource};
use crate::{AdapterError, Result};

/// One row of rater input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaterRecord {
    pub item: ItemId,
    /// Text body; informational only
    pub text: String,
    pub labels: Vec<Label>,
}

/// Column positions resolved from a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    id: Option<usize>,
    text: usize,
    labels: usize,
}

impl RecordSchema {
    /// Validate a header row against the configured column names
    pub fn resolve(headers: &StringRecord, columns: &ColumnSchema, path: &Path) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AdapterError::MissingColumn {
                    column: name.to_string(),
                    path: path.to_path_buf(),
                    available: headers.iter().map(|h| h.to_string()).collect(),
                })
        };

        Ok(Self {
            id: columns.id.as_deref().map(find).transpose()?,
            text: find(&columns.text)?,
            labels: find(&columns.labels)?,
        })
    }
}

/// Reader for one rater's CSV folder
#[derive(Debug, Clone)]
pub struct RaterFolderReader {
    source: RaterSource,
    delimiter: Regex,
}

impl RaterFolderReader {
    /// Create a reader; `label_delimiter` separates labels inside a cell
    pub fn new(source: RaterSource, label_delimiter: &str) -> Result<Self> {
        let delimiter = Regex::new(&format!(r"\s*{}\s*", regex::escape(label_delimiter)))?;
        Ok(Self { source, delimiter })
    }

    pub fn source(&self) -> &RaterSource {
        &self.source
    }

    /// All CSV files under the rater directory, sorted
    pub fn csv_files(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.source.directory;
        if !dir.is_dir() {
            return Err(AdapterError::MissingDirectory(dir.clone()));
        }

        let pattern = format!(
            "{}/**/*.csv",
            glob::Pattern::escape(&dir.to_string_lossy())
        );

        let mut files = glob::glob(&pattern)?.collect::<std::result::Result<Vec<_>, _>>()?;
        files.sort();

        if files.is_empty() {
            return Err(AdapterError::NoCsvFiles(dir.clone()));
        }
        Ok(files)
    }

    /// Split a label cell into normalized labels
    pub fn split_labels(&self, cell: &str) -> Vec<Label> {
        self.delimiter.split(cell).filter_map(Label::new).collect()
    }

    /// Read every record from one CSV file
    pub fn read_file(&self, path: &Path) -> Result<Vec<RaterRecord>> {
        let csv_error = |source| AdapterError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(csv_error)?;

        let headers = reader.headers().map_err(csv_error)?.clone();
        let schema = RecordSchema::resolve(&headers, &self.source.columns, path)?;

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let row_data = result.map_err(csv_error)?;
            let field = |idx: usize| row_data.get(idx).unwrap_or("");

            let text = field(schema.text).to_string();
            let key = match schema.id {
                Some(idx) => field(idx).trim().to_string(),
                None => text.clone(),
            };

            if key.trim().is_empty() {
                warn!(path = %path.display(), row = row + 2, "skipping row without an item identifier");
                continue;
            }

            records.push(RaterRecord {
                item: ItemId::new(key),
                text,
                labels: self.split_labels(field(schema.labels)),
            });
        }

        if records.is_empty() {
            warn!(path = %path.display(), "CSV file has no records");
        }
        debug!(path = %path.display(), records = records.len(), "read rater file");
        Ok(records)
    }

    /// Read every record from every CSV file of this rater
    pub fn read_records(&self) -> Result<Vec<RaterRecord>> {
        let mut records = Vec::new();
        for path in self.csv_files()? {
            records.extend(self.read_file(&path)?);
        }
        Ok(records)
    }

    /// Build the rater's AnnotationSet
    pub fn load(&self) -> Result<AnnotationSet> {
        let records = self.read_records()?;
        let set = AnnotationSet::build(records.into_iter().map(|r| (r.item, r.labels)))?;

        info!(
            rater = %self.source.name,
            directory = %self.source.directory.display(),
            items = set.len(),
            "loaded rater annotations"
        );
        Ok(set)
    }
}
