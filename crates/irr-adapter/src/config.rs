//! Configuration types for IRR
//!
//! One explicit value describes where the inputs live and what the CSV
//! columns are called. Readers receive it at construction; nothing here
//! is global.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Default config file name written by `irr init`
pub const CONFIG_FILE_NAME: &str = "irr.yaml";

fn default_text_column() -> String {
    "comment_body".to_string()
}

fn default_labels_column() -> String {
    "code".to_string()
}

fn default_label_delimiter() -> String {
    ",".to_string()
}

/// Names of the CSV columns for one rater
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    /// Item identifier column. When absent the text body identifies the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Text body column
    #[serde(default = "default_text_column")]
    pub text: String,

    /// Label ("code") column
    #[serde(default = "default_labels_column")]
    pub labels: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            id: None,
            text: default_text_column(),
            labels: default_labels_column(),
        }
    }
}

/// Where one rater's CSV files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaterSource {
    /// Display name used in reports
    pub name: String,

    /// Directory searched recursively for *.csv
    pub directory: PathBuf,

    #[serde(default)]
    pub columns: ColumnSchema,
}

impl RaterSource {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            columns: ColumnSchema::default(),
        }
    }

    /// Builder: set column names
    pub fn with_columns(mut self, columns: ColumnSchema) -> Self {
        self.columns = columns;
        self
    }
}

/// Top-level configuration (irr.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrConfig {
    /// Label vocabulary file (comma and/or newline separated)
    pub vocabulary: PathBuf,

    pub rater_a: RaterSource,

    pub rater_b: RaterSource,

    /// Separator between labels inside one CSV cell
    #[serde(default = "default_label_delimiter")]
    pub label_delimiter: String,
}

impl IrrConfig {
    /// Conventional layout: `labels.txt`, `rater1/` and `rater2/` under one root
    pub fn default_layout(root: &Path) -> Self {
        Self {
            vocabulary: root.join("labels.txt"),
            rater_a: RaterSource::new("rater1", root.join("rater1")),
            rater_b: RaterSource::new("rater2", root.join("rater2")),
            label_delimiter: default_label_delimiter(),
        }
    }

    /// Load configuration from a YAML file
    ///
    /// Relative paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            crate::AdapterError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config: Self = serde_yaml::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.resolved_against(base))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn resolved_against(mut self, base: &Path) -> Self {
        self.vocabulary = resolve(base, &self.vocabulary);
        self.rater_a.directory = resolve(base, &self.rater_a.directory);
        self.rater_b.directory = resolve(base, &self.rater_b.directory);
        self
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse() {
        let yaml = r#"
vocabulary: labels.txt
raterA:
  name: alice
  directory: rater1
  columns:
    text: Data
    labels: Label
raterB:
  name: bob
  directory: /data/rater2
  columns:
    id: comment_id
labelDelimiter: ";"
"#;

        let config: IrrConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.rater_a.name, "alice");
        assert_eq!(config.rater_a.columns.text, "Data");
        assert_eq!(config.rater_a.columns.labels, "Label");
        assert_eq!(config.rater_a.columns.id, None);
        assert_eq!(config.rater_b.columns.id.as_deref(), Some("comment_id"));
        assert_eq!(config.rater_b.columns.text, "comment_body");
        assert_eq!(config.rater_b.columns.labels, "code");
        assert_eq!(config.label_delimiter, ";");
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "vocabulary: labels.txt\nraterA:\n  name: a\n  directory: rater1\nraterB:\n  name: b\n  directory: /abs/rater2\n",
        )
        .unwrap();

        let config = IrrConfig::from_file(&path).unwrap();
        assert_eq!(config.vocabulary, dir.path().join("labels.txt"));
        assert_eq!(config.rater_a.directory, dir.path().join("rater1"));
        assert_eq!(config.rater_b.directory, PathBuf::from("/abs/rater2"));
        assert_eq!(config.label_delimiter, ",");
    }

    #[test]
    fn test_default_layout_roundtrips_through_yaml() {
        let config = IrrConfig::default_layout(Path::new("/data/irr_first_pass"));
        assert_eq!(config.rater_a.directory, PathBuf::from("/data/irr_first_pass/rater1"));

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("raterA:"));
        let parsed: IrrConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file() {
        let err = IrrConfig::from_file(Path::new("/nonexistent/irr.yaml")).unwrap_err();
        assert!(matches!(err, crate::AdapterError::Read { .. }));
    }
}
