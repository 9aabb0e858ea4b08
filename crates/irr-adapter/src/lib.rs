//! # IRR Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `config` - `irr.yaml`: where the vocabulary and rater folders live
//! - `source/` - Inbound adapters (vocabulary file, CSV rater folders)
//! - `report` - Outbound adapter (JSON / text report)

pub mod config;
pub mod error;
pub mod report;
pub mod source;

pub use config::{ColumnSchema, IrrConfig, RaterSource, CONFIG_FILE_NAME};
pub use error::{AdapterError, Result};
pub use report::{AgreementReport, LabelReport};
pub use source::{read_vocabulary, RaterFolderReader, RaterRecord};
