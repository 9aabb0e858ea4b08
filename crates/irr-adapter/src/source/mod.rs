//! Input Adapters - Turn files on disk into domain values
//!
//! Readers are configured explicitly from `IrrConfig` and hand back
//! fully built `Vocabulary` / `AnnotationSet` values.

pub mod rater_folder;
pub mod vocabulary;

pub use rater_folder::{RaterFolderReader, RaterRecord, RecordSchema};
pub use vocabulary::{parse_vocabulary, read_vocabulary, vocabulary_tokens};
