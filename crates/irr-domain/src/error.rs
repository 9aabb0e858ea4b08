//! Validation errors - Everything that can be wrong with the input
//!
//! All of these are detected before any agreement math runs.
//! A failed validation never produces a partial result.

use crate::model::annotation::Rater;
use crate::model::item::ItemId;
use crate::model::label::Label;

/// Errors raised while validating vocabularies and annotation sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Vocabulary is empty, has a blank entry, or has duplicates after normalization
    InvalidVocabulary { reason: String },
    /// The same item appears twice in one rater's input
    DuplicateItem { item: ItemId },
    /// The raters annotated different item universes
    ItemSetMismatch {
        only_in_a: Vec<ItemId>,
        only_in_b: Vec<ItemId>,
    },
    /// A rater used a label that is not part of the vocabulary
    UnknownLabel {
        rater: Rater,
        item: ItemId,
        label: Label,
    },
    /// Both raters annotated zero items
    NoItems,
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::InvalidVocabulary { reason } => {
                write!(f, "Invalid vocabulary: {}", reason)
            }
            ValidationError::DuplicateItem { item } => {
                write!(f, "Duplicate item '{}' in annotation input", item)
            }
            ValidationError::ItemSetMismatch {
                only_in_a,
                only_in_b,
            } => {
                write!(
                    f,
                    "Raters annotated different items: {} only in rater A [{}], {} only in rater B [{}]",
                    only_in_a.len(),
                    join_ids(only_in_a),
                    only_in_b.len(),
                    join_ids(only_in_b)
                )
            }
            ValidationError::UnknownLabel { rater, item, label } => {
                write!(
                    f,
                    "Rater {} used unknown label '{}' on item '{}'",
                    rater, label, item
                )
            }
            ValidationError::NoItems => write!(f, "No items to compare"),
        }
    }
}

impl std::error::Error for ValidationError {}

fn join_ids(ids: &[ItemId]) -> String {
    ids.iter()
        .map(|id| format!("'{}'", id))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_lists_both_sides() {
        let err = ValidationError::ItemSetMismatch {
            only_in_a: vec![ItemId::new("q3")],
            only_in_b: vec![],
        };
        let msg = err.to_string();
        assert!(msg.contains("1 only in rater A ['q3']"));
        assert!(msg.contains("0 only in rater B []"));
    }

    #[test]
    fn test_unknown_label_message() {
        let err = ValidationError::UnknownLabel {
            rater: Rater::A,
            item: ItemId::new("item1"),
            label: Label::new("z").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Rater A used unknown label 'z' on item 'item1'"
        );
    }
}
