//! Alignment - Pair two raters item by item
//!
//! Checks, in this order:
//! 1. Both raters annotated the same items (reports the symmetric difference)
//! 2. There is at least one item
//! 3. Every label either rater used is in the vocabulary
//!
//! Output is sorted by ItemId so repeated runs produce the same order.

use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::model::annotation::{AnnotationSet, Rater};
use crate::model::item::ItemId;
use crate::model::label::{Label, Vocabulary};

/// One item with both raters' labels side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedItem {
    pub item: ItemId,
    pub labels_a: BTreeSet<Label>,
    pub labels_b: BTreeSet<Label>,
}

/// Align two annotation sets against a vocabulary
pub fn align(
    a: &AnnotationSet,
    b: &AnnotationSet,
    vocabulary: &Vocabulary,
) -> Result<Vec<AlignedItem>, ValidationError> {
    let items_a = a.items();
    let items_b = b.items();

    if items_a != items_b {
        return Err(ValidationError::ItemSetMismatch {
            only_in_a: items_a.difference(&items_b).map(|&id| id.clone()).collect(),
            only_in_b: items_b.difference(&items_a).map(|&id| id.clone()).collect(),
        });
    }

    if items_a.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let mut aligned = Vec::with_capacity(items_a.len());

    for (item, labels_a) in a.iter() {
        // Item sets are equal, so B always has this item
        let labels_b = match b.labels_for(item) {
            Some(labels) => labels,
            None => {
                return Err(ValidationError::ItemSetMismatch {
                    only_in_a: vec![item.clone()],
                    only_in_b: Vec::new(),
                })
            }
        };

        check_labels(Rater::A, item, labels_a, vocabulary)?;
        check_labels(Rater::B, item, labels_b, vocabulary)?;

        aligned.push(AlignedItem {
            item: item.clone(),
            labels_a: labels_a.clone(),
            labels_b: labels_b.clone(),
        });
    }

    Ok(aligned)
}

fn check_labels(
    rater: Rater,
    item: &ItemId,
    labels: &BTreeSet<Label>,
    vocabulary: &Vocabulary,
) -> Result<(), ValidationError> {
    match labels.iter().find(|label| !vocabulary.contains(label)) {
        Some(label) => Err(ValidationError::UnknownLabel {
            rater,
            item: item.clone(),
            label: label.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(records: Vec<(&str, Vec<&str>)>) -> AnnotationSet {
        AnnotationSet::build(records.into_iter().map(|(item, labels)| {
            (
                ItemId::new(item),
                labels
                    .iter()
                    .map(|l| Label::new(l).unwrap())
                    .collect::<Vec<_>>(),
            )
        }))
        .unwrap()
    }

    fn vocab() -> Vocabulary {
        Vocabulary::load(["x", "y"]).unwrap()
    }

    #[test]
    fn test_align_sorted_and_exhaustive() {
        let a = set(vec![("item2", vec!["y"]), ("item1", vec!["x"])]);
        let b = set(vec![("item1", vec!["x", "y"]), ("item2", vec![])]);

        let aligned = align(&a, &b, &vocab()).unwrap();
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned[0].item.as_str(), "item1");
        assert_eq!(aligned[0].labels_b.len(), 2);
        assert_eq!(aligned[1].item.as_str(), "item2");
        assert!(aligned[1].labels_b.is_empty());
    }

    #[test]
    fn test_item_set_mismatch() {
        let a = set(vec![("q1", vec!["x"]), ("q2", vec!["x"]), ("q3", vec!["y"])]);
        let b = set(vec![("q1", vec!["x"]), ("q2", vec!["y"]), ("q4", vec![])]);

        let err = align(&a, &b, &vocab()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ItemSetMismatch {
                only_in_a: vec![ItemId::new("q3")],
                only_in_b: vec![ItemId::new("q4")],
            }
        );
    }

    #[test]
    fn test_unknown_label_reports_rater_and_item() {
        let a = set(vec![("item1", vec!["x"]), ("item2", vec!["z"])]);
        let b = set(vec![("item1", vec!["x"]), ("item2", vec!["y"])]);

        let err = align(&a, &b, &vocab()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownLabel {
                rater: Rater::A,
                item: ItemId::new("item2"),
                label: Label::new("z").unwrap(),
            }
        );
    }

    #[test]
    fn test_unknown_label_from_rater_b() {
        let a = set(vec![("item1", vec!["x"])]);
        let b = set(vec![("item1", vec!["w"])]);

        let err = align(&a, &b, &vocab()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnknownLabel { rater: Rater::B, .. }
        ));
    }

    #[test]
    fn test_mismatch_checked_before_labels() {
        let a = set(vec![("item1", vec!["z"]), ("item2", vec!["x"])]);
        let b = set(vec![("item1", vec!["x"])]);

        let err = align(&a, &b, &vocab()).unwrap_err();
        assert!(matches!(err, ValidationError::ItemSetMismatch { .. }));
    }

    #[test]
    fn test_empty_sets_rejected() {
        let a = AnnotationSet::default();
        let b = AnnotationSet::default();
        assert_eq!(align(&a, &b, &vocab()).unwrap_err(), ValidationError::NoItems);
    }
}
