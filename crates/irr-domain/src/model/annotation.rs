//! AnnotationSet - One rater's labels for every item
//!
//! An AnnotationSet is built once from input and never changes.
//! Items may carry zero, one or many labels (multi-label coding);
//! repeated labels on one item collapse into one.

use std::collections::{BTreeMap, BTreeSet};

use super::item::ItemId;
use super::label::Label;
use crate::error::ValidationError;

/// Which of the two raters an annotation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rater {
    A,
    B,
}

impl core::fmt::Display for Rater {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Rater::A => write!(f, "A"),
            Rater::B => write!(f, "B"),
        }
    }
}

/// The full mapping item -> labels for one rater
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    annotations: BTreeMap<ItemId, BTreeSet<Label>>,
}

impl AnnotationSet {
    /// Build from raw (item, labels) records
    ///
    /// Each item must appear exactly once in the input.
    pub fn build<I, L>(records: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (ItemId, L)>,
        L: IntoIterator<Item = Label>,
    {
        let mut annotations = BTreeMap::new();

        for (item, labels) in records {
            if annotations.contains_key(&item) {
                return Err(ValidationError::DuplicateItem { item });
            }
            annotations.insert(item, labels.into_iter().collect());
        }

        Ok(Self { annotations })
    }

    /// Labels this rater assigned to an item
    pub fn labels_for(&self, item: &ItemId) -> Option<&BTreeSet<Label>> {
        self.annotations.get(item)
    }

    pub fn items(&self) -> BTreeSet<&ItemId> {
        self.annotations.keys().collect()
    }

    /// Items in sorted order
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.annotations.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &BTreeSet<Label>)> {
        self.annotations.iter()
    }

    /// Every distinct label this rater used anywhere
    pub fn labels_used(&self) -> BTreeSet<&Label> {
        self.annotations.values().flatten().collect()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> Label {
        Label::new(s).unwrap()
    }

    #[test]
    fn test_build_deduplicates_labels() {
        let set = AnnotationSet::build([(
            ItemId::new("c1"),
            vec![label("x"), label("X"), label("y")],
        )])
        .unwrap();

        let labels = set.labels_for(&ItemId::new("c1")).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let err = AnnotationSet::build([
            (ItemId::new("c1"), vec![label("x")]),
            (ItemId::new("c1"), vec![label("y")]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::DuplicateItem {
                item: ItemId::new("c1")
            }
        );
    }

    #[test]
    fn test_unlabeled_item_is_kept() {
        let set = AnnotationSet::build([(ItemId::new("c1"), Vec::<Label>::new())]).unwrap();
        assert!(set.labels_for(&ItemId::new("c1")).unwrap().is_empty());
        assert!(set.labels_used().is_empty());
        assert!(set.labels_for(&ItemId::new("c2")).is_none());
    }

    #[test]
    fn test_items_sorted() {
        let set = AnnotationSet::build([
            (ItemId::new("b"), vec![label("x")]),
            (ItemId::new("a"), vec![label("y")]),
        ])
        .unwrap();

        let ids: Vec<&str> = set.item_ids().map(|i| i.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(set.labels_used().len(), 2);
    }
}
