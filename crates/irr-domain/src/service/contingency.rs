//! Contingency Table - Per-label presence/absence tallies
//!
//! Multi-label coding is decomposed into one binary judgment per label:
//! for every item, each rater either applied label L or did not. Each
//! (item, label) pair lands in exactly one of four cells:
//!
//! ```text
//!                 B present     B absent
//! A present     both_present     a_only
//! A absent         b_only     both_absent
//! ```
//!
//! The table also keeps the item x label rating counts (0, 1 or 2 raters
//! applied the label), which is what Krippendorff's alpha works on.

use crate::model::label::{Label, Vocabulary};
use crate::service::alignment::AlignedItem;

/// 2x2 tally for one label across all items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelTally {
    pub both_present: u64,
    pub a_only: u64,
    pub b_only: u64,
    pub both_absent: u64,
}

impl LabelTally {
    /// Classify one item's pair of judgments
    pub fn record(&mut self, in_a: bool, in_b: bool) {
        match (in_a, in_b) {
            (true, true) => self.both_present += 1,
            (true, false) => self.a_only += 1,
            (false, true) => self.b_only += 1,
            (false, false) => self.both_absent += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.both_present + self.a_only + self.b_only + self.both_absent
    }

    pub fn agreements(&self) -> u64 {
        self.both_present + self.both_absent
    }

    pub fn disagreements(&self) -> u64 {
        self.a_only + self.b_only
    }

    /// Items rater A applied the label to
    pub fn present_a(&self) -> u64 {
        self.both_present + self.a_only
    }

    /// Items rater B applied the label to
    pub fn present_b(&self) -> u64 {
        self.both_present + self.b_only
    }

    /// Cell-wise sum, used for pooling
    pub fn merge(&self, other: &LabelTally) -> LabelTally {
        LabelTally {
            both_present: self.both_present + other.both_present,
            a_only: self.a_only + other.a_only,
            b_only: self.b_only + other.b_only,
            both_absent: self.both_absent + other.both_absent,
        }
    }
}

/// Derived agreement counts for one computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyTable {
    item_count: u64,
    tallies: Vec<(Label, LabelTally)>,
    /// Row per item, column per label (vocabulary order): raters applying it
    ratings: Vec<Vec<u8>>,
}

impl ContingencyTable {
    /// Tally aligned items for every label in the vocabulary
    pub fn build(aligned: &[AlignedItem], vocabulary: &Vocabulary) -> Self {
        let mut tallies: Vec<(Label, LabelTally)> = vocabulary
            .iter()
            .map(|label| (label.clone(), LabelTally::default()))
            .collect();
        let mut ratings = Vec::with_capacity(aligned.len());

        for entry in aligned {
            let mut row = Vec::with_capacity(tallies.len());
            for (label, tally) in tallies.iter_mut() {
                let in_a = entry.labels_a.contains(label);
                let in_b = entry.labels_b.contains(label);
                tally.record(in_a, in_b);
                row.push(in_a as u8 + in_b as u8);
            }
            ratings.push(row);
        }

        Self {
            item_count: aligned.len() as u64,
            tallies,
            ratings,
        }
    }

    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Per-label tallies in vocabulary order
    pub fn tallies(&self) -> &[(Label, LabelTally)] {
        &self.tallies
    }

    pub fn tally_for(&self, label: &Label) -> Option<&LabelTally> {
        self.tallies
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, tally)| tally)
    }

    /// Item x label rating counts, columns in vocabulary order
    pub fn ratings(&self) -> &[Vec<u8>] {
        &self.ratings
    }
}
