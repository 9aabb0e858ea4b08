//! Agreement Engine - Chance-corrected agreement from a ContingencyTable
//!
//! Per label, Cohen's kappa on the 2x2 presence/absence table:
//!
//! ```text
//! p_o   = (both_present + both_absent) / n
//! p_e   = a·b + (1 - a)(1 - b)      a, b = each rater's presence rate
//! kappa = (p_o - p_e) / (1 - p_e)
//! ```
//!
//! Overall result is POOLED: the 2x2 tables of every label with a defined
//! kappa are summed cell-wise and kappa is computed once on the sum.
//! Labels whose chance agreement is 1 (never used by either rater, or
//! always used by both) have no defined kappa; they are reported as
//! undefined and left out of the pooled table, so they cannot move the
//! overall coefficient.
//!
//! The result only holds quantities that are symmetric in the two raters.

use crate::model::label::Label;
use crate::service::contingency::{ContingencyTable, LabelTally};
use crate::service::krippendorff::krippendorff_alpha;

/// A coefficient that may be undefined (chance agreement of exactly 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficient {
    Defined(f64),
    Undefined,
}

impl Coefficient {
    pub fn value(&self) -> Option<f64> {
        match self {
            Coefficient::Defined(v) => Some(*v),
            Coefficient::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Coefficient::Defined(_))
    }

    /// Landis & Koch reading of a kappa-like value
    pub fn interpretation(&self) -> &'static str {
        match self {
            Coefficient::Undefined => "Undefined (chance agreement is certain)",
            Coefficient::Defined(k) if *k < 0.0 => "Less than chance agreement",
            Coefficient::Defined(k) if *k < 0.20 => "Slight agreement",
            Coefficient::Defined(k) if *k < 0.40 => "Fair agreement",
            Coefficient::Defined(k) if *k < 0.60 => "Moderate agreement",
            Coefficient::Defined(k) if *k < 0.80 => "Substantial agreement",
            Coefficient::Defined(_) => "Almost perfect agreement",
        }
    }
}

impl core::fmt::Display for Coefficient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Coefficient::Defined(v) => write!(f, "{:.4}", v),
            Coefficient::Undefined => write!(f, "undefined"),
        }
    }
}

/// Agreement for one label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAgreement {
    pub label: Label,
    pub both_present: u64,
    pub both_absent: u64,
    pub disagreements: u64,
    pub observed: f64,
    pub expected: f64,
    pub kappa: Coefficient,
}

/// Final output of an agreement computation
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementResult {
    /// Number of items both raters annotated
    pub item_count: u64,
    /// Pooled observed agreement
    pub observed: f64,
    /// Pooled chance agreement
    pub expected: f64,
    /// Pooled Cohen's kappa
    pub kappa: Coefficient,
    /// Krippendorff's alpha over the item x label matrix
    pub krippendorff_alpha: Coefficient,
    /// Per-label breakdown, vocabulary order
    pub per_label: Vec<LabelAgreement>,
    /// Labels left out of the pooled table (undefined kappa)
    pub excluded_labels: Vec<Label>,
}

impl AgreementResult {
    pub fn label(&self, label: &Label) -> Option<&LabelAgreement> {
        self.per_label.iter().find(|l| &l.label == label)
    }
}

/// Observed / expected / kappa for a single 2x2 table
#[derive(Debug, Clone, Copy, PartialEq)]
struct BinaryAgreement {
    observed: f64,
    expected: f64,
    kappa: Coefficient,
}

fn binary_agreement(tally: &LabelTally) -> BinaryAgreement {
    let n = tally.total();
    if n == 0 {
        return BinaryAgreement {
            observed: 0.0,
            expected: 1.0,
            kappa: Coefficient::Undefined,
        };
    }

    let observed = tally.agreements() as f64 / n as f64;

    let (a, b) = (tally.present_a(), tally.present_b());
    let degenerate = (a == 0 && b == 0) || (a == n && b == n);
    if degenerate {
        return BinaryAgreement {
            observed,
            expected: 1.0,
            kappa: Coefficient::Undefined,
        };
    }

    let n_f = n as f64;
    let (a, b) = (a as f64, b as f64);
    let expected = (a * b + (n_f - a) * (n_f - b)) / (n_f * n_f);
    let kappa = ((observed - expected) / (1.0 - expected)).clamp(-1.0, 1.0);

    BinaryAgreement {
        observed,
        expected,
        kappa: Coefficient::Defined(kappa),
    }
}

/// AgreementEngine - Stateless computation of the final statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct AgreementEngine;

impl AgreementEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, table: &ContingencyTable) -> AgreementResult {
        let mut per_label = Vec::with_capacity(table.tallies().len());
        let mut excluded_labels = Vec::new();
        let mut pooled = LabelTally::default();
        let mut all_labels = LabelTally::default();

        for (label, tally) in table.tallies() {
            let agreement = binary_agreement(tally);

            all_labels = all_labels.merge(tally);
            if agreement.kappa.is_defined() {
                pooled = pooled.merge(tally);
            } else {
                excluded_labels.push(label.clone());
            }

            per_label.push(LabelAgreement {
                label: label.clone(),
                both_present: tally.both_present,
                both_absent: tally.both_absent,
                disagreements: tally.disagreements(),
                observed: agreement.observed,
                expected: agreement.expected,
                kappa: agreement.kappa,
            });
        }

        // Every label degenerate: report raw agreement over all of them
        let overall = if pooled.total() == 0 {
            binary_agreement(&all_labels)
        } else {
            binary_agreement(&pooled)
        };

        AgreementResult {
            item_count: table.item_count(),
            observed: overall.observed,
            expected: overall.expected,
            kappa: overall.kappa,
            krippendorff_alpha: krippendorff_alpha(table.ratings()),
            per_label,
            excluded_labels,
        }
    }
}
