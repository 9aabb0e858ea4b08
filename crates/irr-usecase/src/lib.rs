//! # IRR Use Case Layer
//!
//! Application-specific flow: validate two raters against a vocabulary,
//! tally, and compute the agreement statistics.
//! This layer orchestrates domain services; it does no I/O of its own.

pub use irr_domain;

use irr_domain::{
    align, AgreementEngine, AgreementResult, AnnotationSet, ContingencyTable, ValidationError,
    Vocabulary,
};
use tracing::{debug, debug_span, warn};

/// Summary of a successful validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSummary {
    pub item_count: usize,
    pub label_count: usize,
    /// Items with no label from either rater
    pub unlabeled_items: usize,
}

/// ComputeAgreement - align -> tally -> compute
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeAgreement {
    engine: AgreementEngine,
}

impl ComputeAgreement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the whole pipeline
    pub fn execute(
        &self,
        rater_a: &AnnotationSet,
        rater_b: &AnnotationSet,
        vocabulary: &Vocabulary,
    ) -> Result<AgreementResult, ValidationError> {
        let span = debug_span!("compute_agreement", labels = vocabulary.len());
        let _guard = span.enter();

        let aligned = align(rater_a, rater_b, vocabulary)?;
        debug!(items = aligned.len(), "aligned annotation sets");

        let table = ContingencyTable::build(&aligned, vocabulary);
        let result = self.engine.compute(&table);

        for label in &result.excluded_labels {
            warn!(label = %label, "kappa undefined for label; excluded from pooled result");
        }
        debug!(
            kappa = %result.kappa,
            alpha = %result.krippendorff_alpha,
            observed = result.observed,
            "agreement computed"
        );

        Ok(result)
    }

    /// Validate inputs without computing anything
    pub fn validate(
        &self,
        rater_a: &AnnotationSet,
        rater_b: &AnnotationSet,
        vocabulary: &Vocabulary,
    ) -> Result<ValidationSummary, ValidationError> {
        let aligned = align(rater_a, rater_b, vocabulary)?;

        Ok(ValidationSummary {
            item_count: aligned.len(),
            label_count: vocabulary.len(),
            unlabeled_items: aligned
                .iter()
                .filter(|a| a.labels_a.is_empty() && a.labels_b.is_empty())
                .count(),
        })
    }
}
