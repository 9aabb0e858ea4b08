//! AgreementReport - Serializable view of an AgreementResult
//!
//! Rendered either as pretty JSON or as a plain text table.

use irr_domain::{AgreementResult, Coefficient, LabelAgreement};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Per-label line of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelReport {
    pub label: String,
    pub both_present: u64,
    pub both_absent: u64,
    pub disagreements: u64,
    pub observed_agreement: f64,
    pub expected_agreement: f64,
    /// None when undefined
    pub kappa: Option<f64>,
}

impl From<&LabelAgreement> for LabelReport {
    fn from(agreement: &LabelAgreement) -> Self {
        Self {
            label: agreement.label.to_string(),
            both_present: agreement.both_present,
            both_absent: agreement.both_absent,
            disagreements: agreement.disagreements,
            observed_agreement: agreement.observed,
            expected_agreement: agreement.expected,
            kappa: agreement.kappa.value(),
        }
    }
}

/// Full report for one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementReport {
    pub generated_at: String,
    pub rater_a: String,
    pub rater_b: String,
    pub item_count: u64,
    pub observed_agreement: f64,
    pub expected_agreement: f64,
    /// Pooled Cohen's kappa; None when undefined
    pub kappa: Option<f64>,
    pub interpretation: String,
    pub krippendorff_alpha: Option<f64>,
    pub excluded_labels: Vec<String>,
    pub labels: Vec<LabelReport>,
}

impl AgreementReport {
    pub fn new(
        result: &AgreementResult,
        rater_a: impl Into<String>,
        rater_b: impl Into<String>,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            rater_a: rater_a.into(),
            rater_b: rater_b.into(),
            item_count: result.item_count,
            observed_agreement: result.observed,
            expected_agreement: result.expected,
            kappa: result.kappa.value(),
            interpretation: result.kappa.interpretation().to_string(),
            krippendorff_alpha: result.krippendorff_alpha.value(),
            excluded_labels: result
                .excluded_labels
                .iter()
                .map(|l| l.to_string())
                .collect(),
            labels: result.per_label.iter().map(LabelReport::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable summary and per-label table
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Inter-rater reliability: {} vs {}\n\n",
            self.rater_a, self.rater_b
        ));
        out.push_str(&format!("  Items:                 {}\n", self.item_count));
        out.push_str(&format!(
            "  Observed agreement:    {:.4}\n",
            self.observed_agreement
        ));
        out.push_str(&format!(
            "  Expected agreement:    {:.4}\n",
            self.expected_agreement
        ));
        out.push_str(&format!(
            "  Cohen's kappa:         {} ({})\n",
            fmt_coefficient(self.kappa),
            self.interpretation
        ));
        out.push_str(&format!(
            "  Krippendorff's alpha:  {}\n\n",
            fmt_coefficient(self.krippendorff_alpha)
        ));

        let width = self
            .labels
            .iter()
            .map(|l| l.label.chars().count())
            .max()
            .unwrap_or(0)
            .max("Label".len());

        out.push_str(&format!(
            "  {:<width$}  {:>6}  {:>7}  {:>8}  {:>6}  {:>6}  {:>9}\n",
            "Label",
            "Both",
            "Neither",
            "Disagree",
            "p_o",
            "p_e",
            "kappa",
            width = width
        ));
        for line in &self.labels {
            out.push_str(&format!(
                "  {:<width$}  {:>6}  {:>7}  {:>8}  {:>6.3}  {:>6.3}  {:>9}\n",
                line.label,
                line.both_present,
                line.both_absent,
                line.disagreements,
                line.observed_agreement,
                line.expected_agreement,
                fmt_coefficient(line.kappa),
                width = width
            ));
        }

        if !self.excluded_labels.is_empty() {
            out.push_str(&format!(
                "\n  Excluded from pooled kappa (undefined): {}\n",
                self.excluded_labels.join(", ")
            ));
        }

        out
    }
}

fn fmt_coefficient(value: Option<f64>) -> String {
    match value {
        Some(v) => Coefficient::Defined(v).to_string(),
        None => Coefficient::Undefined.to_string(),
    }
}
