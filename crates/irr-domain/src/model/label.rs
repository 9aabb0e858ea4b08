//! Label & Vocabulary - The categories raters choose from
//!
//! Label is a Value Object. Two labels are equal when their normalized
//! text is equal: surrounding whitespace is trimmed and the text is
//! lowercased, so " Praise" and "praise" are the same label.
//!
//! The Vocabulary is the fixed set of labels a coding scheme allows.

use std::collections::BTreeSet;

use crate::error::ValidationError;

/// A normalized category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// Normalize and create a label
    ///
    /// Returns None when the text is blank after trimming.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Label {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of valid labels
///
/// Iteration is always in sorted label order, which keeps every
/// downstream table deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    labels: BTreeSet<Label>,
}

impl Vocabulary {
    /// Build a vocabulary from raw label tokens
    ///
    /// Fails when the input is empty, when a token is blank, or when
    /// two tokens normalize to the same label.
    pub fn load<I, S>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut labels = BTreeSet::new();

        for token in raw {
            let token = token.as_ref();
            let label = Label::new(token).ok_or_else(|| ValidationError::InvalidVocabulary {
                reason: format!("blank label entry {:?}", token),
            })?;

            if labels.contains(&label) {
                return Err(ValidationError::InvalidVocabulary {
                    reason: format!("duplicate label '{}' (from {:?})", label, token),
                });
            }
            labels.insert(label);
        }

        if labels.is_empty() {
            return Err(ValidationError::InvalidVocabulary {
                reason: "no labels given".to_string(),
            });
        }

        Ok(Self { labels })
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    pub fn all(&self) -> &BTreeSet<Label> {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
