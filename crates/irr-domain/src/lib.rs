//! # IRR Domain Layer
//!
//! Inter-rater reliability between two annotators - pure agreement math
//! with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - Label, Vocabulary, ItemId, AnnotationSet        ││
//! │  │  service/ - align, ContingencyTable, AgreementEngine        ││
//! │  │  error    - ValidationError                                 ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! AnnotationSet A ─┐
//!                  ├─ align ─> [AlignedItem] ─> ContingencyTable ─> AgreementResult
//! AnnotationSet B ─┘    ^
//!                   Vocabulary
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies and does no I/O.**
//!
//! Where the labels come from (CSV folders, a database, a test) is the
//! adapter's business. This crate only sees fully built inputs.

pub mod error;
pub mod model;
pub mod service;

// Re-export commonly used types
pub use error::ValidationError;

pub use model::{
    annotation::{AnnotationSet, Rater},
    item::ItemId,
    label::{Label, Vocabulary},
};

pub use service::{
    agreement::{AgreementEngine, AgreementResult, Coefficient, LabelAgreement},
    alignment::{align, AlignedItem},
    contingency::{ContingencyTable, LabelTally},
    krippendorff::krippendorff_alpha,
};
