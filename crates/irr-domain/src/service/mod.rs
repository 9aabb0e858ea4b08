//! Domain Services - The agreement pipeline
//!
//! align -> ContingencyTable::build -> AgreementEngine::compute.
//! Every step is a pure function over immutable inputs.

pub mod agreement;
pub mod alignment;
pub mod contingency;
pub mod krippendorff;
