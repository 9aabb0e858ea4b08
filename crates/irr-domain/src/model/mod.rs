//! Domain Models - The vocabulary of inter-rater reliability
//!
//! These types are the inputs of every agreement computation.
//! They are immutable once built.

pub mod annotation;
pub mod item;
pub mod label;
