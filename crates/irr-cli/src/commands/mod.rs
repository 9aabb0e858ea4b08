//! CLI Commands

pub mod check;
pub mod compute;
pub mod init;
pub mod inputs;

pub use check::CheckCommand;
pub use compute::ComputeCommand;
pub use init::InitCommand;
pub use inputs::{InputArgs, Inputs};
