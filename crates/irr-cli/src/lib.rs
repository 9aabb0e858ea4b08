//! IRR CLI - Command implementations and process setup

pub mod commands;
pub mod logging;
