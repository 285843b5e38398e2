//! CLI command implementations

pub mod completions;
pub mod config;
pub mod estimate;
pub mod experiment;
pub mod search;
