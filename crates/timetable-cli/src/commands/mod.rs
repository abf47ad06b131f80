//! CLI subcommand implementations.

pub mod resolve;
pub mod sources;
