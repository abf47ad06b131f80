//! Timetable resolver CLI library.
//!
//! This crate provides the CLI interface for the timetable resolver.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, ResolveArgs};
pub use config::Config;
