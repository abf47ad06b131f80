//! Core domain logic for the timetable resolver.
//!
//! This crate contains:
//! - Interval parsing and validation against a configured source table
//! - Conflict resolution between overlapping intervals
//! - Grouped text rendering of the surviving intervals

pub mod format;
pub mod interval;
pub mod parse;
pub mod resolve;
pub mod sources;
mod store;
mod timetable;

pub use format::{render_timetable, write_timetable};
pub use interval::{Interval, MAX_DURATION_MINUTES};
pub use parse::{LineError, parse_line};
pub use resolve::{Outcome, resolve_conflicts};
pub use sources::{ConfigError, SourceEntry, SourceTable};
pub use store::ResultStore;
pub use timetable::{Timetable, TimetableStats, build_timetable, record_lines};
