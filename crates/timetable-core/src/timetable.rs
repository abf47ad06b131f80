//! End-to-end pipeline: raw lines in, resolved store out.

use crate::parse::parse_line;
use crate::resolve::resolve_conflicts;
use crate::sources::SourceTable;
use crate::store::ResultStore;

/// Counters collected while building a timetable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimetableStats {
    pub lines_read: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// A resolved timetable.
#[derive(Debug, Clone)]
pub struct Timetable {
    pub store: ResultStore,
    pub stats: TimetableStats,
}

/// Splits raw input into records.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing terminator does
/// not start an extra empty record, but blank lines in between are kept.
pub fn record_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Parses every line, drops the invalid ones and resolves conflicts.
///
/// Rejected lines are logged at debug level and otherwise ignored.
pub fn build_timetable<I, S>(lines: I, sources: &SourceTable) -> Timetable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stats = TimetableStats::default();
    let mut intervals = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        stats.lines_read += 1;
        match parse_line(line.as_ref(), sources) {
            Ok(interval) => intervals.push(interval),
            Err(reason) => {
                stats.rejected += 1;
                tracing::debug!(line = index + 1, %reason, "dropping line");
            }
        }
    }
    stats.accepted = intervals.len();

    let store = resolve_conflicts(intervals);
    tracing::info!(
        lines = stats.lines_read,
        accepted = stats.accepted,
        rejected = stats.rejected,
        kept = store.len(),
        "timetable resolved"
    );

    Timetable { store, stats }
}
