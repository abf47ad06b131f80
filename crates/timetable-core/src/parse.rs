//! Parsing of `<source> <HH:MM> <HH:MM>` lines.

use chrono::NaiveTime;
use thiserror::Error;

use crate::interval::Interval;
use crate::sources::SourceTable;

/// Why a line did not produce an [`Interval`].
///
/// Rejected lines are dropped, never reported as failures. The reason exists
/// for diagnostics only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line did not split into exactly three fields.
    #[error("expected 3 fields, got {count}")]
    FieldCount { count: usize },

    /// A time field was not two integers separated by a colon.
    #[error("malformed time {value:?}")]
    MalformedTime { value: String },

    /// Hour or minute outside the clock range.
    #[error("time {hour}:{minute} is out of range")]
    TimeOutOfRange { hour: i32, minute: i32 },

    /// The source is not in the configured table.
    #[error("unknown source {name:?}")]
    UnknownSource { name: String },

    /// The interval is longer than the allowed maximum.
    #[error("interval lasts {minutes} minutes")]
    TooLong { minutes: i64 },
}

/// Parses one input line against the configured sources.
pub fn parse_line(line: &str, sources: &SourceTable) -> Result<Interval, LineError> {
    let fields = split_fields(line, ' ');
    let [source, start, end] = fields.as_slice() else {
        return Err(LineError::FieldCount {
            count: fields.len(),
        });
    };

    let start = parse_clock(start)?;
    let end = parse_clock(end)?;

    let priority = sources
        .priority(source)
        .ok_or_else(|| LineError::UnknownSource {
            name: (*source).to_string(),
        })?;

    Interval::new(*source, priority, start, end)
}

/// Parses `H:M` into a clock time, accepting unpadded and signed integers.
pub fn parse_clock(value: &str) -> Result<NaiveTime, LineError> {
    let malformed = || LineError::MalformedTime {
        value: value.to_string(),
    };

    let parts = split_fields(value, ':');
    let [hour, minute] = parts.as_slice() else {
        return Err(malformed());
    };
    let hour: i32 = hour.parse().map_err(|_| malformed())?;
    let minute: i32 = minute.parse().map_err(|_| malformed())?;

    let out_of_range = || LineError::TimeOutOfRange { hour, minute };
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(out_of_range());
    }
    let hour = u32::try_from(hour).map_err(|_| out_of_range())?;
    let minute = u32::try_from(minute).map_err(|_| out_of_range())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(out_of_range)
}

/// Splits on a single separator and drops trailing empty fields.
///
/// Leading and inner empty fields are kept, so `"a  b"` has three fields
/// while `"a b "` has two.
fn split_fields(s: &str, separator: char) -> Vec<&str> {
    let mut fields: Vec<&str> = s.split(separator).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}
