//! Validated, source-tagged time intervals.
//!
//! Times are plain minute-of-day offsets: there is no date, and an interval
//! whose end precedes its start is not wrapped past midnight.

use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::parse::LineError;

/// Longest interval accepted, in minutes.
pub const MAX_DURATION_MINUTES: i64 = 60;

/// A single timetable record that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    source: String,
    priority: u32,
    start: NaiveTime,
    end: NaiveTime,
}

impl Interval {
    /// Creates an interval, rejecting anything longer than
    /// [`MAX_DURATION_MINUTES`].
    ///
    /// Only the upper bound is checked. An end before the start yields a
    /// negative duration, which passes.
    pub fn new(
        source: impl Into<String>,
        priority: u32,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, LineError> {
        let interval = Self {
            source: source.into(),
            priority,
            start: truncate_to_minute(start),
            end: truncate_to_minute(end),
        };

        let minutes = interval.duration_minutes();
        if minutes > MAX_DURATION_MINUTES {
            return Err(LineError::TooLong { minutes });
        }
        Ok(interval)
    }

    /// The source (company, operator) this interval belongs to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Configured priority of the source. Lower wins identical-shape ties.
    pub const fn priority(&self) -> u32 {
        self.priority
    }

    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Start as minutes since midnight.
    pub fn start_of_day(&self) -> u32 {
        minute_of_day(self.start)
    }

    /// End as minutes since midnight.
    pub fn end_of_day(&self) -> u32 {
        minute_of_day(self.end)
    }

    /// Signed length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.end_of_day()) - i64::from(self.start_of_day())
    }

    /// Ordering key used to walk intervals during conflict resolution.
    ///
    /// Not injective: differently shaped intervals can share a key.
    pub fn sort_key(&self) -> u32 {
        self.start_of_day() + self.end_of_day()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.source,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
