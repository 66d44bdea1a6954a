//! Difference between two dates.

use std::fmt;

use chrono::{FixedOffset, Local, Offset};
use serde::{Deserialize, Serialize};

use crate::convert::{parse_date, Assume};
use crate::error::TimeResult;

/// The absolute difference between two instants, at second precision.
///
/// Totals are independent floor-divisions of the whole span; the
/// `days/hours/minutes/seconds` fields are the mixed-radix breakdown of
/// the same span, so `days == total_days` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDelta {
    pub total_seconds: i64,
    pub total_minutes: i64,
    pub total_hours: i64,
    pub total_days: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// True when the end lies before the start.
    pub is_past: bool,
}

impl DateDelta {
    /// Break a signed millisecond span into totals and components.
    pub fn from_millis(span_millis: i64) -> Self {
        let is_past = span_millis < 0;
        let span = span_millis.abs();

        let total_seconds = span / 1000;
        let total_minutes = total_seconds / 60;
        let total_hours = total_minutes / 60;
        let total_days = total_hours / 24;

        DateDelta {
            total_seconds,
            total_minutes,
            total_hours,
            total_days,
            days: total_days,
            hours: total_hours % 24,
            minutes: total_minutes % 60,
            seconds: total_seconds % 60,
            is_past,
        }
    }

    /// True when the two instants coincide (at millisecond precision the
    /// span was computed from).
    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }
}

impl fmt::Display for DateDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes, {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Difference between two date strings, using the system's local offset
/// for naive inputs.
pub fn date_diff(start: &str, end: &str) -> TimeResult<DateDelta> {
    date_diff_with_offset(start, end, Local::now().offset().fix())
}

/// Difference between two date strings against an explicit local offset.
///
/// Both sides accept the same formats as conversion. Naive inputs take
/// the given offset on both sides, so it cancels out of the span.
pub fn date_diff_with_offset(
    start: &str,
    end: &str,
    offset: FixedOffset,
) -> TimeResult<DateDelta> {
    let start = parse_date(start, Assume::Offset(offset))?;
    let end = parse_date(end, Assume::Offset(offset))?;
    Ok(DateDelta::from_millis(
        end.timestamp_millis() - start.timestamp_millis(),
    ))
}
