//! Timestamp and date string conversion.

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::{TimeError, TimeResult};

/// Timestamps below this are read as seconds, at or above as milliseconds.
/// The boundary sits past the year 2286 in seconds and before 1970-05 in
/// milliseconds, so real-world values never straddle it.
const MILLIS_CUTOVER: i64 = 10_000_000_000;

/// How the input string should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMode {
    /// Input is a unix timestamp in seconds or milliseconds.
    TimestampToDate,
    /// Input is a date string; naive forms read as local time.
    DateToTimestamp,
    /// Input is a date string in local time.
    LocalToUtc,
    /// Input is a date string in UTC.
    UtcToLocal,
}

/// Every rendering of one instant, computed regardless of the input mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Unix time in whole seconds.
    pub unix_seconds: i64,
    /// Unix time in milliseconds.
    pub unix_millis: i64,
    /// `YYYY-MM-DD HH:MM:SS` in the local offset.
    pub local: String,
    /// RFC 2822 rendering in UTC.
    pub utc: String,
    /// RFC 3339 rendering in UTC with millisecond precision.
    pub iso8601: String,
    /// The local offset as `UTC±HH:MM`.
    pub timezone: String,
}

/// Convert an input string using the system's local offset.
pub fn convert(input: &str, mode: ConversionMode) -> TimeResult<Conversion> {
    convert_with_offset(input, mode, Local::now().offset().fix())
}

/// Convert an input string against an explicit local offset.
///
/// The offset stands in for the system timezone, which keeps the
/// arithmetic reproducible; it is applied uniformly, with no DST
/// transitions across dates.
pub fn convert_with_offset(
    input: &str,
    mode: ConversionMode,
    offset: FixedOffset,
) -> TimeResult<Conversion> {
    let instant = match mode {
        ConversionMode::TimestampToDate => parse_timestamp(input)?,
        ConversionMode::DateToTimestamp | ConversionMode::LocalToUtc => {
            parse_date(input, Assume::Offset(offset))?
        }
        ConversionMode::UtcToLocal => parse_date(input, Assume::Utc)?,
    };
    Ok(render(instant, offset))
}

/// Offset attached to date strings that carry none of their own.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Assume {
    Offset(FixedOffset),
    Utc,
}

pub(crate) fn parse_timestamp(input: &str) -> TimeResult<DateTime<Utc>> {
    let trimmed = input.trim();
    let raw: i64 = trimmed.parse().map_err(|_| TimeError::InvalidTimestamp {
        input: trimmed.to_string(),
    })?;
    let millis = if raw < MILLIS_CUTOVER { raw.saturating_mul(1000) } else { raw };
    DateTime::from_timestamp_millis(millis).ok_or_else(|| TimeError::InvalidTimestamp {
        input: trimmed.to_string(),
    })
}

/// Parse a date string, trying RFC 3339 first, then the common
/// `YYYY-MM-DD[ T]HH:MM[:SS]` forms, then a bare `YYYY-MM-DD` (midnight).
/// Naive forms take the assumed offset.
pub(crate) fn parse_date(input: &str, assume: Assume) -> TimeResult<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = parse_naive(trimmed).ok_or_else(|| TimeError::InvalidDate {
        input: trimmed.to_string(),
    })?;

    match assume {
        Assume::Utc => Ok(naive.and_utc()),
        Assume::Offset(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| TimeError::InvalidDate {
                input: trimmed.to_string(),
            }),
    }
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];
    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn render(instant: DateTime<Utc>, offset: FixedOffset) -> Conversion {
    let local = instant.with_timezone(&offset);
    Conversion {
        unix_seconds: instant.timestamp(),
        unix_millis: instant.timestamp_millis(),
        local: local.format("%Y-%m-%d %H:%M:%S").to_string(),
        utc: instant.to_rfc2822(),
        iso8601: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        timezone: format_offset(offset),
    }
}

fn format_offset(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    let sign = if secs >= 0 { '+' } else { '-' };
    let abs = secs.abs();
    format!("UTC{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus_two() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    // 2024-01-15T10:00:00Z
    const KNOWN_SECONDS: i64 = 1_705_312_800;

    // ------------------------------------------------------------------
    // timestamps
    // ------------------------------------------------------------------

    #[test]
    fn seconds_timestamp_converts() {
        let out = convert_with_offset(
            &KNOWN_SECONDS.to_string(),
            ConversionMode::TimestampToDate,
            plus_two(),
        )
        .unwrap();
        assert_eq!(out.unix_seconds, KNOWN_SECONDS);
        assert_eq!(out.unix_millis, KNOWN_SECONDS * 1000);
        assert_eq!(out.iso8601, "2024-01-15T10:00:00.000Z");
        assert_eq!(out.local, "2024-01-15 12:00:00");
        assert_eq!(out.timezone, "UTC+02:00");
    }

    #[test]
    fn milliseconds_timestamp_converts() {
        let millis = KNOWN_SECONDS * 1000 + 250;
        let out = convert_with_offset(
            &millis.to_string(),
            ConversionMode::TimestampToDate,
            plus_two(),
        )
        .unwrap();
        assert_eq!(out.unix_millis, millis);
        assert_eq!(out.unix_seconds, KNOWN_SECONDS);
        assert_eq!(out.iso8601, "2024-01-15T10:00:00.250Z");
    }

    #[test]
    fn cutover_boundary_separates_seconds_from_millis() {
        // 9_999_999_999 reads as seconds (year 2286)...
        let as_seconds =
            parse_timestamp("9999999999").unwrap();
        assert_eq!(as_seconds.timestamp(), 9_999_999_999);
        // ...10_000_000_000 reads as milliseconds (1970-04-26).
        let as_millis = parse_timestamp("10000000000").unwrap();
        assert_eq!(as_millis.timestamp_millis(), 10_000_000_000);
    }

    #[test]
    fn negative_timestamps_are_seconds_before_the_epoch() {
        let out = parse_timestamp("-86400").unwrap();
        assert_eq!(out.to_rfc3339_opts(SecondsFormat::Secs, true), "1969-12-31T00:00:00Z");
    }

    #[test]
    fn non_numeric_timestamp_is_rejected() {
        let err = convert_with_offset("soon", ConversionMode::TimestampToDate, plus_two())
            .unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidTimestamp {
                input: "soon".to_string()
            }
        );
    }

    // ------------------------------------------------------------------
    // date strings
    // ------------------------------------------------------------------

    #[test]
    fn rfc3339_input_keeps_its_own_offset() {
        let out = convert_with_offset(
            "2024-01-15T10:00:00+02:00",
            ConversionMode::DateToTimestamp,
            plus_two(),
        )
        .unwrap();
        assert_eq!(out.unix_seconds, KNOWN_SECONDS - 2 * 3600);
    }

    #[test]
    fn naive_datetime_reads_as_local() {
        let out = convert_with_offset(
            "2024-01-15 10:00:00",
            ConversionMode::LocalToUtc,
            plus_two(),
        )
        .unwrap();
        // 10:00 at +02:00 is 08:00 UTC.
        assert_eq!(out.unix_seconds, KNOWN_SECONDS - 2 * 3600);
        assert_eq!(out.iso8601, "2024-01-15T08:00:00.000Z");
    }

    #[test]
    fn utc_to_local_reads_naive_input_as_utc() {
        let out = convert_with_offset(
            "2024-01-15 10:00:00",
            ConversionMode::UtcToLocal,
            plus_two(),
        )
        .unwrap();
        assert_eq!(out.unix_seconds, KNOWN_SECONDS);
        assert_eq!(out.local, "2024-01-15 12:00:00");
    }

    #[test]
    fn t_separator_and_minute_precision_parse() {
        let with_t = convert_with_offset(
            "2024-01-15T10:00:00",
            ConversionMode::UtcToLocal,
            plus_two(),
        )
        .unwrap();
        let minutes_only =
            convert_with_offset("2024-01-15 10:00", ConversionMode::UtcToLocal, plus_two())
                .unwrap();
        assert_eq!(with_t.unix_seconds, KNOWN_SECONDS);
        assert_eq!(minutes_only.unix_seconds, KNOWN_SECONDS);
    }

    #[test]
    fn bare_date_means_midnight() {
        let out =
            convert_with_offset("2024-01-15", ConversionMode::UtcToLocal, plus_two()).unwrap();
        assert_eq!(out.iso8601, "2024-01-15T00:00:00.000Z");
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let err = convert_with_offset("next tuesday", ConversionMode::DateToTimestamp, plus_two())
            .unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidDate {
                input: "next tuesday".to_string()
            }
        );
    }

    #[test]
    fn utc_rendering_is_rfc2822() {
        let out = convert_with_offset(
            &KNOWN_SECONDS.to_string(),
            ConversionMode::TimestampToDate,
            plus_two(),
        )
        .unwrap();
        assert_eq!(out.utc, "Mon, 15 Jan 2024 10:00:00 +0000");
    }

    // ------------------------------------------------------------------
    // offsets
    // ------------------------------------------------------------------

    #[test]
    fn negative_offset_renders_with_minutes() {
        let offset = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(format_offset(offset), "UTC-05:30");
    }

    #[test]
    fn utc_offset_renders_as_plus_zero() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_offset(offset), "UTC+00:00");
    }
}
