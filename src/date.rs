//! Date normalization for expense timestamps
//!
//! Two layers share one parsing routine but differ in strictness. The strict
//! operations (`date_components`, `canonical_date_string`, `day_of_week`)
//! feed display code and fail fast on anything unparseable. The lenient
//! [`timestamp_ms`] feeds the sorter and reports an unparseable value as
//! `None` instead of an error.

use crate::error::{SortError, SortResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Day of the week, Sunday-based to match the ordering used by expense
/// display code (Sunday = 0 .. Saturday = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WeekDay {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

/// Process-wide weekday table, indexed by the Sunday-based ordinal.
/// Read-only after initialization, so concurrent reads are safe.
pub const WEEK_DAYS: [WeekDay; 7] = [
    WeekDay::Sunday,
    WeekDay::Monday,
    WeekDay::Tuesday,
    WeekDay::Wednesday,
    WeekDay::Thursday,
    WeekDay::Friday,
    WeekDay::Saturday,
];

impl WeekDay {
    /// Look up a weekday from a raw ordinal. Values >= 7 wrap via modulo,
    /// so `from_index(7)` is `Sunday` again.
    pub fn from_index(index: u32) -> WeekDay {
        WEEK_DAYS[(index % 7) as usize]
    }

    /// English display name for the weekday. The mapping is fixed and not
    /// locale-sensitive.
    pub fn label(self) -> &'static str {
        match self {
            WeekDay::Sunday => "Sunday",
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
        }
    }
}

/// Calendar components of a validated timestamp.
///
/// `month` is 0-based (0 = January, 11 = December); `day` is 1-based, as
/// reported by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Weekday descriptor: display label plus the Sunday-based ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOfWeek {
    pub week_day: &'static str,
    pub week_day_enum: WeekDay,
}

/// Parse a timestamp value leniently, accepting the representations that
/// occur in expense records: RFC 3339 (`2023-05-20T10:30:00Z`), a naive
/// datetime without offset, a bare calendar date, or integer epoch
/// milliseconds. Returns `None` when nothing matches.
///
/// Both the strict and lenient layers go through this routine, so they agree
/// on what constitutes a valid date.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    // Numeric input is epoch milliseconds.
    if let Ok(ms) = value.parse::<i64>() {
        return DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc());
    }

    None
}

/// Effective sort key for a timestamp: epoch milliseconds, or `None` for an
/// unparseable value. Never fails.
pub fn timestamp_ms(value: &str) -> Option<i64> {
    parse_timestamp(value).map(|dt| dt.and_utc().timestamp_millis())
}

/// Strict parse used by the display-facing operations below.
fn validated(value: &str) -> SortResult<NaiveDateTime> {
    parse_timestamp(value).ok_or_else(|| SortError::invalid_date_format(value))
}

/// Extract validated calendar components from a date-like value.
///
/// Fails with [`SortError::InvalidDateFormat`] on unparseable input; never
/// returns a sentinel or partially-valid result.
pub fn date_components(value: &str) -> SortResult<DateComponents> {
    let dt = validated(value)?;
    Ok(DateComponents {
        year: dt.year(),
        month: dt.month0(),
        day: dt.day(),
    })
}

/// Format a date-like value as the canonical `YYYY-MM-DD` string (1-based
/// month, both month and day zero-padded to two digits).
///
/// Propagates the same [`SortError::InvalidDateFormat`] as
/// [`date_components`].
pub fn canonical_date_string(value: &str) -> SortResult<String> {
    let c = date_components(value)?;
    Ok(format!("{:04}-{:02}-{:02}", c.year, c.month + 1, c.day))
}

/// Resolve a date-like value to its weekday label and Sunday-based ordinal.
///
/// Validation is identical to [`date_components`]. The ordinal reported by
/// the calendar is already in 0..=6 but is re-normalized through the modulo
/// lookup anyway.
pub fn day_of_week(value: &str) -> SortResult<DayOfWeek> {
    let dt = validated(value)?;
    let week_day_enum = WeekDay::from_index(dt.weekday().num_days_from_sunday());
    Ok(DayOfWeek {
        week_day: week_day_enum.label(),
        week_day_enum,
    })
}
