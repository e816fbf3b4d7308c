//! Booking date/time to UTC event window.
//!
//! Bookings carry an IST wall-clock "DD/MM" date and "HH:MM" time with no
//! year. The year comes from configuration and the offset is the fixed
//! UTC+05:30, so no timezone database or daylight-saving rules are involved.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::error::{ArtCalError, ArtCalResult};

/// IST offset from UTC, in seconds (+05:30)
pub const IST_OFFSET_SECS: i64 = 5 * 3600 + 30 * 60;

/// Every workshop is booked for two hours
pub const EVENT_DURATION_HOURS: i64 = 2;

const STAMP_FORMAT: &str = "%Y%m%dT%H%M00Z";

/// Start and end of an event, both in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn start_stamp(&self) -> String {
        format_stamp(&self.start)
    }

    pub fn end_stamp(&self) -> String {
        format_stamp(&self.end)
    }

    /// "START/END", the form used by the calendar link's `dates` parameter.
    pub fn dates_param(&self) -> String {
        format!("{}/{}", self.start_stamp(), self.end_stamp())
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Convert an IST booking date ("DD/MM") and time ("HH:MM") in `year` into a
/// UTC window of `EVENT_DURATION_HOURS`.
pub fn derive_time_window(date: &str, time: &str, year: i32) -> ArtCalResult<TimeWindow> {
    let (day, month) = parse_day_month(date)?;
    let (hour, minute) = parse_hour_minute(time)?;

    let local: NaiveDateTime = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ArtCalError::InvalidDateFormat(date.to_string()))?
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| ArtCalError::InvalidTimeFormat(time.to_string()))?;

    let start = (local - Duration::seconds(IST_OFFSET_SECS)).and_utc();
    let end = start + Duration::hours(EVENT_DURATION_HOURS);

    Ok(TimeWindow { start, end })
}

/// Format a UTC instant as `YYYYMMDDTHHMM00Z` (seconds are always zero).
pub fn format_stamp(dt: &DateTime<Utc>) -> String {
    dt.format(STAMP_FORMAT).to_string()
}

/// Parse a `YYYYMMDDTHHMMSSZ` stamp back into a UTC instant.
pub fn parse_stamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim().strip_suffix('Z')?;
    NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S")
        .ok()
        .map(|dt| dt.and_utc())
}

fn parse_day_month(date: &str) -> ArtCalResult<(u32, u32)> {
    let invalid = || ArtCalError::InvalidDateFormat(date.to_string());

    let (day, month) = split_pair(date, '/').ok_or_else(invalid)?;
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((day, month))
}

fn parse_hour_minute(time: &str) -> ArtCalResult<(u32, u32)> {
    let invalid = || ArtCalError::InvalidTimeFormat(time.to_string());

    let (hour, minute) = split_pair(time, ':').ok_or_else(invalid)?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Split "A<sep>B" into two unsigned integers. Anything else is rejected.
fn split_pair(s: &str, sep: char) -> Option<(u32, u32)> {
    let (a, b) = s.trim().split_once(sep)?;
    Some((parse_digits(a)?, parse_digits(b)?))
}

fn parse_digits(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
