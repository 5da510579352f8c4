//! Time utilities: parsing HH:MM, 12-hour labels, 5-minute buckets and
//! overnight-aware shift windows.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 1440;
pub const BUCKET_MINUTES: i64 = 5;

/// Parse "HH:mm" (24-hour) into minutes since midnight.
///
/// Labels produced by [`format_minutes_12h`] ("3:05 PM") are accepted as
/// well, with the hour restricted to 1..=12.
pub fn parse_time_to_minutes(s: &str) -> AppResult<u32> {
    let t = s.trim();
    if t.is_empty() {
        return Err(AppError::EmptyTimeString);
    }

    let (clock, meridiem) = split_meridiem(t);

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 2 {
        return Err(AppError::InvalidTimeFormat(s.to_string()));
    }

    let malformed = || AppError::InvalidTimeFormat(s.to_string());
    let hours = parse_digits(parts[0]).ok_or_else(malformed)?;
    let minutes = parse_digits(parts[1]).ok_or_else(malformed)?;

    if !(0..=59).contains(&minutes) {
        return Err(AppError::TimeOutOfRange(s.to_string()));
    }

    let hours = match meridiem {
        None => {
            if !(0..=23).contains(&hours) {
                return Err(AppError::TimeOutOfRange(s.to_string()));
            }
            hours
        }
        Some(is_pm) => {
            if !(1..=12).contains(&hours) {
                return Err(AppError::TimeOutOfRange(s.to_string()));
            }
            hours % 12 + if is_pm { 12 } else { 0 }
        }
    };

    Ok((hours * 60 + minutes) as u32)
}

/// Unsigned decimal field: ASCII digits only, no sign.
fn parse_digits(field: &str) -> Option<i64> {
    let f = field.trim();
    if f.is_empty() || f.len() > 4 || !f.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    f.parse().ok()
}

/// Split an optional trailing AM/PM marker. `Some(true)` means PM.
fn split_meridiem(t: &str) -> (&str, Option<bool>) {
    if let Some(rest) = t.strip_suffix("PM").or_else(|| t.strip_suffix("pm")) {
        return (rest.trim_end(), Some(true));
    }
    if let Some(rest) = t.strip_suffix("AM").or_else(|| t.strip_suffix("am")) {
        return (rest.trim_end(), Some(false));
    }
    (t, None)
}

/// Format any minute value as a 12-hour clock label, e.g. "3:05 PM".
/// Values outside a single day wrap around.
pub fn format_minutes_12h(m: i64) -> String {
    let normalized = normalize_minutes(m);
    let hours = normalized / 60;
    let minutes = normalized % 60;

    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display_hour = match hours % 12 {
        0 => 12,
        h => h,
    };

    format!("{}:{:02} {}", display_hour, minutes, suffix)
}

/// Bring a minute value into [0, 1440).
pub fn normalize_minutes(m: i64) -> i64 {
    m.rem_euclid(MINUTES_PER_DAY)
}

/// Floor to the preceding 5-minute mark.
pub fn bucket_of(total_minutes: i64) -> i64 {
    total_minutes.div_euclid(BUCKET_MINUTES) * BUCKET_MINUTES
}

pub fn minute_of_day(ts: &NaiveDateTime) -> i64 {
    (ts.hour() * 60 + ts.minute()) as i64
}

/// Window membership. When `start > end` the window wraps past midnight.
pub fn is_within_window(start: i64, end: i64, value: i64) -> bool {
    if start <= end {
        start <= value && value <= end
    } else {
        value >= start || value <= end
    }
}

/// Signed duration formatted as HH:MM (e.g. "08:00", "-00:45").
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Shift bounds on a continuous minute axis.
///
/// `end` is pushed past 1440 when the shift wraps past midnight, so
/// walking from `start` to `end` always moves forward in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: i64,
    pub end: i64,
    pub overnight: bool,
}

impl ShiftWindow {
    /// An end strictly before the start wraps to the next day; equal
    /// bounds give a zero-length window.
    pub fn resolve(start_minutes: u32, end_minutes: u32) -> Self {
        let start = start_minutes as i64;
        let mut end = end_minutes as i64;
        let overnight = end < start;
        if overnight {
            end += MINUTES_PER_DAY;
        }
        Self {
            start,
            end,
            overnight,
        }
    }

    /// Parse both bounds, tagging errors with the offending parameter.
    pub fn parse(start_time: &str, end_time: &str) -> AppResult<Self> {
        let start = parse_time_to_minutes(start_time).map_err(|e| e.for_field("startTime"))?;
        let end = parse_time_to_minutes(end_time).map_err(|e| e.for_field("endTime"))?;
        Ok(Self::resolve(start, end))
    }

    pub fn length_minutes(&self) -> i64 {
        self.end - self.start
    }

    /// Raw minute values from start to end inclusive, 5 minutes apart.
    pub fn steps(&self) -> impl Iterator<Item = i64> {
        (self.start..=self.end).step_by(BUCKET_MINUTES as usize)
    }

    /// Absolute bounds for a shift starting on `date`. The end bound is the
    /// last covered minute.
    pub fn datetime_bounds(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let start = date.and_time(NaiveTime::MIN) + Duration::minutes(self.start);
        let end = start + Duration::minutes(self.length_minutes());
        (start, end)
    }
}
