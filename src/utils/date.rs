use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a date argument; "today" resolves to the local date.
pub fn resolve_date(s: &str) -> AppResult<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Combine a date with "HH:MM" or "HH:MM:SS".
pub fn parse_timestamp(date: NaiveDate, time: &str) -> AppResult<NaiveDateTime> {
    let t = time.trim();
    let parsed = NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| AppError::InvalidTimeFormat(time.to_string()))?;
    Ok(date.and_time(parsed))
}
