use crate::errors::AppResult;
use chrono::{NaiveDate, NaiveDateTime};

/// Read side of the event store.
///
/// Implementations return the timestamps of the events recorded for
/// `form_id` inside the shift that starts on `date`, already resolved for
/// shifts crossing midnight, in ascending order.
pub trait EventSource {
    fn fetch_events(
        &self,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        form_id: i64,
    ) -> AppResult<Vec<NaiveDateTime>>;
}

/// Fixed in-memory event list, filtered the same way the database is.
#[derive(Debug, Clone, Default)]
pub struct StaticEventSource {
    pub events: Vec<(i64, NaiveDateTime)>,
}

impl EventSource for StaticEventSource {
    fn fetch_events(
        &self,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        form_id: i64,
    ) -> AppResult<Vec<NaiveDateTime>> {
        let window = crate::utils::time::ShiftWindow::parse(start_time, end_time)?;
        let (from, to) = window.datetime_bounds(date);
        let until = to + chrono::Duration::minutes(1);

        let mut out: Vec<NaiveDateTime> = self
            .events
            .iter()
            .filter(|(f, ts)| *f == form_id && *ts >= from && *ts < until)
            .map(|(_, ts)| *ts)
            .collect();
        out.sort();
        Ok(out)
    }
}
