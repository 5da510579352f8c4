use crate::core::source::EventSource;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::{ProductionEvent, TIMESTAMP_FORMAT};
use crate::utils::time::ShiftWindow;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

pub fn map_row(row: &Row) -> Result<ProductionEvent> {
    let ts_str: String = row.get("submitted_at")?;

    let submitted_at = NaiveDateTime::parse_from_str(&ts_str, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimeFormat(ts_str.clone())),
        )
    })?;

    Ok(ProductionEvent {
        id: row.get("id")?,
        form_id: row.get("form_id")?,
        submitted_at,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &ProductionEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO submissions (form_id, submitted_at, source, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![ev.form_id, ev.timestamp_str(), ev.source, ev.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Events of `form_id` with `from <= submitted_at < until`, oldest first.
pub fn load_events_in_range(
    conn: &Connection,
    form_id: i64,
    from: NaiveDateTime,
    until: NaiveDateTime,
) -> AppResult<Vec<ProductionEvent>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, form_id, submitted_at, source, created_at
         FROM submissions
         WHERE form_id = ?1 AND submitted_at >= ?2 AND submitted_at < ?3
         ORDER BY submitted_at ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            form_id,
            from.format(TIMESTAMP_FORMAT).to_string(),
            until.format(TIMESTAMP_FORMAT).to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_events(conn: &Connection, form_id: i64) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM submissions WHERE form_id = ?1",
        [form_id],
        |row| row.get(0),
    )?;
    Ok(n)
}

pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// [`EventSource`] backed by the `submissions` table.
pub struct SqliteEventSource {
    pool: DbPool,
}

impl SqliteEventSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl EventSource for SqliteEventSource {
    fn fetch_events(
        &self,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        form_id: i64,
    ) -> AppResult<Vec<NaiveDateTime>> {
        let window = ShiftWindow::parse(start_time, end_time)?;
        let (from, last_minute) = window.datetime_bounds(date);
        let until = last_minute + Duration::minutes(1);

        let events = load_events_in_range(&self.pool.conn, form_id, from, until)?;
        Ok(events.into_iter().map(|e| e.submitted_at).collect())
    }
}
