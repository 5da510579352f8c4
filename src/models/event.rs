use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// A recorded production event (one submitted part).
#[derive(Debug, Clone, Serialize)]
pub struct ProductionEvent {
    pub id: i64,
    pub form_id: i64,               // ⇔ submissions.form_id
    pub submitted_at: NaiveDateTime, // ⇔ submissions.submitted_at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub source: String,             // ⇔ submissions.source (TEXT, default 'cli')
    pub created_at: String,         // ⇔ submissions.created_at (TEXT, ISO8601)
}

impl ProductionEvent {
    /// Build a not-yet-persisted event (`id = 0`).
    pub fn new(form_id: i64, submitted_at: NaiveDateTime, source: &str) -> Self {
        Self {
            id: 0,
            form_id,
            submitted_at,
            source: source.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.submitted_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Storage format of `submitted_at`; sorts lexicographically.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
