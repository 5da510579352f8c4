use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::event::ProductionEvent;
use chrono::NaiveDateTime;
use tracing::debug;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Record `count` production events for `form_id` at `submitted_at`,
    /// in a single transaction. Returns the new row ids.
    pub fn apply(
        pool: &mut DbPool,
        form_id: i64,
        submitted_at: NaiveDateTime,
        count: u32,
        source: &str,
    ) -> AppResult<Vec<i64>> {
        if count == 0 {
            return Err(AppError::invalid_input("count", "must be at least 1"));
        }

        let tx = pool.conn.transaction()?;
        let mut ids = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let ev = ProductionEvent::new(form_id, submitted_at, source);
            ids.push(insert_event(&tx, &ev)?);
        }

        write_log(
            &tx,
            "add",
            &format!("form {}", form_id),
            &format!(
                "Recorded {} event(s) at {}",
                count,
                submitted_at.format("%Y-%m-%d %H:%M:%S")
            ),
        )?;

        tx.commit()?;
        debug!(form_id, count, %submitted_at, "production events recorded");

        Ok(ids)
    }
}
