use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `submissions` table exists.
fn submissions_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='submissions'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `submissions` has the given column.
fn submissions_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('submissions')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `submissions` table with the current schema.
fn create_submissions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS submissions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            form_id      INTEGER NOT NULL,
            submitted_at TEXT NOT NULL,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_submissions_form_time
            ON submissions(form_id, submitted_at);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Databases created before `source` existed get the column with its default.
fn migrate_add_source_column(conn: &Connection) -> Result<()> {
    let version = "20260301_0002_add_submission_source";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !submissions_has_column(conn, "source")? {
        conn.execute(
            "ALTER TABLE submissions ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'source' to submissions table",
            version
        ));
    }

    mark_applied(conn, version, "Added source column to submissions")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !submissions_table_exists(conn)? {
        create_submissions_table(conn)?;
        success("Created submissions table.");
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_submissions_form_time
                 ON submissions(form_id, submitted_at);",
        )?;
    }

    migrate_add_source_column(conn)?;

    Ok(())
}
