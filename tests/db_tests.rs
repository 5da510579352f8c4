mod common;

use common::{date, ts};
use rshiftchart::core::add::AddLogic;
use rshiftchart::core::service::{ChartRequest, ChartService};
use rshiftchart::core::source::EventSource;
use rshiftchart::db::initialize::init_db;
use rshiftchart::db::pool::DbPool;
use rshiftchart::db::queries::{SqliteEventSource, count_events, load_events_in_range, load_log};
use rshiftchart::errors::AppError;
use std::time::Duration;

fn seeded_pool() -> DbPool {
    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    let rows = [
        (1, ts(2026, 3, 10, 21, 59), 1),
        (1, ts(2026, 3, 10, 22, 30), 2),
        (1, ts(2026, 3, 11, 1, 59), 1),
        (1, ts(2026, 3, 11, 2, 1), 1),
        (2, ts(2026, 3, 10, 23, 0), 4),
        (1, ts(2026, 3, 11, 23, 0), 1),
    ];
    for (form, at, count) in rows {
        AddLogic::apply(&mut pool, form, at, count, "test").unwrap();
    }
    pool
}

#[test]
fn test_init_db_is_idempotent() {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    init_db(&pool.conn).unwrap();

    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|(_, _, op, _, _)| op == "migration_applied")
        .count();
    assert_eq!(applied, 1);
}

#[test]
fn test_add_records_one_row_per_part() {
    let pool = seeded_pool();

    assert_eq!(count_events(&pool.conn, 1).unwrap(), 6);
    assert_eq!(count_events(&pool.conn, 2).unwrap(), 4);
    assert_eq!(count_events(&pool.conn, 3).unwrap(), 0);

    let adds = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|(_, _, op, _, _)| op == "add")
        .count();
    assert_eq!(adds, 6);
}

#[test]
fn test_add_rejects_zero_count() {
    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    let err = AddLogic::apply(&mut pool, 1, ts(2026, 3, 10, 8, 0), 0, "cli").unwrap_err();
    assert!(matches!(err, AppError::InvalidInput { .. }));
    assert_eq!(count_events(&pool.conn, 1).unwrap(), 0);
}

#[test]
fn test_load_events_in_range_is_half_open() {
    let pool = seeded_pool();

    let events = load_events_in_range(
        &pool.conn,
        1,
        ts(2026, 3, 10, 22, 30),
        ts(2026, 3, 11, 1, 59),
    )
    .unwrap();

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.source == "test"));
    assert!(events.iter().all(|e| e.submitted_at == ts(2026, 3, 10, 22, 30)));
}

#[test]
fn test_sqlite_source_fetches_overnight_shift() {
    let source = SqliteEventSource::new(seeded_pool());

    let events = source
        .fetch_events(date(2026, 3, 10), "22:00", "02:00", 1)
        .unwrap();

    assert_eq!(
        events,
        vec![
            ts(2026, 3, 10, 22, 30),
            ts(2026, 3, 10, 22, 30),
            ts(2026, 3, 11, 1, 59),
        ]
    );
}

#[test]
fn test_sqlite_source_day_shift_excludes_other_days() {
    let source = SqliteEventSource::new(seeded_pool());

    let events = source
        .fetch_events(date(2026, 3, 11), "00:00", "23:55", 1)
        .unwrap();
    assert_eq!(events.len(), 3);
}

#[test]
fn test_service_over_sqlite() {
    let service = ChartService::new(SqliteEventSource::new(seeded_pool()), Duration::from_secs(30));

    let request = ChartRequest {
        params: common::params("22:00", "02:00", 1300, 20.0, vec![]),
        form_id: 1,
    };
    let chart = service.shift_chart(&request).unwrap();

    assert_eq!(chart.current_production, 3);
    let at = |label: &str| {
        chart
            .chart_data
            .iter()
            .find(|p| p.time == label)
            .unwrap()
            .actual_parts
    };
    assert_eq!(at("10:25 PM"), Some(0));
    assert_eq!(at("10:30 PM"), Some(2));
    assert_eq!(at("1:55 AM"), Some(3));
    assert_eq!(at("2:00 AM"), None);
}
