mod common;

use chrono::{NaiveDate, NaiveDateTime};
use common::{date, params, ts};
use rshiftchart::models::shift::BreakInterval;
use rshiftchart::core::cache::{CacheKey, ChartCache};
use rshiftchart::core::logic::Core;
use rshiftchart::core::service::{ChartRequest, ChartService};
use rshiftchart::core::source::{EventSource, StaticEventSource};
use rshiftchart::errors::{AppError, AppResult};
use rshiftchart::logging;
use std::cell::Cell;
use std::thread;
use std::time::Duration;

/// Static events plus a call counter.
struct CountingSource {
    inner: StaticEventSource,
    calls: Cell<usize>,
}

impl CountingSource {
    fn new(events: Vec<(i64, NaiveDateTime)>) -> Self {
        Self {
            inner: StaticEventSource { events },
            calls: Cell::new(0),
        }
    }
}

impl EventSource for CountingSource {
    fn fetch_events(
        &self,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        form_id: i64,
    ) -> AppResult<Vec<NaiveDateTime>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.fetch_events(date, start_time, end_time, form_id)
    }
}

fn request(start: &str, end: &str, target: u32, cycle: f64) -> ChartRequest {
    ChartRequest {
        params: params(start, end, target, cycle, vec![]),
        form_id: 1,
    }
}

fn sample_events() -> Vec<(i64, NaiveDateTime)> {
    vec![
        (1, ts(2026, 3, 10, 8, 2)),
        (1, ts(2026, 3, 10, 8, 12)),
        (2, ts(2026, 3, 10, 8, 12)),
        (1, ts(2026, 3, 10, 7, 59)),
        (1, ts(2026, 3, 11, 8, 12)),
    ]
}

#[test]
fn test_service_computes_chart_for_form() {
    logging::init_test();
    let service = ChartService::new(CountingSource::new(sample_events()), Duration::ZERO);

    let chart = service.shift_chart(&request("08:00", "09:00", 100, 18.0)).unwrap();

    assert_eq!(chart.current_production, 2);
    assert_eq!(chart.chart_data.len(), 13);
    assert_eq!(chart.chart_data[0].actual_parts, Some(1));
    assert_eq!(chart.chart_data[2].actual_parts, Some(2));
    assert_eq!(chart.chart_data[3].actual_parts, None);
    assert_eq!(chart.efficiency, 2);
}

#[test]
fn test_service_rejects_invalid_parameters_before_fetching() {
    let service = ChartService::new(CountingSource::new(vec![]), Duration::ZERO);

    let cases = [
        (request("08:00", "09:00", 0, 18.0), "targetParts"),
        (request("08:00", "09:00", 100, 0.0), "cycleTimeSeconds"),
        (request("08:00", "09:00", 100, -3.0), "cycleTimeSeconds"),
        (request("08:00", "09:00", 100, f64::NAN), "cycleTimeSeconds"),
        (request(" ", "09:00", 100, 18.0), "startTime"),
        (request("08:00", "", 100, 18.0), "endTime"),
    ];

    for (req, field) in cases {
        let err = service.shift_chart(&req).unwrap_err();
        assert!(err.is_client_error(), "{err}");
        match err {
            AppError::InvalidInput { field: f, .. } => assert_eq!(f, field),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(service.source().calls.get(), 0);
}

#[test]
fn test_service_reports_malformed_times_as_client_errors() {
    let service = ChartService::new(CountingSource::new(vec![]), Duration::ZERO);

    let err = service
        .shift_chart(&request("25:00", "09:00", 100, 18.0))
        .unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("startTime"));

    let err = service
        .shift_chart(&request("08:00", "9.30", 100, 18.0))
        .unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("endTime"));
}

#[test]
fn test_service_serves_repeated_requests_from_cache() {
    let service = ChartService::new(CountingSource::new(sample_events()), Duration::from_secs(60));
    let req = request("08:00", "09:00", 100, 18.0);

    let first = service.shift_chart(&req).unwrap();
    let second = service.shift_chart(&req).unwrap();

    assert_eq!(service.source().calls.get(), 1);
    assert_eq!(first, second);
    assert_eq!(service.cache().map(|c| c.len()), Some(1));

    let other_form = ChartRequest { form_id: 2, ..req.clone() };
    let chart = service.shift_chart(&other_form).unwrap();
    assert_eq!(chart.current_production, 1);
    assert_eq!(service.source().calls.get(), 2);

    let other_target = request("08:00", "09:00", 200, 18.0);
    service.shift_chart(&other_target).unwrap();
    assert_eq!(service.source().calls.get(), 3);
}

#[test]
fn test_cache_distinguishes_window_and_breaks_under_same_label() {
    let service = ChartService::new(CountingSource::new(sample_events()), Duration::from_secs(60));

    let one_hour = service.shift_chart(&request("08:00", "09:00", 100, 18.0)).unwrap();
    let two_hours = service.shift_chart(&request("08:00", "10:00", 100, 18.0)).unwrap();
    assert_eq!(one_hour.chart_data.len(), 13);
    assert_eq!(two_hours.chart_data.len(), 25);
    assert_eq!(service.source().calls.get(), 2);

    let mut with_lunch = request("08:00", "09:00", 100, 18.0);
    with_lunch.params.breaks = vec![BreakInterval::new("Lunch", "08:20", "08:40")];
    let chart = service.shift_chart(&with_lunch).unwrap();
    assert_eq!(chart.chart_data.iter().filter(|p| p.is_break).count(), 5);
    assert_eq!(service.source().calls.get(), 3);

    let mut shorter = with_lunch.clone();
    shorter.params.breaks[0].end_time = "08:30".to_string();
    let chart = service.shift_chart(&shorter).unwrap();
    assert_eq!(chart.chart_data.iter().filter(|p| p.is_break).count(), 3);
    assert_eq!(service.source().calls.get(), 4);

    // identical request is still served from cache
    service.shift_chart(&shorter).unwrap();
    assert_eq!(service.source().calls.get(), 4);
}

#[test]
fn test_service_tolerates_unusable_breaks() {
    let service = ChartService::new(CountingSource::new(sample_events()), Duration::ZERO);
    let mut req = request("08:00", "09:00", 100, 18.0);
    req.params.breaks = vec![
        BreakInterval::new("Bad", "8:+05", "08:30"),
        BreakInterval::new("Coffee", "08:30", "08:35"),
    ];

    let chart = service.shift_chart(&req).unwrap();
    let names: Vec<_> = chart
        .chart_data
        .iter()
        .filter_map(|p| p.break_name.as_deref())
        .collect();
    assert_eq!(names, vec!["Coffee", "Coffee"]);
}

#[test]
fn test_zero_ttl_disables_cache() {
    let service = ChartService::new(CountingSource::new(sample_events()), Duration::ZERO);
    let req = request("08:00", "09:00", 100, 18.0);

    service.shift_chart(&req).unwrap();
    service.shift_chart(&req).unwrap();

    assert!(service.cache().is_none());
    assert_eq!(service.source().calls.get(), 2);
}

#[test]
fn test_cache_entries_expire() {
    let cache = ChartCache::new(Duration::from_millis(50));
    let p = params("08:00", "09:00", 100, 18.0, vec![]);
    let chart = Core::compute_shift_chart(&p, &[]).unwrap();
    let key = CacheKey::new(&p, 1);

    cache.insert(key.clone(), chart.clone());
    assert_eq!(cache.get(&key), Some(chart.clone()));
    assert_eq!(cache.ttl(), Duration::from_millis(50));

    thread::sleep(Duration::from_millis(80));
    assert_eq!(cache.get(&key), None);
    assert!(cache.is_empty());

    cache.insert(key.clone(), chart);
    thread::sleep(Duration::from_millis(80));
    assert_eq!(cache.purge_expired(), 1);
    assert!(cache.is_empty());
}

#[test]
fn test_insert_evicts_expired_entries_of_other_keys() {
    let cache = ChartCache::new(Duration::from_millis(50));
    let a = params("08:00", "09:00", 100, 18.0, vec![]);
    let b = params("08:00", "10:00", 100, 18.0, vec![]);
    let chart = Core::compute_shift_chart(&a, &[]).unwrap();

    cache.insert(CacheKey::new(&a, 1), chart.clone());
    thread::sleep(Duration::from_millis(80));

    cache.insert(CacheKey::new(&b, 1), chart);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&CacheKey::new(&a, 1)), None);
    assert!(cache.get(&CacheKey::new(&b, 1)).is_some());
}

#[test]
fn test_cache_key_components() {
    let a = params("08:00", "09:00", 100, 18.0, vec![]);
    let mut b = a.clone();
    assert_eq!(CacheKey::new(&a, 1), CacheKey::new(&b, 1));
    assert_ne!(CacheKey::new(&a, 1), CacheKey::new(&b, 2));

    b.cycle_time_seconds = 18.5;
    assert_ne!(CacheKey::new(&a, 1), CacheKey::new(&b, 1));

    let mut c = a.clone();
    c.selected_date = date(2026, 3, 11);
    assert_ne!(CacheKey::new(&a, 1), CacheKey::new(&c, 1));

    let mut d = a.clone();
    d.end_time = "10:00".to_string();
    assert_ne!(CacheKey::new(&a, 1), CacheKey::new(&d, 1));

    let mut e = a.clone();
    e.breaks = vec![BreakInterval::new("Lunch", "08:20", "08:40")];
    assert_ne!(CacheKey::new(&a, 1), CacheKey::new(&e, 1));
}

#[test]
fn test_static_source_resolves_overnight_window() {
    let source = StaticEventSource {
        events: vec![
            (1, ts(2026, 3, 10, 21, 59)),
            (1, ts(2026, 3, 10, 22, 0)),
            (1, ts(2026, 3, 11, 1, 30)),
            (1, ts(2026, 3, 11, 2, 0)),
            (1, ts(2026, 3, 11, 2, 1)),
            (1, ts(2026, 3, 11, 23, 0)),
        ],
    };

    let got = source
        .fetch_events(date(2026, 3, 10), "22:00", "02:00", 1)
        .unwrap();
    assert_eq!(
        got,
        vec![
            ts(2026, 3, 10, 22, 0),
            ts(2026, 3, 11, 1, 30),
            ts(2026, 3, 11, 2, 0),
        ]
    );
}
