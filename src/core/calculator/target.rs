//! Target curve: expected cumulative production per 5-minute bucket.

use crate::core::calculator::breaks::{find_break, normalize_breaks};
use crate::errors::AppResult;
use crate::models::chart::ChartDataPoint;
use crate::models::shift::BreakInterval;
use crate::utils::time::{BUCKET_MINUTES, ShiftWindow, format_minutes_12h, normalize_minutes};

/// Parts producible in one bucket at the nominal cycle rate.
pub fn parts_per_interval(cycle_time_seconds: f64) -> f64 {
    (1.0 / cycle_time_seconds) * (BUCKET_MINUTES * 60) as f64
}

/// Build the target curve from shift start to shift end inclusive.
///
/// Break buckets do not advance the target. The accumulator stays
/// unrounded; rounding and capping happen once per emitted point.
pub fn generate_target_curve(
    target_parts: u32,
    cycle_time_seconds: f64,
    start_time: &str,
    end_time: &str,
    breaks: &[BreakInterval],
) -> AppResult<Vec<ChartDataPoint>> {
    let per_interval = parts_per_interval(cycle_time_seconds);
    let breaks = normalize_breaks(breaks).resolved;
    let window = ShiftWindow::parse(start_time, end_time)?;
    let cap = target_parts as f64;

    let mut cumulative = 0.0_f64;
    let mut points = Vec::new();

    for raw in window.steps() {
        let minute = normalize_minutes(raw);
        let active_break = find_break(&breaks, minute);

        if active_break.is_none() {
            cumulative += per_interval;
        }

        points.push(ChartDataPoint {
            time: format_minutes_12h(minute),
            target_parts: cumulative.min(cap).round() as u32,
            actual_parts: Some(0),
            is_break: active_break.is_some(),
            break_name: active_break.map(|b| b.name.clone()),
            new_parts_in_bucket: 0,
        });
    }

    Ok(points)
}
