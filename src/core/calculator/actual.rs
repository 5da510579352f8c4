//! Actual curve: maps event timestamps onto the target grid and merges the
//! cumulative count into it.

use crate::errors::{AppError, AppResult};
use crate::models::chart::ChartDataPoint;
use crate::utils::time::{
    bucket_of, format_minutes_12h, is_within_window, minute_of_day, parse_time_to_minutes,
};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Event count per bucket label, plus the observed production window
/// (bucket of the earliest and of the latest event).
#[derive(Debug, Default)]
pub struct BucketTally {
    pub counts: HashMap<String, u32>,
    pub window: Option<(i64, i64)>,
}

impl BucketTally {
    pub fn count_for(&self, bucket: i64) -> u32 {
        self.counts
            .get(&format_minutes_12h(bucket))
            .copied()
            .unwrap_or(0)
    }
}

pub fn tally_events(events: &[NaiveDateTime]) -> BucketTally {
    let mut counts: HashMap<String, u32> = HashMap::new();

    for ts in events {
        let bucket = bucket_of(minute_of_day(ts));
        *counts.entry(format_minutes_12h(bucket)).or_insert(0) += 1;
    }

    // Chronological extremes: an overnight run gives first > last.
    let window = match (events.iter().min(), events.iter().max()) {
        (Some(first), Some(last)) => Some((
            bucket_of(minute_of_day(first)),
            bucket_of(minute_of_day(last)),
        )),
        _ => None,
    };

    BucketTally { counts, window }
}

/// Merge real production into `target_curve`.
///
/// * before the first event bucket the line stays at 0;
/// * inside the observed window it follows the cumulative count;
/// * after production stops it becomes a gap (`None`).
///
/// Events inside a break move the line on top of the count held when the
/// break started, and are folded into the running total once the break
/// ends.
pub fn merge_actual_curve(
    target_curve: &[ChartDataPoint],
    events: &[NaiveDateTime],
) -> AppResult<Vec<ChartDataPoint>> {
    let tally = tally_events(events);

    let mut cumulative_total: u32 = 0;
    let mut pending_from_break: u32 = 0;
    let mut held_during_break: u32 = 0;
    let mut actual_started = false;
    let mut prev_is_break = false;

    let mut merged = Vec::with_capacity(target_curve.len());

    for point in target_curve {
        let minutes = parse_time_to_minutes(&point.time).map_err(|e| {
            AppError::Internal(format!("unreadable chart label '{}': {}", point.time, e))
        })? as i64;
        let bucket = bucket_of(minutes);
        let count = tally.count_for(bucket);

        let (actual_parts, new_parts_in_bucket) = match tally.window {
            Some((first, last))
                if !actual_started && bucket < first && !is_within_window(first, last, bucket) =>
            {
                (Some(0), 0)
            }
            Some((first, last)) if is_within_window(first, last, bucket) => {
                actual_started = true;

                if point.is_break {
                    pending_from_break += count;
                    if !prev_is_break {
                        held_during_break = cumulative_total;
                    }
                    (Some(held_during_break + pending_from_break), count)
                } else {
                    if prev_is_break {
                        cumulative_total += pending_from_break;
                        pending_from_break = 0;
                    }
                    cumulative_total += count;
                    (Some(cumulative_total), count)
                }
            }
            _ => {
                if actual_started {
                    (None, 0)
                } else {
                    (Some(0), 0)
                }
            }
        };

        prev_is_break = point.is_break;

        merged.push(ChartDataPoint {
            actual_parts,
            new_parts_in_bucket,
            ..point.clone()
        });
    }

    Ok(merged)
}
