//! Break schedule handling: normalization into minute ranges, lookup and
//! parsing of the JSON break-list payload.

use crate::errors::AppResult;
use crate::models::shift::BreakInterval;
use crate::utils::time::{is_within_window, parse_time_to_minutes};

/// A break resolved to minute-of-day bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBreak {
    pub start: i64,
    pub end: i64,
    pub name: String,
}

impl ResolvedBreak {
    pub fn contains(&self, minute: i64) -> bool {
        is_within_window(self.start, self.end, minute)
    }
}

/// A break that could not be resolved, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedBreak {
    pub name: String,
    pub reason: String,
}

/// Outcome of [`normalize_breaks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakSchedule {
    pub resolved: Vec<ResolvedBreak>,
    pub dropped: Vec<DroppedBreak>,
}

/// Resolve every usable break.
///
/// Entries with a blank start or end are skipped silently; entries that
/// fail to parse are reported in `dropped`, never failing the whole list.
pub fn normalize_breaks(breaks: &[BreakInterval]) -> BreakSchedule {
    let mut schedule = BreakSchedule::default();

    for b in breaks {
        if b.start_time.trim().is_empty() || b.end_time.trim().is_empty() {
            continue;
        }

        let bounds = parse_time_to_minutes(&b.start_time)
            .map_err(|e| e.for_field("startTime"))
            .and_then(|start| {
                parse_time_to_minutes(&b.end_time)
                    .map(|end| (start, end))
                    .map_err(|e| e.for_field("endTime"))
            });

        match bounds {
            Ok((start, end)) => schedule.resolved.push(ResolvedBreak {
                start: start as i64,
                end: end as i64,
                name: b.name.clone(),
            }),
            Err(e) => schedule.dropped.push(DroppedBreak {
                name: b.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    schedule
}

/// First break (in list order) covering `minute`. Overlaps are not merged.
pub fn find_break(breaks: &[ResolvedBreak], minute: i64) -> Option<&ResolvedBreak> {
    breaks.iter().find(|b| b.contains(minute))
}

/// Decode a JSON array of breaks. A blank payload is an empty schedule.
pub fn parse_breaks_payload(payload: &str) -> AppResult<Vec<BreakInterval>> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str::<Vec<BreakInterval>>(payload)?)
}
