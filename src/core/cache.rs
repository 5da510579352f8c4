//! Short-lived cache of computed charts.
//!
//! Two requests racing on the same key both compute and both write; the
//! results are identical, so the last write simply wins.

use crate::models::chart::ShiftChart;
use crate::models::shift::ShiftParameters;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub date: NaiveDate,
    pub shift: String,
    pub target_parts: u32,
    /// `f64` bit pattern of the cycle time.
    pub cycle_time_bits: u64,
    pub start_time: String,
    pub end_time: String,
    /// (name, start, end) of every break, in list order.
    pub breaks: Vec<(String, String, String)>,
    pub form_id: i64,
}

impl CacheKey {
    pub fn new(params: &ShiftParameters, form_id: i64) -> Self {
        Self {
            date: params.selected_date,
            shift: params.shift.clone(),
            target_parts: params.target_parts,
            cycle_time_bits: params.cycle_time_seconds.to_bits(),
            start_time: params.start_time.trim().to_string(),
            end_time: params.end_time.trim().to_string(),
            breaks: params
                .breaks
                .iter()
                .map(|b| (b.name.clone(), b.start_time.clone(), b.end_time.clone()))
                .collect(),
            form_id,
        }
    }
}

struct CacheEntry {
    stored_at: Instant,
    chart: ShiftChart,
}

pub struct ChartCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl ChartCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh entry for `key`, if any. A stale entry is evicted.
    pub fn get(&self, key: &CacheKey) -> Option<ShiftChart> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());

        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.chart.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store `chart` under `key`, dropping expired entries first.
    pub fn insert(&self, key: CacheKey, chart: ShiftChart) {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        let ttl = self.ttl;
        entries.retain(|_, e| e.stored_at.elapsed() < ttl);
        entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                chart,
            },
        );
    }

    /// Drop every expired entry; returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        let before = entries.len();
        let ttl = self.ttl;
        entries.retain(|_, e| e.stored_at.elapsed() < ttl);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
