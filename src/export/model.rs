// src/export/model.rs

use crate::models::chart::{ChartDataPoint, ShiftChart};
use serde::Serialize;

/// Flat row of the chart series, one per bucket.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ChartRowExport {
    pub time: String,
    pub target_parts: u32,
    /// Empty in CSV/XLSX when the bucket is a gap.
    pub actual_parts: Option<u32>,
    pub new_parts_in_bucket: u32,
    pub is_break: bool,
    pub break_name: String,
}

impl From<&ChartDataPoint> for ChartRowExport {
    fn from(p: &ChartDataPoint) -> Self {
        Self {
            time: p.time.clone(),
            target_parts: p.target_parts,
            actual_parts: p.actual_parts,
            new_parts_in_bucket: p.new_parts_in_bucket,
            is_break: p.is_break,
            break_name: p.break_name.clone().unwrap_or_default(),
        }
    }
}

pub(crate) fn chart_rows(chart: &ShiftChart) -> Vec<ChartRowExport> {
    chart.chart_data.iter().map(ChartRowExport::from).collect()
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "time",
        "target_parts",
        "actual_parts",
        "new_parts_in_bucket",
        "is_break",
        "break_name",
    ]
}

/// Summary key/value pairs, in display order.
pub(crate) fn summary_rows(chart: &ShiftChart) -> Vec<(&'static str, String)> {
    vec![
        ("current_production", chart.current_production.to_string()),
        ("target_parts", chart.target_parts.to_string()),
        ("efficiency_pct", chart.efficiency.to_string()),
        ("remaining_parts", chart.remaining_parts.to_string()),
        ("last_update", chart.last_update.to_rfc3339()),
    ]
}
