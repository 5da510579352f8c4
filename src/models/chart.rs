use chrono::{DateTime, Local};
use serde::Serialize;

/// One 5-minute bucket of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    /// 12-hour label, e.g. "3:05 PM".
    pub time: String,
    pub target_parts: u32,
    /// `None` marks a gap (no data for this bucket).
    pub actual_parts: Option<u32>,
    pub is_break: bool,
    pub break_name: Option<String>,
    pub new_parts_in_bucket: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftChart {
    pub chart_data: Vec<ChartDataPoint>,
    pub current_production: u32,
    pub target_parts: u32,
    /// Percentage of the target reached, rounded.
    pub efficiency: u32,
    pub remaining_parts: u32,
    pub last_update: DateTime<Local>,
}
