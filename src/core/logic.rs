use crate::core::calculator::{actual, summary, target};
use crate::errors::AppResult;
use crate::models::chart::ShiftChart;
use crate::models::shift::ShiftParameters;
use chrono::{DateTime, Local, NaiveDateTime};

/// Pure shift chart engine. No I/O, no logging of its own beyond the
/// dropped-break warnings.
pub struct Core;

impl Core {
    pub fn compute_shift_chart(
        params: &ShiftParameters,
        events: &[NaiveDateTime],
    ) -> AppResult<ShiftChart> {
        Self::compute_shift_chart_at(params, events, Local::now())
    }

    /// Same as [`Core::compute_shift_chart`] with an explicit `lastUpdate`.
    pub fn compute_shift_chart_at(
        params: &ShiftParameters,
        events: &[NaiveDateTime],
        now: DateTime<Local>,
    ) -> AppResult<ShiftChart> {
        let target_curve = target::generate_target_curve(
            params.target_parts,
            params.cycle_time_seconds,
            &params.start_time,
            &params.end_time,
            &params.breaks,
        )?;

        let chart_data = actual::merge_actual_curve(&target_curve, events)?;
        let metrics = summary::calculate_summary(params.target_parts, events.len());

        Ok(ShiftChart {
            chart_data,
            current_production: metrics.current_production,
            target_parts: params.target_parts,
            efficiency: metrics.efficiency,
            remaining_parts: metrics.remaining_parts,
            last_update: now,
        })
    }
}
