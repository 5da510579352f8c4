use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A break inside a shift, in the same minute-of-day space as the shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakInterval {
    #[serde(alias = "start_time")]
    pub start_time: String,
    #[serde(alias = "end_time")]
    pub end_time: String,
    pub name: String,
    pub id: Option<i64>,
}

impl BreakInterval {
    pub fn new(name: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            name: name.to_string(),
            id: None,
        }
    }
}

/// Input of a single chart computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftParameters {
    pub selected_date: NaiveDate,
    /// Informational label ("A", "Night", ...).
    pub shift: String,
    pub target_parts: u32,
    pub cycle_time_seconds: f64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
}

impl ShiftParameters {
    /// Boundary checks performed before the engine runs.
    pub fn validate(&self) -> AppResult<()> {
        if self.start_time.trim().is_empty() {
            return Err(AppError::invalid_input("startTime", "must not be blank"));
        }
        if self.end_time.trim().is_empty() {
            return Err(AppError::invalid_input("endTime", "must not be blank"));
        }
        if self.target_parts == 0 {
            return Err(AppError::invalid_input(
                "targetParts",
                "must be greater than zero",
            ));
        }
        if !self.cycle_time_seconds.is_finite() || self.cycle_time_seconds <= 0.0 {
            return Err(AppError::invalid_input(
                "cycleTimeSeconds",
                format!("must be a positive number, got {}", self.cycle_time_seconds),
            ));
        }
        Ok(())
    }
}
