// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::chart_rows;
use crate::export::xlsx::export_xlsx;
use crate::models::chart::ShiftChart;
use std::path::Path;
use tracing::info;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write a computed chart to `file`.
    ///
    /// - `format`: csv (one row per bucket), json (whole chart with summary),
    ///   xlsx (chart sheet + summary sheet)
    /// - `file`: absolute output path
    /// - `force`: overwrite without asking
    pub fn export(chart: &ShiftChart, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::invalid_input(
                "file",
                format!("output file path must be absolute: {file}"),
            ));
        }

        ensure_writable(path, force)?;

        let rows = chart_rows(chart);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(chart, path)?,
            ExportFormat::Xlsx => export_xlsx(chart, &rows, path)?,
        }

        info!(
            format = format.as_str(),
            path = %path.display(),
            rows = rows.len(),
            "chart exported"
        );

        Ok(())
    }
}
