// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ChartRowExport, get_headers, summary_rows};
use crate::export::notify_export_success;
use crate::models::chart::ShiftChart;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_1: u32 = 0xEAF3FB;
const BAND_2: u32 = 0xFFFFFF;
const BREAK_BG: u32 = 0xFCE4D6;

/// Export XLSX: a "Chart" sheet with one styled row per bucket (break rows
/// highlighted, gaps left blank) and a "Summary" sheet.
pub(crate) fn export_xlsx(chart: &ShiftChart, rows: &[ChartRowExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Chart").map_err(to_export_error)?;
        write_chart_sheet(worksheet, rows)?;
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Summary").map_err(to_export_error)?;
        write_summary_sheet(worksheet, chart)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn cell_format(bg: u32, align: Option<FormatAlign>) -> Format {
    let fmt = Format::new()
        .set_background_color(Color::RGB(bg))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    match align {
        Some(a) => fmt.set_align(a),
        None => fmt,
    }
}

fn write_chart_sheet(worksheet: &mut Worksheet, rows: &[ChartRowExport]) -> AppResult<()> {
    let headers = get_headers();
    let hdr = header_format();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &hdr)
            .map_err(to_export_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (i, r) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let bg = if r.is_break {
            BREAK_BG
        } else if i % 2 == 0 {
            BAND_1
        } else {
            BAND_2
        };
        let text = cell_format(bg, None);
        let num = cell_format(bg, Some(FormatAlign::Right));

        worksheet
            .write_with_format(row, 0, r.time.as_str(), &text)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 1, r.target_parts as f64, &num)
            .map_err(to_export_error)?;
        match r.actual_parts {
            Some(v) => worksheet.write_with_format(row, 2, v as f64, &num),
            None => worksheet.write_blank(row, 2, &num),
        }
        .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 3, r.new_parts_in_bucket as f64, &num)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 4, if r.is_break { "yes" } else { "" }, &text)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 5, r.break_name.as_str(), &text)
            .map_err(to_export_error)?;

        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(r.time.as_str()));
        col_widths[5] = col_widths[5].max(UnicodeWidthStr::width(r.break_name.as_str()));
    }

    set_widths(worksheet, &col_widths)
}

fn write_summary_sheet(worksheet: &mut Worksheet, chart: &ShiftChart) -> AppResult<()> {
    let hdr = header_format();
    worksheet
        .write_with_format(0, 0, "metric", &hdr)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(0, 1, "value", &hdr)
        .map_err(to_export_error)?;

    let mut col_widths = vec![6usize, 5usize];
    for (i, (key, value)) in summary_rows(chart).iter().enumerate() {
        let row = (i + 1) as u32;
        let fmt = cell_format(if i % 2 == 0 { BAND_1 } else { BAND_2 }, None);
        worksheet
            .write_with_format(row, 0, *key, &fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 1, value.as_str(), &fmt)
            .map_err(to_export_error)?;
        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(*key));
        col_widths[1] = col_widths[1].max(UnicodeWidthStr::width(value.as_str()));
    }

    set_widths(worksheet, &col_widths)
}

fn set_widths(worksheet: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
