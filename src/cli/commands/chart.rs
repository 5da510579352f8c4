use crate::cli::parser::{Commands, ShiftArgs};
use crate::config::Config;
use crate::core::calculator::breaks::parse_breaks_payload;
use crate::core::service::{ChartRequest, ChartService};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::SqliteEventSource;
use crate::errors::{AppError, AppResult};
use crate::models::chart::ShiftChart;
use crate::models::shift::ShiftParameters;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, color_for_efficiency, color_for_progress};
use crate::utils::date;
use crate::utils::format_actual;
use crate::utils::formatting::{bold, format_percent};
use crate::utils::table::{Column, Table};
use crate::utils::time::{ShiftWindow, format_minutes};
use std::thread;
use std::time::Duration;
use tracing::warn;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { shift, json, watch } = cmd {
        let request = build_request(shift, cfg)?;
        let service = open_service(cfg)?;

        match watch {
            None => {
                let chart = service.shift_chart(&request)?;
                render(&request, &chart, *json)?;
            }
            Some(secs) => {
                let interval = Duration::from_secs((*secs).max(1));
                loop {
                    let chart = service.shift_chart(&request)?;
                    // clear screen + home
                    print!("\x1b[2J\x1b[H");
                    render(&request, &chart, *json)?;
                    thread::sleep(interval);
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn open_service(cfg: &Config) -> AppResult<ChartService<SqliteEventSource>> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(ChartService::new(
        SqliteEventSource::new(pool),
        Duration::from_secs(cfg.cache_ttl_seconds),
    ))
}

/// Merge CLI flags over the selected preset into a chart request.
pub(crate) fn build_request(args: &ShiftArgs, cfg: &Config) -> AppResult<ChartRequest> {
    let selected_date = date::resolve_date(&args.date)?;

    let preset = match &args.preset {
        Some(name) => Some(cfg.preset(name)?),
        None => None,
    };

    let start_time = args
        .start
        .clone()
        .or_else(|| preset.map(|p| p.start_time.clone()))
        .ok_or_else(|| AppError::invalid_input("startTime", "use --start or --preset"))?;

    let end_time = args
        .end
        .clone()
        .or_else(|| preset.map(|p| p.end_time.clone()))
        .ok_or_else(|| AppError::invalid_input("endTime", "use --end or --preset"))?;

    let target_parts = args
        .target
        .or_else(|| preset.map(|p| p.target_parts))
        .ok_or_else(|| AppError::invalid_input("targetParts", "use --target or --preset"))?;

    let cycle_time_seconds = args
        .cycle
        .or_else(|| preset.map(|p| p.cycle_time_seconds))
        .ok_or_else(|| AppError::invalid_input("cycleTimeSeconds", "use --cycle or --preset"))?;

    let breaks = match &args.breaks {
        Some(payload) => parse_breaks_payload(payload).unwrap_or_else(|e| {
            warn!(error = %e, "malformed break list, continuing without breaks");
            Vec::new()
        }),
        None => preset.map(|p| p.breaks.clone()).unwrap_or_default(),
    };

    let shift = args
        .shift
        .clone()
        .or_else(|| preset.map(|p| p.name.clone()))
        .unwrap_or_else(|| "custom".to_string());

    Ok(ChartRequest {
        params: ShiftParameters {
            selected_date,
            shift,
            target_parts,
            cycle_time_seconds,
            start_time,
            end_time,
            breaks,
        },
        form_id: args.form.unwrap_or(cfg.default_form_id),
    })
}

fn render(request: &ChartRequest, chart: &ShiftChart, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(chart)?);
        return Ok(());
    }

    let p = &request.params;
    let window = ShiftWindow::parse(&p.start_time, &p.end_time)?;

    header(format!(
        "Shift {} · {} · {}–{}{} · form {}",
        p.shift,
        p.selected_date,
        p.start_time,
        p.end_time,
        if window.overnight { " (+1d)" } else { "" },
        request.form_id
    ));
    println!(
        "Length: {}   Cycle: {}s   Target: {}",
        format_minutes(window.length_minutes()),
        p.cycle_time_seconds,
        p.target_parts
    );
    println!();

    let mut table = Table::new(vec![
        Column::right("Time", 8),
        Column::right("Target", 7),
        Column::right("Actual", 7),
        Column::right("New", 5),
        Column::left("Break", 16),
    ]);

    for point in &chart.chart_data {
        let row = vec![
            point.time.clone(),
            point.target_parts.to_string(),
            format_actual(point.actual_parts),
            point.new_parts_in_bucket.to_string(),
            point.break_name.clone().unwrap_or_default(),
        ];

        let color = if point.is_break {
            CYAN
        } else {
            color_for_progress(point.actual_parts, point.target_parts)
        };
        table.add_colored_row(row, color);
    }

    print!("{}", table.render());
    println!();

    let eff_color = color_for_efficiency(chart.efficiency);
    println!(
        "{} {} / {}   {} {}{}{}   {} {}",
        bold("Produced:"),
        chart.current_production,
        chart.target_parts,
        bold("Efficiency:"),
        eff_color,
        format_percent(chart.efficiency),
        RESET,
        bold("Remaining:"),
        chart.remaining_parts
    );
    println!(
        "Last update: {}",
        chart.last_update.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
