use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const OP_WIDTH_LIMIT: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                let op_target = if target.is_empty() {
                    operation.clone()
                } else {
                    format!("{operation} ({target})")
                };

                (id, date, operation, truncate(&op_target), message)
            })
            .collect();

        let op_w = rows.iter().map(|r| r.3.chars().count()).max().unwrap_or(10);
        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);

            // only the operation word is colored; padding uses visible width
            let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));
            let colored = match op_target.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(op_target.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() > OP_WIDTH_LIMIT {
        let mut t = s.chars().take(OP_WIDTH_LIMIT - 3).collect::<String>();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
