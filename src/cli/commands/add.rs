use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::count_events;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Record produced parts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        form,
        count,
        source,
    } = cmd
    {
        //
        // 1. Parse date + time (mandatory)
        //
        let d = date::resolve_date(date)?;
        let submitted_at = date::parse_timestamp(d, time)?;

        //
        // 2. Form id (default from config)
        //
        let form_id = form.unwrap_or(cfg.default_form_id);

        //
        // 3. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let ids = AddLogic::apply(&mut pool, form_id, submitted_at, *count, source)?;
        let total = count_events(&pool.conn, form_id)?;

        success(format!(
            "Recorded {} part(s) for form {} at {} (form total: {})",
            ids.len(),
            form_id,
            submitted_at.format("%Y-%m-%d %H:%M:%S"),
            total
        ));
    }

    Ok(())
}
