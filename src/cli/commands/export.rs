use crate::cli::commands::chart::{build_request, open_service};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::write_log;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        shift,
        format,
        file,
        force,
    } = cmd
    {
        let request = build_request(shift, cfg)?;
        let service = open_service(cfg)?;
        let chart = service.shift_chart(&request)?;

        ExportLogic::export(&chart, *format, file, *force)?;

        write_log(
            service.source().conn(),
            "export",
            format.as_str(),
            &format!(
                "Exported shift {} of {} (form {}) to {}",
                request.params.shift, request.params.selected_date, request.form_id, file
            ),
        )?;
    }
    Ok(())
}
