use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::worklog::Worklog;
use crate::ui::messages::success;
use crate::utils::date;

/// Record a new worklog.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        user,
        hours,
        description,
    } = cmd
    {
        let d = date::parse_date(date)?;
        let worker = cfg.resolve_worker(user.as_ref())?;

        let pool = DbPool::new(&cfg.database)?;
        let worklog = Worklog::new(worker, d, *hours, description.as_str());
        let id = AddLogic::apply(&pool.conn, &worklog)?;

        success(format!(
            "Worklog #{} added: {} worked {}h on {}",
            id,
            worklog.username,
            worklog.duration,
            worklog.date_str()
        ));
    }

    Ok(())
}
