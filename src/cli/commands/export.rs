use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        user,
        range,
        force,
    } = cmd
    {
        let worker = cfg.resolve_worker(user.as_ref())?;
        let dates = date::period_dates(range.as_deref())?;

        let pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&pool, *format, file, &worker, &dates, *force)?;
    }
    Ok(())
}
