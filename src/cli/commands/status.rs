use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reports::ReportsService;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_status;
use crate::utils::date;
use crate::utils::formatting::{pad_left, pad_right};
use crate::utils::hours2readable;

/// Print one `<date> <worker> <hours> <STATUS>` line per requested day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { user, date, period } = cmd {
        let worker = cfg.resolve_worker(user.as_ref())?;

        let dates = match (date, period) {
            (_, Some(p)) => date::period_dates(Some(p.as_str()))?,
            (Some(d), None) => vec![date::parse_date(d)?],
            (None, None) => vec![date::today()],
        };

        let pool = DbPool::new(&cfg.database)?;
        let service = ReportsService::new(pool.worklogs());

        if dates.len() > 1 {
            header(format!("Day status for {}", worker));
        }

        for d in dates {
            let report = service.get_day_report(&worker, d)?;

            for status in report.summary.status_list() {
                println!(
                    "{} {} {} {}",
                    report.summary.date(),
                    pad_right(report.summary.worker_username(), 12),
                    pad_left(&hours2readable(report.total_hours), 4),
                    colorize_status(*status)
                );
            }
        }
    }

    Ok(())
}
