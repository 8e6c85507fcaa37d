use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_worklogs;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::separator_line;
use crate::utils::hours2readable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { user, period } = cmd {
        let bounds = period.as_deref().map(date::resolve_period).transpose()?;

        let pool = DbPool::new(&cfg.database)?;
        let worklogs = load_worklogs(&pool.conn, user.as_deref(), bounds)?;

        if worklogs.is_empty() {
            info("No worklogs found.");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "DATE", "WORKER", "HOURS", "DESCRIPTION"]);
        for wl in &worklogs {
            table.add_row(vec![
                wl.id.to_string(),
                wl.date_str(),
                wl.username.clone(),
                hours2readable(i64::from(wl.duration)),
                wl.description.clone(),
            ]);
        }

        let rendered = table.render();
        let width = rendered.lines().next().map(str::len).unwrap_or(0);

        print!("{}", rendered);
        println!("{}", separator_line(&cfg.separator_char, width));
        println!("{} worklog(s)", worklogs.len());
    }

    Ok(())
}
