use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{applied_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `db` subcommand. Flags run in the order migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Running migrations…");
        run_pending_migrations(&pool.conn)?;
        let applied = applied_migrations(&pool.conn)?;
        success(format!("{} migration(s) applied:", applied.len()));
        for id in applied {
            println!("  • {}", id);
        }
    }

    if *show_info {
        stats::print_db_info(&pool.conn, &cfg.database)?;
    }

    if *check {
        let problems = stats::integrity_problems(&pool.conn)?;
        if !problems.is_empty() {
            return Err(AppError::Other(format!(
                "integrity check failed for {}: {}",
                cfg.database,
                problems.join("; ")
            )));
        }
        success("Integrity check passed.");
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        success(format!("Vacuum completed on {}", cfg.database));
    }

    Ok(())
}
