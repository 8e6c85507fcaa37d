use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DbStats {
    pub worklogs: i64,
    pub workers: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect_stats(conn: &Connection) -> AppResult<DbStats> {
    let (worklogs, workers, first_date, last_date): (i64, i64, Option<String>, Option<String>) =
        conn.query_row(
            "SELECT COUNT(*), COUNT(DISTINCT username), MIN(date), MAX(date) FROM worklogs",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )?;

    Ok(DbStats {
        worklogs,
        workers,
        first_date,
        last_date,
    })
}

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    let stats = collect_stats(conn)?;

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Worklogs:{} {}{}{}",
        CYAN, RESET, GREEN, stats.worklogs, RESET
    );
    println!("{}• Workers:{} {}", CYAN, RESET, stats.workers);

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", stats.first_date.unwrap_or_else(dash));
    println!("    to:   {}", stats.last_date.unwrap_or_else(dash));
    println!();

    Ok(())
}

/// Messages reported by `PRAGMA integrity_check`; empty when the file is sound.
pub fn integrity_problems(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA integrity_check;")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut problems = Vec::new();
    for r in rows {
        let line = r?;
        if line != "ok" {
            problems.push(line);
        }
    }
    Ok(problems)
}
