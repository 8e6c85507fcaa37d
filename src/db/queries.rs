use crate::errors::{AppError, AppResult};
use crate::models::worklog::Worklog;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

pub fn map_row(row: &Row) -> Result<Worklog> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Worklog {
        id: row.get("id")?,
        username: row.get("username")?,
        date,
        duration: row.get("duration")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a worklog and return the id SQLite assigned to it.
pub fn insert_worklog(conn: &Connection, wl: &Worklog) -> AppResult<i32> {
    conn.execute(
        "INSERT INTO worklogs (username, date, duration, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            wl.username,
            wl.date_str(),
            wl.duration,
            wl.description,
            wl.created_at,
        ],
    )?;

    i32::try_from(conn.last_insert_rowid())
        .map_err(|_| AppError::Other("worklog id out of range".into()))
}

pub fn load_worklogs_by_user_and_date(
    conn: &Connection,
    username: &str,
    date: &NaiveDate,
) -> AppResult<Vec<Worklog>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM worklogs
         WHERE username = ?1 AND date = ?2
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![username, date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_worklog_by_id(conn: &Connection, id: i32) -> AppResult<Option<Worklog>> {
    let wl = conn
        .query_row("SELECT * FROM worklogs WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(wl)
}

/// Worklogs filtered by an optional user and an optional inclusive date range,
/// ordered by date then id.
pub fn load_worklogs(
    conn: &Connection,
    username: Option<&str>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Worklog>> {
    let mut sql = String::from("SELECT * FROM worklogs WHERE 1 = 1");
    let mut args: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(u) = username {
        sql.push_str(" AND username = ?");
        args.push(Box::new(u.to_string()));
    }

    if let Some((start, end)) = bounds {
        sql.push_str(" AND date BETWEEN ? AND ?");
        args.push(Box::new(start.format("%Y-%m-%d").to_string()));
        args.push(Box::new(end.format("%Y-%m-%d").to_string()));
    }

    sql.push_str(" ORDER BY date ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete a worklog. Returns the number of removed rows (0 or 1).
pub fn delete_worklog(conn: &Connection, id: i32) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM worklogs WHERE id = ?1", [id])?;
    Ok(n)
}

/// Rows of the internal log table, oldest first: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> AppResult<Vec<(i32, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
