use crate::db::log::ttlog_or_warn;
use crate::db::queries::{delete_worklog, load_worklog_by_id};
use crate::errors::{AppError, AppResult};
use crate::models::worklog::Worklog;
use rusqlite::Connection;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one worklog and return what was removed.
    pub fn apply(conn: &Connection, id: i32) -> AppResult<Worklog> {
        let worklog = load_worklog_by_id(conn, id)?.ok_or(AppError::WorklogNotFound(id))?;

        delete_worklog(conn, id)?;

        ttlog_or_warn(
            conn,
            "del",
            &format!("#{id}"),
            &format!(
                "Deleted {}h for {} on {}",
                worklog.duration,
                worklog.username,
                worklog.date_str()
            ),
        );

        Ok(worklog)
    }
}
