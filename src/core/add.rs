use crate::db::log::ttlog_or_warn;
use crate::db::queries::insert_worklog;
use crate::errors::{AppError, AppResult};
use crate::models::worklog::Worklog;
use rusqlite::Connection;

pub struct AddLogic;

impl AddLogic {
    /// Validate and store a new worklog, returning its id.
    pub fn apply(conn: &Connection, worklog: &Worklog) -> AppResult<i32> {
        if worklog.username.trim().is_empty() {
            return Err(AppError::MissingWorker);
        }
        if worklog.duration < 0 {
            return Err(AppError::InvalidDuration(worklog.duration));
        }

        let id = insert_worklog(conn, worklog)?;

        ttlog_or_warn(
            conn,
            "add",
            &format!("#{id}"),
            &format!(
                "Added {}h for {} on {}",
                worklog.duration,
                worklog.username,
                worklog.date_str()
            ),
        );

        Ok(id)
    }
}
