//! SQLite-backed implementation of the worklog lookup.

use crate::core::repository::WorklogRepository;
use crate::db::queries::load_worklogs_by_user_and_date;
use crate::errors::AppResult;
use crate::models::worklog::Worklog;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct SqliteWorklogRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteWorklogRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl WorklogRepository for SqliteWorklogRepository<'_> {
    fn find_by_username_and_date(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<Worklog>> {
        load_worklogs_by_user_and_date(self.conn, username, &date)
    }
}
