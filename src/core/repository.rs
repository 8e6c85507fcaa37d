//! Lookup capability the reports service depends on.

use crate::errors::AppResult;
use crate::models::worklog::Worklog;
use chrono::NaiveDate;

/// Read-only access to stored worklogs.
pub trait WorklogRepository {
    /// Every worklog recorded by `username` on `date`, in any order.
    fn find_by_username_and_date(&self, username: &str, date: NaiveDate)
    -> AppResult<Vec<Worklog>>;
}

impl<R: WorklogRepository + ?Sized> WorklogRepository for &R {
    fn find_by_username_and_date(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<Worklog>> {
        (**self).find_by_username_and_date(username, date)
    }
}

impl<R: WorklogRepository + ?Sized> WorklogRepository for Box<R> {
    fn find_by_username_and_date(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<Worklog>> {
        (**self).find_by_username_and_date(username, date)
    }
}
