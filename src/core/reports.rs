use crate::core::repository::WorklogRepository;
use crate::errors::AppResult;
use crate::models::day_status::DayStatus;
use crate::models::day_status_summary::DayStatusSummary;
use crate::models::worklog::Worklog;
use chrono::NaiveDate;

/// Sum of the hours of the given worklogs (0 when empty).
pub fn total_hours(worklogs: &[Worklog]) -> i64 {
    worklogs.iter().map(|wl| i64::from(wl.duration)).sum()
}

pub struct ReportsService<R> {
    worklogs: R,
}

impl<R: WorklogRepository> ReportsService<R> {
    pub fn new(worklogs: R) -> Self {
        Self { worklogs }
    }

    /// Classify the hours `worker` logged on `date`.
    ///
    /// Worker and date are copied into the summary as given. Errors from the
    /// repository are returned unchanged.
    pub fn get_day_status_summary_for_worker_and_day(
        &self,
        worker: &str,
        date: NaiveDate,
    ) -> AppResult<DayStatusSummary> {
        self.classify(worker, date).map(|(_, summary)| summary)
    }

    /// One independent summary per date, in the order given.
    pub fn get_day_status_summaries_for_worker(
        &self,
        worker: &str,
        dates: &[NaiveDate],
    ) -> AppResult<Vec<DayStatusSummary>> {
        dates
            .iter()
            .map(|d| self.get_day_status_summary_for_worker_and_day(worker, *d))
            .collect()
    }

    /// Like [`Self::get_day_status_summary_for_worker_and_day`], also
    /// returning the summed hours for display/export.
    pub fn get_day_report(&self, worker: &str, date: NaiveDate) -> AppResult<DayReport> {
        let (total_hours, summary) = self.classify(worker, date)?;
        Ok(DayReport {
            total_hours,
            summary,
        })
    }

    fn classify(&self, worker: &str, date: NaiveDate) -> AppResult<(i64, DayStatusSummary)> {
        let worklogs = self.worklogs.find_by_username_and_date(worker, date)?;
        let total = total_hours(&worklogs);
        let status = DayStatus::from_total_hours(total);

        Ok((total, DayStatusSummary::new(worker, date, status)))
    }
}

/// A summary plus the hours it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub total_hours: i64,
    pub summary: DayStatusSummary,
}
