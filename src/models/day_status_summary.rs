use super::day_status::DayStatus;
use chrono::NaiveDate;

/// Result of classifying one worker's day. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStatusSummary {
    worker_username: String,
    date: NaiveDate,
    status_list: Vec<DayStatus>,
}

impl DayStatusSummary {
    pub fn new(worker_username: impl Into<String>, date: NaiveDate, status: DayStatus) -> Self {
        Self {
            worker_username: worker_username.into(),
            date,
            status_list: vec![status],
        }
    }

    pub fn worker_username(&self) -> &str {
        &self.worker_username
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn status_list(&self) -> &[DayStatus] {
        &self.status_list
    }
}
