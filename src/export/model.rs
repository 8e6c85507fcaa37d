// src/export/model.rs

use crate::core::reports::DayReport;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayStatusExport {
    pub date: String,
    pub worker: String,
    pub total_hours: i64,
    pub status: String,
}

impl From<&DayReport> for DayStatusExport {
    fn from(r: &DayReport) -> Self {
        let status = r
            .summary
            .status_list()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("|");

        Self {
            date: r.summary.date().format("%Y-%m-%d").to_string(),
            worker: r.summary.worker_username().to_string(),
            total_hours: r.total_hours,
            status,
        }
    }
}
