// src/export/logic.rs

use crate::core::reports::ReportsService;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DayStatusExport;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Classify every date for `worker` and write one row per date.
    pub fn build_rows(
        pool: &DbPool,
        worker: &str,
        dates: &[NaiveDate],
    ) -> AppResult<Vec<DayStatusExport>> {
        let service = ReportsService::new(pool.worklogs());

        dates
            .iter()
            .map(|d| {
                service
                    .get_day_report(worker, *d)
                    .map(|r| DayStatusExport::from(&r))
            })
            .collect()
    }

    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        worker: &str,
        dates: &[NaiveDate],
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = Self::build_rows(pool, worker, dates)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} day(s) for {} to {}", rows.len(), worker, file),
        );

        Ok(())
    }
}
