pub mod day_status;
pub mod day_status_summary;
pub mod worklog;
