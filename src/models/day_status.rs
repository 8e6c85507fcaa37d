use serde::Serialize;
use std::fmt;

/// Hours a worker is expected to log on a single day.
pub const EXPECTED_DAY_HOURS: i64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    MissingHours,
    RightHours,
    ExtraHours,
}

impl DayStatus {
    /// Classify the total hours logged for one day.
    pub fn from_total_hours(total: i64) -> Self {
        match total.cmp(&EXPECTED_DAY_HOURS) {
            std::cmp::Ordering::Less => DayStatus::MissingHours,
            std::cmp::Ordering::Equal => DayStatus::RightHours,
            std::cmp::Ordering::Greater => DayStatus::ExtraHours,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::MissingHours => "MISSING_HOURS",
            DayStatus::RightHours => "RIGHT_HOURS",
            DayStatus::ExtraHours => "EXTRA_HOURS",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
