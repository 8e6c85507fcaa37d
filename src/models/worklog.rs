use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worklog {
    pub id: i32,
    pub username: String,    // ⇔ worklogs.username
    pub date: NaiveDate,     // ⇔ worklogs.date (TEXT "YYYY-MM-DD")
    pub duration: i32,       // ⇔ worklogs.duration (INT, hours)
    pub description: String, // ⇔ worklogs.description (TEXT, default '')
    pub created_at: String,  // ⇔ worklogs.created_at (TEXT, ISO8601)
}

impl Worklog {
    /// Build a worklog not yet stored.
    /// - `id = 0` (assigned by SQLite on insert)
    /// - `created_at = now() in ISO8601`
    pub fn new(
        username: impl Into<String>,
        date: NaiveDate,
        duration: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            username: username.into(),
            date,
            duration,
            description: description.into(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
