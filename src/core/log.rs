use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_operation};
use crate::utils::table::Table;
use rusqlite::Connection;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "DATE", "OPERATION", "MESSAGE"]);

        for (id, raw_date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            table.add_row(vec![
                id.to_string(),
                date,
                format!("{}{}{}", color_for_operation(&operation), op_target, RESET),
                message,
            ]);
        }

        println!("📜 Internal log:\n");
        print!("{}", table.render());
        Ok(())
    }
}
