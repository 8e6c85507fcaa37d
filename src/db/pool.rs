//! SQLite connection wrapper (one connection per CLI invocation).

use crate::db::repository::SqliteWorklogRepository;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Worklog lookups backed by this connection.
    pub fn worklogs(&self) -> SqliteWorklogRepository<'_> {
        SqliteWorklogRepository::new(&self.conn)
    }
}
