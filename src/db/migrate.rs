use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// A forward-only schema step, identified by a sortable id.
struct Migration {
    id: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "20261001_0001_create_worklogs",
        description: "Created worklogs table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS worklogs (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            username     TEXT NOT NULL,
            date         TEXT NOT NULL,
            duration     INTEGER NOT NULL CHECK(duration >= 0),
            description  TEXT NOT NULL DEFAULT '',
            created_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        id: "20261001_0002_index_worklogs_user_date",
        description: "Indexed worklogs on (username, date)",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_worklogs_user_date ON worklogs(username, date);
        "#,
    },
];

/// Ensure that the `log` table exists. It also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([id], |_| Ok(())).optional()?.is_some())
}

/// Ids of the migrations already recorded in the log table.
pub fn applied_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;

    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY target ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, in order.
///
/// Each migration runs inside its own transaction together with the
/// `migration_applied` log row, so a failed step leaves nothing behind.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.id)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;

        let applied = conn
            .execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.id, e)))
            .and_then(|_| ttlog(conn, "migration_applied", m.id, m.description));

        match applied {
            Ok(()) => {
                conn.execute_batch("COMMIT;")?;
                success(format!("Migration applied: {} → {}", m.id, m.description));
            }
            Err(e) => {
                conn.execute_batch("ROLLBACK;").ok();
                return Err(e);
            }
        }
    }

    Ok(())
}
