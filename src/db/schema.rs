use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `users`, `tasks` and `instances` tables if they are missing.
///
/// Timestamps are stored as TEXT date-times without offset.
pub fn create_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            username  TEXT NOT NULL UNIQUE,
            name      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id   INTEGER NOT NULL REFERENCES users(id),
            name      TEXT NOT NULL,
            UNIQUE(user_id, name)
        );

        CREATE TABLE IF NOT EXISTS instances (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id   INTEGER NOT NULL REFERENCES tasks(id),
            start     TEXT NOT NULL,
            "end"     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_instances_task ON instances(task_id);
        "#,
    )?;
    Ok(())
}
