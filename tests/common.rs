#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The binary, isolated from the user's real config file.
pub fn mindless(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("mindless");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Create a fresh store in `dir` with the schema and the given tasks and
/// instances. `instances` are `(task position, start, end)`, 1-based.
pub fn setup_store(dir: &TempDir, tasks: &[&str], instances: &[(i64, &str, &str)]) -> PathBuf {
    let db_path = dir.path().join("weekly_data.db");
    let conn = Connection::open(&db_path).expect("open db");
    mindless_tools::db::schema::create_schema(&conn).expect("create schema");

    conn.execute(
        "INSERT INTO users (username, name) VALUES ('jqphu', 'Justin')",
        [],
    )
    .expect("insert user");

    for name in tasks {
        conn.execute(
            "INSERT INTO tasks (user_id, name) VALUES (1, ?1)",
            params![name],
        )
        .expect("insert task");
    }

    for (task_id, start, end) in instances {
        conn.execute(
            r#"INSERT INTO instances (task_id, start, "end") VALUES (?1, ?2, ?3)"#,
            params![task_id, start, end],
        )
        .expect("insert instance");
    }

    db_path
}
