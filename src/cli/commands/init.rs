use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema::create_schema;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::resolve_database;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode or when present)
///  - the `users`, `tasks` and `instances` tables of the SQLite database
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.test && cfg.write_default_if_missing()? {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let db_path = resolve_database(cli.db.as_deref(), cfg.database.as_deref())?;
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    info(format!("Database : {}", db_path.display()));

    let pool = DbPool::new(&db_path)?;
    create_schema(&pool.conn)?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
