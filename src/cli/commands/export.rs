use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::{expand_tilde, resolve_database};

pub fn handle(cmd: &Commands, cfg: &Config, cli_db: Option<&str>) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let db_path = resolve_database(cli_db, cfg.database.as_deref())?;
        tracing::info!(db = %db_path.display(), "exporting calendar");

        let out = expand_tilde(file.as_deref().unwrap_or(&cfg.output_file));

        let pool = DbPool::open_read_only(&db_path)?;
        ExportLogic::export(&pool, &out, *force)?;
    }
    Ok(())
}
