//! Path utilities: expand ~, locate the enclosing git repository, resolve
//! the store used by `export`.

use crate::errors::{AppError, AppResult};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Store location relative to the repository root.
pub const DEFAULT_DATABASE_RELATIVE_PATH: &str = "visualize/weekly_data.db";

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Working directory of the git repository containing `start`.
pub fn git_root(start: &Path) -> AppResult<PathBuf> {
    let repo = Repository::discover(start)?;
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::Config("git repository has no working directory".into()))
}

/// `--db` override, then the configured path, then the repository default.
pub fn resolve_database(cli_db: Option<&str>, configured: Option<&str>) -> AppResult<PathBuf> {
    if let Some(p) = cli_db.or(configured) {
        return Ok(expand_tilde(p));
    }

    let root = git_root(&std::env::current_dir()?)?;
    tracing::info!(root = %root.display(), "using database under git root");
    Ok(root.join(DEFAULT_DATABASE_RELATIVE_PATH))
}
