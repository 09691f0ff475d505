use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::seed::{HttpTransport, Seeder, fixtures};
use crate::ui::messages::{info, success};
use std::time::Duration;

/// Base URL for this run: `--endpoint`, else remote or local from config.
pub fn select_endpoint(cfg: &Config, remote: bool, endpoint: Option<&str>) -> String {
    match endpoint {
        Some(url) => url.to_string(),
        None if remote => cfg.remote_endpoint.clone(),
        None => cfg.local_endpoint.clone(),
    }
}

/// Handle the `seed` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { remote, endpoint } = cmd {
        let base = select_endpoint(cfg, *remote, endpoint.as_deref());
        info(format!("Seeding {base}"));

        let timeout = (cfg.timeout_secs > 0).then(|| Duration::from_secs(cfg.timeout_secs));
        let seeder = Seeder::new(HttpTransport::new(&base, timeout)?);

        let users = fixtures::users();
        let groups = fixtures::task_groups()?;
        let task_count = groups.len();
        let report = seeder.run(&users, groups)?;

        tracing::debug!(reply = %report.tasks, "InsertAll reply");
        tracing::info!(users = report.users.len(), tasks = task_count, "seed completed");
        success(format!("Seeded {} users and {task_count} tasks", report.users.len()));
    }
    Ok(())
}
