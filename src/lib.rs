//! mindless-tools library root.
//! Exposes the CLI parser, the high-level run() function, and the seed and
//! export pipelines.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod seed;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Seed { .. } => cli::commands::seed::handle(&cli.command, cfg),
        Commands::Export { .. } => {
            cli::commands::export::handle(&cli.command, cfg, cli.db.as_deref())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logger::init_cli_logger(cli.verbose);

    // config caricata una sola volta
    let cfg = Config::load()?;
    tracing::debug!(?cfg, "configuration loaded");

    dispatch(&cli, &cfg)
}
