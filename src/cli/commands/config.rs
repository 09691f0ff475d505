use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            info(format!(
                "Current configuration ({}):\n",
                Config::config_file().display()
            ));
            println!("{}", cfg.to_yaml()?);
        } else {
            info("Nothing to do. Use --print to show the configuration.");
        }
    }

    Ok(())
}
