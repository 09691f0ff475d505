use clap::{Parser, Subcommand};

/// Command-line interface definition for mindless
/// Seed a mindless service with dummy data, or export tracked instances as a calendar CSV
#[derive(Parser)]
#[command(
    name = "mindless",
    version = env!("CARGO_PKG_VERSION"),
    about = "Seed the mindless time tracker with dummy data and export instances as a calendar CSV",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration and create the database tables
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Fill the service with dummy users, tasks and instances
    Seed {
        #[arg(
            long,
            conflicts_with = "endpoint",
            help = "Send the data to the remote server (default: local)"
        )]
        remote: bool,

        #[arg(long, value_name = "URL", help = "Explicit base URL of the service API")]
        endpoint: Option<String>,
    },

    /// Export all instances as a calendar CSV
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default: calendar.csv)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
