use crate::errors::{AppError, AppResult};
use crate::export::DEFAULT_OUTPUT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://127.0.0.1/mindless/api";
pub const DEFAULT_REMOTE_ENDPOINT: &str = "https://jqphu.dev/mindless/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite store read by `export`. When unset, `visualize/weekly_data.db`
    /// under the enclosing git repository is used.
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default = "default_local_endpoint")]
    pub local_endpoint: String,
    #[serde(default = "default_remote_endpoint")]
    pub remote_endpoint: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Request timeout for the seed transport; 0 disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_local_endpoint() -> String {
    DEFAULT_LOCAL_ENDPOINT.to_string()
}
fn default_remote_endpoint() -> String {
    DEFAULT_REMOTE_ENDPOINT.to_string()
}
fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            local_endpoint: default_local_endpoint(),
            remote_endpoint: default_remote_endpoint(),
            output_file: default_output_file(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mindless")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mindless.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration file unless it already exists.
    /// Returns `true` when a new file was written.
    pub fn write_default_if_missing(&self) -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())?;
        fs::write(&path, self.to_yaml()?)?;
        Ok(true)
    }
}
