//! Handles settings for the application. Configuration is read from
//! `settings.toml` (optional) and `EXPENSE_TRACKER__*` environment variables.
//!
//! ```toml
//! [app]
//! level = "debug"
//!
//! [server]
//! bind = "0.0.0.0"
//! port = 8080
//! ledger = "/var/lib/expense_tracker/user_data.csv"
//! ```
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    /// Path of the shared ledger file.
    pub ledger: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            ledger: "user_data.csv".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

#[derive(Debug, Parser)]
#[command(name = "expense_tracker", version)]
struct Args {
    /// Settings file path, without or with extension.
    #[arg(long)]
    config: Option<String>,
    /// Override the ledger file path.
    #[arg(long, env = "EXPENSE_TRACKER_LEDGER")]
    ledger: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        let args = Args::parse();
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        let mut settings = Self::load(config_path)?;
        if let Some(ledger) = args.ledger {
            settings.server.ledger = ledger;
        }

        Ok(settings)
    }

    fn load(config_path: &str) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("EXPENSE_TRACKER").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
