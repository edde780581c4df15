//! Handles settings for the application. Configuration is read from an
//! optional TOML file (`config/billboard.toml` by default), then from
//! `BILLBOARD_*` environment variables, then from the command line.
use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/billboard.toml";
const ENV_PREFIX: &str = "BILLBOARD";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Expense book JSON file.
    pub data_path: String,
    /// Log level for the workspace crates.
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: "data/expensebook.json".to_string(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "billboard", about = "Inspect the expense book")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override expense book path.
    #[arg(long)]
    data: Option<String>,
    /// Override log level (e.g. debug, info, warn).
    #[arg(long)]
    log_level: Option<String>,
}

impl AppConfig {
    pub fn load(args: Args) -> Result<Self> {
        Self::load_with_env(args, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(args: Args, env: config::Environment) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .build()?;
        let mut app_config: AppConfig = settings.try_deserialize()?;

        if let Some(data) = args.data {
            app_config.data_path = data;
        }
        if let Some(level) = args.log_level {
            app_config.level = level;
        }

        Ok(app_config)
    }
}
