//! Engine configuration

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Engine configuration
///
/// Read by [`EngineConfig::load`] from an optional `config/fraudkb.{toml,yaml,json}`
/// file and `FRAUDKB_*` environment variables (e.g. `FRAUDKB_RULE_FILE`,
/// `FRAUDKB_LOG_LEVEL`). A `.env` file is honoured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rule file to load; `fraud_rules.json` in the working directory when unset
    pub rule_file: Option<PathBuf>,

    /// Log level for the fraudkb crates
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rule_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rule_file = Some(path.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Load configuration from environment variables and config file
    pub fn load() -> Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/fraudkb").required(false))
            .add_source(config::Environment::with_prefix("FRAUDKB"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| SdkError::ConfigError(format!("Failed to deserialize config: {}", e))),
            Err(e) => {
                tracing::info!("No usable config found ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// `tracing_subscriber::EnvFilter` directive for the fraudkb crates
    pub fn log_filter(&self) -> String {
        format!(
            "fraudkb_sdk={level},fraudkb_runtime={level}",
            level = self.log_level
        )
    }
}
