//! Application configuration structures
//!
//! This module contains the main configuration structures for the client.

use crate::domain::SUI_COIN_TYPE;
use crate::shared::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Full client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Node RPC configuration
    #[validate(nested)]
    pub rpc: RpcConfig,

    /// Balance aggregation configuration
    #[validate(nested)]
    pub balance: BalanceConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Node RPC configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RpcConfig {
    /// RPC URL
    #[validate(url)]
    pub rpc_url: String,

    /// Whole-request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[validate(range(min = 1, max = 60))]
    pub connect_timeout_seconds: u64,

    /// User agent sent with every request
    #[validate(length(min = 1))]
    pub user_agent: String,
}

/// Balance aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BalanceConfig {
    /// Type tag counted as coin; matched exactly
    #[validate(length(min = 1))]
    pub coin_type: String,

    /// Per-object lookups in flight at once (1 = sequential)
    #[validate(range(min = 1, max = 64))]
    pub max_concurrent_fetches: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json, text)
    #[validate(length(min = 1))]
    pub format: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://gateway.devnet.sui.io:443".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
            user_agent: concat!("sui-read-rpc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            coin_type: SUI_COIN_TYPE.to_string(),
            max_concurrent_fetches: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl RpcConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl AppConfig {
    /// Load configuration from the `SuiRead` file (if any) and `SUI_READ__*` environment variables
    pub fn load() -> AppResult<Self> {
        Self::load_from("SuiRead")
    }

    /// Load configuration layered over the defaults from a named file and the environment
    pub fn load_from(file: &str) -> AppResult<Self> {
        let defaults = config::Config::try_from(&AppConfig::default())?;

        let config = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("SUI_READ")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_all()?;
        Ok(config)
    }

    /// Replace the RPC URL and re-run validation
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> AppResult<Self> {
        self.rpc.rpc_url = rpc_url.into();
        self.validate_all()?;
        Ok(self)
    }

    /// Non-fatal configuration warnings
    pub fn warnings(&self) -> Vec<String> {
        super::ConfigValidator::warnings(self)
    }

    /// Derive and cross-field validation
    pub fn validate_all(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;
        super::ConfigValidator::validate_config(self)
    }
}
