//! Configuration validation module
//!
//! Checks that go beyond the validator crate's field attributes.

use crate::config::app_config::{AppConfig, BalanceConfig};
use crate::shared::error::{AppError, AppResult};

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> AppResult<()> {
        Self::validate_rpc_url(&config.rpc.rpc_url)?;
        Self::validate_balance_config(&config.balance)?;
        Ok(())
    }

    fn validate_rpc_url(url: &str) -> AppResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Validation(
                "RPC URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }

    /// Non-fatal findings, reported once logging is up
    pub fn warnings(config: &AppConfig) -> Vec<String> {
        let url = &config.rpc.rpc_url;
        let mut warnings = Vec::new();

        if url.starts_with("http://") && !(url.contains("localhost") || url.contains("127.0.0.1")) {
            warnings.push(format!("RPC URL is not using HTTPS: {}", url));
        }

        warnings
    }

    fn validate_balance_config(balance: &BalanceConfig) -> AppResult<()> {
        if balance.coin_type.trim() != balance.coin_type {
            return Err(AppError::Validation(
                "Coin type must not carry leading or trailing whitespace".to_string(),
            ));
        }

        if !balance.coin_type.contains("::") {
            return Err(AppError::Validation(format!(
                "Coin type is not a Move type tag: {}",
                balance.coin_type
            )));
        }

        Ok(())
    }
}
