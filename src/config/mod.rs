//! Configuration management module
//!
//! Loading, validation, and access to client settings.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, BalanceConfig, LoggingConfig, RpcConfig};
pub use validation::ConfigValidator;
