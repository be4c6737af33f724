//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::shared::error::{AppError, AppResult};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// Logging utilities for the client
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format ("json" or "text")
    pub fn initialize(level: &str, format: &str) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(std::io::stderr);

        let result = if format.eq_ignore_ascii_case("json") {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log an outgoing RPC call
    pub fn log_call(request_id: &str, method: &str, params: &[serde_json::Value]) {
        debug!(
            request_id = %request_id,
            method = %method,
            params = ?params,
            "Sending RPC call"
        );
    }

    /// Log a successful call
    pub fn log_success(request_id: &str, method: &str, duration_ms: u64) {
        debug!(
            request_id = %request_id,
            method = %method,
            duration_ms = %duration_ms,
            "RPC call completed"
        );
    }

    /// Log a failed call
    pub fn log_error(request_id: &str, method: &str, error: &AppError, duration_ms: u64) {
        warn!(
            request_id = %request_id,
            method = %method,
            error = %error,
            duration_ms = %duration_ms,
            "RPC call failed"
        );
    }

    /// Log a computed balance
    pub fn log_balance(address: &str, coin_objects: usize, total: u64) {
        info!(
            address = %address,
            coin_objects = %coin_objects,
            total = %total,
            "Balance aggregated"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        format!("req_{:x}", now)
    }
}
