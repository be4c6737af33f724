//! HTTP transport for the node's JSON-RPC endpoint
//!
//! One POST per operation, JSON-RPC 2.0 framing, no retries.

use crate::{
    config::RpcConfig,
    domain::{CallContext, RpcOperation},
    infrastructure::adapters::transport::RpcTransport,
    shared::error::{AppError, AppResult},
};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    rpc_url: String,
}

impl HttpTransport {
    /// Create a transport from RPC configuration
    pub fn new(config: &RpcConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            rpc_url: config.rpc_url.clone(),
        })
    }

    /// Create a transport for a URL with default settings
    pub fn with_url(rpc_url: impl Into<String>) -> AppResult<Self> {
        let config = RpcConfig {
            rpc_url: rpc_url.into(),
            ..RpcConfig::default()
        };
        Self::new(&config)
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn send(&self, operation: &RpcOperation) -> AppResult<Bytes> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": Uuid::new_v4().to_string(),
            "method": operation.method,
            "params": operation.params,
        });

        let response = self
            .client
            .post(&self.rpc_url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Transport(format!("HTTP error: {}", status)));
        }

        let body = response.bytes().await?;
        debug!(method = %operation.method, bytes = body.len(), "Received RPC response");
        Ok(body)
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn request(&self, ctx: &CallContext, operation: &RpcOperation) -> AppResult<Bytes> {
        ctx.check()?;

        tokio::select! {
            result = self.send(operation) => result,
            _ = ctx.done() => Err(AppError::Cancelled),
        }
    }
}
