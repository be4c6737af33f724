//! Transport seam between the read API and the wire

use crate::domain::{CallContext, RpcOperation};
use crate::shared::error::AppResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Sends one RPC operation and returns the raw response body.
///
/// Implementations must be safe to share between concurrent callers.
/// Failures below the RPC envelope (I/O, timeouts, HTTP status) are
/// reported as `AppError::Transport`, cancellation as `AppError::Cancelled`.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn request(&self, ctx: &CallContext, operation: &RpcOperation) -> AppResult<Bytes>;
}
