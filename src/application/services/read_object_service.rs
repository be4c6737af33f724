//! Read API service: one method per remote read operation

use crate::{
    application::services::balance_service::BalanceAggregator,
    config::{AppConfig, BalanceConfig},
    domain::{
        methods, Address, CallContext, ObjectDetail, ObjectId, OwnershipRecord, RawObject,
        RpcEnvelope, RpcOperation,
    },
    infrastructure::adapters::{HttpTransport, RpcTransport},
    shared::{error::AppResult, logging::LoggingUtils},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Object read operations offered by a node
#[async_trait]
pub trait ReadObjectApi: Send + Sync {
    /// `sui_getObject`: decoded object details
    async fn get_object(&self, ctx: &CallContext, object_id: &ObjectId) -> AppResult<ObjectDetail>;

    /// `sui_getObjectsOwnedByAddress`: objects owned by an account, in node order
    async fn get_objects_owned_by_address(
        &self,
        ctx: &CallContext,
        address: &Address,
    ) -> AppResult<Vec<OwnershipRecord>>;

    /// `sui_getObjectsOwnedByObject`: child objects of a parent object, in node order
    async fn get_objects_owned_by_object(
        &self,
        ctx: &CallContext,
        object_id: &ObjectId,
    ) -> AppResult<Vec<OwnershipRecord>>;

    /// `sui_getRawObject`: object with its BCS bytes untouched
    async fn get_raw_object(&self, ctx: &CallContext, object_id: &ObjectId) -> AppResult<RawObject>;

    /// Sum of all coin balances held by `address`
    async fn get_balance(&self, ctx: &CallContext, address: &Address) -> AppResult<u64>;
}

/// Read API client over any [`RpcTransport`]
#[derive(Clone)]
pub struct ReadObjectService {
    transport: Arc<dyn RpcTransport>,
    balance: BalanceConfig,
}

impl ReadObjectService {
    /// Create a new service over a transport
    pub fn new(transport: Arc<dyn RpcTransport>, balance: BalanceConfig) -> Self {
        Self { transport, balance }
    }

    /// HTTP client for a node URL with default settings
    pub fn connect(rpc_url: impl Into<String>) -> AppResult<Self> {
        let transport = HttpTransport::with_url(rpc_url)?;
        Ok(Self::new(Arc::new(transport), BalanceConfig::default()))
    }

    /// HTTP client built from full configuration
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let transport = HttpTransport::new(&config.rpc)?;
        Ok(Self::new(Arc::new(transport), config.balance.clone()))
    }

    pub fn balance_config(&self) -> &BalanceConfig {
        &self.balance
    }

    /// Send one operation and unwrap its envelope into `T`
    async fn call<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        method: &str,
        params: Vec<Value>,
    ) -> AppResult<T> {
        let operation = RpcOperation::new(method, params);
        operation.validate()?;

        let request_id = LoggingUtils::generate_request_id();
        LoggingUtils::log_call(&request_id, method, &operation.params);
        let started = Instant::now();

        let result = match self.transport.request(ctx, &operation).await {
            Ok(bytes) => RpcEnvelope::parse(method, &bytes).and_then(|envelope| envelope.into_result(method)),
            Err(e) => Err(e),
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => LoggingUtils::log_success(&request_id, method, duration_ms),
            Err(e) => LoggingUtils::log_error(&request_id, method, e, duration_ms),
        }

        result
    }
}

#[async_trait]
impl ReadObjectApi for ReadObjectService {
    async fn get_object(&self, ctx: &CallContext, object_id: &ObjectId) -> AppResult<ObjectDetail> {
        self.call(ctx, methods::GET_OBJECT, vec![Value::from(object_id.as_str())])
            .await
    }

    async fn get_objects_owned_by_address(
        &self,
        ctx: &CallContext,
        address: &Address,
    ) -> AppResult<Vec<OwnershipRecord>> {
        self.call(
            ctx,
            methods::GET_OBJECTS_OWNED_BY_ADDRESS,
            vec![Value::from(address.as_str())],
        )
        .await
    }

    async fn get_objects_owned_by_object(
        &self,
        ctx: &CallContext,
        object_id: &ObjectId,
    ) -> AppResult<Vec<OwnershipRecord>> {
        self.call(
            ctx,
            methods::GET_OBJECTS_OWNED_BY_OBJECT,
            vec![Value::from(object_id.as_str())],
        )
        .await
    }

    async fn get_raw_object(&self, ctx: &CallContext, object_id: &ObjectId) -> AppResult<RawObject> {
        self.call(ctx, methods::GET_RAW_OBJECT, vec![Value::from(object_id.as_str())])
            .await
    }

    async fn get_balance(&self, ctx: &CallContext, address: &Address) -> AppResult<u64> {
        BalanceAggregator::new(self, &self.balance)
            .total(ctx, address)
            .await
    }
}
