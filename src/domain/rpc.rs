//! RPC domain logic - operation descriptors and response envelope rules

use crate::shared::error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read API method names
pub mod methods {
    pub const GET_OBJECT: &str = "sui_getObject";
    pub const GET_OBJECTS_OWNED_BY_ADDRESS: &str = "sui_getObjectsOwnedByAddress";
    pub const GET_OBJECTS_OWNED_BY_OBJECT: &str = "sui_getObjectsOwnedByObject";
    pub const GET_RAW_OBJECT: &str = "sui_getRawObject";
}

/// A single remote call: method name plus positional parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcOperation {
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcOperation {
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Validate the operation before it leaves the process
    pub fn validate(&self) -> AppResult<()> {
        if self.method.is_empty() {
            return Err(AppError::Validation("Method name cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Wire-level response: `{result}` on success, `{error}` on failure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcEnvelope {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl RpcEnvelope {
    /// Parse raw response bytes. Anything that is not a JSON object fails as a decode error.
    pub fn parse(method: &str, bytes: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::decode(method, format!("invalid response envelope: {}", e)))
    }

    /// Remote error text, if the node reported one.
    ///
    /// `null` and `""` count as absent. Strings are taken verbatim; any
    /// other value is rendered as compact JSON.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Unwrap into the typed result. `error` wins over `result`.
    pub fn into_result<T: DeserializeOwned>(self, method: &str) -> AppResult<T> {
        if let Some(message) = self.error_message() {
            return Err(AppError::Remote(message));
        }

        let result = match self.result {
            Some(Value::Null) | None => {
                return Err(AppError::decode(method, "response carries no result"));
            }
            Some(result) => result,
        };

        serde_json::from_value(result).map_err(|e| AppError::decode(method, e))
    }
}
