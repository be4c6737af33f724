//! Sui read RPC - typed client for the node's object read API
//!
//! Fetches objects by id, lists objects owned by an address or by a
//! parent object, fetches raw BCS-preserving objects, and aggregates the
//! native coin balance of an address.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;


pub use application::{BalanceAggregator, ReadObjectApi, ReadObjectService};
pub use config::AppConfig;
pub use domain::{
    Address, CallContext, CancelHandle, FieldValue, ObjectDetail, ObjectId, OwnershipRecord,
    RawObject, SUI_COIN_TYPE,
};
pub use infrastructure::{HttpTransport, RpcTransport};
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
