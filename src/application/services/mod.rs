//! Application services
//!
//! The read API client and the balance aggregator built on it.

pub mod balance_service;
pub mod read_object_service;

pub use balance_service::BalanceAggregator;
pub use read_object_service::{ReadObjectApi, ReadObjectService};
