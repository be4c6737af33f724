//! Infrastructure layer - transports to the remote node

pub mod adapters;

pub use adapters::{HttpTransport, RpcTransport};
