//! Infrastructure adapters module
//!
//! Adapters for reaching the node.

pub mod external_rpc;
pub mod transport;

pub use external_rpc::HttpTransport;
pub use transport::RpcTransport;
