//! Domain layer - ledger object models and RPC contract
//!
//! Types here are independent of the transport used to reach the node.

pub mod context;
pub mod object;
pub mod rpc;

pub use context::{CallContext, CancelHandle};
pub use object::{
    Address, FieldValue, MoveObjectData, ObjectDetail, ObjectDetails, ObjectId, ObjectRef,
    Owner, OwnershipRecord, RawObject, RawObjectData, SUI_COIN_TYPE,
};
pub use rpc::{methods, RpcEnvelope, RpcOperation};
