//! Ledger object models returned by the read API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type tag of the network's native coin
pub const SUI_COIN_TYPE: &str = "0x2::coin::Coin<0x2::sui::SUI>";

/// Unique identifier of a ledger object
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Account address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

/// Who owns an object.
///
/// Shared ownership arrives either as the bare string `"Shared"` or as
/// `{"Shared": {"initial_shared_version": N}}` depending on node version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OwnerRepr")]
pub enum Owner {
    AddressOwner(Address),
    ObjectOwner(ObjectId),
    Shared { initial_shared_version: Option<u64> },
    Immutable,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OwnerRepr {
    Tagged(TaggedOwner),
    Bare(BareOwner),
}

#[derive(Deserialize)]
enum TaggedOwner {
    AddressOwner(Address),
    ObjectOwner(ObjectId),
    Shared {
        #[serde(default)]
        initial_shared_version: Option<u64>,
    },
}

#[derive(Deserialize)]
enum BareOwner {
    Shared,
    Immutable,
}

impl From<OwnerRepr> for Owner {
    fn from(repr: OwnerRepr) -> Self {
        match repr {
            OwnerRepr::Tagged(TaggedOwner::AddressOwner(address)) => Owner::AddressOwner(address),
            OwnerRepr::Tagged(TaggedOwner::ObjectOwner(id)) => Owner::ObjectOwner(id),
            OwnerRepr::Tagged(TaggedOwner::Shared { initial_shared_version }) => {
                Owner::Shared { initial_shared_version }
            }
            OwnerRepr::Bare(BareOwner::Shared) => Owner::Shared {
                initial_shared_version: None,
            },
            OwnerRepr::Bare(BareOwner::Immutable) => Owner::Immutable,
        }
    }
}

/// Versioned reference to an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub object_id: ObjectId,
    pub version: u64,
    pub digest: String,
}

/// Dynamically typed Move field value.
///
/// Mirrors the JSON shapes the node emits for struct fields. Numeric
/// access goes through the checked accessors rather than matching on
/// variants at call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<FieldValue>),
    Object(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Numeric value as `f64`. Accepts JSON numbers and base-10 numeric strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            FieldValue::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Non-negative integral value. Fractional numbers are truncated.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|v| v.is_finite() && *v >= 0.0 && *v < u64::MAX as f64)
                    .map(|v| v.trunc() as u64)
            }),
            FieldValue::String(s) => {
                let s = s.trim();
                s.parse::<u64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite() && *v >= 0.0 && *v < u64::MAX as f64)
                        .map(|v| v.trunc() as u64)
                })
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Nested field lookup on struct values
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        match self {
            FieldValue::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Decoded Move object content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveObjectData {
    pub data_type: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(rename = "has_public_transfer", alias = "hasPublicTransfer", default)]
    pub has_public_transfer: bool,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

/// Envelope around an object's data plus ownership metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDetails<D> {
    pub data: D,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub previous_transaction: Option<String>,
    #[serde(default)]
    pub storage_rebate: Option<u64>,
    #[serde(default)]
    pub reference: Option<ObjectRef>,
}

/// Result of `sui_getObject`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDetail {
    pub status: String,
    pub details: ObjectDetails<MoveObjectData>,
}

impl ObjectDetail {
    pub fn type_tag(&self) -> &str {
        &self.details.data.type_tag
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.details.data.fields.get(name)
    }

    pub fn object_id(&self) -> Option<&ObjectId> {
        self.details.reference.as_ref().map(|r| &r.object_id)
    }

    /// The `balance` field of a coin object, if present and numeric
    pub fn balance(&self) -> Option<u64> {
        self.field("balance").and_then(FieldValue::as_u64)
    }
}

/// BCS-preserving object content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObjectData {
    pub data_type: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(rename = "has_public_transfer", alias = "hasPublicTransfer", default)]
    pub has_public_transfer: bool,
    pub version: u64,
    /// Base64 encoded BCS bytes, kept exactly as returned
    #[serde(rename = "bcs_bytes", alias = "bcsBytes")]
    pub bcs_bytes: String,
}

/// Result of `sui_getRawObject`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObject {
    pub status: String,
    pub details: ObjectDetails<RawObjectData>,
}

/// One entry of an ownership listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipRecord {
    pub object_id: ObjectId,
    pub version: u64,
    pub digest: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub previous_transaction: Option<String>,
}

impl OwnershipRecord {
    /// Exact, case and whitespace sensitive type match
    pub fn is_type(&self, type_tag: &str) -> bool {
        self.type_tag == type_tag
    }
}
