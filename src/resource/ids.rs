//! Identifier newtypes
//!
//! - `ResourceKey`: opaque, equality-comparable handle for a declared resource
//! - `OwnerId`: identity tag scoping which backend resources a synchronizer
//!   instance is responsible for
//! - `NodeId`: cluster node identity, compared against leadership events

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable key identifying a declared resource.
///
/// Keys are compared and hashed by value; the synchronizer never interprets
/// their content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// String form of the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty key is never a valid declaration.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity tag for the application owning a set of declared resources.
///
/// Backend queries and bulk removals are scoped by owner, so two
/// synchronizer instances with distinct owners never touch each other's
/// backend state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(Uuid);

impl OwnerId {
    /// Generate a fresh owner identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an externally assigned identity.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cluster node identity.
///
/// Leadership events carry the elected node's id; the gate compares it
/// against the local id to decide whether this node was named leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh node identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an externally assigned identity.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
