//! Declared resource values
//!
//! A `Resource` is an immutable declaration: a key, an owner, and an opaque
//! payload interpreted only by the backend. The backend may stamp an
//! installed resource with its own id; that bookkeeping field is excluded
//! from structural equality.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use super::ids::{OwnerId, ResourceKey};

/// An immutable declared resource.
///
/// Equality of intent is decided by [`Resource::same_definition`], never by
/// a derived `==`: the `backend_id` field is assigned by the backend after
/// installation and must not make two identical declarations compare
/// unequal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    key: ResourceKey,
    owner: OwnerId,
    payload: Value,
    /// Backend-assigned bookkeeping; `None` until the backend installs it.
    backend_id: Option<Uuid>,
}

impl Resource {
    /// Create a new declaration with no backend bookkeeping.
    pub fn new(key: ResourceKey, owner: OwnerId, payload: Value) -> Self {
        Self {
            key,
            owner,
            payload,
            backend_id: None,
        }
    }

    /// Copy of this declaration carrying a backend-assigned id.
    ///
    /// Used by backend implementations when returning installed rows.
    pub fn with_backend_id(mut self, id: Uuid) -> Self {
        self.backend_id = Some(id);
        self
    }

    /// Key this declaration is bound to.
    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    /// Owner identity tagged on this declaration.
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Opaque payload, interpreted only by the backend.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Backend bookkeeping id, if the backend assigned one.
    pub fn backend_id(&self) -> Option<Uuid> {
        self.backend_id
    }

    /// Structural equality: same key, same owner, same payload.
    ///
    /// Ignores `backend_id` so that a fetched, installed copy of a
    /// declaration compares equal to the locally declared value.
    pub fn same_definition(&self, other: &Resource) -> bool {
        self.key == other.key && self.owner == other.owner && self.payload == other.payload
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.key, self.owner)
    }
}
