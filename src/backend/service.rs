//! Backend service trait

use async_trait::async_trait;

use super::errors::BackendResult;
use super::lifecycle::LifecycleState;
use crate::resource::{OwnerId, Resource, ResourceKey};

/// One row of an owner-scoped backend snapshot.
#[derive(Debug, Clone)]
pub struct BackendEntry {
    /// Key the backend filed this resource under
    pub key: ResourceKey,

    /// The resource as the backend holds it (bookkeeping fields included)
    pub resource: Resource,

    /// Current lifecycle phase
    pub lifecycle: LifecycleState,
}

/// The authoritative backend resource service.
///
/// Submissions and withdrawals are accepted asynchronously: a returned `Ok`
/// means the request was issued, not that the resource is installed or
/// removed. Per-call timeouts are the implementation's concern, not the
/// caller's.
#[async_trait]
pub trait ResourceBackend: Send + Sync {
    /// Request installation of a resource.
    async fn submit(&self, resource: Resource) -> BackendResult<()>;

    /// Request withdrawal of a resource.
    async fn withdraw(&self, resource: Resource) -> BackendResult<()>;

    /// Snapshot of every resource the backend holds for `owner`.
    async fn list_owned(&self, owner: OwnerId) -> BackendResult<Vec<BackendEntry>>;

    /// Lifecycle phase of one resource, if the backend knows the key.
    async fn lifecycle(&self, key: &ResourceKey) -> BackendResult<Option<LifecycleState>>;
}
