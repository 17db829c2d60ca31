//! Identity registration
//!
//! The surrounding platform assigns each application a stable owner id at
//! registration time. The synchronizer only needs the resulting `OwnerId`;
//! the trait seam keeps the registration service external.

use super::ids::OwnerId;

/// External identity/registration service.
///
/// Registration is idempotent on the service side: registering the same
/// application name twice yields the same owner id.
pub trait IdentityService: Send + Sync {
    /// Register an application and return its stable owner id.
    fn register(&self, app_name: &str) -> OwnerId;
}

/// Fixed identity for embedding and tests.
///
/// Always hands out the owner id it was constructed with, regardless of the
/// application name.
#[derive(Debug, Clone, Copy)]
pub struct StaticIdentity {
    owner: OwnerId,
}

impl StaticIdentity {
    /// Create an identity service pinned to one owner id.
    pub fn new(owner: OwnerId) -> Self {
        Self { owner }
    }
}

impl IdentityService for StaticIdentity {
    fn register(&self, _app_name: &str) -> OwnerId {
        self.owner
    }
}
