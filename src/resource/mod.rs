//! Resource Model
//!
//! Value types shared by every subsystem:
//! - Opaque, immutable resource keys
//! - Owner and node identities
//! - Declared resource values with structural equality
//!
//! Structural equality (`Resource::same_definition`) deliberately ignores
//! backend-assigned bookkeeping. Two declarations of the same resource must
//! compare equal regardless of which backend instance installed them.

mod identity;
mod ids;
mod value;

pub use identity::{IdentityService, StaticIdentity};
pub use ids::{NodeId, OwnerId, ResourceKey};
pub use value::Resource;
