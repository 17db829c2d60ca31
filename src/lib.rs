//! netsync - a leader-gated declarative state synchronizer for cluster
//! control planes
//!
//! Any node declares desired resources; only the elected leader pushes them
//! to the authoritative backend; every leadership change reconciles the
//! backend to match the declared state.

pub mod backend;
pub mod election;
pub mod leadership;
pub mod observability;
pub mod reconcile;
pub mod resource;
pub mod store;
pub mod sync;

pub use backend::{BackendEntry, BackendError, LifecycleState, ResourceBackend};
pub use election::{ElectionService, LeadershipEvent};
pub use leadership::LeadershipPhase;
pub use resource::{IdentityService, NodeId, OwnerId, Resource, ResourceKey, StaticIdentity};
pub use sync::{SyncConfig, SyncError, Synchronizer};
