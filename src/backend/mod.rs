//! Backend Resource Service Interface
//!
//! The authoritative backend applies declared resources to the network. This
//! crate never talks to it directly beyond this seam:
//! - `ResourceBackend`: submit/withdraw/list, owner-scoped
//! - `LifecycleState`: backend-side installation phases
//! - `BackendEntry`: one row of an owner-scoped backend snapshot
//!
//! Call outcomes are observed through the backend's own notification
//! channel, not through these return values; an `Err` here means the call
//! itself could not be issued or was rejected outright.

mod errors;
mod lifecycle;
mod service;

pub use errors::{BackendError, BackendResult};
pub use lifecycle::LifecycleState;
pub use service::{BackendEntry, ResourceBackend};
