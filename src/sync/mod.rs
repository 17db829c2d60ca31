//! Synchronizer Facade
//!
//! The public API. Point operations (`submit`, `withdraw`) always keep
//! local desired state authoritative and forward to the backend only while
//! activated; bulk administrative operations (`remove_all`,
//! `remove_by_owner`) are leader-gated all-or-nothing and touch nothing at
//! all on a non-leader. The asymmetry is the component's contract: desired
//! state must survive leadership changes intact, while the bulk operations
//! are defined purely as "what the leader should do right now".

mod config;
mod errors;
mod synchronizer;

pub use config::SyncConfig;
pub use errors::{SyncError, SyncResult};
pub use synchronizer::Synchronizer;
