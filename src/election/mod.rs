//! Cluster Election Interface
//!
//! The election primitive is external; this crate only consumes its
//! contract: campaign for a topic, withdraw from it, and receive
//! leader-change events. The primitive guarantees that at most one node
//! cluster-wide is told it is leader for a topic at any instant.
//! Notifications are eventually consistent, so local leadership flags are
//! advisory snapshots, re-checked before every side-effecting step.

mod event;
mod service;

pub use event::LeadershipEvent;
pub use service::ElectionService;
