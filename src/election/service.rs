//! Election service trait

use tokio::sync::mpsc;

use super::event::LeadershipEvent;

/// External cluster election primitive.
///
/// Fencing and overlap handling during leadership hand-off are the
/// primitive's own responsibility; consumers see only eventually-consistent
/// leader-change events.
pub trait ElectionService: Send + Sync {
    /// Register interest in leadership for `topic`.
    fn campaign(&self, topic: &str);

    /// Withdraw from the election for `topic`, relinquishing leadership if
    /// currently held.
    fn withdraw(&self, topic: &str);

    /// Subscribe to leader-change events for all topics.
    ///
    /// Events for topics the subscriber never campaigned on may be
    /// delivered; filtering is the subscriber's job.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<LeadershipEvent>;
}
