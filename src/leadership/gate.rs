//! Gate around the leadership phase

use tokio::sync::{Mutex, MutexGuard};

use super::phase::{transition, LeadershipPhase};
use crate::election::LeadershipEvent;
use crate::resource::NodeId;

/// Serialized access to this node's leadership phase for one topic.
///
/// The gate's mutex is the coarse mutual-exclusion domain of the whole
/// synchronizer: the facade holds its guard across "touch desired state +
/// decide whether to call the backend", and the reconciliation engine takes
/// it between phases for its leadership re-checks. It is never held across
/// a backend call by the engine.
#[derive(Debug)]
pub struct LeadershipGate {
    topic: String,
    local_node: NodeId,
    phase: Mutex<LeadershipPhase>,
}

impl LeadershipGate {
    /// Create a gate in `Inactive` for the given topic.
    pub fn new(topic: impl Into<String>, local_node: NodeId) -> Self {
        Self {
            topic: topic.into(),
            local_node,
            phase: Mutex::new(LeadershipPhase::Inactive),
        }
    }

    /// Election topic this gate watches.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Identity of the local node.
    pub fn local_node(&self) -> NodeId {
        self.local_node
    }

    /// Lock the phase for a multi-step decision.
    ///
    /// Callers must not issue long-running work while holding the guard
    /// unless that work is part of the atomic decision itself.
    pub async fn lock(&self) -> MutexGuard<'_, LeadershipPhase> {
        self.phase.lock().await
    }

    /// Advisory copy of the current phase.
    pub async fn phase(&self) -> LeadershipPhase {
        *self.phase.lock().await
    }

    /// Whether this node currently believes it is elected.
    pub async fn is_elected(&self) -> bool {
        self.phase.lock().await.is_elected()
    }

    /// Record that a campaign was registered: `Inactive → Candidate`.
    pub async fn campaign_started(&self) {
        let mut phase = self.phase.lock().await;
        if *phase == LeadershipPhase::Inactive {
            *phase = LeadershipPhase::Candidate;
        }
    }

    /// Record withdrawal from the election: any phase → `Inactive`.
    pub async fn resigned(&self) {
        let mut phase = self.phase.lock().await;
        *phase = LeadershipPhase::Inactive;
    }

    /// Apply an election event.
    ///
    /// Events for other topics are filtered out without taking the lock and
    /// yield `None`. For a relevant event, returns whether a reconciliation
    /// pass must be triggered.
    pub async fn on_event(&self, event: &LeadershipEvent) -> Option<bool> {
        if !event.is_for_topic(&self.topic) {
            return None;
        }
        Some(
            self.on_leadership_changed(event.names_leader(self.local_node))
                .await,
        )
    }

    /// Apply a leadership change directly, as the administrative override
    /// does. Returns whether a reconciliation pass must be triggered.
    pub async fn on_leadership_changed(&self, is_leader: bool) -> bool {
        let mut phase = self.phase.lock().await;
        let (next, trigger) = transition(*phase, is_leader);
        *phase = next;
        trigger
    }

    /// Promote `Elected → ElectedActive` if still elected.
    ///
    /// Returns whether the node is activated afterwards. Called by the
    /// engine after both reconciliation phases completed under leadership.
    pub async fn activate_if_elected(&self) -> bool {
        let mut phase = self.phase.lock().await;
        if phase.is_elected() {
            *phase = LeadershipPhase::ElectedActive;
            true
        } else {
            false
        }
    }
}
