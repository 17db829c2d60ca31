//! Leader-change events

use crate::resource::NodeId;

/// A leader-change notification from the election service.
///
/// `leader` is `None` when the topic currently has no leader (for example
/// while a new election is in progress).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadershipEvent {
    /// Election topic the event concerns
    pub topic: String,

    /// Node currently holding leadership for the topic, if any
    pub leader: Option<NodeId>,
}

impl LeadershipEvent {
    /// Event naming `leader` as the topic's leader.
    pub fn elected(topic: impl Into<String>, leader: NodeId) -> Self {
        Self {
            topic: topic.into(),
            leader: Some(leader),
        }
    }

    /// Event announcing the topic has no leader.
    pub fn vacant(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            leader: None,
        }
    }

    /// Whether this event concerns `topic` at all.
    pub fn is_for_topic(&self, topic: &str) -> bool {
        self.topic == topic
    }

    /// Whether this event names `node` as leader.
    pub fn names_leader(&self, node: NodeId) -> bool {
        self.leader == Some(node)
    }
}
