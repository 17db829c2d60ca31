//! Synchronizer configuration
//!
//! Configured externally, immutable after start.

use serde::{Deserialize, Serialize};

use super::errors::{SyncError, SyncResult};
use crate::resource::NodeId;

/// Configuration for one synchronizer instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Application name registered with the identity service
    pub app_name: String,

    /// Election topic campaigned for; leadership events for any other
    /// topic are ignored
    pub election_topic: String,

    /// Identity of the local node, compared against leadership events
    pub local_node: NodeId,

    /// Whether `stop()` performs the leader-gated flush before resigning.
    ///
    /// Disabling avoids data-plane flux during a planned switchover: the
    /// incoming leader reconciles over the still-installed state instead of
    /// reinstalling everything from scratch.
    #[serde(default = "default_withdraw_on_stop")]
    pub withdraw_on_stop: bool,
}

fn default_withdraw_on_stop() -> bool {
    true
}

impl SyncConfig {
    /// Create a configuration with the default stop behavior.
    pub fn new(
        app_name: impl Into<String>,
        election_topic: impl Into<String>,
        local_node: NodeId,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            election_topic: election_topic.into(),
            local_node,
            withdraw_on_stop: default_withdraw_on_stop(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> SyncResult<()> {
        if self.app_name.is_empty() {
            return Err(SyncError::InvalidConfig("app_name must not be empty".into()));
        }
        if self.election_topic.is_empty() {
            return Err(SyncError::InvalidConfig(
                "election_topic must not be empty".into(),
            ));
        }
        Ok(())
    }
}
