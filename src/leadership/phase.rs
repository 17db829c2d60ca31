//! Leadership phase state machine

/// This node's position in the election for the synchronizer's topic.
///
/// Exactly one node cluster-wide may be in `Elected` or `ElectedActive` for
/// a given topic at any instant; the election service owns that guarantee.
/// Local phase may lag the global truth during hand-off windows, so every
/// side-effecting step re-checks it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadershipPhase {
    /// Not participating in the election
    Inactive,

    /// Campaigning, not currently leader
    Candidate,

    /// Leader; first reconciliation since election not yet complete
    Elected,

    /// Leader with a completed reconciliation pass; point operations are
    /// forwarded to the backend immediately
    ElectedActive,
}

impl LeadershipPhase {
    /// Whether this node currently holds write authority.
    pub fn is_elected(&self) -> bool {
        matches!(self, Self::Elected | Self::ElectedActive)
    }

    /// Whether point operations may be forwarded to the backend.
    pub fn is_activated(&self) -> bool {
        matches!(self, Self::ElectedActive)
    }

    /// Whether this node is participating in the election at all.
    pub fn is_participating(&self) -> bool {
        !matches!(self, Self::Inactive)
    }

    /// Stable name for log fields.
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Candidate => "candidate",
            Self::Elected => "elected",
            Self::ElectedActive => "elected_active",
        }
    }
}

/// Apply a leadership change to a phase.
///
/// Returns the new phase and whether a reconciliation pass must be
/// triggered. Gaining leadership always resets activation and triggers a
/// pass, even when re-elected from an already-elected phase: the backend may
/// have drifted while notifications were in flight. Losing leadership drops
/// back to `Candidate` (the campaign registration remains) and never
/// triggers backend work of its own; an in-flight pass observes the change
/// between phases and aborts.
pub fn transition(phase: LeadershipPhase, is_leader: bool) -> (LeadershipPhase, bool) {
    if is_leader {
        (LeadershipPhase::Elected, true)
    } else {
        match phase {
            LeadershipPhase::Inactive => (LeadershipPhase::Inactive, false),
            _ => (LeadershipPhase::Candidate, false),
        }
    }
}
