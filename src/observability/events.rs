//! Observable synchronizer events
//!
//! Events are explicit and typed; free-form event names never reach the
//! logger.

/// Observable events emitted by the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Synchronizer started: identity registered, worker running, campaign
    /// issued
    SyncStart,
    /// Synchronizer stopped: worker halted, election withdrawn
    SyncStop,

    // Leadership
    /// Leadership phase changed
    LeadershipChanged,
    /// Reconciliation trigger coalesced into an already-pending pass
    TriggerCoalesced,

    // Reconciliation
    /// Reconciliation pass began
    ReconcileBegin,
    /// Reconciliation pass completed; node activated
    ReconcileComplete,
    /// Reconciliation pass aborted on leadership loss or snapshot failure
    ReconcileAborted,

    // Backend traffic
    /// Submit issued to the backend
    BackendSubmit,
    /// Withdraw issued to the backend
    BackendWithdraw,
    /// A backend call failed; repaired by the next pass
    BackendCallFailed,

    // Administrative
    /// Bulk removal skipped because this node is not elected
    BulkRemoveSkipped,
}

impl Event {
    /// Stable event name for the log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SyncStart => "SYNC_START",
            Event::SyncStop => "SYNC_STOP",
            Event::LeadershipChanged => "LEADERSHIP_CHANGED",
            Event::TriggerCoalesced => "TRIGGER_COALESCED",
            Event::ReconcileBegin => "RECONCILE_BEGIN",
            Event::ReconcileComplete => "RECONCILE_COMPLETE",
            Event::ReconcileAborted => "RECONCILE_ABORTED",
            Event::BackendSubmit => "BACKEND_SUBMIT",
            Event::BackendWithdraw => "BACKEND_WITHDRAW",
            Event::BackendCallFailed => "BACKEND_CALL_FAILED",
            Event::BulkRemoveSkipped => "BULK_REMOVE_SKIPPED",
        }
    }
}
