//! Synchronizer counters
//!
//! Counters only; monotonic; reset only on process start. Relaxed ordering
//! is sufficient, metrics tolerate eventual consistency.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for one synchronizer instance.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Reconciliation passes begun
    reconcile_started: AtomicU64,
    /// Reconciliation passes completed with activation
    reconcile_completed: AtomicU64,
    /// Reconciliation passes aborted (leadership loss or snapshot failure)
    reconcile_aborted: AtomicU64,
    /// Submit calls issued to the backend
    backend_submits: AtomicU64,
    /// Withdraw calls issued to the backend
    backend_withdraws: AtomicU64,
    /// Backend calls that failed
    backend_failures: AtomicU64,
    /// Reconciliation triggers coalesced into a pending pass
    triggers_coalesced: AtomicU64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a reconciliation pass starting.
    pub fn add_reconcile_started(&self) {
        self.reconcile_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a reconciliation pass completing with activation.
    pub fn add_reconcile_completed(&self) {
        self.reconcile_completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Count an aborted reconciliation pass.
    pub fn add_reconcile_aborted(&self) {
        self.reconcile_aborted.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a submit call issued to the backend.
    pub fn add_backend_submit(&self) {
        self.backend_submits.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a withdraw call issued to the backend.
    pub fn add_backend_withdraw(&self) {
        self.backend_withdraws.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a failed backend call.
    pub fn add_backend_failure(&self) {
        self.backend_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a coalesced reconciliation trigger.
    pub fn add_trigger_coalesced(&self) {
        self.triggers_coalesced.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reconcile_started: self.reconcile_started.load(Ordering::Relaxed),
            reconcile_completed: self.reconcile_completed.load(Ordering::Relaxed),
            reconcile_aborted: self.reconcile_aborted.load(Ordering::Relaxed),
            backend_submits: self.backend_submits.load(Ordering::Relaxed),
            backend_withdraws: self.backend_withdraws.load(Ordering::Relaxed),
            backend_failures: self.backend_failures.load(Ordering::Relaxed),
            triggers_coalesced: self.triggers_coalesced.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of the counters for assertions and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Reconciliation passes begun
    pub reconcile_started: u64,
    /// Reconciliation passes completed with activation
    pub reconcile_completed: u64,
    /// Reconciliation passes aborted
    pub reconcile_aborted: u64,
    /// Submit calls issued
    pub backend_submits: u64,
    /// Withdraw calls issued
    pub backend_withdraws: u64,
    /// Failed backend calls
    pub backend_failures: u64,
    /// Coalesced triggers
    pub triggers_coalesced: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.reconcile_started, 0);
        assert_eq!(snapshot.backend_submits, 0);
        assert_eq!(snapshot.backend_failures, 0);
    }

    #[test]
    fn test_counters_accumulate() {
        let metrics = MetricsRegistry::new();
        metrics.add_reconcile_started();
        metrics.add_reconcile_started();
        metrics.add_backend_withdraw();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.reconcile_started, 2);
        assert_eq!(snapshot.backend_withdraws, 1);
        assert_eq!(snapshot.reconcile_completed, 0);
    }
}
