//! Two-phase reconciliation

use std::sync::Arc;

use super::diff::compute_plan;
use crate::backend::ResourceBackend;
use crate::leadership::LeadershipGate;
use crate::observability::{Event, Logger, MetricsRegistry};
use crate::resource::{OwnerId, Resource};
use crate::store::DesiredStateStore;

/// Runs the diff-and-repair pass and owns all backend traffic.
///
/// One engine instance serves one owner. The engine never retries a failed
/// backend call and never runs on its own schedule; every pass is triggered
/// by a leadership acquisition (or an administrative override) through the
/// worker queue.
pub struct ReconciliationEngine {
    owner: OwnerId,
    store: Arc<DesiredStateStore>,
    backend: Arc<dyn ResourceBackend>,
    gate: Arc<LeadershipGate>,
    metrics: Arc<MetricsRegistry>,
}

impl ReconciliationEngine {
    /// Create an engine over the shared store, backend and gate.
    pub fn new(
        owner: OwnerId,
        store: Arc<DesiredStateStore>,
        backend: Arc<dyn ResourceBackend>,
        gate: Arc<LeadershipGate>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            owner,
            store,
            backend,
            gate,
            metrics,
        }
    }

    /// Run one reconciliation pass.
    ///
    /// Phase order is fixed: removals, leadership re-check, additions,
    /// leadership re-check, activation. Individual backend failures are
    /// logged and do not abort the pass; losing leadership between phases
    /// does.
    pub async fn reconcile(&self) {
        if !self.gate.is_elected().await {
            // A loss event overtook the trigger; nothing to do.
            return;
        }

        self.metrics.add_reconcile_started();
        let owner = self.owner.to_string();
        Logger::info(Event::ReconcileBegin, &[("owner", &owner)]);

        let rows = match self.backend.list_owned(self.owner).await {
            Ok(rows) => rows,
            Err(error) => {
                self.metrics.add_backend_failure();
                Logger::error(
                    Event::BackendCallFailed,
                    &[("call", "list_owned"), ("error", &error.to_string())],
                );
                self.abort("snapshot_failed");
                return;
            }
        };

        let plan = compute_plan(&self.store.snapshot(), rows);
        let removals = plan.removals.len().to_string();
        let additions = plan.additions.len().to_string();

        // Phase 1: retract everything the backend should no longer hold.
        for resource in plan.removals {
            self.push_withdraw(resource).await;
        }

        if !self.gate.is_elected().await {
            self.abort("leadership_lost_after_removals");
            return;
        }

        // Phase 2: install what the backend is missing.
        for resource in plan.additions {
            self.push_submit(resource).await;
        }

        if self.gate.activate_if_elected().await {
            self.metrics.add_reconcile_completed();
            Logger::info(
                Event::ReconcileComplete,
                &[
                    ("additions", &additions),
                    ("owner", &owner),
                    ("removals", &removals),
                ],
            );
        } else {
            self.abort("leadership_lost_after_additions");
        }
    }

    /// Issue one submit to the backend; failure is logged, never retried.
    pub(crate) async fn push_submit(&self, resource: Resource) {
        self.metrics.add_backend_submit();
        let key = resource.key().to_string();
        Logger::trace(Event::BackendSubmit, &[("key", &key)]);
        if let Err(error) = self.backend.submit(resource).await {
            self.metrics.add_backend_failure();
            Logger::error(
                Event::BackendCallFailed,
                &[("call", "submit"), ("error", &error.to_string()), ("key", &key)],
            );
        }
    }

    /// Issue one withdraw to the backend; failure is logged, never retried.
    pub(crate) async fn push_withdraw(&self, resource: Resource) {
        self.metrics.add_backend_withdraw();
        let key = resource.key().to_string();
        Logger::trace(Event::BackendWithdraw, &[("key", &key)]);
        if let Err(error) = self.backend.withdraw(resource).await {
            self.metrics.add_backend_failure();
            Logger::error(
                Event::BackendCallFailed,
                &[("call", "withdraw"), ("error", &error.to_string()), ("key", &key)],
            );
        }
    }

    fn abort(&self, reason: &str) {
        self.metrics.add_reconcile_aborted();
        Logger::warn(Event::ReconcileAborted, &[("reason", reason)]);
    }
}
