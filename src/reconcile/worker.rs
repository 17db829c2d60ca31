//! Single-consumer reconciliation worker
//!
//! A capacity-1 channel feeding one task makes "at most one pass in flight,
//! at most one pending" structural. Triggering never blocks: a full channel
//! means a pass is already queued, and the new trigger coalesces with it.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use super::engine::ReconciliationEngine;
use crate::observability::{Event, Logger, MetricsRegistry};

/// Owns the trigger channel and the worker task.
pub struct ReconcileWorker {
    trigger: mpsc::Sender<()>,
    handle: Mutex<Option<JoinHandle<()>>>,
    metrics: Arc<MetricsRegistry>,
}

impl ReconcileWorker {
    /// Spawn the worker loop. Must be called inside a tokio runtime.
    pub fn spawn(engine: Arc<ReconciliationEngine>, metrics: Arc<MetricsRegistry>) -> Self {
        let (trigger, mut pending) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            while pending.recv().await.is_some() {
                engine.reconcile().await;
            }
        });
        Self {
            trigger,
            handle: Mutex::new(Some(handle)),
            metrics,
        }
    }

    /// Enqueue one reconciliation pass.
    ///
    /// Returns immediately. If a pass is already pending the trigger is
    /// coalesced; if the worker is shut down the trigger is dropped.
    pub fn trigger(&self) {
        match self.trigger.try_send(()) {
            Ok(()) => {}
            Err(TrySendError::Full(())) => {
                self.metrics.add_trigger_coalesced();
                Logger::trace(Event::TriggerCoalesced, &[]);
            }
            Err(TrySendError::Closed(())) => {}
        }
    }

    /// Halt the worker.
    ///
    /// Any pass in flight is discarded without a guaranteed drain.
    pub fn shutdown(&self) {
        let handle = self.handle.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendEntry, BackendResult, ResourceBackend};
    use crate::leadership::LeadershipGate;
    use crate::resource::{NodeId, OwnerId, Resource, ResourceKey};
    use crate::store::DesiredStateStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;
    use tokio::sync::Semaphore;

    struct CountingBackend {
        lists: AtomicU64,
    }

    #[async_trait]
    impl ResourceBackend for CountingBackend {
        async fn submit(&self, _resource: Resource) -> BackendResult<()> {
            Ok(())
        }

        async fn withdraw(&self, _resource: Resource) -> BackendResult<()> {
            Ok(())
        }

        async fn list_owned(&self, _owner: OwnerId) -> BackendResult<Vec<BackendEntry>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn lifecycle(
            &self,
            _key: &ResourceKey,
        ) -> BackendResult<Option<crate::backend::LifecycleState>> {
            Ok(None)
        }
    }

    fn engine(backend: Arc<CountingBackend>, gate: Arc<LeadershipGate>) -> Arc<ReconciliationEngine> {
        Arc::new(ReconciliationEngine::new(
            OwnerId::generate(),
            Arc::new(DesiredStateStore::new()),
            backend,
            gate,
            Arc::new(MetricsRegistry::new()),
        ))
    }

    #[tokio::test]
    async fn test_trigger_runs_one_pass() {
        let backend = Arc::new(CountingBackend {
            lists: AtomicU64::new(0),
        });
        let gate = Arc::new(LeadershipGate::new("t", NodeId::generate()));
        gate.on_leadership_changed(true).await;

        let worker = ReconcileWorker::spawn(
            engine(Arc::clone(&backend), gate),
            Arc::new(MetricsRegistry::new()),
        );
        worker.trigger();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(backend.lists.load(Ordering::SeqCst), 1);
        worker.shutdown();
    }

    /// Backend double whose snapshot call parks until a permit arrives,
    /// holding a reconciliation pass open mid-flight.
    struct ParkedBackend {
        running: Semaphore,
        lists: AtomicU64,
    }

    #[async_trait]
    impl ResourceBackend for ParkedBackend {
        async fn submit(&self, _resource: Resource) -> BackendResult<()> {
            Ok(())
        }

        async fn withdraw(&self, _resource: Resource) -> BackendResult<()> {
            Ok(())
        }

        async fn list_owned(&self, _owner: OwnerId) -> BackendResult<Vec<BackendEntry>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            let permit = self.running.acquire().await.unwrap();
            permit.forget();
            Ok(Vec::new())
        }

        async fn lifecycle(
            &self,
            _key: &ResourceKey,
        ) -> BackendResult<Option<crate::backend::LifecycleState>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_trigger_coalesces_while_pass_is_pending() {
        let backend = Arc::new(ParkedBackend {
            running: Semaphore::new(0),
            lists: AtomicU64::new(0),
        });
        let gate = Arc::new(LeadershipGate::new("t", NodeId::generate()));
        gate.on_leadership_changed(true).await;

        let metrics = Arc::new(MetricsRegistry::new());
        let engine = Arc::new(ReconciliationEngine::new(
            OwnerId::generate(),
            Arc::new(DesiredStateStore::new()),
            Arc::clone(&backend) as Arc<dyn ResourceBackend>,
            gate,
            Arc::clone(&metrics),
        ));
        let worker = ReconcileWorker::spawn(engine, Arc::clone(&metrics));

        // First trigger starts a pass that parks inside list_owned.
        worker.trigger();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(backend.lists.load(Ordering::SeqCst), 1);

        // Second trigger queues; third finds the channel full and coalesces.
        worker.trigger();
        worker.trigger();
        assert_eq!(metrics.snapshot().triggers_coalesced, 1);

        // Release both passes; the coalesced trigger must not run a third.
        backend.running.add_permits(2);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(backend.lists.load(Ordering::SeqCst), 2);
        worker.shutdown();
    }

    #[tokio::test]
    async fn test_trigger_after_shutdown_is_dropped() {
        let backend = Arc::new(CountingBackend {
            lists: AtomicU64::new(0),
        });
        let gate = Arc::new(LeadershipGate::new("t", NodeId::generate()));
        gate.on_leadership_changed(true).await;

        let worker = ReconcileWorker::spawn(
            engine(Arc::clone(&backend), gate),
            Arc::new(MetricsRegistry::new()),
        );
        worker.shutdown();
        worker.trigger();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(backend.lists.load(Ordering::SeqCst), 0);
    }
}
