//! The synchronizer facade

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use super::config::SyncConfig;
use super::errors::{SyncError, SyncResult};
use crate::backend::ResourceBackend;
use crate::election::ElectionService;
use crate::leadership::{LeadershipGate, LeadershipPhase};
use crate::observability::{Event, Logger, MetricsRegistry, MetricsSnapshot};
use crate::reconcile::{ReconcileWorker, ReconciliationEngine};
use crate::resource::{IdentityService, OwnerId, Resource, ResourceKey};
use crate::store::DesiredStateStore;

/// Leader-gated declarative state synchronizer.
///
/// Any node may declare resources through `submit`/`withdraw`; only the
/// elected leader ever pushes declarations to the backend. On every
/// transition into leadership one reconciliation pass aligns the backend
/// with the declared state before point operations start flowing through.
pub struct Synchronizer {
    config: SyncConfig,
    owner: OwnerId,
    store: Arc<DesiredStateStore>,
    election: Arc<dyn ElectionService>,
    gate: Arc<LeadershipGate>,
    engine: Arc<ReconciliationEngine>,
    worker: Arc<ReconcileWorker>,
    metrics: Arc<MetricsRegistry>,
    event_pump: Mutex<Option<JoinHandle<()>>>,
}

impl Synchronizer {
    /// Build a synchronizer. Must be called inside a tokio runtime; the
    /// reconciliation worker task is spawned here and idles until
    /// leadership arrives.
    pub fn new(
        config: SyncConfig,
        identity: &dyn IdentityService,
        backend: Arc<dyn ResourceBackend>,
        election: Arc<dyn ElectionService>,
    ) -> SyncResult<Self> {
        config.validate()?;
        let owner = identity.register(&config.app_name);

        let store = Arc::new(DesiredStateStore::new());
        let metrics = Arc::new(MetricsRegistry::new());
        let gate = Arc::new(LeadershipGate::new(
            config.election_topic.clone(),
            config.local_node,
        ));
        let engine = Arc::new(ReconciliationEngine::new(
            owner,
            Arc::clone(&store),
            backend,
            Arc::clone(&gate),
            Arc::clone(&metrics),
        ));
        let worker = Arc::new(ReconcileWorker::spawn(
            Arc::clone(&engine),
            Arc::clone(&metrics),
        ));

        Ok(Self {
            config,
            owner,
            store,
            election,
            gate,
            engine,
            worker,
            metrics,
            event_pump: Mutex::new(None),
        })
    }

    /// Start participating: subscribe to leadership events and campaign for
    /// the election topic.
    pub async fn start(&self) {
        let mut events = self.election.subscribe();
        let gate = Arc::clone(&self.gate);
        let worker = Arc::clone(&self.worker);
        let pump = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                if let Some(trigger) = gate.on_event(&event).await {
                    let phase = gate.phase().await;
                    Logger::info(
                        Event::LeadershipChanged,
                        &[("phase", phase.state_name()), ("topic", gate.topic())],
                    );
                    if trigger {
                        worker.trigger();
                    }
                }
            }
        });
        *self.event_pump.lock().unwrap_or_else(|e| e.into_inner()) = Some(pump);

        self.gate.campaign_started().await;
        self.election.campaign(&self.config.election_topic);

        let owner = self.owner.to_string();
        Logger::info(
            Event::SyncStart,
            &[
                ("app", &self.config.app_name),
                ("owner", &owner),
                ("topic", &self.config.election_topic),
            ],
        );
    }

    /// Stop: best-effort leader-gated flush, resign from the election, halt
    /// the worker. A reconciliation in flight is discarded.
    pub async fn stop(&self) {
        if self.config.withdraw_on_stop {
            self.remove_all().await;
        }

        self.election.withdraw(&self.config.election_topic);
        self.gate.resigned().await;

        let pump = self.event_pump.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(pump) = pump {
            pump.abort();
        }
        self.worker.shutdown();

        Logger::info(Event::SyncStop, &[("app", &self.config.app_name)]);
    }

    /// Declare a resource.
    ///
    /// The declaration always lands in the desired-state store, whoever is
    /// leader. If this node is activated, the resource is additionally
    /// submitted to the backend within the same guarded section, so the
    /// decision cannot race a leadership flip.
    pub async fn submit(&self, resource: Resource) -> SyncResult<()> {
        self.validate(&resource)?;

        let phase = self.gate.lock().await;
        self.store.put(resource.clone());
        if phase.is_activated() {
            self.engine.push_submit(resource).await;
        }
        Ok(())
    }

    /// Retract a declaration.
    ///
    /// The store entry is removed only if it still holds this exact
    /// definition; a concurrently submitted newer value under the same key
    /// survives. If activated, a backend withdraw is issued for the given
    /// resource either way.
    pub async fn withdraw(&self, resource: Resource) -> SyncResult<()> {
        self.validate(&resource)?;

        let phase = self.gate.lock().await;
        self.store.remove_if_same(&resource);
        if phase.is_activated() {
            self.engine.push_withdraw(resource).await;
        }
        Ok(())
    }

    /// Withdraw every declared resource from the backend and clear the
    /// store. Complete no-op on a non-leader: neither the store nor the
    /// backend is touched.
    pub async fn remove_all(&self) {
        let phase = self.gate.lock().await;
        if !phase.is_elected() {
            Logger::info(
                Event::BulkRemoveSkipped,
                &[("op", "remove_all"), ("phase", phase.state_name())],
            );
            return;
        }

        for resource in self.store.snapshot().into_values() {
            self.engine.push_withdraw(resource).await;
        }
        self.store.remove_all();
    }

    /// Same as [`Synchronizer::remove_all`], scoped to declarations tagged
    /// with `owner`. Complete no-op on a non-leader.
    pub async fn remove_by_owner(&self, owner: OwnerId) {
        let phase = self.gate.lock().await;
        if !phase.is_elected() {
            Logger::info(
                Event::BulkRemoveSkipped,
                &[("op", "remove_by_owner"), ("phase", phase.state_name())],
            );
            return;
        }

        for resource in self
            .store
            .snapshot()
            .into_values()
            .filter(|resource| resource.owner() == owner)
        {
            self.engine.push_withdraw(resource).await;
        }
        self.store.remove_where_owner(owner);
    }

    /// Administrative leadership override.
    ///
    /// Feeds the gate exactly as an election event naming (or un-naming)
    /// this node would, including triggering a reconciliation pass on gain.
    pub async fn force_leadership(&self, is_primary: bool) {
        let trigger = self.gate.on_leadership_changed(is_primary).await;
        let phase = self.gate.phase().await;
        Logger::info(
            Event::LeadershipChanged,
            &[("forced", "true"), ("phase", phase.state_name())],
        );
        if trigger {
            self.worker.trigger();
        }
    }

    /// Owner identity this synchronizer is scoped to.
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Advisory copy of the current leadership phase.
    pub async fn phase(&self) -> LeadershipPhase {
        self.gate.phase().await
    }

    /// Point-in-time copy of the declared resources.
    pub fn desired_snapshot(&self) -> HashMap<ResourceKey, Resource> {
        self.store.snapshot()
    }

    /// Point-in-time copy of the operational counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn validate(&self, resource: &Resource) -> SyncResult<()> {
        if resource.key().is_empty() {
            return Err(SyncError::InvalidResource("key must not be empty".into()));
        }
        if resource.payload().is_null() {
            return Err(SyncError::InvalidResource(
                "payload must not be null".into(),
            ));
        }
        if resource.owner() != self.owner {
            return Err(SyncError::OwnerMismatch {
                expected: self.owner,
                actual: resource.owner(),
            });
        }
        Ok(())
    }
}
