//! Shared test doubles
//!
//! - `RecordingBackend`: records every submit/withdraw and applies it to an
//!   in-memory row set, so convergence and idempotence are observable.
//! - `ScriptedElection`: hands out event receivers and lets tests emit
//!   leader-change events.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::mpsc;
use uuid::Uuid;

use netsync::backend::{BackendEntry, BackendError, BackendResult, ResourceBackend};
use netsync::leadership::LeadershipGate;
use netsync::{LeadershipEvent, LifecycleState, OwnerId, Resource, ResourceKey};

/// One recorded mutating backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Submit(ResourceKey),
    Withdraw(ResourceKey),
}

/// Backend double: records calls and applies them to its row set.
///
/// `submit` upserts an `Installed` row stamped with a fresh backend id;
/// `withdraw` marks the row `Withdrawn`. `list_owned` returns rows scoped
/// to the requested owner, withdrawn ones included, as a real backend
/// would.
#[derive(Default)]
pub struct RecordingBackend {
    rows: Mutex<Vec<BackendEntry>>,
    calls: Mutex<Vec<BackendCall>>,
    fail_calls: AtomicBool,
    fail_list: AtomicBool,
    demote_on_withdraw: Mutex<Option<Arc<LeadershipGate>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a row as if the backend already held it.
    pub fn preload(&self, resource: Resource, lifecycle: LifecycleState) {
        let resource = resource.with_backend_id(Uuid::new_v4());
        self.rows.lock().unwrap().push(BackendEntry {
            key: resource.key().clone(),
            resource,
            lifecycle,
        });
    }

    /// Every mutating call recorded so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Forget recorded calls; rows are kept.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Rows not withdrawn, i.e. what is (or will be) in effect.
    pub fn live_rows(&self) -> Vec<BackendEntry> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| !row.lifecycle.is_withdrawing_or_withdrawn())
            .cloned()
            .collect()
    }

    /// Make every subsequent submit/withdraw return an error. Calls are
    /// still recorded; rows are left untouched.
    pub fn set_fail_calls(&self, fail: bool) {
        self.fail_calls.store(fail, Ordering::SeqCst);
    }

    /// Make `list_owned` return an error, simulating an unreachable
    /// backend at the start of a pass.
    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Demote the given gate during the next withdraw calls, simulating
    /// leadership loss while phase 1 is executing.
    pub fn demote_on_withdraw(&self, gate: Arc<LeadershipGate>) {
        *self.demote_on_withdraw.lock().unwrap() = Some(gate);
    }

    fn upsert(&self, resource: Resource) {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|row| row.key != *resource.key());
        let resource = resource.with_backend_id(Uuid::new_v4());
        rows.push(BackendEntry {
            key: resource.key().clone(),
            resource,
            lifecycle: LifecycleState::Installed,
        });
    }

    fn mark_withdrawn(&self, key: &ResourceKey) {
        let mut rows = self.rows.lock().unwrap();
        for row in rows.iter_mut() {
            if row.key == *key {
                row.lifecycle = LifecycleState::Withdrawn;
            }
        }
    }
}

#[async_trait]
impl ResourceBackend for RecordingBackend {
    async fn submit(&self, resource: Resource) -> BackendResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(BackendCall::Submit(resource.key().clone()));
        if self.fail_calls.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("injected failure".into()));
        }
        self.upsert(resource);
        Ok(())
    }

    async fn withdraw(&self, resource: Resource) -> BackendResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(BackendCall::Withdraw(resource.key().clone()));

        let gate = self.demote_on_withdraw.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.on_leadership_changed(false).await;
        }

        if self.fail_calls.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("injected failure".into()));
        }
        self.mark_withdrawn(resource.key());
        Ok(())
    }

    async fn list_owned(&self, owner: OwnerId) -> BackendResult<Vec<BackendEntry>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("injected failure".into()));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.resource.owner() == owner)
            .cloned()
            .collect())
    }

    async fn lifecycle(&self, key: &ResourceKey) -> BackendResult<Option<LifecycleState>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.key == *key)
            .map(|row| row.lifecycle))
    }
}

/// Election double: tests emit events, subscribers receive them.
#[derive(Default)]
pub struct ScriptedElection {
    senders: Mutex<Vec<mpsc::UnboundedSender<LeadershipEvent>>>,
    campaigns: Mutex<Vec<String>>,
    withdrawals: Mutex<Vec<String>>,
}

impl ScriptedElection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every subscriber.
    pub fn emit(&self, event: LeadershipEvent) {
        for sender in self.senders.lock().unwrap().iter() {
            let _ = sender.send(event.clone());
        }
    }

    /// Topics campaigned for so far.
    pub fn campaigns(&self) -> Vec<String> {
        self.campaigns.lock().unwrap().clone()
    }

    /// Topics withdrawn from so far.
    pub fn withdrawals(&self) -> Vec<String> {
        self.withdrawals.lock().unwrap().clone()
    }
}

impl netsync::ElectionService for ScriptedElection {
    fn campaign(&self, topic: &str) {
        self.campaigns.lock().unwrap().push(topic.to_string());
    }

    fn withdraw(&self, topic: &str) {
        self.withdrawals.lock().unwrap().push(topic.to_string());
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<LeadershipEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().unwrap().push(tx);
        rx
    }
}

/// Build a resource owned by `owner` with a versioned payload.
pub fn resource(owner: OwnerId, key: &str, version: u64) -> Resource {
    Resource::new(ResourceKey::new(key), owner, json!({ "version": version }))
}

/// Poll an async condition until it holds or a generous timeout expires.
pub async fn wait_for<F, Fut>(cond: F, what: &str)
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..200 {
        if cond().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("timed out waiting for {what}");
}
