//! Reconciliation Engine
//!
//! Aligns backend state with desired state exactly once per leadership
//! acquisition:
//! 1. Fetch an owner-scoped backend snapshot
//! 2. Diff it against the desired-state snapshot (`compute_plan`)
//! 3. Apply removals, re-check leadership, apply additions, re-check,
//!    activate
//!
//! Removals always precede additions so a changed resource's old backend
//! effect is retracted before its new value is installed. Leadership is
//! re-checked only between phases; calls already issued within a phase run
//! to completion.
//!
//! At most one pass runs at a time: triggers feed a capacity-1 channel
//! consumed by a single worker task, and a trigger arriving while one is
//! pending coalesces with it.

mod diff;
mod engine;
mod worker;

pub use diff::{compute_plan, ReconcilePlan};
pub use engine::ReconciliationEngine;
pub use worker::ReconcileWorker;
