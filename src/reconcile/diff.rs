//! Diff between desired state and a backend snapshot
//!
//! Pure computation: no locks, no backend calls. Each desired entry
//! consumes the matching backend row; what is left over on either side
//! becomes the plan.

use std::collections::HashMap;

use crate::backend::BackendEntry;
use crate::resource::{Resource, ResourceKey};

/// Work a reconciliation pass must perform, in phase order.
#[derive(Debug, Default)]
pub struct ReconcilePlan {
    /// Backend resources to withdraw (phase 1)
    pub removals: Vec<Resource>,

    /// Desired resources to submit (phase 2)
    pub additions: Vec<Resource>,
}

impl ReconcilePlan {
    /// Whether the pass has nothing to do.
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.additions.is_empty()
    }
}

/// Compute the plan that converges the backend to `desired`.
///
/// A desired entry is submitted when the backend has no row for its key,
/// holds a different definition under it, or holds the right definition in
/// a withdrawing/withdrawn phase. When the backend holds a different live
/// definition, that old value is withdrawn first. Backend rows with no
/// desired counterpart are withdrawn unless already on their way out.
pub fn compute_plan(
    desired: &HashMap<ResourceKey, Resource>,
    backend_rows: Vec<BackendEntry>,
) -> ReconcilePlan {
    let mut remaining: HashMap<ResourceKey, BackendEntry> = backend_rows
        .into_iter()
        .map(|row| (row.key.clone(), row))
        .collect();

    let mut plan = ReconcilePlan::default();

    for (key, want) in desired {
        match remaining.remove(key) {
            None => plan.additions.push(want.clone()),
            Some(row) => {
                let retiring = row.lifecycle.is_withdrawing_or_withdrawn();
                let matches = row.resource.same_definition(want);
                if matches && !retiring {
                    // Backend already holds the desired definition.
                    continue;
                }
                if !matches && !retiring {
                    // Retract the stale definition before installing ours.
                    plan.removals.push(row.resource);
                }
                plan.additions.push(want.clone());
            }
        }
    }

    for row in remaining.into_values() {
        if !row.lifecycle.is_withdrawing_or_withdrawn() {
            plan.removals.push(row.resource);
        }
    }

    plan
}
