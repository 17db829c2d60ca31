//! Backend lifecycle phases
//!
//! The backend moves each accepted resource through these phases. The
//! reconciliation diff only cares whether a resource is on its way out:
//! a desired resource whose backend copy is withdrawing must be
//! re-submitted, and a withdrawing orphan needs no further withdraw call.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a resource inside the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Accepted, not yet being installed
    Requested,

    /// Installation in progress
    Installing,

    /// Fully installed and in effect
    Installed,

    /// Installation failed; not in effect
    Failed,

    /// Withdrawal accepted, not yet started
    WithdrawRequested,

    /// Withdrawal in progress
    Withdrawing,

    /// Fully withdrawn; no longer in effect
    Withdrawn,
}

impl LifecycleState {
    /// Whether the resource is already being or has been withdrawn.
    pub fn is_withdrawing_or_withdrawn(&self) -> bool {
        matches!(
            self,
            Self::WithdrawRequested | Self::Withdrawing | Self::Withdrawn
        )
    }

    /// Stable name for log fields.
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Installing => "installing",
            Self::Installed => "installed",
            Self::Failed => "failed",
            Self::WithdrawRequested => "withdraw_requested",
            Self::Withdrawing => "withdrawing",
            Self::Withdrawn => "withdrawn",
        }
    }
}
