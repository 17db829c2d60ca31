//! Leadership Gate
//!
//! Tracks this node's position in the election for one topic:
//!
//! ```text
//! Inactive → Candidate → Elected → ElectedActive
//!                ↑__________|____________|
//! ```
//!
//! - `Elected`: the election service named this node leader; write authority
//!   held, first reconciliation not yet complete.
//! - `ElectedActive`: elected and one full reconciliation pass has completed
//!   since election; point operations may be forwarded immediately.
//!
//! Activation implying election is structural: there is no phase that is
//! activated without being elected. The phase is mutated only through gate
//! methods, inside the gate's mutex — the single mutual-exclusion domain
//! shared with the synchronizer facade.

mod gate;
mod phase;

pub use gate::LeadershipGate;
pub use phase::{transition, LeadershipPhase};
