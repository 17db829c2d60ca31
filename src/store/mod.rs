//! Desired State Store
//!
//! The in-memory source of truth for "what should exist" in the backend,
//! independent of who currently holds leadership. Entries never expire;
//! only explicit removal calls clear them.

mod desired;

pub use desired::DesiredStateStore;
