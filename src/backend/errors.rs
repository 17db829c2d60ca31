//! Backend Error Types

use thiserror::Error;

/// Result type for backend calls
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors raised by backend resource service implementations.
///
/// The reconciliation engine logs these and moves on; it never retries an
/// individual call. The next leadership-triggered pass repairs whatever the
/// failed call left behind.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend could not be reached
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the resource
    #[error("backend rejected resource {key}: {reason}")]
    Rejected {
        /// Key of the refused resource
        key: String,
        /// Backend-supplied reason
        reason: String,
    },

    /// Transport or serialization failure while issuing the call
    #[error("backend call failed: {0}")]
    Call(String),
}
