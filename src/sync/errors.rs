//! Synchronizer Error Types

use thiserror::Error;

use crate::resource::OwnerId;

/// Result type for facade calls
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors surfaced by the synchronizer facade.
///
/// All of these are synchronous argument/configuration rejections, raised
/// before any shared state is touched. Backend-side outcomes are never
/// reported here; they arrive through the backend's own notification
/// channel.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The resource is malformed (empty key, null payload)
    #[error("invalid resource: {0}")]
    InvalidResource(String),

    /// The resource belongs to a different owner than this synchronizer
    #[error("resource owner {actual} does not match synchronizer owner {expected}")]
    OwnerMismatch {
        /// Owner this synchronizer is scoped to
        expected: OwnerId,
        /// Owner tagged on the rejected resource
        actual: OwnerId,
    },

    /// The configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
