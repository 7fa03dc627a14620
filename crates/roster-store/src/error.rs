//! Error types for store backends

use roster_model::Handle;

/// Store operation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Backend failure (connection, query, serialization)
    #[error("store backend error: {0}")]
    Backend(String),

    /// Write rejected for one handle
    #[error("upsert rejected for {handle}: {reason}")]
    UpsertRejected {
        /// Handle whose write was rejected
        handle: Handle,
        /// Backend-supplied reason
        reason: String,
    },
}

impl StoreError {
    /// Create a backend error from any message
    #[inline]
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
