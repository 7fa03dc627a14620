//! Aggregate reporting for bulk operations
//!
//! Per-item failures are folded into one report rather than aborting the
//! loop; "continue past failure" is a named policy, not implicit
//! control flow.

use roster_model::Handle;

/// One recorded per-handle failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkError {
    /// Handle whose write failed
    pub handle: Handle,
    /// Failure description
    pub message: String,
}

/// Outcome of a bulk operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    /// Handles written successfully
    pub succeeded: usize,
    /// Handles whose write failed
    pub failed: usize,
    /// One entry per failed handle
    pub errors: Vec<BulkError>,
}

impl BulkReport {
    /// Record one successful write
    #[inline]
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    /// Record one failed write
    #[inline]
    pub fn record_failure(&mut self, handle: Handle, message: impl Into<String>) {
        self.failed += 1;
        self.errors.push(BulkError {
            handle,
            message: message.into(),
        });
    }

    /// Total rows attempted
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Whether at least one row was attempted and none succeeded
    #[inline]
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.succeeded == 0 && self.failed > 0
    }
}

impl std::fmt::Display for BulkReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} succeeded, {} failed", self.succeeded, self.failed)
    }
}
