//! Error types for the reconciliation driver

use crate::report::BulkReport;
use roster_model::{Handle, PatchError};
use roster_store::StoreError;

/// Reconciliation driver failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconError {
    /// No canonical role exists for the handle
    #[error("no role found for handle {0}")]
    RoleNotFound(Handle),

    /// Store operation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Suggestion did not fit its target field
    #[error("patch error: {0}")]
    Patch(#[from] PatchError),

    /// Every attempted row of a bulk operation failed
    #[error("bulk operation failed for all {} attempted rows", .0.failed)]
    BulkFailed(BulkReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_failed_reports_row_count() {
        let mut report = BulkReport::default();
        report.record_failure(Handle::from("OS"), "down");
        report.record_failure(Handle::from("Aegis"), "down");

        let err = ReconError::BulkFailed(report);
        assert!(err.to_string().contains("all 2 attempted rows"));
    }
}
