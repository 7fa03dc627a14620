//! Roster Recon - Reconciliation driver
//!
//! Orchestrates drift correction on top of the diff engine:
//! - Snapshot the fleet (one read of roles and specs) and compute diffs
//! - Apply a single suggested fix, or all fixes for one handle, in one
//!   upsert
//! - Bulk operations (generate missing specs, fix all diffs) with
//!   per-item failure isolation and aggregate reporting
//!
//! Bulk loops are strictly sequential: each upsert is awaited to
//! completion before the next row, keeping write concurrency bounded and
//! failure attribution unambiguous per handle. A failed upsert is
//! recorded and the loop continues; there is no rollback of prior
//! successes and no automatic retry.
//!
//! # Example
//!
//! ```rust,ignore
//! use roster_baseline::Baseline;
//! use roster_diff::DiffEngine;
//! use roster_recon::Reconciler;
//! use roster_store::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reconciler = Reconciler::new(MemoryStore::new(), DiffEngine::new(Baseline::default()));
//! let rows = reconciler.snapshot().await?;
//! let report = reconciler.fix_all_diffs(&rows).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod reconciler;
pub mod report;

// Re-exports for convenience
pub use error::ReconError;
pub use reconciler::{ReconRow, Reconciler};
pub use report::{BulkError, BulkReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
