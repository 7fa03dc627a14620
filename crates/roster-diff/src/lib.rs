//! Roster Diff - Field-level Role→AgentSpec comparison
//!
//! The central intelligence of reconciliation:
//! - Compares a canonical `Role` against an optional `AgentSpec`
//! - Produces an ordered list of per-field diffs
//! - Attaches a suggested fix iff one is deterministic and unambiguous
//! - Breaks the policies field down into per-key diffs
//!
//! The engine is a pure function over its inputs: no I/O, no suspension,
//! and the same `(Role, AgentSpec)` pair always yields the same diff list.
//!
//! # Example
//!
//! ```rust
//! use roster_baseline::Baseline;
//! use roster_diff::DiffEngine;
//! use roster_model::{DiffField, Role};
//!
//! let engine = DiffEngine::new(Baseline::default());
//! let role = Role::new("OS", "Orchestrator", "Control Tower");
//!
//! // No spec exists: one diff flags the entire record as missing.
//! let diffs = engine.diff(&role, None);
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].field, DiffField::Spec);
//! assert!(diffs[0].has_suggestion());
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod engine;
pub mod lint;
pub mod policy;

// Re-exports for convenience
pub use engine::DiffEngine;
pub use lint::{GuidancePhraseLint, PromptLint};
pub use policy::diff_policy_keys;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
