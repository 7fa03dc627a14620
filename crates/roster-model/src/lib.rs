//! Roster Model - Core data model for Role→Agent reconciliation
//!
//! Defines the fundamental types shared across the workspace:
//! - Canonical `Role` records (externally owned, read-only input)
//! - Mutable `AgentSpec` records (at most one per handle)
//! - Tagged diff payloads (`DiffItem`, `PolicyKeyDiff`)
//! - The single-field patch operation used by the applier
//!
//! `Handle` is the sole join key between a `Role` and its `AgentSpec`.

#![warn(unreachable_pub)]

// Core modules
pub mod diff;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use diff::{
    has_suggestions, DiffField, DiffItem, FieldValue, PolicyKeyDiff, Suggestion, SuggestionKind,
};
pub use error::PatchError;
pub use types::{AgentSpec, Handle, PolicyMap, Role};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
