//! Roster Store - External store contract
//!
//! Reconciliation consumes exactly three external operations, all
//! transport-agnostic: list roles, list agent specs, and an idempotent
//! upsert keyed by handle. Any transport satisfying [`SpecStore`] — a
//! REST client, direct database access, or the in-memory [`MemoryStore`]
//! — is acceptable.

#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod memory;

use async_trait::async_trait;
use roster_model::{AgentSpec, Role};

// Re-exports for convenience
pub use error::StoreError;
pub use memory::MemoryStore;

/// The three-operation store contract
///
/// No optimistic-concurrency check precedes writes: a reconciliation run
/// computed from a stale read can overwrite a concurrent edit made by
/// another actor between read and write.
#[async_trait]
pub trait SpecStore: Send + Sync {
    /// List all canonical roles
    ///
    /// # Errors
    /// `StoreError` on backend failure.
    async fn list_roles(&self) -> Result<Vec<Role>, StoreError>;

    /// List all stored agent specs
    ///
    /// # Errors
    /// `StoreError` on backend failure.
    async fn list_agent_specs(&self) -> Result<Vec<AgentSpec>, StoreError>;

    /// Create or replace the spec for its handle
    ///
    /// Must be idempotent: applying the same fully-formed spec twice
    /// leaves the stored state unchanged after the first call.
    ///
    /// # Errors
    /// `StoreError` on backend failure; the write is all-or-nothing.
    async fn upsert_agent_spec(&self, spec: AgentSpec) -> Result<AgentSpec, StoreError>;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
