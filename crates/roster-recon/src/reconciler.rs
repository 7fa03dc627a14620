//! The reconciliation driver
//!
//! Reads happen once per invocation; a diff computed from that snapshot
//! can be superseded by a concurrent external editor before the write
//! lands. No optimistic-concurrency check precedes upsert.

use crate::error::ReconError;
use crate::report::BulkReport;
use roster_diff::DiffEngine;
use roster_model::{AgentSpec, DiffField, DiffItem, Handle, PatchError, Role, Suggestion};
use roster_store::SpecStore;
use std::collections::HashMap;

/// One fleet row: a role, its stored spec (if any), and their diffs
#[derive(Debug, Clone)]
pub struct ReconRow {
    /// Canonical role
    pub role: Role,
    /// Stored spec, absent when none exists for the handle
    pub spec: Option<AgentSpec>,
    /// Diffs between the two
    pub diffs: Vec<DiffItem>,
}

impl ReconRow {
    /// Whether any diff in this row carries a defined fix
    #[inline]
    #[must_use]
    pub fn has_suggestions(&self) -> bool {
        roster_model::has_suggestions(&self.diffs)
    }
}

/// Suggestion applier and bulk reconciler over a store
#[derive(Debug)]
pub struct Reconciler<S> {
    store: S,
    engine: DiffEngine,
}

impl<S: SpecStore> Reconciler<S> {
    /// Create a reconciler over a store and engine
    #[inline]
    #[must_use]
    pub fn new(store: S, engine: DiffEngine) -> Self {
        Self { store, engine }
    }

    /// The underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The diff engine
    #[inline]
    #[must_use]
    pub fn engine(&self) -> &DiffEngine {
        &self.engine
    }

    /// Read the fleet once and compute diffs for every role
    ///
    /// # Errors
    /// `ReconError::Store` when either listing fails.
    pub async fn snapshot(&self) -> Result<Vec<ReconRow>, ReconError> {
        let roles = self.store.list_roles().await?;
        let specs = self.store.list_agent_specs().await?;

        let mut by_handle: HashMap<Handle, AgentSpec> = specs
            .into_iter()
            .map(|spec| (spec.handle.clone(), spec))
            .collect();

        Ok(roles
            .into_iter()
            .map(|role| {
                let spec = by_handle.remove(&role.handle);
                let diffs = self.engine.diff(&role, spec.as_ref());
                ReconRow { role, spec, diffs }
            })
            .collect())
    }

    /// Apply one suggested fix for a handle
    ///
    /// Loads the stored spec (or synthesizes a baseline when none exists),
    /// patches exactly one field, and performs a single upsert. All other
    /// fields are preserved unchanged.
    ///
    /// # Errors
    /// `RoleNotFound` when the handle has no role, `Patch` when the
    /// suggestion does not fit the field, `Store` on write failure.
    pub async fn apply_suggestion(
        &self,
        handle: &Handle,
        field: DiffField,
        suggestion: &Suggestion,
    ) -> Result<AgentSpec, ReconError> {
        let mut spec = self.load_or_synthesize(handle).await?;
        spec.apply_field(field, suggestion)?;
        Ok(self.store.upsert_agent_spec(spec).await?)
    }

    /// Apply one policy key fix for a handle
    ///
    /// Patches a single key inside the policies map; the rest of the map
    /// and every other field are preserved. Single upsert.
    ///
    /// # Errors
    /// `RoleNotFound` when the handle has no role, `Store` on write
    /// failure.
    pub async fn apply_policy_key(
        &self,
        handle: &Handle,
        key: &str,
        value: bool,
    ) -> Result<AgentSpec, ReconError> {
        let mut spec = self.load_or_synthesize(handle).await?;
        spec.set_policy(key, value);
        Ok(self.store.upsert_agent_spec(spec).await?)
    }

    /// Apply every defined fix for one handle in a single upsert
    ///
    /// All-or-nothing per handle: the patched spec is written once,
    /// covering all changed fields.
    ///
    /// # Errors
    /// `RoleNotFound` when the handle has no role, `Patch` when any
    /// suggestion does not fit its field, `Store` on write failure.
    pub async fn apply_all_for_handle(
        &self,
        handle: &Handle,
        diffs: &[DiffItem],
    ) -> Result<AgentSpec, ReconError> {
        let mut spec = self.load_or_synthesize(handle).await?;
        patch_all(&mut spec, diffs)?;
        Ok(self.store.upsert_agent_spec(spec).await?)
    }

    /// Create baseline specs for every role that has none
    ///
    /// Upserts run sequentially, one handle at a time. A failure is
    /// recorded and the loop continues; prior successes are not rolled
    /// back.
    ///
    /// # Errors
    /// `ReconError::BulkFailed` when at least one row was attempted and
    /// none succeeded.
    pub async fn generate_missing_specs(
        &self,
        roles: &[Role],
        specs_by_handle: &HashMap<Handle, AgentSpec>,
    ) -> Result<BulkReport, ReconError> {
        let mut report = BulkReport::default();
        for role in roles
            .iter()
            .filter(|role| !specs_by_handle.contains_key(&role.handle))
        {
            let spec = self.engine.baseline().suggested_spec(role);
            match self.store.upsert_agent_spec(spec).await {
                Ok(_) => report.record_success(),
                Err(err) => {
                    tracing::warn!("Upsert failed for {}: {}", role.handle, err);
                    report.record_failure(role.handle.clone(), err.to_string());
                }
            }
        }
        tracing::info!("Generated missing specs: {}", report);
        finish(report)
    }

    /// Apply every defined fix across the fleet
    ///
    /// Skips rows with no defined suggestion; for the rest, the
    /// equivalent of [`apply_all_for_handle`](Self::apply_all_for_handle)
    /// runs sequentially with per-row failure isolation.
    ///
    /// # Errors
    /// `ReconError::BulkFailed` when at least one row was attempted and
    /// none succeeded.
    pub async fn fix_all_diffs(&self, rows: &[ReconRow]) -> Result<BulkReport, ReconError> {
        let targets: Vec<&ReconRow> = rows.iter().filter(|row| row.has_suggestions()).collect();
        tracing::info!("Applying suggestions for {} of {} rows", targets.len(), rows.len());

        let mut report = BulkReport::default();
        for row in targets {
            let mut spec = row
                .spec
                .clone()
                .unwrap_or_else(|| self.engine.baseline().suggested_spec(&row.role));
            let patched = patch_all(&mut spec, &row.diffs);
            let outcome = match patched {
                Ok(()) => self
                    .store
                    .upsert_agent_spec(spec)
                    .await
                    .map(|_| ())
                    .map_err(|err| err.to_string()),
                Err(err) => Err(err.to_string()),
            };
            match outcome {
                Ok(()) => report.record_success(),
                Err(message) => {
                    tracing::warn!("Fix failed for {}: {}", row.role.handle, message);
                    report.record_failure(row.role.handle.clone(), message);
                }
            }
        }
        tracing::info!("Fixed diffs: {}", report);
        finish(report)
    }

    /// Stored spec for the handle, or a synthesized baseline from its role
    async fn load_or_synthesize(&self, handle: &Handle) -> Result<AgentSpec, ReconError> {
        let specs = self.store.list_agent_specs().await?;
        if let Some(spec) = specs.into_iter().find(|spec| &spec.handle == handle) {
            return Ok(spec);
        }

        let roles = self.store.list_roles().await?;
        let role = roles
            .into_iter()
            .find(|role| &role.handle == handle)
            .ok_or_else(|| ReconError::RoleNotFound(handle.clone()))?;
        Ok(self.engine.baseline().suggested_spec(&role))
    }
}

/// Fold every defined fix into the spec
///
/// A policies diff with per-key detail overlays the key suggestions onto
/// the spec's existing map (agent-defined keys keep their values); every
/// other diff with a defined suggestion patches its field directly.
fn patch_all(spec: &mut AgentSpec, diffs: &[DiffItem]) -> Result<(), PatchError> {
    for diff in diffs {
        if diff.field == DiffField::Policies && !diff.policy_key_diffs.is_empty() {
            for key_diff in &diff.policy_key_diffs {
                spec.set_policy(key_diff.key.clone(), key_diff.suggestion);
            }
        } else if let Some(suggestion) = &diff.suggestion {
            spec.apply_field(diff.field, suggestion)?;
        }
    }
    Ok(())
}

/// Named aggregate policy: total failure is an error, never silent
fn finish(report: BulkReport) -> Result<BulkReport, ReconError> {
    if report.all_failed() {
        return Err(ReconError::BulkFailed(report));
    }
    Ok(report)
}
