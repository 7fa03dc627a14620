//! In-memory store
//!
//! The reference transport for tests and local tooling. Supports
//! injected per-handle write failures (for failure-isolation tests) and
//! counts applied writes so idempotency can be asserted as "zero
//! additional writes".

use crate::error::StoreError;
use crate::SpecStore;
use async_trait::async_trait;
use roster_model::{AgentSpec, Handle, Role};
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    roles: BTreeMap<Handle, Role>,
    specs: BTreeMap<Handle, AgentSpec>,
    fail_upserts: BTreeSet<Handle>,
    writes_applied: usize,
}

/// In-memory `SpecStore` implementation
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed canonical roles
    pub async fn seed_roles(&self, roles: impl IntoIterator<Item = Role>) {
        let mut inner = self.inner.lock().await;
        for role in roles {
            inner.roles.insert(role.handle.clone(), role);
        }
    }

    /// Seed stored specs
    pub async fn seed_specs(&self, specs: impl IntoIterator<Item = AgentSpec>) {
        let mut inner = self.inner.lock().await;
        for spec in specs {
            inner.specs.insert(spec.handle.clone(), spec);
        }
    }

    /// Make every upsert for this handle fail
    pub async fn fail_upserts_for(&self, handle: Handle) {
        self.inner.lock().await.fail_upserts.insert(handle);
    }

    /// Number of writes applied so far (failed upserts do not count)
    pub async fn writes_applied(&self) -> usize {
        self.inner.lock().await.writes_applied
    }

    /// Stored spec for a handle, if any
    pub async fn spec(&self, handle: &Handle) -> Option<AgentSpec> {
        self.inner.lock().await.specs.get(handle).cloned()
    }
}

#[async_trait]
impl SpecStore for MemoryStore {
    async fn list_roles(&self) -> Result<Vec<Role>, StoreError> {
        Ok(self.inner.lock().await.roles.values().cloned().collect())
    }

    async fn list_agent_specs(&self) -> Result<Vec<AgentSpec>, StoreError> {
        Ok(self.inner.lock().await.specs.values().cloned().collect())
    }

    async fn upsert_agent_spec(&self, spec: AgentSpec) -> Result<AgentSpec, StoreError> {
        let mut inner = self.inner.lock().await;
        if inner.fail_upserts.contains(&spec.handle) {
            return Err(StoreError::UpsertRejected {
                handle: spec.handle.clone(),
                reason: "injected failure".to_string(),
            });
        }
        inner.writes_applied += 1;
        inner.specs.insert(spec.handle.clone(), spec.clone());
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn upsert_is_idempotent_by_handle() {
        let store = MemoryStore::new();
        let spec = AgentSpec::new("OS", "Orchestrator", "Control Tower");

        store.upsert_agent_spec(spec.clone()).await.unwrap();
        store.upsert_agent_spec(spec.clone()).await.unwrap();

        let specs = store.list_agent_specs().await.unwrap();
        assert_eq!(specs, vec![spec]);
    }

    #[tokio::test]
    async fn upsert_replaces_existing_spec() {
        let store = MemoryStore::new();
        store
            .upsert_agent_spec(AgentSpec::new("OS", "Orchestrator", "Control Tower"))
            .await
            .unwrap();

        let updated = AgentSpec::new("OS", "Navigator", "Control Tower");
        store.upsert_agent_spec(updated.clone()).await.unwrap();

        assert_eq!(store.spec(&Handle::from("OS")).await, Some(updated));
    }

    #[tokio::test]
    async fn injected_failure_rejects_write_without_counting() {
        let store = MemoryStore::new();
        store.fail_upserts_for(Handle::from("OS")).await;

        let result = store
            .upsert_agent_spec(AgentSpec::new("OS", "Orchestrator", "Control Tower"))
            .await;
        assert!(matches!(result, Err(StoreError::UpsertRejected { .. })));
        assert_eq!(store.writes_applied().await, 0);
        assert!(store.spec(&Handle::from("OS")).await.is_none());
    }

    #[tokio::test]
    async fn listings_are_sorted_by_handle() {
        let store = MemoryStore::new();
        store
            .seed_roles(vec![
                Role::new("Zephyr", "B", "Pod"),
                Role::new("Aegis", "A", "Pod"),
            ])
            .await;

        let handles: Vec<String> = store
            .list_roles()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.handle.to_string())
            .collect();
        assert_eq!(handles, vec!["Aegis".to_string(), "Zephyr".to_string()]);
    }
}
