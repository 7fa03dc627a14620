//! Testing utilities for the roster workspace
//!
//! Shared fixtures for roles and agent specs.

#![allow(missing_docs)]

use roster_baseline::Baseline;
use roster_model::{AgentSpec, Role};

/// A role in the Control Tower pod with a two-item Definition of Done.
pub fn sample_role(handle: &str) -> Role {
    Role::new(handle, "Orchestrator", "Control Tower")
        .with_purpose("Keep the fleet pointed at the milestone")
        .with_definition_of_done(vec![
            "Owners and due dates assigned".to_string(),
            "Artifacts linked".to_string(),
        ])
}

/// A role in the named pod, otherwise like [`sample_role`].
pub fn sample_role_in_pod(handle: &str, pod: &str) -> Role {
    let mut role = sample_role(handle);
    role.pod = pod.to_string();
    role
}

/// A spec that is fully in sync with the role under the canonical baseline.
pub fn in_sync_spec(role: &Role) -> AgentSpec {
    Baseline::default().suggested_spec(role)
}

/// A spec that drifts on every reconcilable field.
pub fn drifted_spec(role: &Role) -> AgentSpec {
    AgentSpec::new(role.handle.clone(), "Stale Title", "Stale Pod")
        .with_system_prompt("You are a helpful assistant.")
}
