//! Role and agent spec records
//!
//! `Role` is the canonical job-function definition, owned and mutated
//! externally; it is read-only input here. `AgentSpec` is the mutable,
//! store-persisted configuration for one handle, created and updated
//! through the reconciliation appliers.

use crate::diff::{DiffField, Suggestion};
use crate::error::PatchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier joining a `Role` to its at-most-one `AgentSpec`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Create a handle from any string-like value
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// View as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Handle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Handle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Policy flags keyed by name
///
/// `BTreeMap` keeps key order deterministic, so map equality coincides
/// with JSON-equality of the serialized form.
pub type PolicyMap = BTreeMap<String, bool>;

/// Canonical job-function definition for one handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique join key
    pub handle: Handle,
    /// Job title
    pub title: String,
    /// Owning pod
    pub pod: String,
    /// One-line purpose statement
    #[serde(default)]
    pub purpose: String,
    /// Core functions of the role
    #[serde(default)]
    pub core_functions: Vec<String>,
    /// Definition of Done items
    #[serde(default)]
    pub definition_of_done: Vec<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Role {
    /// Create a role with the required identity fields
    #[inline]
    #[must_use]
    pub fn new(handle: impl Into<Handle>, title: impl Into<String>, pod: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            title: title.into(),
            pod: pod.into(),
            purpose: String::new(),
            core_functions: Vec::new(),
            definition_of_done: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// With purpose statement
    #[inline]
    #[must_use]
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// With core functions
    #[inline]
    #[must_use]
    pub fn with_core_functions(mut self, functions: Vec<String>) -> Self {
        self.core_functions = functions;
        self
    }

    /// With Definition of Done items
    #[inline]
    #[must_use]
    pub fn with_definition_of_done(mut self, items: Vec<String>) -> Self {
        self.definition_of_done = items;
        self
    }

    /// With tags
    #[inline]
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Stored configuration describing an automated agent for one handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Unique join key
    pub handle: Handle,
    /// Job title (expected to mirror the role)
    pub title: String,
    /// Owning pod (expected to mirror the role)
    pub pod: String,
    /// Conversation thread identifier, empty until assigned
    #[serde(default)]
    pub thread_id: String,
    /// System prompt driving the agent
    #[serde(default)]
    pub system_prompt: String,
    /// Standing instruction blocks
    #[serde(default)]
    pub instruction_blocks: Vec<String>,
    /// Tool identifiers the agent may use
    #[serde(default)]
    pub tools: Vec<String>,
    /// Safety policy flags
    #[serde(default)]
    pub policies: PolicyMap,
}

impl AgentSpec {
    /// Create an empty spec for a handle
    #[inline]
    #[must_use]
    pub fn new(handle: impl Into<Handle>, title: impl Into<String>, pod: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            title: title.into(),
            pod: pod.into(),
            thread_id: String::new(),
            system_prompt: String::new(),
            instruction_blocks: Vec::new(),
            tools: Vec::new(),
            policies: PolicyMap::new(),
        }
    }

    /// With system prompt
    #[inline]
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// With instruction blocks
    #[inline]
    #[must_use]
    pub fn with_instruction_blocks(mut self, blocks: Vec<String>) -> Self {
        self.instruction_blocks = blocks;
        self
    }

    /// With tool identifiers
    #[inline]
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }

    /// With policy flags
    #[inline]
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyMap) -> Self {
        self.policies = policies;
        self
    }

    /// Set one policy flag, inserting the key if absent
    #[inline]
    pub fn set_policy(&mut self, key: impl Into<String>, value: bool) {
        self.policies.insert(key.into(), value);
    }

    /// Patch exactly one field with a suggested value
    ///
    /// `DiffField::Spec` paired with `Suggestion::Spec` replaces the whole
    /// record. All other fields are patched in place; untouched fields are
    /// preserved unchanged.
    ///
    /// # Errors
    /// `PatchError::Mismatch` when the suggestion kind does not fit the
    /// field (e.g. a text suggestion against the tools list).
    pub fn apply_field(&mut self, field: DiffField, suggestion: &Suggestion) -> Result<(), PatchError> {
        match (field, suggestion) {
            (DiffField::Spec, Suggestion::Spec(spec)) => *self = (**spec).clone(),
            (DiffField::Title, Suggestion::Text(value)) => self.title = value.clone(),
            (DiffField::Pod, Suggestion::Text(value)) => self.pod = value.clone(),
            (DiffField::SystemPrompt, Suggestion::Text(value)) => self.system_prompt = value.clone(),
            (DiffField::InstructionBlocks, Suggestion::Lines(value)) => {
                self.instruction_blocks = value.clone();
            }
            (DiffField::Tools, Suggestion::Lines(value)) => self.tools = value.clone(),
            (DiffField::Policies, Suggestion::Policies(value)) => self.policies = value.clone(),
            (field, suggestion) => {
                return Err(PatchError::Mismatch {
                    field,
                    kind: suggestion.kind(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{DiffField, Suggestion};

    fn spec() -> AgentSpec {
        AgentSpec::new("OS", "Orchestrator", "Control Tower")
            .with_system_prompt("link artifacts")
            .with_tools(vec!["threads.post".to_string()])
    }

    #[test]
    fn handle_display_and_str() {
        let handle = Handle::from("Aegis");
        assert_eq!(handle.as_str(), "Aegis");
        assert_eq!(handle.to_string(), "Aegis");
    }

    #[test]
    fn handle_serde_transparent() {
        let json = serde_json::to_string(&Handle::from("OS")).unwrap();
        assert_eq!(json, "\"OS\"");
    }

    #[test]
    fn apply_field_patches_only_target() {
        let mut spec = spec();
        spec.apply_field(DiffField::Title, &Suggestion::Text("Navigator".to_string()))
            .unwrap();
        assert_eq!(spec.title, "Navigator");
        assert_eq!(spec.system_prompt, "link artifacts");
        assert_eq!(spec.tools, vec!["threads.post".to_string()]);
    }

    #[test]
    fn apply_field_replaces_whole_spec() {
        let mut spec = spec();
        let replacement = AgentSpec::new("OS", "Navigator", "Control Tower");
        spec.apply_field(DiffField::Spec, &Suggestion::Spec(Box::new(replacement.clone())))
            .unwrap();
        assert_eq!(spec, replacement);
    }

    #[test]
    fn apply_field_rejects_mismatched_kind() {
        let mut spec = spec();
        let err = spec
            .apply_field(DiffField::Tools, &Suggestion::Text("oops".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("tools"));
    }

    #[test]
    fn role_deserializes_with_missing_optional_fields() {
        let role: Role =
            serde_json::from_str(r#"{"handle":"OS","title":"Orchestrator","pod":"Control Tower"}"#)
                .unwrap();
        assert!(role.definition_of_done.is_empty());
        assert!(role.tags.is_empty());
    }
}
