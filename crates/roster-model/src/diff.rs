//! Tagged diff payloads
//!
//! The diff rules produce loosely-shaped values (a whole role, a text
//! field, a list, a policy map). These are represented as tagged unions
//! with an explicit `Option<Suggestion>` so every consumer must handle
//! the presence/absence of a fix exhaustively.

use crate::types::{AgentSpec, PolicyMap, Role};
use serde::{Deserialize, Serialize};

/// Field of an agent spec a diff refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffField {
    /// The entire record is missing
    Spec,
    /// Job title
    Title,
    /// Owning pod
    Pod,
    /// Standing instruction blocks
    InstructionBlocks,
    /// Tool identifiers
    Tools,
    /// System prompt
    SystemPrompt,
    /// Safety policy flags
    Policies,
}

impl DiffField {
    /// Stable field name, matching the stored record's field names
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffField::Spec => "spec",
            DiffField::Title => "title",
            DiffField::Pod => "pod",
            DiffField::InstructionBlocks => "instruction_blocks",
            DiffField::Tools => "tools",
            DiffField::SystemPrompt => "system_prompt",
            DiffField::Policies => "policies",
        }
    }
}

impl std::fmt::Display for DiffField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a field-level comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// No value on this side (missing record or absent field)
    Absent,
    /// Text field value
    Text(String),
    /// List field value
    Lines(Vec<String>),
    /// Policy map value
    Policies(PolicyMap),
    /// The whole role record (missing-spec diff only)
    Role(Box<Role>),
}

impl FieldValue {
    /// Whether this side carries no value
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// A deterministic, unambiguous fix for one diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    /// Replacement text value
    Text(String),
    /// Replacement list value
    Lines(Vec<String>),
    /// Replacement policy map
    Policies(PolicyMap),
    /// A full replacement spec (missing-record fix)
    Spec(Box<AgentSpec>),
}

impl Suggestion {
    /// Kind tag, for mismatch diagnostics
    #[inline]
    #[must_use]
    pub fn kind(&self) -> SuggestionKind {
        match self {
            Suggestion::Text(_) => SuggestionKind::Text,
            Suggestion::Lines(_) => SuggestionKind::Lines,
            Suggestion::Policies(_) => SuggestionKind::Policies,
            Suggestion::Spec(_) => SuggestionKind::Spec,
        }
    }
}

/// Kind of a suggestion payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Text payload
    Text,
    /// List payload
    Lines,
    /// Policy map payload
    Policies,
    /// Full spec payload
    Spec,
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SuggestionKind::Text => "text",
            SuggestionKind::Lines => "lines",
            SuggestionKind::Policies => "policies",
            SuggestionKind::Spec => "spec",
        };
        f.write_str(name)
    }
}

/// One field-level discrepancy between a role and its agent spec
///
/// Ephemeral: computed fresh on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffItem {
    /// Field the discrepancy refers to
    pub field: DiffField,
    /// Role-derived expectation
    pub role_value: FieldValue,
    /// Current agent value
    pub agent_value: FieldValue,
    /// Fix, present iff deterministic and unambiguous
    pub suggestion: Option<Suggestion>,
    /// Per-key breakdown, non-empty only for the policies field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policy_key_diffs: Vec<PolicyKeyDiff>,
}

impl DiffItem {
    /// Create a diff with no suggestion
    #[inline]
    #[must_use]
    pub fn new(field: DiffField, role_value: FieldValue, agent_value: FieldValue) -> Self {
        Self {
            field,
            role_value,
            agent_value,
            suggestion: None,
            policy_key_diffs: Vec::new(),
        }
    }

    /// With a suggested fix
    #[inline]
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// With per-key policy diffs
    #[inline]
    #[must_use]
    pub fn with_policy_key_diffs(mut self, diffs: Vec<PolicyKeyDiff>) -> Self {
        self.policy_key_diffs = diffs;
        self
    }

    /// Whether this diff carries a defined fix
    #[inline]
    #[must_use]
    pub fn has_suggestion(&self) -> bool {
        self.suggestion.is_some()
    }
}

/// A diff scoped to one key inside the policies map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyKeyDiff {
    /// Policy flag name
    pub key: String,
    /// Baseline value, absent for agent-only keys
    pub role_value: Option<bool>,
    /// Agent value, absent when the key is missing from the agent record
    pub agent_value: Option<bool>,
    /// Merged value: baseline fills absent keys, agent-defined keys win
    pub suggestion: bool,
}

/// Whether any diff in the list carries a defined fix
#[inline]
#[must_use]
pub fn has_suggestions(diffs: &[DiffItem]) -> bool {
    diffs.iter().any(DiffItem::has_suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_stable() {
        assert_eq!(DiffField::Spec.as_str(), "spec");
        assert_eq!(DiffField::InstructionBlocks.as_str(), "instruction_blocks");
        assert_eq!(DiffField::SystemPrompt.to_string(), "system_prompt");
    }

    #[test]
    fn has_suggestions_requires_a_defined_fix() {
        let bare = DiffItem::new(
            DiffField::Title,
            FieldValue::Text("a".to_string()),
            FieldValue::Text("b".to_string()),
        );
        assert!(!has_suggestions(&[bare.clone()]));

        let fixed = bare.with_suggestion(Suggestion::Text("a".to_string()));
        assert!(has_suggestions(&[fixed]));
    }

    #[test]
    fn diff_item_serializes_field_as_snake_case() {
        let item = DiffItem::new(
            DiffField::SystemPrompt,
            FieldValue::Text("p".to_string()),
            FieldValue::Absent,
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["field"], "system_prompt");
    }
}
