//! Error types for the model crate

use crate::diff::{DiffField, SuggestionKind};

/// Failure to patch a single spec field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// Suggestion payload does not fit the target field
    #[error("suggestion kind `{kind}` does not fit field `{field}`")]
    Mismatch {
        /// Field that was being patched
        field: DiffField,
        /// Kind of the offered suggestion
        kind: SuggestionKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_names_field_and_kind() {
        let err = PatchError::Mismatch {
            field: DiffField::Policies,
            kind: SuggestionKind::Text,
        };
        let msg = err.to_string();
        assert!(msg.contains("policies"));
        assert!(msg.contains("text"));
    }
}
