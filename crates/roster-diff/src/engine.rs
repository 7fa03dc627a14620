//! The diff engine
//!
//! Evaluates a fixed sequence of independent field rules; each rule
//! appends at most one diff and none short-circuits the rest.

use crate::lint::{GuidancePhraseLint, PromptLint};
use crate::policy::diff_policy_keys;
use roster_baseline::Baseline;
use roster_model::{AgentSpec, DiffField, DiffItem, FieldValue, Role, Suggestion};

/// Pure Role→AgentSpec comparison
///
/// Holds the injected baseline and the prompt completeness lint. The
/// engine never errors on well-formed input; validating that the role's
/// handle is present is the caller's responsibility.
#[derive(Debug)]
pub struct DiffEngine {
    baseline: Baseline,
    lint: Box<dyn PromptLint>,
}

impl DiffEngine {
    /// Create an engine with the default guidance-phrase lint
    #[inline]
    #[must_use]
    pub fn new(baseline: Baseline) -> Self {
        Self {
            baseline,
            lint: Box::new(GuidancePhraseLint),
        }
    }

    /// With an alternate prompt lint
    #[inline]
    #[must_use]
    pub fn with_lint(mut self, lint: Box<dyn PromptLint>) -> Self {
        self.lint = lint;
        self
    }

    /// The injected baseline
    #[inline]
    #[must_use]
    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Compare a role against its (optional) agent spec
    ///
    /// With no spec, returns exactly one `spec` diff carrying the full
    /// synthesized record — "entire record missing" rather than a pile of
    /// sub-field diffs. With a spec, evaluates the field rules in fixed
    /// order: title, pod, instruction_blocks, tools, system_prompt,
    /// policies. Multiple rules may fire on one call.
    #[must_use]
    pub fn diff(&self, role: &Role, agent: Option<&AgentSpec>) -> Vec<DiffItem> {
        let Some(agent) = agent else {
            return vec![DiffItem::new(
                DiffField::Spec,
                FieldValue::Role(Box::new(role.clone())),
                FieldValue::Absent,
            )
            .with_suggestion(Suggestion::Spec(Box::new(self.baseline.suggested_spec(role))))];
        };

        let mut diffs = Vec::new();

        // Title and pod: the role is always authoritative.
        if role.title != agent.title {
            diffs.push(
                DiffItem::new(
                    DiffField::Title,
                    FieldValue::Text(role.title.clone()),
                    FieldValue::Text(agent.title.clone()),
                )
                .with_suggestion(Suggestion::Text(role.title.clone())),
            );
        }
        if role.pod != agent.pod {
            diffs.push(
                DiffItem::new(
                    DiffField::Pod,
                    FieldValue::Text(role.pod.clone()),
                    FieldValue::Text(agent.pod.clone()),
                )
                .with_suggestion(Suggestion::Text(role.pod.clone())),
            );
        }

        // Instruction blocks: one-directional gap-fill from the role's
        // Definition of Done. Non-empty-but-divergent blocks are left alone.
        if !role.definition_of_done.is_empty() && agent.instruction_blocks.is_empty() {
            diffs.push(
                DiffItem::new(
                    DiffField::InstructionBlocks,
                    FieldValue::Lines(role.definition_of_done.clone()),
                    FieldValue::Lines(agent.instruction_blocks.clone()),
                )
                .with_suggestion(Suggestion::Lines(role.definition_of_done.clone())),
            );
        }

        // Tools: baseline only when empty. Divergent tool lists are not
        // reconciled.
        if agent.tools.is_empty() {
            diffs.push(
                DiffItem::new(
                    DiffField::Tools,
                    FieldValue::Lines(Vec::new()),
                    FieldValue::Lines(agent.tools.clone()),
                )
                .with_suggestion(Suggestion::Lines(self.baseline.tools().to_vec())),
            );
        }

        // System prompt: flag when empty or missing the required guidance.
        let baseline_prompt = self
            .baseline
            .prompt(role.handle.as_str(), &role.title, &role.pod);
        if agent.system_prompt.is_empty() || !self.lint.is_complete(&agent.system_prompt) {
            diffs.push(
                DiffItem::new(
                    DiffField::SystemPrompt,
                    FieldValue::Text(baseline_prompt.clone()),
                    FieldValue::Text(agent.system_prompt.clone()),
                )
                .with_suggestion(Suggestion::Text(baseline_prompt)),
            );
        }

        // Policies: any deviation from the baseline surfaces, with per-key
        // detail attached. The merged fix keeps agent-defined keys; it is
        // suggested only when it would actually change the stored map.
        if &agent.policies != self.baseline.policies() {
            let mut merged = self.baseline.policies().clone();
            merged.extend(agent.policies.iter().map(|(key, value)| (key.clone(), *value)));

            let mut item = DiffItem::new(
                DiffField::Policies,
                FieldValue::Policies(self.baseline.policies().clone()),
                FieldValue::Policies(agent.policies.clone()),
            )
            .with_policy_key_diffs(diff_policy_keys(self.baseline.policies(), &agent.policies));
            if merged != agent.policies {
                item = item.with_suggestion(Suggestion::Policies(merged));
            }
            diffs.push(item);
        }

        diffs
    }
}
