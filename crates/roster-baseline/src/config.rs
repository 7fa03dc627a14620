//! Baseline configuration and spec synthesis

use crate::templates::PodTemplates;
use roster_model::{AgentSpec, PolicyMap, Role};

/// Canonical default values for agent specs
///
/// Carries the baseline tool list, policy flag set and prompt template
/// registry. Injected into the diff engine and the appliers at
/// construction so tests can substitute alternates.
#[derive(Debug, Clone)]
pub struct Baseline {
    tools: Vec<String>,
    policies: PolicyMap,
    templates: PodTemplates,
}

impl Baseline {
    /// Create the canonical baseline
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an alternate tool list
    #[inline]
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }

    /// With an alternate policy flag set
    #[inline]
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyMap) -> Self {
        self.policies = policies;
        self
    }

    /// With an alternate template registry
    #[inline]
    #[must_use]
    pub fn with_templates(mut self, templates: PodTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// Baseline tool identifiers
    #[inline]
    #[must_use]
    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    /// Baseline policy flags
    #[inline]
    #[must_use]
    pub fn policies(&self) -> &PolicyMap {
        &self.policies
    }

    /// Build the baseline system prompt for a handle/title/pod triple
    ///
    /// Pure and deterministic: same inputs always yield the same prompt.
    #[must_use]
    pub fn prompt(&self, handle: &str, title: &str, pod: &str) -> String {
        self.templates.render(pod, handle, title)
    }

    /// Build a fully-populated default spec for a role
    ///
    /// Instruction blocks are copied from the role's Definition of Done;
    /// tools and policies come from the baseline; `thread_id` starts empty.
    #[must_use]
    pub fn suggested_spec(&self, role: &Role) -> AgentSpec {
        AgentSpec::new(role.handle.clone(), role.title.clone(), role.pod.clone())
            .with_system_prompt(self.prompt(role.handle.as_str(), &role.title, &role.pod))
            .with_instruction_blocks(role.definition_of_done.clone())
            .with_tools(self.tools.clone())
            .with_policies(self.policies.clone())
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            tools: ["threads.post", "drive.search", "zip.kit", "hash.index"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            policies: [("may_post_threads", false), ("may_modify_drive", false)]
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
            templates: PodTemplates::default(),
        }
    }
}
