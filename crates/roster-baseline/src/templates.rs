//! Pod-keyed prompt template registry
//!
//! Templates carry `{handle}`, `{title}` and `{pod}` placeholders and
//! pod-specific guidance. Lookup goes through one canonicalization
//! function; unknown pods fall back to a generic template that still
//! references Brand-Lock, the Definition of Done and linking artifacts.

use std::collections::HashMap;

/// Canonicalize a pod name for template lookup (trim + lowercase)
#[inline]
#[must_use]
pub fn canonical_pod(pod: &str) -> String {
    pod.trim().to_lowercase()
}

/// Prompt template registry keyed by canonical pod name
#[derive(Debug, Clone)]
pub struct PodTemplates {
    seeds: HashMap<String, String>,
    fallback: String,
}

impl PodTemplates {
    /// Build a registry from explicit seeds and a fallback template
    ///
    /// Seed keys are canonicalized on insertion so callers never have to
    /// pre-normalize.
    #[must_use]
    pub fn from_seeds(
        seeds: impl IntoIterator<Item = (String, String)>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            seeds: seeds
                .into_iter()
                .map(|(pod, template)| (canonical_pod(&pod), template))
                .collect(),
            fallback: fallback.into(),
        }
    }

    /// Template for a pod, falling back to the generic template
    #[inline]
    #[must_use]
    pub fn seed(&self, pod: &str) -> &str {
        self.seeds
            .get(&canonical_pod(pod))
            .map_or(self.fallback.as_str(), String::as_str)
    }

    /// Substitute `{handle}`, `{title}` and `{pod}` into the pod's template
    #[must_use]
    pub fn render(&self, pod: &str, handle: &str, title: &str) -> String {
        self.seed(pod)
            .replace("{handle}", handle)
            .replace("{title}", title)
            .replace("{pod}", pod)
    }
}

impl Default for PodTemplates {
    fn default() -> Self {
        let seeds = [
            (
                "marketing & comms",
                "You are {handle}, {title} in the Marketing pod. Produce offer→audience→channels→budget→KPIs. Respect Brand-Lock and link assets.",
            ),
            (
                "ip & patent program",
                "You are {handle}, {title} in the IP pod. Draft clear claims/spec notes; ensure figure legibility @66%; never disclose confidential details in public threads. Apply the Definition of Done and link artifacts.",
            ),
            (
                "security & compliance",
                "You are {handle}, {title} in Security. Prevent first, respond fast. Provide controls, playbooks, and risks with owners. Apply the Definition of Done and link artifacts.",
            ),
            (
                "brand & assets",
                "You are {handle}, {title} in Brand. Enforce Brand-Lock (color/typography/logo); deliver production-ready specs.",
            ),
            (
                "product & engineering",
                "You are {handle}, {title} in Product. Provide AC, SLOs, and evidence artifacts; keep outputs concise. Apply the Definition of Done and link artifacts.",
            ),
            (
                "finance & bizops",
                "You are {handle}, {title} in Finance. Provide decision-grade views with assumptions and links to source sheets. Apply the Definition of Done and link artifacts.",
            ),
            (
                "control tower",
                "You are {handle}, {title} in Control Tower. Summarize priorities, owners, due, milestone, next step; link artifacts.",
            ),
        ];
        Self::from_seeds(
            seeds.into_iter().map(|(pod, template)| (pod.to_string(), template.to_string())),
            "You are {handle}, {title} in the {pod} pod. Keep outputs concise; respect Brand-Lock; apply the Definition of Done and link artifacts.",
        )
    }
}
