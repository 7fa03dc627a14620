//! System prompt completeness lint
//!
//! A content-linting check, not strict equality: differently worded
//! prompts that already carry the required guidance phrases pass.

use regex::Regex;
use std::sync::OnceLock;

/// Completeness predicate for an agent's system prompt
///
/// Pluggable so the heuristic can be refined (e.g. per pod) without
/// touching the engine's rule order.
pub trait PromptLint: Send + Sync + std::fmt::Debug {
    /// True when the prompt already carries the required guidance
    fn is_complete(&self, prompt: &str) -> bool;
}

/// Default lint: case-insensitive search for the canonical guidance phrases
///
/// Matches any of `Brand-Lock`/`Brand Lock`/`BrandLock`, `Definition of
/// Done`, or `link artifacts`, anywhere in the prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidancePhraseLint;

fn guidance_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)Brand[- ]?Lock|Definition of Done|link artifacts")
            .expect("guidance pattern is a valid regex")
    })
}

impl PromptLint for GuidancePhraseLint {
    fn is_complete(&self, prompt: &str) -> bool {
        guidance_pattern().is_match(prompt)
    }
}
