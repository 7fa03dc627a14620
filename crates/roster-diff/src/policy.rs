//! Per-key policy diffs
//!
//! The parent diff collapses policy drift into one coarse `policies`
//! entry; this module exposes exactly which individual flags deviate.

use roster_model::{PolicyKeyDiff, PolicyMap};
use std::collections::BTreeSet;

/// Compare an agent's policy map against the baseline, key by key
///
/// Walks the union of keys across both maps in sorted order and emits one
/// entry per deviating key. The suggestion follows the merge precedence
/// rule: the baseline fills keys absent from the agent record, and
/// agent-defined keys keep their own value (an operator's explicit
/// override is never clobbered).
#[must_use]
pub fn diff_policy_keys(baseline: &PolicyMap, agent: &PolicyMap) -> Vec<PolicyKeyDiff> {
    let keys: BTreeSet<&str> = baseline
        .keys()
        .chain(agent.keys())
        .map(String::as_str)
        .collect();

    let mut diffs = Vec::new();
    for key in keys {
        let role_value = baseline.get(key).copied();
        let agent_value = agent.get(key).copied();
        if role_value == agent_value {
            continue;
        }
        let suggestion = match (role_value, agent_value) {
            (_, Some(value)) => value,
            (Some(value), None) => value,
            // Unreachable: every key came from one of the two maps.
            (None, None) => continue,
        };
        diffs.push(PolicyKeyDiff {
            key: key.to_string(),
            role_value,
            agent_value,
            suggestion,
        });
    }
    diffs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn baseline() -> PolicyMap {
        [("may_post_threads", false), ("may_modify_drive", false)]
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[test]
    fn identical_maps_yield_no_diffs() {
        assert!(diff_policy_keys(&baseline(), &baseline()).is_empty());
    }

    #[test]
    fn override_and_absent_key_both_surface() {
        let agent: PolicyMap = [("may_post_threads".to_string(), true)].into_iter().collect();

        let diffs = diff_policy_keys(&baseline(), &agent);
        assert_eq!(
            diffs,
            vec![
                PolicyKeyDiff {
                    key: "may_modify_drive".to_string(),
                    role_value: Some(false),
                    agent_value: None,
                    suggestion: false,
                },
                PolicyKeyDiff {
                    key: "may_post_threads".to_string(),
                    role_value: Some(false),
                    agent_value: Some(true),
                    suggestion: true,
                },
            ]
        );
    }

    #[test]
    fn agent_only_key_keeps_agent_value() {
        let mut agent = baseline();
        agent.insert("may_send_email".to_string(), true);

        let diffs = diff_policy_keys(&baseline(), &agent);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].key, "may_send_email");
        assert_eq!(diffs[0].role_value, None);
        assert_eq!(diffs[0].agent_value, Some(true));
        assert!(diffs[0].suggestion);
    }

    #[test]
    fn key_order_is_sorted_and_stable() {
        let agent = PolicyMap::new();
        let diffs = diff_policy_keys(&baseline(), &agent);
        let keys: Vec<&str> = diffs.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["may_modify_drive", "may_post_threads"]);
    }
}
