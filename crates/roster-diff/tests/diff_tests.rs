//! Engine-level properties: determinism and apply-to-fixpoint.

use proptest::prelude::*;
use roster_baseline::Baseline;
use roster_diff::DiffEngine;
use roster_model::{AgentSpec, DiffField, PolicyMap, Role};
use roster_test_utils::{in_sync_spec, sample_role};

fn arb_pod() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Control Tower".to_string()),
        Just("Security & Compliance".to_string()),
        Just(" IP & Patent Program ".to_string()),
        Just("Skunkworks".to_string()),
        "[A-Za-z &]{1,14}",
    ]
}

fn arb_lines() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z ]{1,10}", 0..3)
}

fn arb_policies() -> impl Strategy<Value = PolicyMap> {
    let key = prop_oneof![
        Just("may_post_threads".to_string()),
        Just("may_modify_drive".to_string()),
        "[a-z_]{3,10}",
    ];
    proptest::collection::btree_map(key, any::<bool>(), 0..4)
}

fn arb_role() -> impl Strategy<Value = Role> {
    ("[A-Z][a-z]{1,6}", "[A-Za-z ]{1,12}", arb_pod(), arb_lines()).prop_map(
        |(handle, title, pod, dod)| {
            Role::new(handle.as_str(), title, pod).with_definition_of_done(dod)
        },
    )
}

fn arb_spec() -> impl Strategy<Value = AgentSpec> {
    (
        "[A-Z][a-z]{1,6}",
        "[A-Za-z ]{1,12}",
        arb_pod(),
        "[A-Za-z ,.]{0,40}",
        arb_lines(),
        arb_lines(),
        arb_policies(),
    )
        .prop_map(|(handle, title, pod, prompt, blocks, tools, policies)| {
            AgentSpec::new(handle.as_str(), title, pod)
                .with_system_prompt(prompt)
                .with_instruction_blocks(blocks)
                .with_tools(tools)
                .with_policies(policies)
        })
}

proptest! {
    // Referential transparency: same inputs, same diff list.
    #[test]
    fn prop_diff_is_deterministic(role in arb_role(), spec in proptest::option::of(arb_spec())) {
        let engine = DiffEngine::new(Baseline::default());
        prop_assert_eq!(engine.diff(&role, spec.as_ref()), engine.diff(&role, spec.as_ref()));
    }

    // Applying every suggested fix reaches a fixpoint: the re-diff may
    // still report drift (e.g. settled policy overrides) but never
    // carries a suggestion, so a second run would write nothing.
    #[test]
    fn prop_apply_all_reaches_fixpoint(role in arb_role(), spec in arb_spec()) {
        let engine = DiffEngine::new(Baseline::default());
        let mut patched = spec.clone();
        for item in engine.diff(&role, Some(&spec)) {
            if let Some(suggestion) = &item.suggestion {
                patched.apply_field(item.field, suggestion).unwrap();
            }
        }
        let again = engine.diff(&role, Some(&patched));
        prop_assert!(again.iter().all(|item| item.suggestion.is_none()));
    }

    // The missing-record diff always carries the full synthesized spec.
    #[test]
    fn prop_missing_spec_suggests_full_baseline(role in arb_role()) {
        let engine = DiffEngine::new(Baseline::default());
        let diffs = engine.diff(&role, None);
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].field, DiffField::Spec);
        prop_assert!(diffs[0].has_suggestion());
    }
}

#[test]
fn gap_fill_then_rediff_clears_instruction_blocks() {
    let engine = DiffEngine::new(Baseline::default());
    let role = Role::new("OS", "Orchestrator", "Control Tower")
        .with_definition_of_done(vec!["A".to_string(), "B".to_string()]);
    let mut spec = in_sync_spec(&role);
    spec.instruction_blocks.clear();

    let diffs = engine.diff(&role, Some(&spec));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].field, DiffField::InstructionBlocks);

    let suggestion = diffs[0].suggestion.as_ref().unwrap();
    spec.apply_field(DiffField::InstructionBlocks, suggestion).unwrap();
    assert_eq!(spec.instruction_blocks, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(engine.diff(&role, Some(&spec)), vec![]);
}

#[test]
fn policy_comparison_matches_json_equality() {
    // BTreeMap keeps keys ordered, so map equality and JSON-equality of
    // the serialized form agree. This pins the assumption the diff rules
    // lean on.
    let a: PolicyMap = [("b".to_string(), true), ("a".to_string(), false)]
        .into_iter()
        .collect();
    let b: PolicyMap = [("a".to_string(), false), ("b".to_string(), true)]
        .into_iter()
        .collect();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn drifted_fixture_fires_every_rule() {
    let engine = DiffEngine::new(Baseline::default());
    let role = sample_role("OS");
    let spec = roster_test_utils::drifted_spec(&role);

    let fields: Vec<DiffField> = engine
        .diff(&role, Some(&spec))
        .into_iter()
        .map(|d| d.field)
        .collect();
    assert_eq!(
        fields,
        vec![
            DiffField::Title,
            DiffField::Pod,
            DiffField::InstructionBlocks,
            DiffField::Tools,
            DiffField::SystemPrompt,
            DiffField::Policies,
        ]
    );
}
