// crates/prereq-logic/tests/proptest_tree.rs
// ============================================================================
// Module: Prerequisite Tree Property-Based Tests
// Description: Property tests for pruning, the credit override, and rendering.
// Purpose: Check tree invariants across generated shapes.
// ============================================================================

//! Property-based tests for prerequisite tree invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use prereq_logic::CourseInfo;
use prereq_logic::CourseStatus;
use prereq_logic::EvalContext;
use prereq_logic::EvalRules;
use prereq_logic::MapLookup;
use prereq_logic::PrereqGrammar;
use prereq_logic::PrereqNode;
use prereq_logic::is_met;
use prereq_logic::parse_prerequisite;
use prereq_logic::prune_electives;
use proptest::prelude::*;

const POOL: [&str; 8] = ["К0", "К1", "К2", "К3", "К4", "К5", "К6", "К7"];

fn leaf_strategy() -> impl Strategy<Value = PrereqNode> {
    prop_oneof![
        Just(PrereqNode::None),
        "[a-z]{1,6}".prop_map(PrereqNode::unknown),
        (0 .. POOL.len()).prop_map(|index| PrereqNode::course(POOL[index])),
        (0u32 .. 300).prop_map(PrereqNode::credits),
    ]
}

/// Arbitrary trees, including logical nodes with zero or one child.
fn tree_strategy() -> impl Strategy<Value = PrereqNode> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0 .. 4).prop_map(PrereqNode::and),
            prop::collection::vec(inner, 0 .. 4).prop_map(PrereqNode::or),
        ]
    })
}

fn elective_strategy() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set((0 .. POOL.len()).prop_map(|index| POOL[index].to_string()), 0 .. 8)
}

fn status_strategy() -> impl Strategy<Value = BTreeMap<String, CourseStatus>> {
    prop::collection::btree_map(
        (0 .. POOL.len()).prop_map(|index| POOL[index].to_string()),
        (any::<bool>(), any::<bool>()).prop_map(|(listened, passed)| CourseStatus {
            listened,
            passed,
        }),
        0 .. 8,
    )
}

fn pool_info() -> BTreeMap<String, CourseInfo> {
    POOL.iter()
        .zip(1u32 ..)
        .map(|(name, semester)| {
            (
                (*name).to_string(),
                CourseInfo {
                    name: (*name).to_string(),
                    credits: 6,
                    semester,
                },
            )
        })
        .collect()
}

/// Canonical trees: course leaves only, no same-kind nesting, unique names.
///
/// Credit leaves are left out because the parser reads a credit threshold only
/// when it is the whole text; inside a group it stays an unknown fragment.
fn canonical_strategy() -> impl Strategy<Value = PrereqNode> {
    Just(PrereqNode::course(""))
        .prop_recursive(3, 16, 3, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 2 .. 4).prop_map(PrereqNode::and),
                prop::collection::vec(inner, 2 .. 4).prop_map(PrereqNode::or),
            ]
        })
        .prop_map(|tree| {
            let mut next = 0;
            label(&flatten(tree), &mut next)
        })
}

/// Merges children of the same logical kind into their parent.
fn flatten(node: PrereqNode) -> PrereqNode {
    match node {
        PrereqNode::And(children) => PrereqNode::and(children.into_iter().flat_map(|child| {
            match flatten(*child) {
                PrereqNode::And(grand) => grand.into_iter().map(|g| *g).collect::<Vec<_>>(),
                other => vec![other],
            }
        })),
        PrereqNode::Or(children) => PrereqNode::or(children.into_iter().flat_map(|child| {
            match flatten(*child) {
                PrereqNode::Or(grand) => grand.into_iter().map(|g| *g).collect::<Vec<_>>(),
                other => vec![other],
            }
        })),
        other => other,
    }
}

/// Assigns distinct names to course leaves in pre-order.
fn label(node: &PrereqNode, next: &mut usize) -> PrereqNode {
    match node {
        PrereqNode::And(children) => {
            PrereqNode::and(children.iter().map(|child| label(child, next)).collect::<Vec<_>>())
        }
        PrereqNode::Or(children) => {
            PrereqNode::or(children.iter().map(|child| label(child, next)).collect::<Vec<_>>())
        }
        _ => {
            let name = format!("Курс{next:02}");
            *next += 1;
            PrereqNode::course(name)
        }
    }
}

/// Returns true when every logical node keeps at least two non-`None` children.
fn is_collapsed(node: &PrereqNode) -> bool {
    match node.children() {
        None => true,
        Some(children) => {
            children.len() >= 2
                && children.iter().all(|child| !child.is_none() && is_collapsed(child))
        }
    }
}

proptest! {
    #[test]
    fn pruning_is_idempotent(tree in tree_strategy(), electives in elective_strategy()) {
        let once = prune_electives(&tree, &electives);
        let twice = prune_electives(&once, &electives);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pruning_leaves_no_degenerate_nodes(tree in tree_strategy(), electives in elective_strategy()) {
        let pruned = prune_electives(&tree, &electives);
        prop_assert!(is_collapsed(&pruned), "degenerate node in {:?}", pruned);
    }

    #[test]
    fn pruning_removes_every_elective_reference(tree in tree_strategy(), electives in elective_strategy()) {
        let pruned = prune_electives(&tree, &electives);
        for name in pruned.course_names() {
            prop_assert!(!electives.contains(name), "elective {} survived", name);
        }
    }

    #[test]
    fn override_satisfies_every_tree(
        tree in tree_strategy(),
        statuses in status_strategy(),
        semester in 1u32 .. 10,
        total in 180u32 .. 100_000,
    ) {
        let courses = pool_info();
        let lookup = MapLookup::new(&courses, &statuses);
        let ctx = EvalContext::new(&lookup, semester, total, EvalRules::default());
        prop_assert!(is_met(&tree, &ctx));
    }

    #[test]
    fn rendered_tree_reparses_to_itself(tree in canonical_strategy()) {
        let grammar = PrereqGrammar::default();
        let names: Vec<String> = tree.course_names().into_iter().map(str::to_string).collect();
        let rendered = tree.render(&grammar);
        let reparsed = parse_prerequisite(&rendered, &names, &grammar);
        prop_assert_eq!(reparsed, tree, "rendered as {}", rendered);
    }
}

#[test]
fn credit_threshold_round_trips_through_rendering() {
    let grammar = PrereqGrammar::default();
    let node = PrereqNode::credits(120);
    let names: [&str; 0] = [];
    assert_eq!(parse_prerequisite(&node.to_string(), &names, &grammar), node);
}

#[test]
fn nested_credit_threshold_reparses_as_unknown_fragment() {
    let grammar = PrereqGrammar::default();
    let tree = PrereqNode::and(vec![PrereqNode::course("Алгоритми"), PrereqNode::credits(60)]);
    let rendered = tree.render(&grammar);
    assert_eq!(rendered, "Алгоритми и 60 кредити");
    let reparsed = parse_prerequisite(&rendered, &["Алгоритми"], &grammar);
    assert_eq!(
        reparsed,
        PrereqNode::and(vec![PrereqNode::course("Алгоритми"), PrereqNode::unknown("60 кредити")])
    );
}
