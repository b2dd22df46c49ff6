// crates/prereq-logic/src/prune.rs
// ============================================================================
// Module: Elective Pruning
// Description: Removes elective course references from prerequisite trees.
// Purpose: Electives never gate enrollment; only required courses do.
// Dependencies: crate::node
// ============================================================================

//! ## Overview
//! [`prune_electives`] rewrites a tree bottom-up. Elective course leaves become
//! [`PrereqNode::None`], `None` children are dropped from logical nodes, and
//! logical nodes left with zero or one child collapse to `None` or to that
//! child. The transform is idempotent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::node::Children;
use crate::node::PrereqNode;

// ============================================================================
// SECTION: Pruning
// ============================================================================

/// Returns `node` with every reference to an elective in `electives` removed.
#[must_use]
pub fn prune_electives(node: &PrereqNode, electives: &BTreeSet<String>) -> PrereqNode {
    match node {
        PrereqNode::Course {
            name,
        } if electives.contains(name) => PrereqNode::None,
        PrereqNode::And(children) => collapse(children, electives, PrereqNode::And),
        PrereqNode::Or(children) => collapse(children, electives, PrereqNode::Or),
        PrereqNode::None
        | PrereqNode::Unknown { .. }
        | PrereqNode::Course { .. }
        | PrereqNode::Credits { .. } => node.clone(),
    }
}

/// Prunes `children` and rebuilds the logical node with `wrap`.
fn collapse(
    children: &Children,
    electives: &BTreeSet<String>,
    wrap: fn(Children) -> PrereqNode,
) -> PrereqNode {
    let mut kept: Children = children
        .iter()
        .map(|child| prune_electives(child, electives))
        .filter(|child| !child.is_none())
        .map(Box::new)
        .collect();

    match kept.len() {
        0 => PrereqNode::None,
        1 => kept.pop().map_or(PrereqNode::None, |only| *only),
        _ => wrap(kept),
    }
}
