// crates/prereq-logic/src/explain.rs
// ============================================================================
// Module: Prerequisite Explanation
// Description: Structured per-leaf trace of a prerequisite tree.
// Purpose: Feed human-readable reasons without baking in any wording.
// Dependencies: serde, crate::{eval, node}
// ============================================================================

//! ## Overview
//! [`explain`] walks a raw (unpruned) tree with the evaluator's semantics and
//! returns one [`ExplainLine`] per relevant leaf. Conjunctions list all of
//! their leaves. A disjunction reports only its first fully satisfied branch,
//! or every branch when none is satisfied. Rendering the lines into text is
//! left to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Serialize;

use crate::eval::CourseLookup;
use crate::eval::EvalContext;
use crate::eval::RequiredStanding;
use crate::node::PrereqNode;

// ============================================================================
// SECTION: Lines
// ============================================================================

/// One leaf of an explanation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExplainLine {
    /// A required course reference.
    Course {
        /// Referenced course.
        name: String,
        /// Standing the reference demands.
        standing: RequiredStanding,
        /// Whether the student reaches that standing.
        satisfied: bool,
    },
    /// A credit threshold.
    Credits {
        /// Required credits.
        amount: u32,
        /// Credits the student has.
        total: u32,
        /// Whether the threshold is reached.
        satisfied: bool,
    },
    /// An elective reference, which never gates enrollment.
    ElectiveSkipped {
        /// Referenced elective.
        name: String,
    },
    /// Text the parser could not interpret.
    Unparsed {
        /// Original fragment.
        text: String,
    },
}

impl ExplainLine {
    /// Returns true when this line counts toward a satisfied branch.
    ///
    /// Elective lines do not count; unparsed lines do, matching evaluation.
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        match self {
            Self::Course {
                satisfied, ..
            }
            | Self::Credits {
                satisfied, ..
            } => *satisfied,
            Self::ElectiveSkipped { .. } => false,
            Self::Unparsed { .. } => true,
        }
    }
}

// ============================================================================
// SECTION: Explanation
// ============================================================================

/// Explains `node` under `ctx`, marking references in `electives` as skipped.
#[must_use]
pub fn explain<L: CourseLookup + ?Sized>(
    node: &PrereqNode,
    ctx: &EvalContext<'_, L>,
    electives: &BTreeSet<String>,
) -> Vec<ExplainLine> {
    match node {
        PrereqNode::None => Vec::new(),
        PrereqNode::Unknown {
            text,
        } => vec![ExplainLine::Unparsed {
            text: text.clone(),
        }],
        PrereqNode::Course {
            name,
        } => {
            if electives.contains(name) {
                return vec![ExplainLine::ElectiveSkipped {
                    name: name.clone(),
                }];
            }
            vec![ExplainLine::Course {
                name: name.clone(),
                standing: ctx.required_standing(name),
                satisfied: ctx.course_satisfied(name),
            }]
        }
        PrereqNode::Credits {
            amount,
        } => vec![ExplainLine::Credits {
            amount: *amount,
            total: ctx.total_credits,
            satisfied: ctx.total_credits >= *amount,
        }],
        PrereqNode::And(children) => {
            children.iter().flat_map(|child| explain(child, ctx, electives)).collect()
        }
        PrereqNode::Or(children) => {
            let branches: Vec<Vec<ExplainLine>> =
                children.iter().map(|child| explain(child, ctx, electives)).collect();
            if let Some(index) =
                branches.iter().position(|lines| lines.iter().all(ExplainLine::is_satisfied))
            {
                return branches.into_iter().nth(index).unwrap_or_default();
            }
            branches.into_iter().flatten().collect()
        }
    }
}
