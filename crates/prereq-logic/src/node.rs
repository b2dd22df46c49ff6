// crates/prereq-logic/src/node.rs
// ============================================================================
// Module: Prerequisite Expression Tree
// Description: Tagged-union tree describing a course prerequisite.
// Purpose: Define `PrereqNode`, its constructors, rendering, and inspection helpers.
// Dependencies: serde::{Deserialize, Serialize}, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! A [`PrereqNode`] is the parsed form of a prerequisite sentence. Leaves
//! reference other courses or credit thresholds; `And`/`Or` compose them.
//! Two leaves are always satisfied: [`PrereqNode::None`] (no constraint) and
//! [`PrereqNode::Unknown`] (text the parser could not interpret).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::grammar::PrereqGrammar;

// ============================================================================
// SECTION: Node Definition
// ============================================================================

/// Child list shared by the logical node variants.
pub type Children = SmallVec<[Box<PrereqNode>; 4]>;

/// Prerequisite expression tree.
///
/// # Invariants
/// - The parser never builds `And`/`Or` with fewer than two children.
/// - After [`crate::prune_electives`], no `And`/`Or` has fewer than two
///   children and no `None` appears below a logical node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrereqNode {
    /// No constraint.
    None,

    /// Text that could not be interpreted.
    ///
    /// Always satisfied; surfaced separately by the explanation trace.
    Unknown {
        /// Original fragment text.
        text: String,
    },

    /// Reference to another course by name.
    Course {
        /// Referenced course name.
        name: String,
    },

    /// Minimum accumulated credits.
    Credits {
        /// Required credit amount.
        amount: u32,
    },

    /// All children must hold.
    And(Children),

    /// At least one child must hold.
    Or(Children),
}

impl PrereqNode {
    /// Creates a course reference leaf.
    #[must_use]
    pub fn course(name: impl Into<String>) -> Self {
        Self::Course {
            name: name.into(),
        }
    }

    /// Creates a credit threshold leaf.
    #[must_use]
    pub const fn credits(amount: u32) -> Self {
        Self::Credits {
            amount,
        }
    }

    /// Creates an unparsed text leaf.
    #[must_use]
    pub fn unknown(text: impl Into<String>) -> Self {
        Self::Unknown {
            text: text.into(),
        }
    }

    /// Creates a conjunction over `children`.
    #[must_use]
    pub fn and(children: impl IntoIterator<Item = Self>) -> Self {
        Self::And(children.into_iter().map(Box::new).collect())
    }

    /// Creates a disjunction over `children`.
    #[must_use]
    pub fn or(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Or(children.into_iter().map(Box::new).collect())
    }

    /// Returns true for the unconstrained leaf.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the children of a logical node.
    #[must_use]
    pub fn children(&self) -> Option<&[Box<Self>]> {
        match self {
            Self::And(children) | Self::Or(children) => Some(children.as_slice()),
            Self::None | Self::Unknown { .. } | Self::Course { .. } | Self::Credits { .. } => None,
        }
    }

    /// Returns the depth of the tree (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children().map_or(1, |children| {
            1 + children.iter().map(|child| child.depth()).max().unwrap_or(0)
        })
    }

    /// Collects referenced course names in left-to-right order.
    #[must_use]
    pub fn course_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.walk(&mut |node| {
            if let Self::Course {
                name,
            } = node
            {
                names.push(name.as_str());
            }
        });
        names
    }

    /// Collects the text of every unparsed fragment.
    #[must_use]
    pub fn unparsed_fragments(&self) -> Vec<&str> {
        let mut fragments = Vec::new();
        self.walk(&mut |node| {
            if let Self::Unknown {
                text,
            } = node
            {
                fragments.push(text.as_str());
            }
        });
        fragments
    }

    /// Visits every node in pre-order.
    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        if let Some(children) = self.children() {
            for child in children {
                child.walk(visit);
            }
        }
    }

    /// Renders the tree back into prose using `grammar`.
    ///
    /// Disjunctions nested under a conjunction are parenthesized so the output
    /// reparses with the same precedence.
    #[must_use]
    pub fn render(&self, grammar: &PrereqGrammar) -> String {
        match self {
            Self::None => String::new(),
            Self::Unknown {
                text,
            } => text.clone(),
            Self::Course {
                name,
            } => name.clone(),
            Self::Credits {
                amount,
            } => grammar.credits_text(*amount),
            Self::And(children) => children
                .iter()
                .map(|child| match child.as_ref() {
                    Self::Or(_) => format!("({})", child.render(grammar)),
                    _ => child.render(grammar),
                })
                .collect::<Vec<_>>()
                .join(&grammar.and_separator),
            Self::Or(children) => children
                .iter()
                .map(|child| child.render(grammar))
                .collect::<Vec<_>>()
                .join(&grammar.or_separator),
        }
    }
}

impl fmt::Display for PrereqNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrereqGrammar::default()))
    }
}
