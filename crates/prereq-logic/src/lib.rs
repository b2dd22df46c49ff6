// crates/prereq-logic/src/lib.rs
// ============================================================================
// Module: Prerequisite Logic Root
// Description: Public API surface for the prerequisite expression engine.
// Purpose: Wire together the tree, grammar, parser, pruning, and evaluator.
// Dependencies: crate::{dsl, eval, explain, grammar, node, prune}
// ============================================================================

//! ## Overview
//! Prerequisite text is free-form prose written by curriculum authors, for
//! example `"Алгоритми и (Бази на податоци или 60 кредити)"`. This crate turns
//! such text into a [`PrereqNode`] tree, strips elective references from it,
//! and evaluates it against a student's course history.
//!
//! The engine is fail-open: text that cannot be parsed becomes
//! [`PrereqNode::Unknown`] and never blocks enrollment.
//!
//! ```
//! use prereq_logic::PrereqGrammar;
//! use prereq_logic::PrereqNode;
//! use prereq_logic::parse_prerequisite;
//!
//! let grammar = PrereqGrammar::default();
//! let names = ["Алгоритми", "Бази на податоци"];
//! let node = parse_prerequisite("алгоритми или Бази на податоци", &names, &grammar);
//! assert_eq!(
//!     node,
//!     PrereqNode::or([PrereqNode::course("Алгоритми"), PrereqNode::course("Бази на податоци")])
//! );
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod dsl;
pub mod eval;
pub mod explain;
pub mod grammar;
pub mod node;
pub mod prune;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dsl::MAX_PREREQ_INPUT_BYTES;
pub use dsl::MAX_PREREQ_NESTING;
pub use dsl::parse_prerequisite;
pub use eval::CourseInfo;
pub use eval::CourseLookup;
pub use eval::CourseStatus;
pub use eval::DEFAULT_ADJACENT_SEMESTER_OFFSET;
pub use eval::DEFAULT_OVERRIDE_CREDITS;
pub use eval::EvalContext;
pub use eval::EvalRules;
pub use eval::MapLookup;
pub use eval::NoopTrace;
pub use eval::PrereqTrace;
pub use eval::RequiredStanding;
pub use eval::evaluate;
pub use eval::evaluate_with_trace;
pub use eval::is_met;
pub use explain::ExplainLine;
pub use explain::explain;
pub use grammar::PrereqGrammar;
pub use node::PrereqNode;
pub use prune::prune_electives;
