// crates/prereq-logic/src/eval.rs
// ============================================================================
// Module: Prerequisite Evaluation
// Description: Boolean evaluation of prerequisite trees against course history.
// Purpose: Decide whether a student may enroll given statuses and credits.
// Dependencies: serde, crate::node
// ============================================================================

//! ## Overview
//! Evaluation reads course data through the [`CourseLookup`] trait so callers
//! can back it with whatever catalog representation they hold.
//!
//! A course leaf uses the adjacent-semester rule. When the referenced course
//! sits exactly [`EvalRules::adjacent_semester_offset`] semesters before the
//! course being tested, having listened to it is enough. Otherwise it must be
//! passed. If the referenced course is absent from the lookup, it must be
//! passed.
//!
//! [`is_met`] adds the credit override: once accumulated credits reach
//! [`EvalRules::override_credits`], every tree is satisfied.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::node::PrereqNode;

// ============================================================================
// SECTION: Rules
// ============================================================================

/// Credit total past which no prerequisite applies.
pub const DEFAULT_OVERRIDE_CREDITS: u32 = 180;
/// Semester gap at which listening to a prerequisite suffices.
pub const DEFAULT_ADJACENT_SEMESTER_OFFSET: i64 = 1;

/// Policy constants consulted during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalRules {
    /// Accumulated credits that satisfy every prerequisite.
    pub override_credits: u32,
    /// Semester difference at which a listened course is enough.
    pub adjacent_semester_offset: i64,
}

impl Default for EvalRules {
    fn default() -> Self {
        Self {
            override_credits: DEFAULT_OVERRIDE_CREDITS,
            adjacent_semester_offset: DEFAULT_ADJACENT_SEMESTER_OFFSET,
        }
    }
}

// ============================================================================
// SECTION: Course Data
// ============================================================================

/// Per-course progress flags.
///
/// # Invariants
/// - Missing entries are read as both flags `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseStatus {
    /// The student enrolled in the course.
    #[serde(default)]
    pub listened: bool,
    /// The student completed the course.
    #[serde(default)]
    pub passed: bool,
}

/// Catalog facts needed to evaluate a course reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    /// Course name.
    pub name: String,
    /// Credit value.
    pub credits: u32,
    /// Home semester (1-based).
    pub semester: u32,
}

/// Read access to course semesters and student statuses.
pub trait CourseLookup {
    /// Returns the home semester of `name`, if the course is known.
    fn semester_of(&self, name: &str) -> Option<u32>;

    /// Returns the status of `name`, defaulting to not listened.
    fn status_of(&self, name: &str) -> CourseStatus;
}

/// [`CourseLookup`] over an info map and a status map.
#[derive(Debug, Clone, Copy)]
pub struct MapLookup<'a> {
    /// Course facts keyed by name.
    pub courses: &'a BTreeMap<String, CourseInfo>,
    /// Student statuses keyed by name.
    pub statuses: &'a BTreeMap<String, CourseStatus>,
}

impl<'a> MapLookup<'a> {
    /// Creates a lookup over the given maps.
    #[must_use]
    pub const fn new(
        courses: &'a BTreeMap<String, CourseInfo>,
        statuses: &'a BTreeMap<String, CourseStatus>,
    ) -> Self {
        Self {
            courses,
            statuses,
        }
    }
}

impl CourseLookup for MapLookup<'_> {
    fn semester_of(&self, name: &str) -> Option<u32> {
        self.courses.get(name).map(|info| info.semester)
    }

    fn status_of(&self, name: &str) -> CourseStatus {
        self.statuses.get(name).copied().unwrap_or_default()
    }
}

// ============================================================================
// SECTION: Context
// ============================================================================

/// Progress a course reference demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredStanding {
    /// Concurrent enrollment is enough.
    Listened,
    /// The course must be completed.
    Passed,
}

/// Inputs for a single evaluation call.
#[derive(Debug)]
pub struct EvalContext<'a, L: ?Sized> {
    /// Course data source.
    pub lookup: &'a L,
    /// Home semester of the course being tested.
    pub course_semester: u32,
    /// Accumulated credits supplied by the caller.
    pub total_credits: u32,
    /// Policy constants.
    pub rules: EvalRules,
}

impl<'a, L: CourseLookup + ?Sized> EvalContext<'a, L> {
    /// Creates a context for testing a course at `course_semester`.
    #[must_use]
    pub const fn new(
        lookup: &'a L,
        course_semester: u32,
        total_credits: u32,
        rules: EvalRules,
    ) -> Self {
        Self {
            lookup,
            course_semester,
            total_credits,
            rules,
        }
    }

    /// Returns the standing `name` must reach to satisfy a course leaf.
    #[must_use]
    pub fn required_standing(&self, name: &str) -> RequiredStanding {
        let Some(semester) = self.lookup.semester_of(name) else {
            return RequiredStanding::Passed;
        };
        let diff = i64::from(self.course_semester) - i64::from(semester);
        if diff == self.rules.adjacent_semester_offset {
            RequiredStanding::Listened
        } else {
            RequiredStanding::Passed
        }
    }

    /// Returns true when the referenced course satisfies its leaf.
    #[must_use]
    pub fn course_satisfied(&self, name: &str) -> bool {
        let status = self.lookup.status_of(name);
        match self.required_standing(name) {
            RequiredStanding::Listened => status.listened,
            RequiredStanding::Passed => status.passed,
        }
    }

    /// Returns true when the credit override applies.
    #[must_use]
    pub const fn override_reached(&self) -> bool {
        self.total_credits >= self.rules.override_credits
    }
}

// ============================================================================
// SECTION: Trace Hooks
// ============================================================================

/// Trace hook for leaf evaluation.
pub trait PrereqTrace {
    /// Called whenever a course or credit leaf is evaluated.
    fn on_leaf_evaluated(&mut self, leaf: &PrereqNode, satisfied: bool);
}

/// No-op trace hook for fast paths.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl PrereqTrace for NoopTrace {
    fn on_leaf_evaluated(&mut self, _leaf: &PrereqNode, _satisfied: bool) {}
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates `node` without the credit override.
#[must_use]
pub fn evaluate<L: CourseLookup + ?Sized>(node: &PrereqNode, ctx: &EvalContext<'_, L>) -> bool {
    evaluate_with_trace(node, ctx, &mut NoopTrace)
}

/// Evaluates `node`, reporting each evaluated leaf to `trace`.
///
/// `And` stops at the first failing child and `Or` at the first satisfied
/// one, so skipped leaves are not reported.
pub fn evaluate_with_trace<L, T>(node: &PrereqNode, ctx: &EvalContext<'_, L>, trace: &mut T) -> bool
where
    L: CourseLookup + ?Sized,
    T: PrereqTrace,
{
    match node {
        PrereqNode::None | PrereqNode::Unknown { .. } => true,
        PrereqNode::Course {
            name,
        } => {
            let satisfied = ctx.course_satisfied(name);
            trace.on_leaf_evaluated(node, satisfied);
            satisfied
        }
        PrereqNode::Credits {
            amount,
        } => {
            let satisfied = ctx.total_credits >= *amount;
            trace.on_leaf_evaluated(node, satisfied);
            satisfied
        }
        PrereqNode::And(children) => {
            children.iter().all(|child| evaluate_with_trace(child, ctx, trace))
        }
        PrereqNode::Or(children) => {
            children.iter().any(|child| evaluate_with_trace(child, ctx, trace))
        }
    }
}

/// Returns true when the credit override applies or `node` evaluates true.
#[must_use]
pub fn is_met<L: CourseLookup + ?Sized>(node: &PrereqNode, ctx: &EvalContext<'_, L>) -> bool {
    ctx.override_reached() || evaluate(node, ctx)
}
