// crates/enrollment-core/src/runtime/reasons.rs
// ============================================================================
// Module: Enrollment Reasons
// Description: Human-readable explanations of each course's eligibility.
// Purpose: Narrate status, caps, membership, and the prerequisite trace.
// Dependencies: prereq-logic, crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! A reason is a newline-joined list of localized lines, in this order:
//! status, enrollability, credit cap warning, program membership, and
//! prerequisites. The prerequisite part walks the raw tree so electives show
//! up as skipped references, and collapses to a single line once the credit
//! override applies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use prereq_logic::EvalContext;
use prereq_logic::ExplainLine;
use prereq_logic::MapLookup;
use prereq_logic::PrereqNode;
use prereq_logic::RequiredStanding;
use prereq_logic::explain;

use crate::core::EnrollmentPolicy;
use crate::core::Locale;
use crate::core::StatusMap;
use crate::core::messages::tr;
use crate::runtime::caps::OverLimitInfo;
use crate::runtime::curriculum::Curriculum;
use crate::runtime::curriculum::CurriculumCourse;
use crate::runtime::solver::EnabledMap;
use crate::runtime::solver::enabled_passed_credits;

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Everything the reason generator reads.
#[derive(Debug, Clone, Copy)]
pub struct ReasonInputs<'a> {
    /// Curriculum under evaluation.
    pub curriculum: &'a Curriculum,
    /// Student statuses.
    pub statuses: &'a StatusMap,
    /// Solved enabled flags.
    pub enabled: &'a EnabledMap,
    /// Credit cap status.
    pub over_limit: &'a OverLimitInfo,
    /// Policy in effect.
    pub policy: &'a EnrollmentPolicy,
    /// Output locale.
    pub locale: Locale,
}

// ============================================================================
// SECTION: Generator
// ============================================================================

/// Builds the reason text for every course, keyed by name.
#[must_use]
pub fn compute_reason_map(inputs: &ReasonInputs<'_>) -> BTreeMap<String, String> {
    let credits = enabled_passed_credits(inputs.curriculum, inputs.statuses, inputs.enabled);
    inputs
        .curriculum
        .courses()
        .iter()
        .map(|entry| (entry.name().to_string(), course_reason(inputs, entry, credits).join("\n")))
        .collect()
}

/// Builds the reason lines for one course.
fn course_reason(inputs: &ReasonInputs<'_>, entry: &CurriculumCourse, credits: u32) -> Vec<String> {
    let locale = inputs.locale;
    let course = &entry.course;
    let status = inputs.statuses.get(&course.name);
    let mut lines = Vec::new();

    lines.push(if status.passed {
        tr!(locale, "status.passed")
    } else if status.listened {
        tr!(locale, "status.listened")
    } else {
        tr!(locale, "status.not_listened")
    });

    if inputs.enabled.get(&course.name).copied().unwrap_or(true) {
        lines.push(tr!(locale, "enroll.allowed"));
    } else {
        lines.push(tr!(locale, "enroll.blocked"));
    }

    let limit = inputs.policy.cap_for(course.level).unwrap_or(0);
    if inputs.over_limit.names.contains(&course.name) {
        lines.push(tr!(locale, "cap.exceeded", level = course.level, limit = limit));
    } else if !status.passed
        && !entry.required
        && inputs.over_limit.full_levels.contains(&course.level)
    {
        lines.push(tr!(locale, "cap.full", level = course.level, limit = limit));
    }

    if entry.required {
        lines.push(tr!(locale, "program.required"));
    } else if course.state().is_some_and(|state| !state.is_empty()) && !entry.exempt {
        lines.push(tr!(locale, "program.elective"));
    }

    if entry.exempt {
        lines.push(tr!(locale, "prereq.exempt"));
    } else if entry.pruned.is_none() && entry.raw.is_none() {
        lines.push(tr!(locale, "prereq.none"));
    } else if credits >= inputs.policy.rules.override_credits {
        lines.push(tr!(locale, "prereq.override", threshold = inputs.policy.rules.override_credits));
    } else {
        lines.push(tr!(locale, "prereq.header"));
        lines.extend(trace_lines(inputs, course.semester, credits, &entry.raw));
    }
    lines
}

/// Renders the explanation trace of `node` for a course at `semester`.
fn trace_lines(
    inputs: &ReasonInputs<'_>,
    semester: u32,
    credits: u32,
    node: &PrereqNode,
) -> Vec<String> {
    let lookup = MapLookup::new(inputs.curriculum.info(), inputs.statuses.as_map());
    let ctx = EvalContext::new(&lookup, semester, credits, inputs.policy.rules);
    explain(node, &ctx, inputs.curriculum.electives())
        .iter()
        .map(|line| render_line(inputs.locale, line))
        .collect()
}

/// Renders one explanation line.
fn render_line(locale: Locale, line: &ExplainLine) -> String {
    match line {
        ExplainLine::Course {
            name,
            standing,
            satisfied,
        } => {
            let standing = match standing {
                RequiredStanding::Listened => tr!(locale, "prereq.standing.listened"),
                RequiredStanding::Passed => tr!(locale, "prereq.standing.passed"),
            };
            if *satisfied {
                tr!(locale, "prereq.course.met", name = name, standing = standing)
            } else {
                tr!(locale, "prereq.course.unmet", name = name, standing = standing)
            }
        }
        ExplainLine::Credits {
            amount,
            total,
            satisfied,
        } => {
            if *satisfied {
                tr!(locale, "prereq.credits.met", amount = amount)
            } else {
                tr!(locale, "prereq.credits.unmet", amount = amount, total = total)
            }
        }
        ExplainLine::ElectiveSkipped {
            name,
        } => tr!(locale, "prereq.elective", name = name),
        ExplainLine::Unparsed {
            text,
        } => tr!(locale, "prereq.unparsed", text = text),
    }
}
