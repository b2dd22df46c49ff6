// crates/enrollment-core/src/runtime/solver.rs
// ============================================================================
// Module: Enrollment Fixpoint Solver
// Description: Iterates eligibility across a curriculum until it settles.
// Purpose: Resolve the circular link between eligibility and counted credits.
// Dependencies: prereq-logic, serde, crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! A passed course only contributes credits while it is itself enabled, and
//! enabling depends on credits. The solver starts with every course enabled
//! and alternates between summing credits and re-evaluating each course,
//! stopping at the first round without a change or at the policy's round
//! bound.
//!
//! ## Invariants
//! - Exempt courses are always enabled.
//! - `rounds` never exceeds `policy.fixpoint_max_rounds`.
//! - `converged` is true only when the final round changed nothing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use prereq_logic::EvalContext;
use prereq_logic::MapLookup;
use prereq_logic::is_met;
use serde::Serialize;

use crate::core::EnrollmentPolicy;
use crate::core::StatusMap;
use crate::runtime::curriculum::Curriculum;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Whether each course may currently be enrolled, keyed by name.
pub type EnabledMap = BTreeMap<String, bool>;

/// Result of a fixpoint solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixpointOutcome {
    /// Final enabled flags.
    pub enabled: EnabledMap,
    /// Rounds executed.
    pub rounds: usize,
    /// A round completed without any flag flipping.
    pub converged: bool,
}

impl FixpointOutcome {
    /// Returns true when `name` is enabled; unknown names read as enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.get(name).copied().unwrap_or(true)
    }

    /// Returns the number of enabled courses.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.enabled.values().filter(|enabled| **enabled).count()
    }
}

// ============================================================================
// SECTION: Solver
// ============================================================================

/// Sums the credits of courses that are both passed and enabled.
///
/// Courses missing from `enabled` do not count.
#[must_use]
pub fn enabled_passed_credits(
    curriculum: &Curriculum,
    statuses: &StatusMap,
    enabled: &EnabledMap,
) -> u32 {
    curriculum
        .courses()
        .iter()
        .filter(|entry| statuses.is_passed(entry.name()))
        .filter(|entry| enabled.get(entry.name()).copied().unwrap_or(false))
        .fold(0_u32, |total, entry| total.saturating_add(entry.course.credits))
}

/// Solves the enabled map for `statuses`.
#[must_use]
pub fn compute_enabled_map(
    curriculum: &Curriculum,
    statuses: &StatusMap,
    policy: &EnrollmentPolicy,
) -> FixpointOutcome {
    let mut enabled: EnabledMap =
        curriculum.courses().iter().map(|entry| (entry.name().to_string(), true)).collect();
    let lookup = MapLookup::new(curriculum.info(), statuses.as_map());
    let mut rounds = 0;
    let mut converged = false;

    while rounds < policy.fixpoint_max_rounds {
        rounds += 1;
        let credits = enabled_passed_credits(curriculum, statuses, &enabled);
        let mut changed = false;
        for entry in curriculum.courses() {
            let next = entry.exempt || {
                let ctx = EvalContext::new(&lookup, entry.course.semester, credits, policy.rules);
                is_met(&entry.pruned, &ctx)
            };
            if enabled.insert(entry.name().to_string(), next) != Some(next) {
                changed = true;
            }
        }
        if !changed {
            converged = true;
            break;
        }
    }

    FixpointOutcome {
        enabled,
        rounds,
        converged,
    }
}
