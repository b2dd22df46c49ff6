// crates/enrollment-core/src/runtime/caps.rs
// ============================================================================
// Module: Elective Credit Caps
// Description: Per-level elective credit limits and overflow selection.
// Purpose: Decide which passed electives stop counting toward the total.
// Dependencies: serde, crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! Passed non-required courses are grouped by level. A level whose credits
//! reach its cap is *full*; one that exceeds it is *over limit*. For an
//! over-limit level, courses are retained in (semester, name) order while
//! they fit under the cap, and the rest are excluded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::EnrollmentPolicy;
use crate::core::StatusMap;
use crate::core::compare_names;
use crate::runtime::curriculum::Curriculum;
use crate::runtime::curriculum::CurriculumCourse;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Credit cap status of the passed electives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverLimitInfo {
    /// Sum of credits above the cap across over-limit levels.
    pub excess_credits: u32,
    /// Levels whose elective credits reach the cap.
    pub full_levels: BTreeSet<u32>,
    /// Levels whose elective credits exceed the cap, ascending.
    pub levels: Vec<u32>,
    /// Courses excluded from the credit total.
    pub names: BTreeSet<String>,
}

impl OverLimitInfo {
    /// Returns true when no level exceeds its cap.
    #[must_use]
    pub fn is_within_limits(&self) -> bool {
        self.levels.is_empty()
    }
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Computes elective credit cap status for `statuses`.
#[must_use]
pub fn compute_over_limit_info(
    curriculum: &Curriculum,
    statuses: &StatusMap,
    policy: &EnrollmentPolicy,
) -> OverLimitInfo {
    let mut by_level: BTreeMap<u32, Vec<&CurriculumCourse>> = BTreeMap::new();
    for entry in curriculum.courses() {
        if statuses.is_passed(entry.name()) && !entry.required {
            by_level.entry(entry.course.level).or_default().push(entry);
        }
    }

    let mut info = OverLimitInfo::default();
    for (&level, &cap) in &policy.level_caps {
        let Some(mut passed) = by_level.remove(&level) else {
            if cap == 0 {
                info.full_levels.insert(level);
            }
            continue;
        };
        let actual = passed.iter().fold(0_u32, |sum, entry| sum.saturating_add(entry.course.credits));
        if actual >= cap {
            info.full_levels.insert(level);
        }
        if actual <= cap {
            continue;
        }

        info.levels.push(level);
        info.excess_credits = info.excess_credits.saturating_add(actual - cap);
        passed.sort_by(|left, right| {
            left.course
                .semester
                .cmp(&right.course.semester)
                .then_with(|| compare_names(left.name(), right.name()))
        });
        let mut kept = 0_u32;
        for entry in passed {
            let next = kept.saturating_add(entry.course.credits);
            if next <= cap {
                kept = next;
            } else {
                info.names.insert(entry.name().to_string());
            }
        }
    }
    info
}
