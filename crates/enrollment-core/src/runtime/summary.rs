// crates/enrollment-core/src/runtime/summary.rs
// ============================================================================
// Module: Enrollment Summary
// Description: Credit totals, progress counts, and graduation readiness.
// Purpose: Aggregate the per-course results into degree-level figures.
// Dependencies: serde, crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! Totals count every passed course, add the supplementary module when it is
//! completed, and subtract the credits excluded by elective caps. Graduation
//! is judged separately for three-year and four-year studies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::EnrollmentPolicy;
use crate::core::StatusMap;
use crate::runtime::caps::OverLimitInfo;
use crate::runtime::curriculum::Curriculum;

// ============================================================================
// SECTION: Totals
// ============================================================================

/// Credit totals for the current statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CreditTotals {
    /// Credits of every passed course.
    pub passed_credits: u32,
    /// Credits granted by the supplementary module.
    pub supplementary_credits: u32,
    /// Credits excluded by elective caps.
    pub excess_credits: u32,
    /// Counted total, never below zero.
    pub total: u32,
}

/// Computes credit totals.
#[must_use]
pub fn compute_totals(
    curriculum: &Curriculum,
    statuses: &StatusMap,
    over_limit: &OverLimitInfo,
    supplementary_completed: bool,
    policy: &EnrollmentPolicy,
) -> CreditTotals {
    let passed_credits = curriculum
        .courses()
        .iter()
        .filter(|entry| statuses.is_passed(entry.name()))
        .fold(0_u32, |sum, entry| sum.saturating_add(entry.course.credits));
    let supplementary_credits =
        if supplementary_completed { policy.graduation.supplementary_credits } else { 0 };
    CreditTotals {
        passed_credits,
        supplementary_credits,
        excess_credits: over_limit.excess_credits,
        total: passed_credits
            .saturating_add(supplementary_credits)
            .saturating_sub(over_limit.excess_credits),
    }
}

/// Listened and passed course counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CourseCounts {
    /// Courses marked listened.
    pub listened: usize,
    /// Courses marked passed.
    pub passed: usize,
}

/// Counts listened and passed courses in the curriculum.
#[must_use]
pub fn count_courses(curriculum: &Curriculum, statuses: &StatusMap) -> CourseCounts {
    curriculum.courses().iter().fold(CourseCounts::default(), |mut counts, entry| {
        let status = statuses.get(entry.name());
        counts.listened += usize::from(status.listened);
        counts.passed += usize::from(status.passed);
        counts
    })
}

// ============================================================================
// SECTION: Graduation
// ============================================================================

/// Graduation readiness for one study length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraduationTrack {
    /// Credits the track requires.
    pub required_credits: u32,
    /// The total reaches `required_credits`.
    pub credits_met: bool,
    /// Required courses not yet passed, in curriculum order.
    pub missing_courses: Vec<String>,
    /// Credits are met and no required course is missing.
    pub eligible: bool,
    /// Eligible and the thesis is passed.
    pub graduated: bool,
}

/// Graduation readiness for both study lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraduationInfo {
    /// Three-year studies.
    pub three_year: GraduationTrack,
    /// Four-year studies.
    pub four_year: GraduationTrack,
    /// The thesis course is passed.
    pub thesis_passed: bool,
}

impl GraduationInfo {
    /// Returns true when either track is graduated.
    #[must_use]
    pub const fn graduated(&self) -> bool {
        self.three_year.graduated || self.four_year.graduated
    }
}

/// Computes graduation readiness for `total_credits`.
#[must_use]
pub fn compute_graduation_info(
    curriculum: &Curriculum,
    statuses: &StatusMap,
    total_credits: u32,
    policy: &EnrollmentPolicy,
) -> GraduationInfo {
    let mut missing_three = Vec::new();
    let mut missing_four = Vec::new();
    for entry in curriculum.courses() {
        if !entry.required || statuses.is_passed(entry.name()) {
            continue;
        }
        missing_four.push(entry.name().to_string());
        if !policy.is_four_year_only(entry.course.state()) {
            missing_three.push(entry.name().to_string());
        }
    }
    let thesis_passed = statuses.is_passed(&policy.graduation.thesis_course);
    GraduationInfo {
        three_year: track(policy.graduation.three_year_credits, total_credits, missing_three, thesis_passed),
        four_year: track(policy.graduation.four_year_credits, total_credits, missing_four, thesis_passed),
        thesis_passed,
    }
}

/// Builds one graduation track.
fn track(
    required_credits: u32,
    total_credits: u32,
    missing_courses: Vec<String>,
    thesis_passed: bool,
) -> GraduationTrack {
    let credits_met = total_credits >= required_credits;
    let eligible = credits_met && missing_courses.is_empty();
    GraduationTrack {
        required_credits,
        credits_met,
        missing_courses,
        eligible,
        graduated: eligible && thesis_passed,
    }
}
