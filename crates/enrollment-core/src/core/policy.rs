// crates/enrollment-core/src/core/policy.rs
// ============================================================================
// Module: Enrollment Policy
// Description: Injectable curriculum policy constants.
// Purpose: Keep credit caps, overrides, and program markers out of the code.
// Dependencies: prereq-logic, serde, thiserror
// ============================================================================

//! ## Overview
//! [`EnrollmentPolicy`] holds every curriculum rule that may change between
//! accreditations. The defaults reproduce the current faculty rules. The
//! policy is validated once at construction time; the solver itself never
//! fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use prereq_logic::EvalRules;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default per-level elective credit caps.
pub const DEFAULT_LEVEL_CAPS: [(u32, u32); 2] = [(1, 6), (2, 36)];
/// Program state marking a course exempt from prerequisite checks.
pub const DEFAULT_EXEMPT_STATE: &str = "нема";
/// Substring of a program state that marks a required course.
pub const DEFAULT_REQUIRED_MARKER: &str = "задолжителен";
/// Substring of a program state marking a course required only in four-year studies.
pub const DEFAULT_FOUR_YEAR_MARKER: &str = "(4 г.)";
/// Default bound on fixpoint rounds.
pub const DEFAULT_FIXPOINT_MAX_ROUNDS: usize = 20;
/// Credit value assumed when a catalog record omits one.
pub const DEFAULT_COURSE_CREDITS: u32 = 6;
/// Credits required to graduate from three-year studies.
pub const DEFAULT_THREE_YEAR_CREDITS: u32 = 174;
/// Credits required to graduate from four-year studies.
pub const DEFAULT_FOUR_YEAR_CREDITS: u32 = 234;
/// Name of the thesis course.
pub const DEFAULT_THESIS_COURSE: &str = "Дипломска работа";
/// Credits granted by the optional supplementary module.
pub const DEFAULT_SUPPLEMENTARY_CREDITS: u32 = 6;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Policy validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// A policy value is out of range.
    #[error("invalid enrollment policy: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Graduation thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraduationPolicy {
    /// Credits needed for three-year studies.
    pub three_year_credits: u32,
    /// Credits needed for four-year studies.
    pub four_year_credits: u32,
    /// Thesis course name.
    pub thesis_course: String,
    /// Credits granted by the supplementary module.
    pub supplementary_credits: u32,
}

impl Default for GraduationPolicy {
    fn default() -> Self {
        Self {
            three_year_credits: DEFAULT_THREE_YEAR_CREDITS,
            four_year_credits: DEFAULT_FOUR_YEAR_CREDITS,
            thesis_course: DEFAULT_THESIS_COURSE.to_string(),
            supplementary_credits: DEFAULT_SUPPLEMENTARY_CREDITS,
        }
    }
}

/// Curriculum policy consumed by the solver and resolvers.
///
/// # Invariants
/// - `fixpoint_max_rounds` is at least one once validated.
/// - Level caps are keyed by positive levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentPolicy {
    /// Elective credit cap per level.
    pub level_caps: BTreeMap<u32, u32>,
    /// Credit override and adjacent-semester rule.
    pub rules: EvalRules,
    /// Program state for courses that skip prerequisite checks.
    pub exempt_state: String,
    /// Substring marking a required course.
    pub required_marker: String,
    /// Substring marking a course required only in four-year studies.
    pub four_year_marker: String,
    /// Upper bound on fixpoint rounds.
    pub fixpoint_max_rounds: usize,
    /// Credits assumed when the catalog omits a value.
    pub default_course_credits: u32,
    /// Graduation thresholds.
    pub graduation: GraduationPolicy,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self {
            level_caps: DEFAULT_LEVEL_CAPS.into_iter().collect(),
            rules: EvalRules::default(),
            exempt_state: DEFAULT_EXEMPT_STATE.to_string(),
            required_marker: DEFAULT_REQUIRED_MARKER.to_string(),
            four_year_marker: DEFAULT_FOUR_YEAR_MARKER.to_string(),
            fixpoint_max_rounds: DEFAULT_FIXPOINT_MAX_ROUNDS,
            default_course_credits: DEFAULT_COURSE_CREDITS,
            graduation: GraduationPolicy::default(),
        }
    }
}

impl EnrollmentPolicy {
    /// Validates the policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Invalid`] when a value is out of range.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.fixpoint_max_rounds == 0 {
            return Err(PolicyError::Invalid(
                "fixpoint_max_rounds must be greater than zero".to_string(),
            ));
        }
        if self.level_caps.contains_key(&0) {
            return Err(PolicyError::Invalid("level cap levels must be positive".to_string()));
        }
        if self.exempt_state.trim().is_empty() {
            return Err(PolicyError::Invalid("exempt_state must be non-empty".to_string()));
        }
        if self.required_marker.trim().is_empty() {
            return Err(PolicyError::Invalid("required_marker must be non-empty".to_string()));
        }
        if self.four_year_marker.trim().is_empty() {
            return Err(PolicyError::Invalid("four_year_marker must be non-empty".to_string()));
        }
        if self.default_course_credits == 0 {
            return Err(PolicyError::Invalid(
                "default_course_credits must be greater than zero".to_string(),
            ));
        }
        if self.graduation.four_year_credits < self.graduation.three_year_credits {
            return Err(PolicyError::Invalid(
                "four_year_credits must be at least three_year_credits".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true when `state` marks a required course.
    #[must_use]
    pub fn is_required(&self, state: Option<&str>) -> bool {
        state.is_some_and(|state| state.contains(self.required_marker.as_str()))
    }

    /// Returns true when `state` exempts a course from prerequisite checks.
    #[must_use]
    pub fn is_exempt(&self, state: Option<&str>) -> bool {
        state == Some(self.exempt_state.as_str())
    }

    /// Returns true when `state` is set and does not mark a required course.
    ///
    /// Exempt courses count as electives here.
    #[must_use]
    pub fn is_elective(&self, state: Option<&str>) -> bool {
        state.is_some_and(|state| !state.is_empty()) && !self.is_required(state)
    }

    /// Returns true when `state` marks a course required only in four-year studies.
    #[must_use]
    pub fn is_four_year_only(&self, state: Option<&str>) -> bool {
        state.is_some_and(|state| state.contains(self.four_year_marker.as_str()))
    }

    /// Returns the elective cap for `level`, if one is configured.
    #[must_use]
    pub fn cap_for(&self, level: u32) -> Option<u32> {
        self.level_caps.get(&level).copied()
    }
}
