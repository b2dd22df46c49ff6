// crates/enrollment-core/src/core/course.rs
// ============================================================================
// Module: Course Model
// Description: Catalog course projected for one accreditation and program.
// Purpose: Carry the facts the solver and resolvers read.
// Dependencies: prereq-logic, serde
// ============================================================================

//! ## Overview
//! A [`Course`] is immutable once projected. Its name is the join key used by
//! status maps, prerequisite references, and reports.

// ============================================================================
// SECTION: Imports
// ============================================================================

use prereq_logic::CourseInfo;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Course
// ============================================================================

/// A course as offered under one accreditation and study program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name and identity key.
    pub name: String,
    /// Catalog code, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Credit value.
    pub credits: u32,
    /// Coarse level used for elective credit caps (0 when unclassified).
    pub level: u32,
    /// Home semester (1-based).
    pub semester: u32,
    /// Raw prerequisite text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite: Option<String>,
    /// Membership state within the selected study program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_state: Option<String>,
}

impl Course {
    /// Returns the program state as a string slice.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.program_state.as_deref()
    }

    /// Returns the facts needed by prerequisite evaluation.
    #[must_use]
    pub fn info(&self) -> CourseInfo {
        CourseInfo {
            name: self.name.clone(),
            credits: self.credits,
            semester: self.semester,
        }
    }
}
