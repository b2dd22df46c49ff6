// crates/enrollment-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared fixtures and result helpers for enrollment tests.
// ============================================================================
//! ## Overview
//! Result-based assertions plus builders for small curricula.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;

use enrollment_core::Accreditation;
use enrollment_core::Course;
use enrollment_core::CourseStatus;
use enrollment_core::Curriculum;
use enrollment_core::EnrollmentPolicy;
use enrollment_core::PrereqGrammar;
use enrollment_core::ProgramName;
use enrollment_core::StatusMap;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across enrollment integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(Box::new(TestError {
            message: message.into(),
        }))
    }
}

// ========================================================================
// Fixtures
// ========================================================================

/// Program state of a required course.
pub const REQUIRED: &str = "задолжителен";
/// Program state of an elective course.
pub const ELECTIVE: &str = "изборен";
/// Program state of a course exempt from prerequisites.
pub const EXEMPT: &str = "нема";

/// Builds a six-credit, level-zero course.
pub fn course(name: &str, semester: u32, state: Option<&str>, prerequisite: Option<&str>) -> Course {
    Course {
        name: name.to_string(),
        code: None,
        credits: 6,
        level: 0,
        semester,
        prerequisite: prerequisite.map(str::to_string),
        program_state: state.map(str::to_string),
    }
}

/// Builds a course at `level` with the given credits.
pub fn leveled(name: &str, semester: u32, level: u32, credits: u32, state: &str) -> Course {
    Course {
        level,
        credits,
        ..course(name, semester, Some(state), None)
    }
}

/// Builds a curriculum with the default policy and grammar.
pub fn curriculum(courses: Vec<Course>) -> Curriculum {
    curriculum_with(courses, &EnrollmentPolicy::default())
}

/// Builds a curriculum under `policy`.
pub fn curriculum_with(courses: Vec<Course>, policy: &EnrollmentPolicy) -> Curriculum {
    Curriculum::build(
        Accreditation::new("2023"),
        ProgramName::new("СИИС"),
        courses,
        policy,
        &PrereqGrammar::default(),
    )
}

/// Builds a status map from `(name, listened, passed)` triples.
pub fn statuses(entries: &[(&str, bool, bool)]) -> StatusMap {
    entries
        .iter()
        .map(|(name, listened, passed)| {
            (
                (*name).to_string(),
                CourseStatus {
                    listened: *listened,
                    passed: *passed,
                },
            )
        })
        .collect()
}

/// Marks every named course passed.
pub fn all_passed(names: &[String]) -> StatusMap {
    names
        .iter()
        .map(|name| {
            (
                name.clone(),
                CourseStatus {
                    listened: true,
                    passed: true,
                },
            )
        })
        .collect()
}
