// crates/prereq-logic/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared fixtures and result helpers for prerequisite tests.
// ============================================================================
//! ## Overview
//! Result-based assertions plus a small in-memory course lookup.

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

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use prereq_logic::CourseInfo;
use prereq_logic::CourseStatus;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across prerequisite integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
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
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

// ========================================================================
// Fixtures
// ========================================================================

/// Builds an info map from `(name, semester)` pairs with six credits each.
pub fn info_map(entries: &[(&str, u32)]) -> BTreeMap<String, CourseInfo> {
    entries
        .iter()
        .map(|(name, semester)| {
            (
                (*name).to_string(),
                CourseInfo {
                    name: (*name).to_string(),
                    credits: 6,
                    semester: *semester,
                },
            )
        })
        .collect()
}

/// Builds a status map from `(name, listened, passed)` triples.
pub fn status_map(entries: &[(&str, bool, bool)]) -> BTreeMap<String, CourseStatus> {
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
