// crates/enrollment-core/src/core/status.rs
// ============================================================================
// Module: Student Status Map
// Description: Mutable per-course listened/passed flags.
// Purpose: Hold the only mutable input to the enrollment computations.
// Dependencies: prereq-logic, serde
// ============================================================================

//! ## Overview
//! [`StatusMap`] maps course names to [`CourseStatus`]. Absent entries read as
//! not listened. The toggles keep `passed` implying `listened`: passing a
//! course marks it listened, and un-listening a course clears its pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use prereq_logic::CourseStatus;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Status Map
// ============================================================================

/// Student progress keyed by course name.
///
/// Decoding goes through [`StatusMap::set`], so stored entries that claim a
/// pass without a listen come back listened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, CourseStatus>", into = "BTreeMap<String, CourseStatus>")]
pub struct StatusMap(BTreeMap<String, CourseStatus>);

impl StatusMap {
    /// Creates an empty status map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the status of `name`, defaulting to not listened.
    #[must_use]
    pub fn get(&self, name: &str) -> CourseStatus {
        self.0.get(name).copied().unwrap_or_default()
    }

    /// Returns true when `name` is passed.
    #[must_use]
    pub fn is_passed(&self, name: &str) -> bool {
        self.get(name).passed
    }

    /// Stores `status` for `name`, forcing `listened` when `passed` is set.
    pub fn set(&mut self, name: impl Into<String>, status: CourseStatus) {
        let normalized = CourseStatus {
            listened: status.listened || status.passed,
            passed: status.passed,
        };
        self.0.insert(name.into(), normalized);
    }

    /// Flips `listened`; clearing it also clears `passed`.
    pub fn toggle_listened(&mut self, name: &str) -> CourseStatus {
        let current = self.get(name);
        let listened = !current.listened;
        let next = CourseStatus {
            listened,
            passed: listened && current.passed,
        };
        self.0.insert(name.to_string(), next);
        next
    }

    /// Flips `passed`; setting it also sets `listened`.
    pub fn toggle_passed(&mut self, name: &str) -> CourseStatus {
        let current = self.get(name);
        let passed = !current.passed;
        let next = CourseStatus {
            listened: passed || current.listened,
            passed,
        };
        self.0.insert(name.to_string(), next);
        next
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, CourseStatus> {
        &self.0
    }
}

impl FromIterator<(String, CourseStatus)> for StatusMap {
    fn from_iter<I: IntoIterator<Item = (String, CourseStatus)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, status) in iter {
            map.set(name, status);
        }
        map
    }
}

impl From<BTreeMap<String, CourseStatus>> for StatusMap {
    fn from(entries: BTreeMap<String, CourseStatus>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<StatusMap> for BTreeMap<String, CourseStatus> {
    fn from(map: StatusMap) -> Self {
        map.0
    }
}
