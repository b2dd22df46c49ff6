// crates/enrollment-core/src/core/identifiers.rs
// ============================================================================
// Module: Enrollment Identifiers
// Description: Opaque identifiers for accreditations and study programs.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Accreditations (`"2018"`, `"2023"`) and study program names key every
//! catalog lookup and persisted status map. They serialize as plain strings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Prefix shared by every persisted status key.
pub const STORAGE_KEY_PREFIX: &str = "enrollment-";

/// Accreditation (curriculum edition) identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accreditation(String);

impl Accreditation {
    /// Creates a new accreditation identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key under which this accreditation's statuses persist.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{STORAGE_KEY_PREFIX}{}", self.0)
    }

    /// Returns the catalog field name `"<accreditation>-<suffix>"`.
    #[must_use]
    pub fn field(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.0)
    }
}

impl fmt::Display for Accreditation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Accreditation {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Study program name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramName(String);

impl ProgramName {
    /// Creates a new program name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ProgramName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
