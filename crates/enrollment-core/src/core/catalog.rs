// crates/enrollment-core/src/core/catalog.rs
// ============================================================================
// Module: Course Catalog
// Description: Raw catalog records and their per-accreditation projection.
// Purpose: Turn the published catalog into `Course` values for one selection.
// Dependencies: serde, serde_json, thiserror, crate::core
// ============================================================================

//! ## Overview
//! The published catalog is a JSON array of flat records. Fields for each
//! accreditation are prefixed with the accreditation id:
//!
//! | Field | Meaning |
//! | --- | --- |
//! | `<acc>-available` | `"TRUE"` when offered under the accreditation |
//! | `<acc>-name` | Accreditation-specific name (falls back to `name`) |
//! | `<acc>-semester` | Home semester; records without one are skipped |
//! | `<acc>-level` | Cap level (0 when absent) |
//! | `<acc>-credits` | Credit value (policy default when absent) |
//! | `<acc>-prerequisite` | Free-text prerequisite |
//! | `<acc>-code` | Catalog code |
//! | `<acc>-<program>` | Membership state within a study program |
//!
//! Security posture: catalog input is untrusted; its size is bounded before
//! parsing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::course::Course;
use crate::core::identifiers::Accreditation;
use crate::core::identifiers::ProgramName;
use crate::core::policy::EnrollmentPolicy;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum catalog document size in bytes.
pub const MAX_CATALOG_BYTES: usize = 16 * 1024 * 1024;

/// Value of the availability flag for offered courses.
const AVAILABLE_FLAG: &str = "TRUE";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog exceeds the size limit.
    #[error("catalog exceeds size limit: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual document size.
        actual_bytes: usize,
    },
    /// Catalog is not a JSON array of records.
    #[error("catalog parse error: {0}")]
    Parse(String),
    /// No record carries an availability flag for the accreditation.
    #[error("unknown accreditation: {0}")]
    UnknownAccreditation(String),
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// One raw catalog record.
///
/// Values are kept as JSON so numeric and boolean fields read the same as
/// their string forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogRecord(BTreeMap<String, Value>);

impl CatalogRecord {
    /// Creates a record from string fields.
    #[must_use]
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(fields.into_iter().map(|(key, value)| (key.into(), Value::String(value.into()))).collect())
    }

    /// Returns a field as text, trimming surrounding whitespace.
    ///
    /// Empty strings and nulls read as absent.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        let text = match self.0.get(key)? {
            Value::String(text) => text.trim().to_string(),
            Value::Number(number) => number.to_string(),
            Value::Bool(true) => AVAILABLE_FLAG.to_string(),
            Value::Bool(false) => "FALSE".to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => return None,
        };
        if text.is_empty() { None } else { Some(text) }
    }

    /// Returns true when the record mentions `accreditation` at all.
    #[must_use]
    pub fn knows(&self, accreditation: &Accreditation) -> bool {
        self.0.contains_key(&accreditation.field("available"))
    }

    /// Returns true when the record is offered under `accreditation`.
    #[must_use]
    pub fn is_available(&self, accreditation: &Accreditation) -> bool {
        self.text(&accreditation.field("available")).as_deref() == Some(AVAILABLE_FLAG)
    }

    /// Projects the record for one accreditation and program.
    ///
    /// Returns `None` when the record is unavailable, unnamed, or has no
    /// parseable semester.
    #[must_use]
    pub fn project(
        &self,
        accreditation: &Accreditation,
        program: &ProgramName,
        policy: &EnrollmentPolicy,
    ) -> Option<Course> {
        if !self.is_available(accreditation) {
            return None;
        }
        let name = self.text(&accreditation.field("name")).or_else(|| self.text("name"))?;
        let semester = parse_leading_u32(&self.text(&accreditation.field("semester"))?)?;
        let level = self
            .text(&accreditation.field("level"))
            .and_then(|level| parse_leading_u32(&level))
            .unwrap_or(0);
        let credits = self
            .text(&accreditation.field("credits"))
            .and_then(|credits| parse_leading_u32(&credits))
            .unwrap_or(policy.default_course_credits);

        Some(Course {
            name,
            code: self.text(&accreditation.field("code")),
            credits,
            level,
            semester,
            prerequisite: self.text(&accreditation.field("prerequisite")),
            program_state: self.text(&accreditation.field(program.as_str())),
        })
    }
}

/// Parses the leading decimal digits of `text`.
fn parse_leading_u32(text: &str) -> Option<u32> {
    let end = text.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(text.len());
    text[.. end].parse().ok()
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Ordered collection of raw catalog records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Records in published order.
    pub records: Vec<CatalogRecord>,
}

impl Catalog {
    /// Creates a catalog from records.
    #[must_use]
    pub const fn new(records: Vec<CatalogRecord>) -> Self {
        Self {
            records,
        }
    }

    /// Parses a catalog JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the document is too large or malformed.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        if bytes.len() > MAX_CATALOG_BYTES {
            return Err(CatalogError::TooLarge {
                max_bytes: MAX_CATALOG_BYTES,
                actual_bytes: bytes.len(),
            });
        }
        serde_json::from_slice(bytes).map_err(|err| CatalogError::Parse(err.to_string()))
    }

    /// Projects every available record, in published order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownAccreditation`] when no record carries
    /// an availability flag for `accreditation`.
    pub fn project(
        &self,
        accreditation: &Accreditation,
        program: &ProgramName,
        policy: &EnrollmentPolicy,
    ) -> Result<Vec<Course>, CatalogError> {
        if !self.records.iter().any(|record| record.knows(accreditation)) {
            return Err(CatalogError::UnknownAccreditation(accreditation.to_string()));
        }
        Ok(self
            .records
            .iter()
            .filter_map(|record| record.project(accreditation, program, policy))
            .collect())
    }
}
