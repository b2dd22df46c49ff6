// crates/enrollment-core/src/core/mod.rs
// ============================================================================
// Module: Enrollment Core Types
// Description: Data model shared by the solver, reports, and adapters.
// Purpose: Group identifiers, courses, catalog projection, policy, and messages.
// Dependencies: prereq-logic, serde, thiserror
// ============================================================================

//! ## Overview
//! Plain data types with no I/O. Runtime algorithms live in
//! [`crate::runtime`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod collation;
pub mod course;
pub mod identifiers;
pub mod messages;
pub mod policy;
pub mod status;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use catalog::CatalogRecord;
pub use catalog::MAX_CATALOG_BYTES;
pub use collation::compare_names;
pub use course::Course;
pub use identifiers::Accreditation;
pub use identifiers::ProgramName;
pub use messages::Locale;
pub use messages::MessageArg;
pub use messages::fill_template;
pub use policy::EnrollmentPolicy;
pub use policy::GraduationPolicy;
pub use policy::PolicyError;
pub use prereq_logic::CourseInfo;
pub use prereq_logic::CourseStatus;
pub use prereq_logic::EvalRules;
pub use prereq_logic::PrereqGrammar;
pub use prereq_logic::PrereqNode;
pub use status::StatusMap;
