// crates/enrollment-core/src/runtime/mod.rs
// ============================================================================
// Module: Enrollment Runtime
// Description: Curriculum build, fixpoint solver, caps, reasons, and reports.
// Purpose: Compute enrollment eligibility from a curriculum and a status map.
// Dependencies: prereq-logic, crate::core, crate::audit, crate::interfaces
// ============================================================================

//! ## Overview
//! Each function here is pure over its explicit inputs and may be called
//! again on every status change. [`EnrollmentEngine`] bundles them into one
//! report and forwards audit events to its sink.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod caps;
pub mod curriculum;
pub mod engine;
pub mod reasons;
pub mod solver;
pub mod store;
pub mod summary;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use caps::OverLimitInfo;
pub use caps::compute_over_limit_info;
pub use curriculum::Curriculum;
pub use curriculum::CurriculumCourse;
pub use curriculum::SeasonFilter;
pub use engine::EnrollmentEngine;
pub use engine::EnrollmentReport;
pub use engine::EvaluationOptions;
pub use engine::FixpointSummary;
pub use reasons::ReasonInputs;
pub use reasons::compute_reason_map;
pub use solver::EnabledMap;
pub use solver::FixpointOutcome;
pub use solver::compute_enabled_map;
pub use store::InMemoryStatusStore;
pub use summary::CourseCounts;
pub use summary::CreditTotals;
pub use summary::GraduationInfo;
pub use summary::GraduationTrack;
pub use summary::compute_graduation_info;
pub use summary::compute_totals;
pub use summary::count_courses;
