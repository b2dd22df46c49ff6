// crates/enrollment-core/src/lib.rs
// ============================================================================
// Module: Enrollment Core Library
// Description: Public API surface for the enrollment planner core.
// Purpose: Expose the course model, policy, solver, and reporting helpers.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Enrollment core answers one question for every course in a curriculum:
//! given what the student has listened to and passed, may they enroll now?
//! It projects a raw catalog into a [`Curriculum`], solves the enabled set to a
//! fixpoint, applies per-level elective credit caps, and narrates the outcome.
//!
//! Every computation is a pure function of its explicit inputs. Persistence
//! and logging are reached only through the [`StatusStore`] and
//! [`EngineAuditSink`] seams.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use audit::CreditCapAuditEvent;
pub use audit::CreditCapAuditEventParams;
pub use audit::EngineAuditSink;
pub use audit::FileAuditSink;
pub use audit::FixpointAuditEvent;
pub use audit::FixpointAuditEventParams;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use interfaces::StatusStore;
pub use interfaces::StoreError;
pub use runtime::CourseCounts;
pub use runtime::CreditTotals;
pub use runtime::Curriculum;
pub use runtime::CurriculumCourse;
pub use runtime::EnabledMap;
pub use runtime::EnrollmentEngine;
pub use runtime::EnrollmentReport;
pub use runtime::EvaluationOptions;
pub use runtime::FixpointOutcome;
pub use runtime::FixpointSummary;
pub use runtime::GraduationInfo;
pub use runtime::GraduationTrack;
pub use runtime::InMemoryStatusStore;
pub use runtime::OverLimitInfo;
pub use runtime::ReasonInputs;
pub use runtime::SeasonFilter;
pub use runtime::compute_enabled_map;
pub use runtime::compute_graduation_info;
pub use runtime::compute_over_limit_info;
pub use runtime::compute_reason_map;
pub use runtime::compute_totals;
pub use runtime::count_courses;
