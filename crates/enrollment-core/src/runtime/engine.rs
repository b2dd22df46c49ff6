// crates/enrollment-core/src/runtime/engine.rs
// ============================================================================
// Module: Enrollment Engine
// Description: Facade that runs every enrollment computation in order.
// Purpose: Produce one serializable report per evaluation and audit it.
// Dependencies: prereq-logic, serde, crate::{audit, core, runtime}
// ============================================================================

//! ## Overview
//! [`EnrollmentEngine`] owns a validated policy and grammar. Each call to
//! [`EnrollmentEngine::evaluate`] solves the enabled map, resolves caps,
//! totals credits, checks graduation, and optionally narrates reasons. The
//! engine keeps no state between calls; identical inputs give identical
//! reports apart from audit timestamps.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use prereq_logic::PrereqGrammar;
use serde::Serialize;

use crate::audit::CreditCapAuditEvent;
use crate::audit::CreditCapAuditEventParams;
use crate::audit::EngineAuditSink;
use crate::audit::FixpointAuditEvent;
use crate::audit::FixpointAuditEventParams;
use crate::audit::NoopAuditSink;
use crate::core::Accreditation;
use crate::core::Catalog;
use crate::core::CatalogError;
use crate::core::Course;
use crate::core::EnrollmentPolicy;
use crate::core::Locale;
use crate::core::PolicyError;
use crate::core::ProgramName;
use crate::core::StatusMap;
use crate::runtime::caps::OverLimitInfo;
use crate::runtime::caps::compute_over_limit_info;
use crate::runtime::curriculum::Curriculum;
use crate::runtime::reasons::ReasonInputs;
use crate::runtime::reasons::compute_reason_map;
use crate::runtime::solver::EnabledMap;
use crate::runtime::solver::compute_enabled_map;
use crate::runtime::summary::CourseCounts;
use crate::runtime::summary::CreditTotals;
use crate::runtime::summary::GraduationInfo;
use crate::runtime::summary::compute_graduation_info;
use crate::runtime::summary::compute_totals;
use crate::runtime::summary::count_courses;

// ============================================================================
// SECTION: Options and Report
// ============================================================================

/// Per-call evaluation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// The supplementary module is completed.
    pub supplementary_completed: bool,
    /// Generate per-course reasons.
    pub include_reasons: bool,
    /// Locale for reasons.
    pub locale: Locale,
}

/// Fixpoint statistics included in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixpointSummary {
    /// Rounds executed.
    pub rounds: usize,
    /// A round completed without changes.
    pub converged: bool,
}

/// Full evaluation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentReport {
    /// Accreditation evaluated.
    pub accreditation: Accreditation,
    /// Program evaluated.
    pub program: ProgramName,
    /// Enabled flag per course.
    pub enabled: EnabledMap,
    /// Solver statistics.
    pub fixpoint: FixpointSummary,
    /// Credit cap status.
    pub over_limit: OverLimitInfo,
    /// Credit totals.
    pub totals: CreditTotals,
    /// Listened and passed counts.
    pub counts: CourseCounts,
    /// Graduation readiness.
    pub graduation: GraduationInfo,
    /// Reason text per course, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<BTreeMap<String, String>>,
}

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Enrollment evaluation facade.
///
/// # Invariants
/// - `policy` passed [`EnrollmentPolicy::validate`].
pub struct EnrollmentEngine {
    /// Curriculum policy.
    policy: EnrollmentPolicy,
    /// Prerequisite grammar.
    grammar: PrereqGrammar,
    /// Audit sink for solver events.
    audit: Arc<dyn EngineAuditSink>,
}

impl EnrollmentEngine {
    /// Creates an engine with a no-op audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] when the policy is invalid.
    pub fn new(policy: EnrollmentPolicy, grammar: PrereqGrammar) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            policy,
            grammar,
            audit: Arc::new(NoopAuditSink),
        })
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn EngineAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the policy in effect.
    #[must_use]
    pub const fn policy(&self) -> &EnrollmentPolicy {
        &self.policy
    }

    /// Returns the grammar in effect.
    #[must_use]
    pub const fn grammar(&self) -> &PrereqGrammar {
        &self.grammar
    }

    /// Builds a curriculum from already projected courses.
    #[must_use]
    pub fn curriculum(
        &self,
        accreditation: Accreditation,
        program: ProgramName,
        courses: Vec<Course>,
    ) -> Curriculum {
        Curriculum::build(accreditation, program, courses, &self.policy, &self.grammar)
    }

    /// Projects `catalog` and builds the curriculum for the selection.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the accreditation is not in the catalog.
    pub fn curriculum_from_catalog(
        &self,
        catalog: &Catalog,
        accreditation: Accreditation,
        program: ProgramName,
    ) -> Result<Curriculum, CatalogError> {
        Curriculum::from_catalog(catalog, accreditation, program, &self.policy, &self.grammar)
    }

    /// Evaluates `statuses` against `curriculum`.
    #[must_use]
    pub fn evaluate(
        &self,
        curriculum: &Curriculum,
        statuses: &StatusMap,
        options: &EvaluationOptions,
    ) -> EnrollmentReport {
        let outcome = compute_enabled_map(curriculum, statuses, &self.policy);
        let enabled_count = outcome.enabled_count();
        self.audit.record_fixpoint(&FixpointAuditEvent::new(FixpointAuditEventParams {
            accreditation: curriculum.accreditation().to_string(),
            program: curriculum.program().to_string(),
            rounds: outcome.rounds,
            max_rounds: self.policy.fixpoint_max_rounds,
            converged: outcome.converged,
            enabled_count,
            disabled_count: outcome.enabled.len() - enabled_count,
        }));

        let over_limit = compute_over_limit_info(curriculum, statuses, &self.policy);
        if !over_limit.is_within_limits() {
            self.audit.record_credit_cap(&CreditCapAuditEvent::new(CreditCapAuditEventParams {
                accreditation: curriculum.accreditation().to_string(),
                program: curriculum.program().to_string(),
                levels: over_limit.levels.clone(),
                excess_credits: over_limit.excess_credits,
                excluded_courses: over_limit.names.len(),
            }));
        }

        let totals = compute_totals(
            curriculum,
            statuses,
            &over_limit,
            options.supplementary_completed,
            &self.policy,
        );
        let graduation = compute_graduation_info(curriculum, statuses, totals.total, &self.policy);
        let reasons = options.include_reasons.then(|| {
            compute_reason_map(&ReasonInputs {
                curriculum,
                statuses,
                enabled: &outcome.enabled,
                over_limit: &over_limit,
                policy: &self.policy,
                locale: options.locale,
            })
        });

        EnrollmentReport {
            accreditation: curriculum.accreditation().clone(),
            program: curriculum.program().clone(),
            fixpoint: FixpointSummary {
                rounds: outcome.rounds,
                converged: outcome.converged,
            },
            enabled: outcome.enabled,
            over_limit,
            totals,
            counts: count_courses(curriculum, statuses),
            graduation,
            reasons,
        }
    }
}
