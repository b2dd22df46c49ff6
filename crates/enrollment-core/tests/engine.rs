// crates/enrollment-core/tests/engine.rs
// ============================================================================
// Module: Engine Tests
// Description: Full evaluations, audit events, and the in-memory store.
// Purpose: Ensure the facade wires every computation and reports honestly.
// Dependencies: enrollment-core, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Runs the engine end to end with recording and file audit sinks.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use std::sync::Arc;
use std::sync::Mutex;

use enrollment_core::Accreditation;
use enrollment_core::CreditCapAuditEvent;
use enrollment_core::EngineAuditSink;
use enrollment_core::EnrollmentEngine;
use enrollment_core::EnrollmentPolicy;
use enrollment_core::EvaluationOptions;
use enrollment_core::FileAuditSink;
use enrollment_core::FixpointAuditEvent;
use enrollment_core::InMemoryStatusStore;
use enrollment_core::Locale;
use enrollment_core::PolicyError;
use enrollment_core::PrereqGrammar;
use enrollment_core::ProgramName;
use enrollment_core::StatusMap;
use enrollment_core::StatusStore;
use support::ELECTIVE;
use support::REQUIRED;
use support::TestResult;
use support::course;
use support::ensure;
use support::leveled;
use support::statuses;

/// Audit sink that keeps every event it receives.
#[derive(Default)]
struct RecordingSink {
    /// Fixpoint events in arrival order.
    fixpoints: Mutex<Vec<FixpointAuditEvent>>,
    /// Credit cap events in arrival order.
    caps: Mutex<Vec<CreditCapAuditEvent>>,
}

impl EngineAuditSink for RecordingSink {
    fn record_fixpoint(&self, event: &FixpointAuditEvent) {
        self.fixpoints.lock().unwrap().push(event.clone());
    }

    fn record_credit_cap(&self, event: &CreditCapAuditEvent) {
        self.caps.lock().unwrap().push(event.clone());
    }
}

/// Builds an engine with default policy and grammar.
fn engine() -> TestResult<EnrollmentEngine> {
    Ok(EnrollmentEngine::new(EnrollmentPolicy::default(), PrereqGrammar::default())?)
}

#[test]
fn invalid_policy_is_rejected_at_construction() -> TestResult {
    let policy = EnrollmentPolicy {
        fixpoint_max_rounds: 0,
        ..EnrollmentPolicy::default()
    };
    let result = EnrollmentEngine::new(policy, PrereqGrammar::default());
    ensure(matches!(result, Err(PolicyError::Invalid(_))), "zero rounds are invalid")?;
    Ok(())
}

#[test]
fn report_combines_every_computation() -> TestResult {
    let engine = engine()?;
    let curriculum = engine.curriculum(
        Accreditation::new("2023"),
        ProgramName::new("СИИС"),
        vec![
            course("Увод", 1, Some(REQUIRED), None),
            course("Напредно", 3, Some(REQUIRED), Some("Увод")),
            leveled("Прв", 1, 1, 6, ELECTIVE),
            leveled("Втор", 2, 1, 6, ELECTIVE),
        ],
    );
    let statuses = statuses(&[("Увод", true, true), ("Прв", true, true), ("Втор", true, true)]);
    let report = engine.evaluate(&curriculum, &statuses, &EvaluationOptions::default());

    ensure(report.enabled.get("Напредно") == Some(&true), "advanced course is enabled")?;
    ensure(report.fixpoint.converged && report.fixpoint.rounds == 1, "settles at once")?;
    ensure(report.over_limit.levels == vec![1], "level one is over")?;
    ensure(report.totals.total == 12, format!("total was {}", report.totals.total))?;
    ensure(report.counts.passed == 3, "three passed")?;
    ensure(report.graduation.three_year.missing_courses == vec!["Напредно".to_string()], "missing")?;
    ensure(report.reasons.is_none(), "reasons are opt-in")?;

    let json = serde_json::to_value(&report)?;
    ensure(json.get("reasons").is_none(), "absent reasons are omitted from JSON")?;
    ensure(json["fixpoint"]["converged"] == true, "fixpoint summary serializes")?;
    Ok(())
}

#[test]
fn reasons_follow_the_requested_locale() -> TestResult {
    let engine = engine()?;
    let curriculum = engine.curriculum(
        Accreditation::new("2023"),
        ProgramName::new("СИИС"),
        vec![course("Увод", 1, Some(REQUIRED), None)],
    );
    let options = EvaluationOptions {
        include_reasons: true,
        locale: Locale::En,
        ..EvaluationOptions::default()
    };
    let report = engine.evaluate(&curriculum, &StatusMap::new(), &options);
    let reason = report.reasons.as_ref().and_then(|map| map.get("Увод")).ok_or("no reason")?;
    ensure(reason.starts_with("⬜ Status: Not listened\n✅ Can enroll"), reason.clone())?;
    Ok(())
}

#[test]
fn engine_records_fixpoint_and_cap_events() -> TestResult {
    let sink = Arc::new(RecordingSink::default());
    let engine = engine()?.with_audit_sink(sink.clone());
    let curriculum = engine.curriculum(
        Accreditation::new("2023"),
        ProgramName::new("СИИС"),
        vec![leveled("Прв", 1, 1, 6, ELECTIVE), leveled("Втор", 2, 1, 6, ELECTIVE)],
    );

    let _ = engine.evaluate(&curriculum, &StatusMap::new(), &EvaluationOptions::default());
    ensure(sink.caps.lock().unwrap().is_empty(), "no cap event within limits")?;

    let statuses = statuses(&[("Прв", true, true), ("Втор", true, true)]);
    let _ = engine.evaluate(&curriculum, &statuses, &EvaluationOptions::default());

    let fixpoints = sink.fixpoints.lock().unwrap();
    ensure(fixpoints.len() == 2, "one fixpoint event per evaluation")?;
    ensure(fixpoints[1].event == "fixpoint_converged", "converged event name")?;
    ensure(fixpoints[1].accreditation == "2023" && fixpoints[1].enabled_count == 2, "payload")?;

    let caps = sink.caps.lock().unwrap();
    ensure(caps.len() == 1 && caps[0].excess_credits == 6, "cap event carries the excess")?;
    ensure(caps[0].excluded_courses == 1, "one course excluded")?;
    Ok(())
}

#[test]
fn non_convergence_is_audited() -> TestResult {
    let sink = Arc::new(RecordingSink::default());
    let policy = EnrollmentPolicy {
        fixpoint_max_rounds: 1,
        ..EnrollmentPolicy::default()
    };
    let engine =
        EnrollmentEngine::new(policy, PrereqGrammar::default())?.with_audit_sink(sink.clone());
    let curriculum = engine.curriculum(
        Accreditation::new("2023"),
        ProgramName::new("СИИС"),
        vec![
            course("Увод", 1, Some(REQUIRED), None),
            course("Напредно", 3, Some(REQUIRED), Some("Увод")),
        ],
    );
    let report = engine.evaluate(&curriculum, &StatusMap::new(), &EvaluationOptions::default());
    ensure(!report.fixpoint.converged, "one round cannot confirm a change")?;

    let fixpoints = sink.fixpoints.lock().unwrap();
    ensure(
        fixpoints.len() == 1 && fixpoints[0].event == "fixpoint_not_converged",
        "failure event is recorded",
    )?;
    Ok(())
}

#[test]
fn file_sink_appends_json_lines() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("audit.jsonl");
    let sink = Arc::new(FileAuditSink::new(&path)?);
    let engine = engine()?.with_audit_sink(sink);
    let curriculum = engine.curriculum(
        Accreditation::new("2023"),
        ProgramName::new("СИИС"),
        vec![course("Увод", 1, Some(REQUIRED), None)],
    );
    let _ = engine.evaluate(&curriculum, &StatusMap::new(), &EvaluationOptions::default());
    let _ = engine.evaluate(&curriculum, &StatusMap::new(), &EvaluationOptions::default());

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    ensure(lines.len() == 2, format!("expected two lines, got {}", lines.len()))?;
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line)?;
        ensure(value["event"] == "fixpoint_converged", "event name is serialized")?;
        ensure(value["program"] == "СИИС", "program is serialized")?;
    }
    Ok(())
}

#[test]
fn in_memory_store_keeps_maps_per_accreditation() -> TestResult {
    let store = InMemoryStatusStore::new();
    let first = Accreditation::new("2018");
    let second = Accreditation::new("2023");
    let mut statuses = StatusMap::new();
    statuses.toggle_passed("Увод");
    store.save(&first, &statuses)?;

    ensure(store.load(&first)? == statuses, "saved map loads back")?;
    ensure(store.load(&second)?.is_empty(), "other accreditation starts empty")?;

    let shared = store.clone();
    shared.save(&second, &statuses)?;
    ensure(!store.load(&second)?.is_empty(), "clones share storage")?;
    Ok(())
}
