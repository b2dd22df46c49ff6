// crates/enrollment-core/src/audit.rs
// ============================================================================
// Module: Enrollment Audit Logging
// Description: Structured audit events for enrollment evaluations.
// Purpose: Emit solver diagnostics without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every evaluation records a [`FixpointAuditEvent`]. When the solver hits its
//! round bound without settling, the event carries `converged = false`; this
//! is the convergence-failure signal. A [`CreditCapAuditEvent`] is recorded
//! whenever a level exceeds its elective cap. Sinks decide where the JSON
//! lines go.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Fixpoint solver audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct FixpointAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Accreditation evaluated.
    pub accreditation: String,
    /// Study program evaluated.
    pub program: String,
    /// Rounds executed.
    pub rounds: usize,
    /// Round bound in effect.
    pub max_rounds: usize,
    /// Whether a round completed without changes.
    pub converged: bool,
    /// Courses left enabled.
    pub enabled_count: usize,
    /// Courses left disabled.
    pub disabled_count: usize,
}

/// Inputs for constructing a [`FixpointAuditEvent`].
pub struct FixpointAuditEventParams {
    /// Accreditation evaluated.
    pub accreditation: String,
    /// Study program evaluated.
    pub program: String,
    /// Rounds executed.
    pub rounds: usize,
    /// Round bound in effect.
    pub max_rounds: usize,
    /// Whether a round completed without changes.
    pub converged: bool,
    /// Courses left enabled.
    pub enabled_count: usize,
    /// Courses left disabled.
    pub disabled_count: usize,
}

impl FixpointAuditEvent {
    /// Creates a new fixpoint audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: FixpointAuditEventParams) -> Self {
        Self {
            event: if params.converged { "fixpoint_converged" } else { "fixpoint_not_converged" },
            timestamp_ms: now_ms(),
            accreditation: params.accreditation,
            program: params.program,
            rounds: params.rounds,
            max_rounds: params.max_rounds,
            converged: params.converged,
            enabled_count: params.enabled_count,
            disabled_count: params.disabled_count,
        }
    }
}

/// Credit cap audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct CreditCapAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Accreditation evaluated.
    pub accreditation: String,
    /// Study program evaluated.
    pub program: String,
    /// Levels over their cap.
    pub levels: Vec<u32>,
    /// Credits excluded from the total.
    pub excess_credits: u32,
    /// Number of courses excluded.
    pub excluded_courses: usize,
}

/// Inputs for constructing a [`CreditCapAuditEvent`].
pub struct CreditCapAuditEventParams {
    /// Accreditation evaluated.
    pub accreditation: String,
    /// Study program evaluated.
    pub program: String,
    /// Levels over their cap.
    pub levels: Vec<u32>,
    /// Credits excluded from the total.
    pub excess_credits: u32,
    /// Number of courses excluded.
    pub excluded_courses: usize,
}

impl CreditCapAuditEvent {
    /// Creates a new credit cap audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: CreditCapAuditEventParams) -> Self {
        Self {
            event: "credit_cap_exceeded",
            timestamp_ms: now_ms(),
            accreditation: params.accreditation,
            program: params.program,
            levels: params.levels,
            excess_credits: params.excess_credits,
            excluded_courses: params.excluded_courses,
        }
    }
}

/// Returns the current time in milliseconds since the Unix epoch.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for enrollment events.
pub trait EngineAuditSink: Send + Sync {
    /// Record a fixpoint audit event.
    fn record_fixpoint(&self, event: &FixpointAuditEvent);

    /// Record a credit cap audit event.
    fn record_credit_cap(&self, _event: &CreditCapAuditEvent) {}
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl EngineAuditSink for StderrAuditSink {
    fn record_fixpoint(&self, event: &FixpointAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }

    fn record_credit_cap(&self, event: &CreditCapAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one serialized event.
    fn append<T: Serialize>(&self, event: &T) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

impl EngineAuditSink for FileAuditSink {
    fn record_fixpoint(&self, event: &FixpointAuditEvent) {
        self.append(event);
    }

    fn record_credit_cap(&self, event: &CreditCapAuditEvent) {
        self.append(event);
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl EngineAuditSink for NoopAuditSink {
    fn record_fixpoint(&self, _event: &FixpointAuditEvent) {}

    fn record_credit_cap(&self, _event: &CreditCapAuditEvent) {}
}
