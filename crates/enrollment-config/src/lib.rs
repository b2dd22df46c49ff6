// crates/enrollment-config/src/lib.rs
// ============================================================================
// Module: Enrollment Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for enrollment-gate.toml semantics.
// Dependencies: enrollment-core, serde, toml
// ============================================================================

//! ## Overview
//! `enrollment-config` loads `enrollment-gate.toml` and turns it into the
//! policy, grammar, and locale consumed by the enrollment engine. Validation
//! is strict and fails closed.
//!
//! Security posture: config inputs are untrusted; file size and path lengths
//! are bounded before parsing.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
