// crates/enrollment-cli/src/lib.rs
// ============================================================================
// Module: Enrollment Gate CLI Library
// Description: Shared modules for the enrollment-gate binary.
// Purpose: Expose i18n helpers and the file-backed status store for reuse.
// Dependencies: crate::{i18n, store}
// ============================================================================

//! ## Overview
//! Library surface backing the `enrollment-gate` binary. Keeping the message
//! catalog and the status store here lets integration tests reach them
//! without spawning the binary.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::JsonFileStatusStore;
pub use store::MAX_STATUS_FILE_BYTES;
