// crates/enrollment-core/src/interfaces/mod.rs
// ============================================================================
// Module: Enrollment Interfaces
// Description: Backend-agnostic seams for status persistence.
// Purpose: Keep storage out of the pure enrollment computations.
// Dependencies: thiserror, crate::core
// ============================================================================

//! ## Overview
//! The core never persists anything itself. Hosts inject a [`StatusStore`]
//! that loads and saves one [`StatusMap`] per accreditation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Accreditation;
use crate::core::StatusMap;

// ============================================================================
// SECTION: Status Store
// ============================================================================

/// Status store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("status store io error: {0}")]
    Io(String),
    /// Stored data cannot be decoded.
    #[error("status store corruption: {0}")]
    Corrupt(String),
    /// Stored data is invalid.
    #[error("status store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("status store error: {0}")]
    Store(String),
}

/// Persistence port for student status maps.
pub trait StatusStore {
    /// Loads the status map for `accreditation`.
    ///
    /// A store with nothing saved returns an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn load(&self, accreditation: &Accreditation) -> Result<StatusMap, StoreError>;

    /// Saves the status map for `accreditation`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when saving fails.
    fn save(&self, accreditation: &Accreditation, statuses: &StatusMap) -> Result<(), StoreError>;
}
