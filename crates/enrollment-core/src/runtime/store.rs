// crates/enrollment-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Status Store
// Description: Status store kept in process memory.
// Purpose: Provide a deterministic store for tests and embedding hosts.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! [`InMemoryStatusStore`] keeps one [`StatusMap`] per accreditation storage
//! key. Clones share the same underlying map.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::Accreditation;
use crate::core::StatusMap;
use crate::interfaces::StatusStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory status store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStatusStore {
    /// Status maps keyed by storage key.
    maps: Arc<Mutex<BTreeMap<String, StatusMap>>>,
}

impl InMemoryStatusStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            maps: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl StatusStore for InMemoryStatusStore {
    fn load(&self, accreditation: &Accreditation) -> Result<StatusMap, StoreError> {
        let guard = self
            .maps
            .lock()
            .map_err(|_| StoreError::Store("status store mutex poisoned".to_string()))?;
        Ok(guard.get(&accreditation.storage_key()).cloned().unwrap_or_default())
    }

    fn save(&self, accreditation: &Accreditation, statuses: &StatusMap) -> Result<(), StoreError> {
        self.maps
            .lock()
            .map_err(|_| StoreError::Store("status store mutex poisoned".to_string()))?
            .insert(accreditation.storage_key(), statuses.clone());
        Ok(())
    }
}
