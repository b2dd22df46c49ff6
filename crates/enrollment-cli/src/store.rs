// crates/enrollment-cli/src/store.rs
// ============================================================================
// Module: JSON File Status Store
// Description: File-backed persistence for per-accreditation status maps.
// Purpose: Keep student progress between CLI invocations.
// Dependencies: enrollment-core, serde_json
// ============================================================================

//! ## Overview
//! Each accreditation gets one `enrollment-<accreditation>.json` file inside
//! the store directory. Saves write a sibling temporary file, sync it, and
//! rename it over the target so a crash never leaves a half-written map.
//!
//! ## Invariants
//! - A missing file loads as an empty map.
//! - Undecodable content is reported as [`StoreError::Corrupt`].
//! - Files larger than [`MAX_STATUS_FILE_BYTES`] are rejected before decoding.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io::ErrorKind;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use enrollment_core::Accreditation;
use enrollment_core::StatusMap;
use enrollment_core::StatusStore;
use enrollment_core::StoreError;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of one persisted status file.
pub const MAX_STATUS_FILE_BYTES: usize = 4 * 1024 * 1024;

// ============================================================================
// SECTION: Store
// ============================================================================

/// [`StatusStore`] keeping one JSON document per accreditation.
#[derive(Debug, Clone)]
pub struct JsonFileStatusStore {
    /// Directory holding the status files.
    dir: PathBuf,
}

impl JsonFileStatusStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
        }
    }

    /// Returns the store directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path backing `accreditation`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] when the identifier cannot be used as a
    /// file name.
    pub fn path_for(&self, accreditation: &Accreditation) -> Result<PathBuf, StoreError> {
        let id = accreditation.as_str();
        if id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\', '\0'])
        {
            return Err(StoreError::Invalid(format!(
                "accreditation '{id}' is not a valid store key"
            )));
        }
        Ok(self.dir.join(format!("{}.json", accreditation.storage_key())))
    }
}

impl StatusStore for JsonFileStatusStore {
    fn load(&self, accreditation: &Accreditation) -> Result<StatusMap, StoreError> {
        let path = self.path_for(accreditation)?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(StatusMap::new()),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };
        let limit = u64::try_from(MAX_STATUS_FILE_BYTES).unwrap_or(u64::MAX);
        let mut bytes = Vec::new();
        file.take(limit.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|err| StoreError::Io(err.to_string()))?;
        if bytes.len() > MAX_STATUS_FILE_BYTES {
            return Err(StoreError::Invalid(format!(
                "status file exceeds {MAX_STATUS_FILE_BYTES} bytes"
            )));
        }
        serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt(err.to_string()))
    }

    fn save(&self, accreditation: &Accreditation, statuses: &StatusMap) -> Result<(), StoreError> {
        let path = self.path_for(accreditation)?;
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::Io(err.to_string()))?;
        let mut payload =
            serde_json::to_vec_pretty(statuses).map_err(|err| StoreError::Store(err.to_string()))?;
        payload.push(b'\n');

        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|err| StoreError::Io(err.to_string()))?;
        file.write_all(&payload).map_err(|err| StoreError::Io(err.to_string()))?;
        file.sync_all().map_err(|err| StoreError::Io(err.to_string()))?;
        fs::rename(&temp_path, &path).map_err(|err| StoreError::Io(err.to_string()))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use enrollment_core::Accreditation;
    use enrollment_core::CourseStatus;
    use enrollment_core::StatusMap;
    use enrollment_core::StatusStore;
    use enrollment_core::StoreError;

    use super::JsonFileStatusStore;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStatusStore::new(dir.path());
        let loaded = store.load(&Accreditation::new("2023")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_then_load_uses_storage_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStatusStore::new(dir.path().join("nested"));
        let acc = Accreditation::new("2023");
        let mut statuses = StatusMap::new();
        statuses.set("Алгоритми", CourseStatus {
            listened: true,
            passed: true,
        });
        store.save(&acc, &statuses).unwrap();

        let path = dir.path().join("nested").join("enrollment-2023.json");
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(store.load(&acc).unwrap(), statuses);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("enrollment-2018.json"), "{not json").unwrap();
        let store = JsonFileStatusStore::new(dir.path());
        let err = store.load(&Accreditation::new("2018")).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn path_like_accreditations_are_rejected() {
        let store = JsonFileStatusStore::new("store");
        for id in ["", "..", "a/b", "a\\b"] {
            let err = store.path_for(&Accreditation::new(id)).unwrap_err();
            assert!(matches!(err, StoreError::Invalid(_)), "accepted {id:?}");
        }
    }
}
