// crates/enrollment-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for enrollment-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use enrollment_config::ConfigError;
use enrollment_config::EnrollmentConfig;

/// Result type for config tests.
pub type TestResult = Result<(), String>;

/// Parses a TOML string without validating it.
pub fn config_from_toml(toml_str: &str) -> Result<EnrollmentConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a config with all defaults applied.
pub fn minimal_config() -> Result<EnrollmentConfig, toml::de::Error> {
    config_from_toml("")
}

/// Requires `result` to be an error whose message contains `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
