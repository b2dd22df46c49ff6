// crates/enrollment-config/src/config.rs
// ============================================================================
// Module: Enrollment Configuration
// Description: Configuration loading and validation for the enrollment planner.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: enrollment-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional and falls back to the current faculty rules.
//! Unknown keys are rejected so typos never silently fall back to defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use enrollment_core::EnrollmentPolicy;
use enrollment_core::EvalRules;
use enrollment_core::GraduationPolicy;
use enrollment_core::Locale;
use enrollment_core::PrereqGrammar;
use enrollment_core::core::policy::DEFAULT_COURSE_CREDITS;
use enrollment_core::core::policy::DEFAULT_EXEMPT_STATE;
use enrollment_core::core::policy::DEFAULT_FIXPOINT_MAX_ROUNDS;
use enrollment_core::core::policy::DEFAULT_FOUR_YEAR_MARKER;
use enrollment_core::core::policy::DEFAULT_LEVEL_CAPS;
use enrollment_core::core::policy::DEFAULT_REQUIRED_MARKER;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "enrollment-gate.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "ENROLLMENT_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Upper bound on configurable fixpoint rounds.
pub(crate) const MAX_FIXPOINT_ROUNDS: usize = 10_000;
/// Maximum number of level caps.
pub(crate) const MAX_LEVEL_CAPS: usize = 64;

// ============================================================================
// SECTION: Root Config
// ============================================================================

/// Root configuration for the enrollment planner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrollmentConfig {
    /// Curriculum policy.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Prerequisite text grammar.
    #[serde(default)]
    pub grammar: GrammarConfig,
    /// Graduation thresholds.
    #[serde(default)]
    pub graduation: GraduationConfig,
    /// Reason rendering.
    #[serde(default)]
    pub reasons: ReasonsConfig,
}

impl EnrollmentConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then [`CONFIG_ENV_VAR`], then
    /// `enrollment-gate.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate()?;
        self.grammar.validate()?;
        self.graduation.validate()?;
        self.reasons.validate()?;
        self.to_policy()?;
        Ok(())
    }

    /// Builds the enrollment policy described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a section is invalid.
    pub fn to_policy(&self) -> Result<EnrollmentPolicy, ConfigError> {
        let policy = EnrollmentPolicy {
            level_caps: self.policy.level_caps()?,
            rules: EvalRules {
                override_credits: self.policy.override_credits,
                adjacent_semester_offset: self.policy.adjacent_semester_offset,
            },
            exempt_state: self.policy.exempt_state.clone(),
            required_marker: self.policy.required_marker.clone(),
            four_year_marker: self.policy.four_year_marker.clone(),
            fixpoint_max_rounds: self.policy.fixpoint_max_rounds,
            default_course_credits: self.policy.default_course_credits,
            graduation: GraduationPolicy {
                three_year_credits: self.graduation.three_year_credits,
                four_year_credits: self.graduation.four_year_credits,
                thesis_course: self.graduation.thesis_course.clone(),
                supplementary_credits: self.graduation.supplementary_credits,
            },
        };
        policy.validate().map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Ok(policy)
    }

    /// Builds the prerequisite grammar described by this configuration.
    #[must_use]
    pub fn to_grammar(&self) -> PrereqGrammar {
        PrereqGrammar {
            or_separator: self.grammar.or_separator.clone(),
            and_separator: self.grammar.and_separator.clone(),
            credits_keyword: self.grammar.credits_keyword.clone(),
        }
    }

    /// Returns the configured reason locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::parse(&self.reasons.locale).unwrap_or_default()
    }
}

// ============================================================================
// SECTION: Policy
// ============================================================================

/// `[policy]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Credits at which every prerequisite is waived.
    pub override_credits: u32,
    /// Semester distance at which listening is enough.
    pub adjacent_semester_offset: i64,
    /// Program state that exempts a course from prerequisites.
    pub exempt_state: String,
    /// Substring marking a required course.
    pub required_marker: String,
    /// Substring marking a course required only in four-year studies.
    pub four_year_marker: String,
    /// Upper bound on fixpoint rounds.
    pub fixpoint_max_rounds: usize,
    /// Credits assumed when the catalog omits a value.
    pub default_course_credits: u32,
    /// Elective credit cap per level, keyed by level number.
    pub level_caps: BTreeMap<String, i64>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let rules = EvalRules::default();
        Self {
            override_credits: rules.override_credits,
            adjacent_semester_offset: rules.adjacent_semester_offset,
            exempt_state: DEFAULT_EXEMPT_STATE.to_string(),
            required_marker: DEFAULT_REQUIRED_MARKER.to_string(),
            four_year_marker: DEFAULT_FOUR_YEAR_MARKER.to_string(),
            fixpoint_max_rounds: DEFAULT_FIXPOINT_MAX_ROUNDS,
            default_course_credits: DEFAULT_COURSE_CREDITS,
            level_caps: DEFAULT_LEVEL_CAPS
                .iter()
                .map(|(level, cap)| (level.to_string(), i64::from(*cap)))
                .collect(),
        }
    }
}

impl PolicyConfig {
    /// Validates the policy section.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fixpoint_max_rounds == 0 {
            return Err(ConfigError::Invalid(
                "policy.fixpoint_max_rounds must be greater than zero".to_string(),
            ));
        }
        if self.fixpoint_max_rounds > MAX_FIXPOINT_ROUNDS {
            return Err(ConfigError::Invalid(format!(
                "policy.fixpoint_max_rounds must be at most {MAX_FIXPOINT_ROUNDS}"
            )));
        }
        if self.adjacent_semester_offset < 0 {
            return Err(ConfigError::Invalid(
                "policy.adjacent_semester_offset must be non-negative".to_string(),
            ));
        }
        validate_marker("policy.exempt_state", &self.exempt_state)?;
        validate_marker("policy.required_marker", &self.required_marker)?;
        validate_marker("policy.four_year_marker", &self.four_year_marker)?;
        if self.level_caps.len() > MAX_LEVEL_CAPS {
            return Err(ConfigError::Invalid("policy.level_caps has too many entries".to_string()));
        }
        self.level_caps()?;
        Ok(())
    }

    /// Converts the configured caps into level numbers and credit limits.
    fn level_caps(&self) -> Result<BTreeMap<u32, u32>, ConfigError> {
        let mut caps = BTreeMap::new();
        for (level, cap) in &self.level_caps {
            let parsed = level
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|level| *level > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("level cap key '{level}' must be a positive level"))
                })?;
            if *cap < 0 {
                return Err(ConfigError::Invalid(format!(
                    "level cap for level {parsed} must be non-negative"
                )));
            }
            let cap = u32::try_from(*cap).map_err(|_| {
                ConfigError::Invalid(format!("level cap for level {parsed} is too large"))
            })?;
            caps.insert(parsed, cap);
        }
        Ok(caps)
    }
}

// ============================================================================
// SECTION: Grammar
// ============================================================================

/// `[grammar]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrammarConfig {
    /// Separator between alternatives.
    pub or_separator: String,
    /// Separator between conjuncts.
    pub and_separator: String,
    /// Keyword following a credit amount.
    pub credits_keyword: String,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        let grammar = PrereqGrammar::default();
        Self {
            or_separator: grammar.or_separator,
            and_separator: grammar.and_separator,
            credits_keyword: grammar.credits_keyword,
        }
    }
}

impl GrammarConfig {
    /// Validates the grammar section.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_marker("grammar.or_separator", &self.or_separator)?;
        validate_marker("grammar.and_separator", &self.and_separator)?;
        validate_marker("grammar.credits_keyword", &self.credits_keyword)?;
        if self.or_separator == self.and_separator {
            return Err(ConfigError::Invalid(
                "grammar.or_separator and grammar.and_separator must differ".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Graduation
// ============================================================================

/// `[graduation]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraduationConfig {
    /// Credits needed for three-year studies.
    pub three_year_credits: u32,
    /// Credits needed for four-year studies.
    pub four_year_credits: u32,
    /// Thesis course name.
    pub thesis_course: String,
    /// Credits granted by the supplementary module.
    pub supplementary_credits: u32,
}

impl Default for GraduationConfig {
    fn default() -> Self {
        let graduation = GraduationPolicy::default();
        Self {
            three_year_credits: graduation.three_year_credits,
            four_year_credits: graduation.four_year_credits,
            thesis_course: graduation.thesis_course,
            supplementary_credits: graduation.supplementary_credits,
        }
    }
}

impl GraduationConfig {
    /// Validates the graduation section.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.four_year_credits < self.three_year_credits {
            return Err(ConfigError::Invalid(
                "graduation.four_year_credits must be at least graduation.three_year_credits"
                    .to_string(),
            ));
        }
        validate_marker("graduation.thesis_course", &self.thesis_course)
    }
}

// ============================================================================
// SECTION: Reasons
// ============================================================================

/// `[reasons]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReasonsConfig {
    /// Locale tag for reason text (`"mk"` or `"en"`).
    pub locale: String,
}

impl Default for ReasonsConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().as_str().to_string(),
        }
    }
}

impl ReasonsConfig {
    /// Validates the reasons section.
    fn validate(&self) -> Result<(), ConfigError> {
        if Locale::parse(&self.locale).is_none() {
            return Err(ConfigError::Invalid(format!(
                "reasons.locale must be mk or en, got {}",
                self.locale
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI args or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Requires a marker or separator to contain more than whitespace.
fn validate_marker(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
