// crates/prereq-logic/src/grammar.rs
// ============================================================================
// Module: Prerequisite Grammar
// Description: Localized connective words used by prerequisite prose.
// Purpose: Keep separators and the credits keyword injectable.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Prerequisite text joins course names with localized words rather than
//! symbols. [`PrereqGrammar`] carries those words so a curriculum written in a
//! different language can be parsed without code changes. The defaults match
//! the Macedonian catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default disjunction separator.
pub const DEFAULT_OR_SEPARATOR: &str = " или ";
/// Default conjunction separator.
pub const DEFAULT_AND_SEPARATOR: &str = " и ";
/// Default keyword following a credit threshold.
pub const DEFAULT_CREDITS_KEYWORD: &str = "кредити";

// ============================================================================
// SECTION: Grammar
// ============================================================================

/// Connective words recognized by the prerequisite parser.
///
/// # Invariants
/// - Separators are matched literally, including surrounding whitespace.
/// - `or_separator` binds looser than `and_separator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrereqGrammar {
    /// Separator between alternatives.
    pub or_separator: String,
    /// Separator between conjuncts.
    pub and_separator: String,
    /// Keyword that follows a credit amount (`"60 кредити"`).
    pub credits_keyword: String,
}

impl Default for PrereqGrammar {
    fn default() -> Self {
        Self {
            or_separator: DEFAULT_OR_SEPARATOR.to_string(),
            and_separator: DEFAULT_AND_SEPARATOR.to_string(),
            credits_keyword: DEFAULT_CREDITS_KEYWORD.to_string(),
        }
    }
}

impl PrereqGrammar {
    /// Matches `"<digits><whitespace?><keyword>"` against already trimmed text.
    ///
    /// Amounts that overflow `u32` saturate so they remain unsatisfiable
    /// thresholds rather than wrapping.
    #[must_use]
    pub fn parse_credits(&self, text: &str) -> Option<u32> {
        let digits_end = text.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(text.len());
        if digits_end == 0 {
            return None;
        }
        let (digits, rest) = text.split_at(digits_end);
        if rest.trim_start() != self.credits_keyword {
            return None;
        }
        Some(digits.parse::<u32>().unwrap_or(u32::MAX))
    }

    /// Renders a credit threshold in this grammar.
    #[must_use]
    pub fn credits_text(&self, amount: u32) -> String {
        format!("{amount} {}", self.credits_keyword)
    }
}
