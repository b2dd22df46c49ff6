// crates/enrollment-core/src/core/messages.rs
// ============================================================================
// Module: Reason Message Catalog
// Description: Localized templates for enrollment explanations.
// Purpose: Keep user-facing reason text out of the reasoning code.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! Reason lines are rendered from per-locale catalogs. Templates use
//! `{placeholder}` substitution. Macedonian is the primary locale;
//! English mirrors it for tooling and tests.
//!
//! ## Invariants
//! - Each catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported reason locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Macedonian.
    #[default]
    Mk,
    /// English.
    En,
}

impl Locale {
    /// Parses a locale tag such as `"mk"`, `"en-US"`, or `"mk_MK.UTF-8"`.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_', '.']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "mk" => Some(Self::Mk),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Returns the canonical tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mk => "mk",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named substitution for a message template.
#[derive(Debug, Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"level"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalogs
// ============================================================================

/// Macedonian reason templates.
const CATALOG_MK: &[(&str, &str)] = &[
    ("status.passed", "✅ Статус: Положен"),
    ("status.listened", "📖 Статус: Слушан"),
    ("status.not_listened", "⬜ Статус: Не е слушан"),
    ("enroll.allowed", "✅ Може да се запише"),
    ("enroll.blocked", "❌ Не може да се запише (предусловите не се исполнети)"),
    ("cap.exceeded", "❌ Надминат L{level} лимит (макс. {limit} кредити)"),
    ("cap.full", "⚠️ L{level} лимит пополнет ({limit} кредити)"),
    ("program.required", "ℹ️ Задолжителен предмет"),
    ("program.elective", "ℹ️ Изборен предмет"),
    ("prereq.exempt", "ℹ️ Факултетска листа – нема предуслов"),
    ("prereq.none", "✅ Нема предуслов"),
    ("prereq.override", "✅ ≥{threshold} кредити – предуслови не важат"),
    ("prereq.header", "📋 Предуслов:"),
    ("prereq.course.met", "  ✅ {name} ({standing})"),
    ("prereq.course.unmet", "  ❌ {name} (потребно: {standing})"),
    ("prereq.standing.listened", "слушан"),
    ("prereq.standing.passed", "положен"),
    ("prereq.credits.met", "  ✅ {amount} кредити"),
    ("prereq.credits.unmet", "  ❌ {amount} кредити (имате {total})"),
    ("prereq.elective", "  ➖ {name} (изборен, не е предуслов)"),
    ("prereq.unparsed", "  ⚠️ {text} (непрепознат предуслов, не се проверува)"),
];

/// English reason templates.
const CATALOG_EN: &[(&str, &str)] = &[
    ("status.passed", "✅ Status: Passed"),
    ("status.listened", "📖 Status: Listened"),
    ("status.not_listened", "⬜ Status: Not listened"),
    ("enroll.allowed", "✅ Can enroll"),
    ("enroll.blocked", "❌ Cannot enroll (prerequisites not met)"),
    ("cap.exceeded", "❌ Exceeded L{level} limit (max {limit} credits)"),
    ("cap.full", "⚠️ L{level} limit full ({limit} credits)"),
    ("program.required", "ℹ️ Required course"),
    ("program.elective", "ℹ️ Elective course"),
    ("prereq.exempt", "ℹ️ Faculty list: no prerequisite"),
    ("prereq.none", "✅ No prerequisite"),
    ("prereq.override", "✅ ≥{threshold} credits: prerequisites waived"),
    ("prereq.header", "📋 Prerequisite:"),
    ("prereq.course.met", "  ✅ {name} ({standing})"),
    ("prereq.course.unmet", "  ❌ {name} (required: {standing})"),
    ("prereq.standing.listened", "listened"),
    ("prereq.standing.passed", "passed"),
    ("prereq.credits.met", "  ✅ {amount} credits"),
    ("prereq.credits.unmet", "  ❌ {amount} credits (you have {total})"),
    ("prereq.elective", "  ➖ {name} (elective, not a prerequisite)"),
    ("prereq.unparsed", "  ⚠️ {text} (unrecognized prerequisite, not enforced)"),
];

/// Returns every key known to the catalogs.
#[must_use]
pub fn catalog_keys(locale: Locale) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = catalog(locale).keys().copied().collect();
    keys.sort_unstable();
    keys
}

/// Returns the lazily built catalog for `locale`.
fn catalog(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static MK: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static EN: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    match locale {
        Locale::Mk => MK.get_or_init(|| CATALOG_MK.iter().copied().collect()),
        Locale::En => EN.get_or_init(|| CATALOG_EN.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` in `locale`, substituting `args`.
#[must_use]
pub fn translate(locale: Locale, key: &str, args: &[MessageArg]) -> String {
    let template = catalog(locale).get(key).copied().unwrap_or(key);
    fill_template(template, args)
}

/// Substitutes `{key}` placeholders in `template` with matching `args`.
///
/// The template is scanned once, so braces inside substituted values are
/// copied as-is. Placeholders without a matching argument are left intact.
#[must_use]
pub fn fill_template(template: &str, args: &[MessageArg]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[.. open]);
        let after = &rest[open + 1 ..];
        let value = after.find('}').and_then(|close| {
            let key = &after[.. close];
            args.iter().find(|arg| arg.key == key).map(|arg| (arg.value.as_str(), close))
        });
        match value {
            Some((value, close)) => {
                result.push_str(value);
                rest = &after[close + 1 ..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Formats a localized reason from a locale, key, and named arguments.
macro_rules! tr {
    ($locale:expr, $key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args: &[$crate::core::messages::MessageArg] = &[
            $(
                $crate::core::messages::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::core::messages::translate($locale, $key, args)
    }};
}

pub(crate) use tr;
