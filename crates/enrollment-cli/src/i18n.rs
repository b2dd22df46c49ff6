// crates/enrollment-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Message catalog and translation utilities for the CLI.
// Purpose: Keep every user-facing CLI string in one localized catalog.
// Dependencies: enrollment-core (locale and message argument types).
// ============================================================================

//! ## Overview
//! The enrollment-gate CLI stores user-facing strings in per-locale catalogs.
//! All runtime output is routed through the [`t!`](crate::t) macro. The locale
//! is chosen once at startup and shared with the reason generator, so CLI
//! chrome and per-course reasons speak the same language.
//!
//! ## Invariants
//! - Catalogs are initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions are applied in argument order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use enrollment_core::fill_template;

pub use enrollment_core::Locale;
pub use enrollment_core::MessageArg;

/// Ordered list of supported CLI locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Mk];

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "enrollment-gate {version}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'mk'."),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("input.kind.catalog", "catalog"),
    ("input.kind.statuses", "status map"),
    ("input.read_failed", "Failed to read {kind} at {path}: {error}"),
    ("input.too_large", "Refusing to read {kind} at {path}: {size} bytes exceeds the {limit}-byte limit"),
    ("catalog.load_failed", "Failed to load catalog: {error}"),
    ("statuses.parse_failed", "Failed to parse status map {path}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid"),
    ("engine.init_failed", "Invalid enrollment policy: {error}"),
    ("audit.open_failed", "Failed to open audit log {path}: {error}"),
    ("store.load_failed", "Failed to load statuses for {accreditation}: {error}"),
    ("store.save_failed", "Failed to save statuses for {accreditation}: {error}"),
    (
        "store.corrupt_recovered",
        "Warning: stored statuses for {accreditation} are unreadable ({error}); continuing with \
         an empty status map.",
    ),
    ("status.toggle.ok", "{course}: listened {listened}, passed {passed}"),
    ("status.reset.ok", "Cleared stored statuses for {accreditation}"),
    ("status.flag.yes", "yes"),
    ("status.flag.no", "no"),
    ("evaluate.serialize_failed", "Failed to serialize report: {error}"),
    (
        "evaluate.warn.not_converged",
        "Warning: enrollment solver stopped after {rounds} rounds without reaching a fixpoint.",
    ),
    ("evaluate.text.header", "{program} (accreditation {accreditation})"),
    ("evaluate.text.row", "{mark} S{semester} {name} ({credits} credits) [{status}]"),
    ("evaluate.text.mark.open", "open   "),
    ("evaluate.text.mark.blocked", "blocked"),
    ("evaluate.text.status.passed", "passed"),
    ("evaluate.text.status.listened", "listened"),
    ("evaluate.text.status.not_listened", "not listened"),
    ("evaluate.text.fixpoint", "Solver: {rounds} rounds, converged: {converged}"),
    (
        "evaluate.text.totals",
        "Credits: {total} (passed {passed}, supplementary {supplementary}, excess {excess})",
    ),
    ("evaluate.text.counts", "Courses listened: {listened}, passed: {passed}"),
    (
        "evaluate.text.over_limit",
        "Elective credit cap exceeded at levels {levels}; excluded courses: {courses}",
    ),
    (
        "evaluate.text.graduation",
        "{track}: {credits} credits required, credits met: {met}, missing required courses: \
         {missing}, eligible: {eligible}",
    ),
    ("evaluate.text.track.three_year", "Three-year degree"),
    ("evaluate.text.track.four_year", "Four-year degree"),
    ("evaluate.text.thesis", "Thesis passed: {value}"),
    ("parse.serialize_failed", "Failed to serialize prerequisite tree: {error}"),
    ("parse.rendered", "Rendered: {text}"),
    ("parse.unparsed", "Unparsed fragment: {text}"),
];

/// Macedonian catalog entries.
const CATALOG_MK: &[(&str, &str)] = &[
    ("main.version", "enrollment-gate {version}"),
    ("i18n.lang.invalid_env", "Невалидна вредност за {env}: {value}. Очекувано 'en' или 'mk'."),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "излез"),
    ("output.write_failed", "Неуспешно запишување во {stream}: {error}"),
    ("input.kind.catalog", "каталог"),
    ("input.kind.statuses", "статуси"),
    ("input.read_failed", "Неуспешно читање на {kind} од {path}: {error}"),
    ("input.too_large", "Одбиено читање на {kind} од {path}: {size} бајти ја надминува границата од {limit}"),
    ("catalog.load_failed", "Неуспешно вчитување на каталогот: {error}"),
    ("statuses.parse_failed", "Неуспешно читање на статусите {path}: {error}"),
    ("config.load_failed", "Неуспешно вчитување на конфигурацијата: {error}"),
    ("config.validate.ok", "Конфигурацијата е валидна"),
    ("engine.init_failed", "Невалидна политика за запишување: {error}"),
    ("audit.open_failed", "Неуспешно отворање на дневникот {path}: {error}"),
    ("store.load_failed", "Неуспешно вчитување на статусите за {accreditation}: {error}"),
    ("store.save_failed", "Неуспешно зачувување на статусите за {accreditation}: {error}"),
    (
        "store.corrupt_recovered",
        "Предупредување: зачуваните статуси за {accreditation} не можат да се прочитаат \
         ({error}); продолжува со празни статуси.",
    ),
    ("status.toggle.ok", "{course}: слушан {listened}, положен {passed}"),
    ("status.reset.ok", "Избришани се зачуваните статуси за {accreditation}"),
    ("status.flag.yes", "да"),
    ("status.flag.no", "не"),
    ("evaluate.serialize_failed", "Неуспешна серијализација на извештајот: {error}"),
    (
        "evaluate.warn.not_converged",
        "Предупредување: пресметката запре по {rounds} круга без да стигне до фиксна точка.",
    ),
    ("evaluate.text.header", "{program} (акредитација {accreditation})"),
    ("evaluate.text.row", "{mark} С{semester} {name} ({credits} кредити) [{status}]"),
    ("evaluate.text.mark.open", "отворен "),
    ("evaluate.text.mark.blocked", "блокиран"),
    ("evaluate.text.status.passed", "положен"),
    ("evaluate.text.status.listened", "слушан"),
    ("evaluate.text.status.not_listened", "не е слушан"),
    ("evaluate.text.fixpoint", "Пресметка: {rounds} круга, конвергира: {converged}"),
    (
        "evaluate.text.totals",
        "Кредити: {total} (положени {passed}, дополнителни {supplementary}, вишок {excess})",
    ),
    ("evaluate.text.counts", "Слушани предмети: {listened}, положени: {passed}"),
    (
        "evaluate.text.over_limit",
        "Надминат лимит на изборни кредити на нивоа {levels}; исклучени предмети: {courses}",
    ),
    (
        "evaluate.text.graduation",
        "{track}: потребни {credits} кредити, исполнети кредити: {met}, задолжителни што \
         недостасуваат: {missing}, услов: {eligible}",
    ),
    ("evaluate.text.track.three_year", "Тригодишни студии"),
    ("evaluate.text.track.four_year", "Четиригодишни студии"),
    ("evaluate.text.thesis", "Положена дипломска: {value}"),
    ("parse.serialize_failed", "Неуспешна серијализација на условот: {error}"),
    ("parse.rendered", "Приказ: {text}"),
    ("parse.unparsed", "Непрепознат дел: {text}"),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_MK_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Mk => CATALOG_MK_MAP.get_or_init(|| CATALOG_MK.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    translate_for(current_locale(), key, args)
}

/// Translates `key` for an explicit locale.
#[must_use]
pub fn translate_for(locale: Locale, key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    fill_template(template, &args)
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::panic, reason = "Test-only panic-based assertions are permitted.")]

    use super::CATALOG_EN;
    use super::Locale;
    use super::catalog_for;

    #[test]
    fn macedonian_catalog_covers_every_english_key() {
        let mk = catalog_for(Locale::Mk);
        for (key, _) in CATALOG_EN {
            assert!(mk.contains_key(key), "missing mk entry for {key}");
        }
        assert_eq!(catalog_for(Locale::En).len(), mk.len());
    }
}
