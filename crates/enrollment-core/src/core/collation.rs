// crates/enrollment-core/src/core/collation.rs
// ============================================================================
// Module: Course Name Collation
// Description: Alphabetical ordering for Macedonian course names.
// Purpose: Give course listings a stable, human-expected order.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! Codepoint order misplaces several Macedonian letters (`Ѓ`, `Ѕ`, `Ј`, `Љ`,
//! `Њ`, `Ќ`, `Џ`) relative to the alphabet. [`compare_names`] orders names by
//! the Macedonian alphabet, ignoring case at the primary level.
//!
//! Character classes sort in this order: whitespace, punctuation, digits,
//! Latin letters, Cyrillic letters, and everything else. Ties at the primary
//! level break lowercase-first, then by raw string, so the order is total.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

// ============================================================================
// SECTION: Alphabet
// ============================================================================

/// Lowercase Macedonian alphabet in collation order.
const MACEDONIAN_ALPHABET: [char; 31] = [
    'а', 'б', 'в', 'г', 'д', 'ѓ', 'е', 'ж', 'з', 'ѕ', 'и', 'ј', 'к', 'л', 'љ', 'м', 'н', 'њ', 'о',
    'п', 'р', 'с', 'т', 'ќ', 'у', 'ф', 'х', 'ц', 'ч', 'џ', 'ш',
];

/// Rank offset placing non-Macedonian Cyrillic letters after the alphabet.
const CYRILLIC_TAIL_OFFSET: u32 = 0x100;

/// Primary collation weight: `(class, rank)`.
type Weight = (u8, u32);

/// Returns the primary weight of a single character.
fn weight(ch: char) -> Weight {
    let folded = ch.to_lowercase().next().unwrap_or(ch);
    if folded.is_whitespace() {
        return (0, 0);
    }
    if folded.is_ascii_punctuation() {
        return (1, u32::from(folded));
    }
    if let Some(digit) = folded.to_digit(10) {
        return (2, digit);
    }
    if folded.is_ascii_alphabetic() {
        return (3, u32::from(folded));
    }
    if let Some(rank) = MACEDONIAN_ALPHABET.iter().position(|letter| *letter == folded) {
        return (4, u32::try_from(rank).unwrap_or(u32::MAX));
    }
    if ('\u{0400}' ..= '\u{04FF}').contains(&folded) {
        return (4, CYRILLIC_TAIL_OFFSET + u32::from(folded));
    }
    (5, u32::from(folded))
}

// ============================================================================
// SECTION: Comparison
// ============================================================================

/// Compares two course names in Macedonian alphabetical order.
#[must_use]
pub fn compare_names(left: &str, right: &str) -> Ordering {
    let primary = left.chars().map(weight).cmp(right.chars().map(weight));
    if primary != Ordering::Equal {
        return primary;
    }
    let case = left
        .chars()
        .map(char::is_uppercase)
        .cmp(right.chars().map(char::is_uppercase));
    case.then_with(|| left.cmp(right))
}
