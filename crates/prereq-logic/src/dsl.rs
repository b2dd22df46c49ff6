// crates/prereq-logic/src/dsl.rs
// ============================================================================
// Module: Prerequisite Text Parser
// Description: Recursive-descent parser for free-text prerequisite prose.
// Purpose: Turn catalog prerequisite sentences into `PrereqNode` trees.
// Dependencies: crate::{grammar, node}
// ============================================================================

//! ## Overview
//! Parsing happens in two phases:
//!
//! 1. **Tokenization.** Known course names are located in the text by
//!    case-insensitive search, longest name first, and each first occurrence
//!    is replaced by a placeholder `%%<index>%%`. Course names may contain
//!    spaces and connective words, so they must be removed before any
//!    splitting happens.
//! 2. **Descent.** The placeholder text is split by precedence level:
//!
//! ```text
//! expr   -> term   (or_separator  term)*
//! term   -> factor (and_separator factor)*
//! factor -> "(" expr ")" | placeholder | <unparsed text>
//! ```
//!
//! Splits only happen at parenthesis depth zero. A level that yields a single
//! part returns it directly, so no single-child logical node is ever built.
//!
//! The parser never fails. Anything it cannot interpret becomes
//! [`PrereqNode::Unknown`], including input past [`MAX_PREREQ_INPUT_BYTES`]
//! and groups nested deeper than [`MAX_PREREQ_NESTING`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::grammar::PrereqGrammar;
use crate::node::PrereqNode;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum prerequisite text size in bytes.
pub const MAX_PREREQ_INPUT_BYTES: usize = 64 * 1024;
/// Maximum supported parenthesis nesting depth.
pub const MAX_PREREQ_NESTING: usize = 32;

/// Placeholder delimiter wrapped around a course index.
const PLACEHOLDER_MARK: &str = "%%";

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Parses prerequisite `text` against the set of known course names.
///
/// # Arguments
/// * `text` - Raw prerequisite prose from the catalog.
/// * `known_names` - Every course name that may be referenced.
/// * `grammar` - Localized separators and credits keyword.
///
/// Blank text yields [`PrereqNode::None`]; text of the form
/// `"<n> <credits_keyword>"` yields [`PrereqNode::Credits`]; text that mentions
/// no known course yields [`PrereqNode::Unknown`] with the original text.
#[must_use]
pub fn parse_prerequisite<S: AsRef<str>>(
    text: &str,
    known_names: &[S],
    grammar: &PrereqGrammar,
) -> PrereqNode {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return PrereqNode::None;
    }
    if text.len() > MAX_PREREQ_INPUT_BYTES {
        return PrereqNode::unknown(text);
    }
    if let Some(amount) = grammar.parse_credits(trimmed) {
        return PrereqNode::credits(amount);
    }

    let (tokenized, found) = tokenize(text, known_names);
    if found.is_empty() {
        return PrereqNode::unknown(text);
    }

    let parser = Parser {
        grammar,
        found: &found,
    };
    parser.parse_expr(&tokenized, 0)
}

// ============================================================================
// SECTION: Tokenization
// ============================================================================

/// Replaces the first occurrence of each known name with a placeholder.
///
/// Returns the rewritten text and the matched names indexed by placeholder.
fn tokenize<S: AsRef<str>>(text: &str, known_names: &[S]) -> (String, Vec<String>) {
    let mut names: Vec<&str> =
        known_names.iter().map(AsRef::as_ref).filter(|name| !name.is_empty()).collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));

    let mut tokenized = text.to_string();
    let mut found: Vec<String> = Vec::new();
    for name in names {
        if let Some((start, end)) = find_case_insensitive(&tokenized, name) {
            let placeholder = format!("{PLACEHOLDER_MARK}{}{PLACEHOLDER_MARK}", found.len());
            tokenized.replace_range(start..end, &placeholder);
            found.push(name.to_string());
        }
    }
    (tokenized, found)
}

/// Finds `needle` in `haystack` ignoring case, returning byte offsets into
/// `haystack`.
///
/// Comparison lowercases one character at a time so the returned range always
/// lies on character boundaries of the original text.
pub(crate) fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let folded_needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();

    for (start, _) in haystack.char_indices() {
        let mut expected = folded_needle.iter();
        let mut end = start;
        let mut matched = false;
        for (offset, ch) in haystack[start..].char_indices() {
            let mut lowered = ch.to_lowercase();
            let all_equal = lowered.all(|folded| expected.next() == Some(&folded));
            if !all_equal {
                break;
            }
            end = start + offset + ch.len_utf8();
            if expected.as_slice().is_empty() {
                matched = true;
                break;
            }
        }
        if matched {
            return Some((start, end));
        }
    }
    None
}

/// Splits `text` on `separator` wherever the parenthesis depth is zero.
///
/// Unbalanced closing parentheses drive the depth negative, after which no
/// further splits occur.
pub(crate) fn split_top_level<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut depth: i64 = 0;
    let mut part_start = 0;
    let mut index = 0;

    while index < text.len() {
        let rest = &text[index..];
        let Some(ch) = rest.chars().next() else {
            break;
        };
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && !separator.is_empty() && rest.starts_with(separator) {
            parts.push(&text[part_start..index]);
            index += separator.len();
            part_start = index;
        } else {
            index += ch.len_utf8();
        }
    }
    parts.push(&text[part_start..]);
    parts
}

// ============================================================================
// SECTION: Parser
// ============================================================================

/// Recursive-descent state over placeholder text.
struct Parser<'a> {
    /// Connective words in use.
    grammar: &'a PrereqGrammar,
    /// Course names indexed by placeholder number.
    found: &'a [String],
}

impl Parser<'_> {
    /// Parses alternatives separated by the `or` connective.
    fn parse_expr(&self, text: &str, depth: usize) -> PrereqNode {
        let trimmed = text.trim();
        let parts = split_top_level(trimmed, &self.grammar.or_separator);
        if parts.len() <= 1 {
            return self.parse_term(trimmed, depth);
        }
        PrereqNode::or(parts.into_iter().map(|part| self.parse_term(part, depth)))
    }

    /// Parses conjuncts separated by the `and` connective.
    fn parse_term(&self, text: &str, depth: usize) -> PrereqNode {
        let trimmed = text.trim();
        let parts = split_top_level(trimmed, &self.grammar.and_separator);
        if parts.len() <= 1 {
            return self.parse_factor(trimmed, depth);
        }
        PrereqNode::and(parts.into_iter().map(|part| self.parse_factor(part, depth)))
    }

    /// Parses a parenthesized group or a single placeholder.
    fn parse_factor(&self, text: &str, depth: usize) -> PrereqNode {
        let trimmed = text.trim();
        if let Some(inner) = trimmed.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
            if depth >= MAX_PREREQ_NESTING {
                return PrereqNode::unknown(trimmed);
            }
            return self.parse_expr(inner, depth + 1);
        }
        match self.resolve_placeholder(trimmed) {
            Some(name) => PrereqNode::course(name),
            None => PrereqNode::unknown(trimmed),
        }
    }

    /// Resolves `%%<index>%%` to the matched course name.
    ///
    /// Indices past the matched list resolve to `None`.
    fn resolve_placeholder(&self, text: &str) -> Option<&str> {
        let digits = text.strip_prefix(PLACEHOLDER_MARK)?.strip_suffix(PLACEHOLDER_MARK)?;
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        let index = digits.parse::<usize>().ok()?;
        self.found.get(index).map(String::as_str)
    }
}
