// crates/prereq-logic/tests/dsl.rs
// ============================================================================
// Module: Prerequisite Parser Tests
// Description: Tokenization, precedence, and fallback behavior of the parser.
// Purpose: Pin down how catalog prose maps onto prerequisite trees.
// Dependencies: prereq-logic
// ============================================================================

//! ## Overview
//! Covers blank input, credit thresholds, longest-first tokenization,
//! precedence between the connectives, parenthesized groups, and the
//! fail-open fallbacks.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use prereq_logic::MAX_PREREQ_INPUT_BYTES;
use prereq_logic::MAX_PREREQ_NESTING;
use prereq_logic::PrereqGrammar;
use prereq_logic::PrereqNode;
use prereq_logic::parse_prerequisite;
use support::TestResult;
use support::ensure;

const NAMES: [&str; 5] =
    ["Алгоритми", "Напредни алгоритми", "Бази на податоци", "Мрежи", "Оперативни системи"];

fn parse(text: &str) -> PrereqNode {
    parse_prerequisite(text, &NAMES, &PrereqGrammar::default())
}

#[test]
fn blank_text_has_no_prerequisite() -> TestResult {
    ensure(parse("").is_none(), "empty text should parse to none")?;
    ensure(parse("   \t ").is_none(), "whitespace should parse to none")?;
    Ok(())
}

#[test]
fn credit_threshold_is_recognized() -> TestResult {
    ensure(parse("60 кредити") == PrereqNode::credits(60), "spaced form")?;
    ensure(parse("  120кредити ") == PrereqNode::credits(120), "compact form")?;
    Ok(())
}

#[test]
fn credit_threshold_requires_exact_keyword() -> TestResult {
    let node = parse("60 кредити од прва година");
    ensure(
        node == PrereqNode::unknown("60 кредити од прва година"),
        format!("unexpected node {node:?}"),
    )
}

#[test]
fn single_course_resolves_without_wrapper() -> TestResult {
    ensure(parse("Мрежи") == PrereqNode::course("Мрежи"), "single course leaf")
}

#[test]
fn matching_ignores_case_and_keeps_catalog_spelling() -> TestResult {
    ensure(parse("МРЕЖИ") == PrereqNode::course("Мрежи"), "catalog name is preserved")
}

#[test]
fn longest_name_is_tokenized_first() -> TestResult {
    let node = parse("Напредни алгоритми или Алгоритми");
    let expected =
        PrereqNode::or([PrereqNode::course("Напредни алгоритми"), PrereqNode::course("Алгоритми")]);
    ensure(node == expected, format!("unexpected node {node:?}"))
}

#[test]
fn names_containing_connectives_stay_whole() -> TestResult {
    let node = parse("Бази на податоци и Мрежи");
    let expected = PrereqNode::and([PrereqNode::course("Бази на податоци"), PrereqNode::course("Мрежи")]);
    ensure(node == expected, format!("unexpected node {node:?}"))
}

#[test]
fn and_binds_tighter_than_or() -> TestResult {
    let node = parse("Алгоритми и Мрежи или Оперативни системи");
    let expected = PrereqNode::or([
        PrereqNode::and([PrereqNode::course("Алгоритми"), PrereqNode::course("Мрежи")]),
        PrereqNode::course("Оперативни системи"),
    ]);
    ensure(node == expected, format!("unexpected node {node:?}"))
}

#[test]
fn parentheses_override_precedence() -> TestResult {
    let node = parse("Алгоритми и (Мрежи или Оперативни системи)");
    let expected = PrereqNode::and([
        PrereqNode::course("Алгоритми"),
        PrereqNode::or([PrereqNode::course("Мрежи"), PrereqNode::course("Оперативни системи")]),
    ]);
    ensure(node == expected, format!("unexpected node {node:?}"))
}

#[test]
fn redundant_outer_parentheses_are_stripped() -> TestResult {
    ensure(parse("(Мрежи)") == PrereqNode::course("Мрежи"), "outer group collapses")
}

#[test]
fn text_without_known_names_is_unknown() -> TestResult {
    let text = "Согласност од менторот";
    ensure(parse(text) == PrereqNode::unknown(text), "no course matched")
}

#[test]
fn leftover_prose_becomes_unknown_fragment() -> TestResult {
    let node = parse("Мрежи и согласност од менторот");
    let expected =
        PrereqNode::and([PrereqNode::course("Мрежи"), PrereqNode::unknown("согласност од менторот")]);
    ensure(node == expected, format!("unexpected node {node:?}"))
}

#[test]
fn credits_inside_a_conjunction_stay_unknown() -> TestResult {
    let node = parse("Мрежи и 60 кредити");
    let expected = PrereqNode::and([PrereqNode::course("Мрежи"), PrereqNode::unknown("60 кредити")]);
    ensure(node == expected, format!("unexpected node {node:?}"))
}

#[test]
fn repeated_name_only_tokenizes_first_occurrence() -> TestResult {
    let node = parse("Мрежи или Мрежи");
    let expected = PrereqNode::or([PrereqNode::course("Мрежи"), PrereqNode::unknown("Мрежи")]);
    ensure(node == expected, format!("unexpected node {node:?}"))
}

#[test]
fn out_of_range_placeholder_is_unknown() -> TestResult {
    let node = parse("Мрежи или %%7%%");
    let expected = PrereqNode::or([PrereqNode::course("Мрежи"), PrereqNode::unknown("%%7%%")]);
    ensure(node == expected, format!("unexpected node {node:?}"))
}

#[test]
fn oversized_input_is_unknown() -> TestResult {
    let text = format!("Мрежи{}", " ".repeat(MAX_PREREQ_INPUT_BYTES));
    ensure(parse(&text) == PrereqNode::unknown(text.clone()), "oversized input falls back")
}

#[test]
fn excessive_nesting_degrades_to_unknown() -> TestResult {
    let depth = MAX_PREREQ_NESTING + 2;
    let text = format!("{}Мрежи{}", "(".repeat(depth), ")".repeat(depth));
    let node = parse(&text);
    ensure(node.unparsed_fragments().len() == 1, format!("expected one fragment, got {node:?}"))?;
    ensure(node.course_names().is_empty(), "course should be hidden inside the fragment")
}

#[test]
fn custom_grammar_is_honored() -> TestResult {
    let grammar = PrereqGrammar {
        or_separator: " or ".to_string(),
        and_separator: " and ".to_string(),
        credits_keyword: "credits".to_string(),
    };
    let names = ["Algorithms", "Networks", "Databases"];
    let node = parse_prerequisite("algorithms and (Networks or Databases)", &names, &grammar);
    let expected = PrereqNode::and([
        PrereqNode::course("Algorithms"),
        PrereqNode::or([PrereqNode::course("Networks"), PrereqNode::course("Databases")]),
    ]);
    ensure(node == expected, format!("unexpected node {node:?}"))?;
    ensure(
        parse_prerequisite("90 credits", &names, &grammar) == PrereqNode::credits(90),
        "localized credits keyword",
    )
}
