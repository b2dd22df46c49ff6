// crates/enrollment-core/tests/catalog.rs
// ============================================================================
// Module: Catalog Projection Tests
// Description: Accreditation-prefixed records projected into a curriculum.
// Purpose: Ensure availability, fallbacks, ordering, and size limits hold.
// Dependencies: enrollment-core, serde_json
// ============================================================================

//! ## Overview
//! Parses inline catalogs and inspects the projected curriculum.

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

use enrollment_core::Accreditation;
use enrollment_core::Catalog;
use enrollment_core::CatalogError;
use enrollment_core::Curriculum;
use enrollment_core::EnrollmentPolicy;
use enrollment_core::MAX_CATALOG_BYTES;
use enrollment_core::PrereqGrammar;
use enrollment_core::PrereqNode;
use enrollment_core::ProgramName;
use serde_json::json;
use support::TestResult;
use support::ensure;

/// Returns a small two-accreditation catalog.
fn sample_catalog() -> TestResult<Catalog> {
    let document = json!([
        {
            "name": "Структурно програмирање",
            "2023-available": "TRUE",
            "2023-semester": "1",
            "2023-level": "1",
            "2023-code": "F23L1W001",
            "2023-СИИС": "задолжителен",
            "2018-available": "TRUE",
            "2018-semester": "1"
        },
        {
            "name": "Објектно програмирање",
            "2023-available": "TRUE",
            "2023-name": "Објектно-ориентирано програмирање",
            "2023-semester": "2",
            "2023-credits": 6,
            "2023-prerequisite": "Структурно програмирање",
            "2023-СИИС": "задолжителен"
        },
        {
            "name": "Алгоритми",
            "2023-available": "TRUE",
            "2023-semester": "2 (летен)",
            "2023-level": 2,
            "2023-credits": "7",
            "2023-СИИС": "изборен"
        },
        {
            "name": "Стар предмет",
            "2023-available": "FALSE",
            "2023-semester": "1"
        },
        {
            "name": "Без семестар",
            "2023-available": "TRUE"
        }
    ]);
    Ok(Catalog::from_json_slice(&serde_json::to_vec(&document)?)?)
}

/// Builds the 2023 curriculum for the sample program.
fn sample_curriculum() -> TestResult<Curriculum> {
    Ok(Curriculum::from_catalog(
        &sample_catalog()?,
        Accreditation::new("2023"),
        ProgramName::new("СИИС"),
        &EnrollmentPolicy::default(),
        &PrereqGrammar::default(),
    )?)
}

#[test]
fn projection_keeps_available_records_with_a_semester() -> TestResult {
    let curriculum = sample_curriculum()?;
    let names: Vec<&str> = curriculum.courses().iter().map(|entry| entry.name()).collect();
    ensure(
        names == ["Структурно програмирање", "Алгоритми", "Објектно-ориентирано програмирање"],
        format!("unexpected order {names:?}"),
    )?;
    Ok(())
}

#[test]
fn projection_reads_fields_and_fallbacks() -> TestResult {
    let curriculum = sample_curriculum()?;
    let first = curriculum.get("Структурно програмирање").ok_or("missing first course")?;
    ensure(first.course.code.as_deref() == Some("F23L1W001"), "code is read")?;
    ensure(first.course.credits == 6, "credits default to six")?;
    ensure(first.course.level == 1 && first.required, "level and membership are read")?;

    let algorithms = curriculum.get("Алгоритми").ok_or("missing algorithms")?;
    ensure(algorithms.course.semester == 2, "semester keeps its leading digits")?;
    ensure(algorithms.course.credits == 7 && algorithms.course.level == 2, "numbers parse")?;
    ensure(curriculum.electives().contains("Алгоритми"), "elective state is recognised")?;
    Ok(())
}

#[test]
fn prerequisites_resolve_against_projected_names() -> TestResult {
    let curriculum = sample_curriculum()?;
    let entry =
        curriculum.get("Објектно-ориентирано програмирање").ok_or("missing renamed course")?;
    ensure(entry.raw == PrereqNode::course("Структурно програмирање"), "course reference")?;
    ensure(entry.pruned == entry.raw, "required references survive pruning")?;
    Ok(())
}

#[test]
fn unknown_accreditation_is_rejected() -> TestResult {
    let result = Curriculum::from_catalog(
        &sample_catalog()?,
        Accreditation::new("2030"),
        ProgramName::new("СИИС"),
        &EnrollmentPolicy::default(),
        &PrereqGrammar::default(),
    );
    ensure(
        matches!(result, Err(CatalogError::UnknownAccreditation(ref acc)) if acc == "2030"),
        "accreditation 2030 is not in the catalog",
    )?;
    Ok(())
}

#[test]
fn oversized_catalog_is_rejected_before_parsing() -> TestResult {
    let bytes = vec![b' '; MAX_CATALOG_BYTES + 1];
    ensure(
        matches!(Catalog::from_json_slice(&bytes), Err(CatalogError::TooLarge { .. })),
        "size limit applies",
    )?;
    ensure(
        matches!(Catalog::from_json_slice(b"{}"), Err(CatalogError::Parse(_))),
        "catalog must be an array",
    )?;
    Ok(())
}
