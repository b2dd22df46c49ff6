// crates/enrollment-core/src/runtime/curriculum.rs
// ============================================================================
// Module: Curriculum
// Description: Courses of one selection with their parsed prerequisite trees.
// Purpose: Build every per-selection derived structure in one place.
// Dependencies: prereq-logic, serde, crate::core
// ============================================================================

//! ## Overview
//! A [`Curriculum`] is built once per (accreditation, program) selection and
//! is immutable afterwards. It keeps courses ordered by semester and name,
//! and holds two trees per course: the raw parse used for explanations and
//! the elective-pruned tree used for eligibility.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use prereq_logic::CourseInfo;
use prereq_logic::PrereqGrammar;
use prereq_logic::PrereqNode;
use prereq_logic::parse_prerequisite;
use prereq_logic::prune_electives;
use serde::Deserialize;
use serde::Serialize;

use crate::core::Accreditation;
use crate::core::Catalog;
use crate::core::CatalogError;
use crate::core::Course;
use crate::core::EnrollmentPolicy;
use crate::core::ProgramName;
use crate::core::compare_names;
use crate::runtime::solver::EnabledMap;

// ============================================================================
// SECTION: Filters
// ============================================================================

/// Semester parity filter for course listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonFilter {
    /// Every semester.
    #[default]
    All,
    /// Odd semesters.
    Winter,
    /// Even semesters.
    Summer,
}

impl SeasonFilter {
    /// Returns true when `semester` falls in this season.
    #[must_use]
    pub const fn matches(self, semester: u32) -> bool {
        match self {
            Self::All => true,
            Self::Winter => semester % 2 == 1,
            Self::Summer => semester % 2 == 0,
        }
    }
}

// ============================================================================
// SECTION: Curriculum
// ============================================================================

/// A course together with its derived prerequisite trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumCourse {
    /// Projected course.
    pub course: Course,
    /// Parsed prerequisite tree.
    pub raw: PrereqNode,
    /// Tree with elective references removed.
    pub pruned: PrereqNode,
    /// Program state marks the course required.
    pub required: bool,
    /// Program state exempts the course from prerequisite checks.
    pub exempt: bool,
}

impl CurriculumCourse {
    /// Returns the course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.course.name
    }
}

/// Courses of one (accreditation, program) selection.
///
/// # Invariants
/// - Courses are sorted by semester, then by [`compare_names`].
/// - `electives` holds every course whose program state is set and does not
///   mark it required.
#[derive(Debug, Clone)]
pub struct Curriculum {
    /// Selected accreditation.
    accreditation: Accreditation,
    /// Selected study program.
    program: ProgramName,
    /// Ordered courses.
    courses: Vec<CurriculumCourse>,
    /// Facts keyed by course name.
    info: BTreeMap<String, CourseInfo>,
    /// Elective course names.
    electives: BTreeSet<String>,
}

impl Curriculum {
    /// Builds a curriculum from projected courses.
    #[must_use]
    pub fn build(
        accreditation: Accreditation,
        program: ProgramName,
        mut courses: Vec<Course>,
        policy: &EnrollmentPolicy,
        grammar: &PrereqGrammar,
    ) -> Self {
        courses.sort_by(|left, right| {
            left.semester.cmp(&right.semester).then_with(|| compare_names(&left.name, &right.name))
        });

        let names: Vec<&str> = courses.iter().map(|course| course.name.as_str()).collect();
        let electives: BTreeSet<String> = courses
            .iter()
            .filter(|course| policy.is_elective(course.state()))
            .map(|course| course.name.clone())
            .collect();
        let info: BTreeMap<String, CourseInfo> =
            courses.iter().map(|course| (course.name.clone(), course.info())).collect();

        let entries = courses
            .iter()
            .map(|course| {
                let raw = parse_prerequisite(
                    course.prerequisite.as_deref().unwrap_or_default(),
                    &names,
                    grammar,
                );
                let pruned = prune_electives(&raw, &electives);
                CurriculumCourse {
                    required: policy.is_required(course.state()),
                    exempt: policy.is_exempt(course.state()),
                    course: course.clone(),
                    raw,
                    pruned,
                }
            })
            .collect();

        Self {
            accreditation,
            program,
            courses: entries,
            info,
            electives,
        }
    }

    /// Projects `catalog` and builds the curriculum for the selection.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the accreditation is not in the catalog.
    pub fn from_catalog(
        catalog: &Catalog,
        accreditation: Accreditation,
        program: ProgramName,
        policy: &EnrollmentPolicy,
        grammar: &PrereqGrammar,
    ) -> Result<Self, CatalogError> {
        let courses = catalog.project(&accreditation, &program, policy)?;
        Ok(Self::build(accreditation, program, courses, policy, grammar))
    }

    /// Returns the selected accreditation.
    #[must_use]
    pub const fn accreditation(&self) -> &Accreditation {
        &self.accreditation
    }

    /// Returns the selected program.
    #[must_use]
    pub const fn program(&self) -> &ProgramName {
        &self.program
    }

    /// Returns the ordered courses.
    #[must_use]
    pub fn courses(&self) -> &[CurriculumCourse] {
        &self.courses
    }

    /// Returns the course facts keyed by name.
    #[must_use]
    pub const fn info(&self) -> &BTreeMap<String, CourseInfo> {
        &self.info
    }

    /// Returns the elective course names.
    #[must_use]
    pub const fn electives(&self) -> &BTreeSet<String> {
        &self.electives
    }

    /// Returns the course named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CurriculumCourse> {
        self.courses.iter().find(|entry| entry.course.name == name)
    }

    /// Returns true when no courses were projected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Returns courses matching `season`, optionally only the enabled ones.
    ///
    /// Courses missing from `enabled` count as enabled.
    #[must_use]
    pub fn visible<'a>(
        &'a self,
        season: SeasonFilter,
        enabled_only: bool,
        enabled: &EnabledMap,
    ) -> Vec<&'a CurriculumCourse> {
        self.courses
            .iter()
            .filter(|entry| season.matches(entry.course.semester))
            .filter(|entry| {
                !enabled_only || enabled.get(entry.name()).copied().unwrap_or(true)
            })
            .collect()
    }
}
