// crates/enrollment-cli/src/main.rs
// ============================================================================
// Module: Enrollment Gate CLI Entry Point
// Description: Command dispatcher for enrollment evaluation and status edits.
// Purpose: Provide a localized CLI over the enrollment planner core.
// Dependencies: clap, enrollment-config, enrollment-core, prereq-logic, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! `enrollment-gate` evaluates a course catalog against a student's statuses,
//! edits statuses persisted in a store directory, validates configuration,
//! and parses single prerequisite strings for debugging. All user-facing
//! strings are routed through the i18n catalog. Input files are untrusted and
//! read with hard size limits.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use enrollment_cli::JsonFileStatusStore;
use enrollment_cli::i18n::Locale;
use enrollment_cli::i18n::set_locale;
use enrollment_cli::t;
use enrollment_config::CONFIG_ENV_VAR;
use enrollment_config::DEFAULT_CONFIG_NAME;
use enrollment_config::EnrollmentConfig;
use enrollment_core::Accreditation;
use enrollment_core::Catalog;
use enrollment_core::Curriculum;
use enrollment_core::EngineAuditSink;
use enrollment_core::EnrollmentEngine;
use enrollment_core::EnrollmentReport;
use enrollment_core::EvaluationOptions;
use enrollment_core::FileAuditSink;
use enrollment_core::GraduationTrack;
use enrollment_core::MAX_CATALOG_BYTES;
use enrollment_core::NoopAuditSink;
use enrollment_core::ProgramName;
use enrollment_core::SeasonFilter;
use enrollment_core::StatusMap;
use enrollment_core::StatusStore;
use enrollment_core::StderrAuditSink;
use enrollment_core::StoreError;
use prereq_logic::parse_prerequisite;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a status map file passed with `--statuses`.
const MAX_STATUSES_BYTES: usize = enrollment_cli::MAX_STATUS_FILE_BYTES;
/// Environment variable selecting the output language.
const LANG_ENV: &str = "ENROLLMENT_GATE_LANG";
/// Audit log path that routes events to stderr.
const AUDIT_STDERR: &str = "-";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "enrollment-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `ENROLLMENT_GATE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate which courses a student may enroll in.
    Evaluate(EvaluateCommand),
    /// Edit statuses persisted in a store directory.
    Status {
        /// Selected status subcommand.
        #[command(subcommand)]
        command: StatusCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Parse one prerequisite string and print its tree.
    Parse(ParseCommand),
}

/// Status subcommands.
#[derive(Subcommand, Debug)]
enum StatusCommand {
    /// Toggle the listened or passed flag of one course.
    Toggle(StatusToggleCommand),
    /// Clear every stored status for an accreditation.
    Reset(StatusResetCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate an enrollment-gate configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `evaluate`.
#[derive(Args, Debug)]
struct EvaluateCommand {
    /// Catalog JSON file (array of flat course records).
    #[arg(long, value_name = "PATH")]
    catalog: PathBuf,
    /// Accreditation (curriculum edition) to evaluate.
    #[arg(long, value_name = "ID")]
    accreditation: String,
    /// Study program within the accreditation.
    #[arg(long, value_name = "NAME")]
    program: String,
    /// Status map JSON file.
    #[arg(long, value_name = "PATH", conflicts_with = "store_dir")]
    statuses: Option<PathBuf>,
    /// Status store directory.
    #[arg(long, value_name = "DIR")]
    store_dir: Option<PathBuf>,
    /// Optional config file path (defaults to enrollment-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Count the supplementary module credits.
    #[arg(long, action = ArgAction::SetTrue)]
    supplementary: bool,
    /// Include per-course reasons.
    #[arg(long, action = ArgAction::SetTrue)]
    reasons: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Restrict listed courses to one season.
    #[arg(long, value_enum, default_value_t = SeasonArg::All)]
    season: SeasonArg,
    /// List only courses the student may enroll in.
    #[arg(long, action = ArgAction::SetTrue)]
    enabled_only: bool,
    /// Append solver audit events to this file (`-` for stderr).
    #[arg(long, value_name = "PATH")]
    audit_log: Option<PathBuf>,
}

/// Arguments for `status toggle`.
#[derive(Args, Debug)]
struct StatusToggleCommand {
    /// Status store directory.
    #[arg(long, value_name = "DIR")]
    store_dir: PathBuf,
    /// Accreditation whose statuses are edited.
    #[arg(long, value_name = "ID")]
    accreditation: String,
    /// Course name.
    #[arg(long, value_name = "NAME")]
    course: String,
    /// Flag to toggle.
    #[arg(long, value_enum)]
    field: StatusFieldArg,
}

/// Arguments for `status reset`.
#[derive(Args, Debug)]
struct StatusResetCommand {
    /// Status store directory.
    #[arg(long, value_name = "DIR")]
    store_dir: PathBuf,
    /// Accreditation whose statuses are cleared.
    #[arg(long, value_name = "ID")]
    accreditation: String,
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to enrollment-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `parse`.
#[derive(Args, Debug)]
struct ParseCommand {
    /// Prerequisite text.
    #[arg(long, value_name = "TEXT")]
    text: String,
    /// Catalog supplying known course names.
    #[arg(long, value_name = "PATH", requires = "accreditation")]
    catalog: Option<PathBuf>,
    /// Accreditation used to read names from the catalog.
    #[arg(long, value_name = "ID", requires = "catalog")]
    accreditation: Option<String>,
    /// Additional known course names.
    #[arg(long = "name", value_name = "COURSE")]
    names: Vec<String>,
    /// Optional config file path supplying the grammar.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Output formats for `evaluate`.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Pretty-printed JSON report.
    Json,
    /// Human-readable course list.
    Text,
}

/// Season selections for `evaluate`.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum SeasonArg {
    /// Every semester.
    All,
    /// Odd semesters.
    Winter,
    /// Even semesters.
    Summer,
}

impl From<SeasonArg> for SeasonFilter {
    fn from(value: SeasonArg) -> Self {
        match value {
            SeasonArg::All => Self::All,
            SeasonArg::Winter => Self::Winter,
            SeasonArg::Summer => Self::Summer,
        }
    }
}

/// Status flags editable through `status toggle`.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum StatusFieldArg {
    /// The listened flag; clearing it also clears passed.
    Listened,
    /// The passed flag; setting it also sets listened.
    Passed,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum LangArg {
    /// English.
    En,
    /// Macedonian.
    Mk,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Mk => Self::Mk,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let requested = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(requested.unwrap_or(Locale::En));

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Evaluate(command) => command_evaluate(&command, requested),
        Commands::Status {
            command,
        } => command_status(command),
        Commands::Config {
            command,
        } => command_config(command),
        Commands::Parse(command) => command_parse(&command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Evaluate Command
// ============================================================================

/// Executes the `evaluate` command.
fn command_evaluate(command: &EvaluateCommand, requested: Option<Locale>) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let policy =
        config.to_policy().map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let engine = EnrollmentEngine::new(policy, config.to_grammar())
        .map_err(|err| CliError::new(t!("engine.init_failed", error = err)))?
        .with_audit_sink(open_audit_sink(command.audit_log.as_deref())?);

    let catalog = load_catalog(&command.catalog)?;
    let accreditation = Accreditation::new(command.accreditation.as_str());
    let curriculum = engine
        .curriculum_from_catalog(
            &catalog,
            accreditation.clone(),
            ProgramName::new(command.program.as_str()),
        )
        .map_err(|err| CliError::new(t!("catalog.load_failed", error = err)))?;

    let statuses = match (&command.statuses, &command.store_dir) {
        (Some(path), _) => load_status_file(path)?,
        (None, Some(dir)) => load_stored_statuses(&JsonFileStatusStore::new(dir), &accreditation)?,
        (None, None) => StatusMap::new(),
    };

    let options = EvaluationOptions {
        supplementary_completed: command.supplementary,
        include_reasons: command.reasons,
        locale: requested.unwrap_or_else(|| config.locale()),
    };
    let mut report = engine.evaluate(&curriculum, &statuses, &options);
    if !report.fixpoint.converged {
        write_stderr_line(&t!("evaluate.warn.not_converged", rounds = report.fixpoint.rounds))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    let season = SeasonFilter::from(command.season);
    match command.format {
        OutputFormat::Json => {
            retain_visible(&mut report, &curriculum, season, command.enabled_only);
            let json = serde_json::to_string_pretty(&report)
                .map_err(|err| CliError::new(t!("evaluate.serialize_failed", error = err)))?;
            write_stdout_line(&json).map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        OutputFormat::Text => {
            let lines =
                render_text_report(&curriculum, &statuses, &report, season, command.enabled_only);
            for line in lines {
                write_stdout_line(&line)
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Drops per-course entries hidden by the season and enabled-only filters.
fn retain_visible(
    report: &mut EnrollmentReport,
    curriculum: &Curriculum,
    season: SeasonFilter,
    enabled_only: bool,
) {
    let visible: BTreeSet<String> = curriculum
        .visible(season, enabled_only, &report.enabled)
        .into_iter()
        .map(|entry| entry.name().to_string())
        .collect();
    report.enabled.retain(|name, _| visible.contains(name));
    if let Some(reasons) = report.reasons.as_mut() {
        reasons.retain(|name, _| visible.contains(name));
    }
}

/// Renders the report as localized text lines.
fn render_text_report(
    curriculum: &Curriculum,
    statuses: &StatusMap,
    report: &EnrollmentReport,
    season: SeasonFilter,
    enabled_only: bool,
) -> Vec<String> {
    let mut lines = vec![t!(
        "evaluate.text.header",
        program = report.program,
        accreditation = report.accreditation
    )];
    for entry in curriculum.visible(season, enabled_only, &report.enabled) {
        let name = entry.name();
        let mark = if report.enabled.get(name).copied().unwrap_or(true) {
            t!("evaluate.text.mark.open")
        } else {
            t!("evaluate.text.mark.blocked")
        };
        let status = statuses.get(name);
        let status = if status.passed {
            t!("evaluate.text.status.passed")
        } else if status.listened {
            t!("evaluate.text.status.listened")
        } else {
            t!("evaluate.text.status.not_listened")
        };
        lines.push(t!(
            "evaluate.text.row",
            mark = mark,
            semester = entry.course.semester,
            name = name,
            credits = entry.course.credits,
            status = status
        ));
        if let Some(reason) = report.reasons.as_ref().and_then(|reasons| reasons.get(name)) {
            lines.extend(reason.lines().map(|line| format!("    {line}")));
        }
    }

    lines.push(String::new());
    lines.push(t!(
        "evaluate.text.fixpoint",
        rounds = report.fixpoint.rounds,
        converged = yes_no(report.fixpoint.converged)
    ));
    lines.push(t!(
        "evaluate.text.totals",
        total = report.totals.total,
        passed = report.totals.passed_credits,
        supplementary = report.totals.supplementary_credits,
        excess = report.totals.excess_credits
    ));
    lines.push(t!(
        "evaluate.text.counts",
        listened = report.counts.listened,
        passed = report.counts.passed
    ));
    if !report.over_limit.is_within_limits() {
        let levels: Vec<String> =
            report.over_limit.levels.iter().map(ToString::to_string).collect();
        let courses: Vec<&str> = report.over_limit.names.iter().map(String::as_str).collect();
        lines.push(t!(
            "evaluate.text.over_limit",
            levels = levels.join(", "),
            courses = courses.join(", ")
        ));
    }
    lines.push(graduation_line(t!("evaluate.text.track.three_year"), &report.graduation.three_year));
    lines.push(graduation_line(t!("evaluate.text.track.four_year"), &report.graduation.four_year));
    lines.push(t!("evaluate.text.thesis", value = yes_no(report.graduation.thesis_passed)));
    lines
}

/// Formats one graduation track.
fn graduation_line(track: String, info: &GraduationTrack) -> String {
    t!(
        "evaluate.text.graduation",
        track = track,
        credits = info.required_credits,
        met = yes_no(info.credits_met),
        missing = info.missing_courses.len(),
        eligible = yes_no(info.eligible)
    )
}

/// Returns the localized yes/no word.
fn yes_no(value: bool) -> String {
    if value { t!("status.flag.yes") } else { t!("status.flag.no") }
}

/// Opens the audit sink selected by `--audit-log`.
fn open_audit_sink(path: Option<&Path>) -> CliResult<Arc<dyn EngineAuditSink>> {
    match path {
        None => Ok(Arc::new(NoopAuditSink)),
        Some(path) if path.as_os_str() == AUDIT_STDERR => Ok(Arc::new(StderrAuditSink)),
        Some(path) => {
            let sink = FileAuditSink::new(path).map_err(|err| {
                CliError::new(t!("audit.open_failed", path = path.display(), error = err))
            })?;
            Ok(Arc::new(sink))
        }
    }
}

// ============================================================================
// SECTION: Status Commands
// ============================================================================

/// Dispatches status subcommands.
fn command_status(command: StatusCommand) -> CliResult<ExitCode> {
    match command {
        StatusCommand::Toggle(command) => command_status_toggle(&command),
        StatusCommand::Reset(command) => command_status_reset(&command),
    }
}

/// Executes `status toggle`.
fn command_status_toggle(command: &StatusToggleCommand) -> CliResult<ExitCode> {
    let store = JsonFileStatusStore::new(&command.store_dir);
    let accreditation = Accreditation::new(command.accreditation.as_str());
    let mut statuses = load_stored_statuses(&store, &accreditation)?;
    let status = match command.field {
        StatusFieldArg::Listened => statuses.toggle_listened(&command.course),
        StatusFieldArg::Passed => statuses.toggle_passed(&command.course),
    };
    store.save(&accreditation, &statuses).map_err(|err| {
        CliError::new(t!("store.save_failed", accreditation = accreditation, error = err))
    })?;
    write_stdout_line(&t!(
        "status.toggle.ok",
        course = command.course,
        listened = yes_no(status.listened),
        passed = yes_no(status.passed)
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `status reset`.
fn command_status_reset(command: &StatusResetCommand) -> CliResult<ExitCode> {
    let store = JsonFileStatusStore::new(&command.store_dir);
    let accreditation = Accreditation::new(command.accreditation.as_str());
    store.save(&accreditation, &StatusMap::new()).map_err(|err| {
        CliError::new(t!("store.save_failed", accreditation = accreditation, error = err))
    })?;
    write_stdout_line(&t!("status.reset.ok", accreditation = accreditation))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads stored statuses, recovering from corrupt files with an empty map.
fn load_stored_statuses(
    store: &JsonFileStatusStore,
    accreditation: &Accreditation,
) -> CliResult<StatusMap> {
    match store.load(accreditation) {
        Ok(statuses) => Ok(statuses),
        Err(StoreError::Corrupt(error)) => {
            write_stderr_line(&t!(
                "store.corrupt_recovered",
                accreditation = accreditation,
                error = error
            ))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
            Ok(StatusMap::new())
        }
        Err(err) => Err(CliError::new(t!(
            "store.load_failed",
            accreditation = accreditation,
            error = err
        ))),
    }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = EnrollmentConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads configuration, falling back to defaults when none is present.
///
/// An explicit path, the environment override, or an existing default file
/// must load cleanly; otherwise built-in defaults apply.
fn load_config(path: Option<&Path>) -> CliResult<EnrollmentConfig> {
    let configured = path.is_some()
        || std::env::var_os(CONFIG_ENV_VAR).is_some()
        || Path::new(DEFAULT_CONFIG_NAME).exists();
    if !configured {
        return Ok(EnrollmentConfig::default());
    }
    EnrollmentConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Parse Command
// ============================================================================

/// Executes the `parse` command.
fn command_parse(command: &ParseCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let grammar = config.to_grammar();
    let mut names = command.names.clone();
    if let (Some(path), Some(accreditation)) = (&command.catalog, &command.accreditation) {
        let policy = config
            .to_policy()
            .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
        let catalog = load_catalog(path)?;
        // Names do not depend on the program selection.
        let courses = catalog
            .project(&Accreditation::new(accreditation.as_str()), &ProgramName::new(""), &policy)
            .map_err(|err| CliError::new(t!("catalog.load_failed", error = err)))?;
        names.extend(courses.into_iter().map(|course| course.name));
    }

    let node = parse_prerequisite(&command.text, &names, &grammar);
    let json = serde_json::to_string_pretty(&node)
        .map_err(|err| CliError::new(t!("parse.serialize_failed", error = err)))?;
    write_stdout_line(&json).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line(&t!("parse.rendered", text = node.render(&grammar)))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    for fragment in node.unparsed_fragments() {
        write_stdout_line(&t!("parse.unparsed", text = fragment))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let size = file.metadata().map_err(ReadLimitError::Io)?.len();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut bytes = Vec::new();
    file.take(limit.saturating_add(1)).read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        return Err(ReadLimitError::TooLarge {
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Reads an input file, mapping failures to localized errors.
fn read_input(path: &Path, kind: &str, max_bytes: usize) -> CliResult<Vec<u8>> {
    read_bytes_with_limit(path, max_bytes).map_err(|err| match err {
        ReadLimitError::Io(err) => CliError::new(t!(
            "input.read_failed",
            kind = kind,
            path = path.display(),
            error = err
        )),
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!(
            "input.too_large",
            kind = kind,
            path = path.display(),
            size = size,
            limit = limit
        )),
    })
}

/// Reads and decodes a catalog file.
fn load_catalog(path: &Path) -> CliResult<Catalog> {
    let bytes = read_input(path, &t!("input.kind.catalog"), MAX_CATALOG_BYTES)?;
    Catalog::from_json_slice(&bytes)
        .map_err(|err| CliError::new(t!("catalog.load_failed", error = err)))
}

/// Reads and decodes a status map file.
fn load_status_file(path: &Path) -> CliResult<StatusMap> {
    let bytes = read_input(path, &t!("input.kind.statuses"), MAX_STATUSES_BYTES)?;
    serde_json::from_slice(&bytes).map_err(|err| {
        CliError::new(t!("statuses.parse_failed", path = path.display(), error = err))
    })
}

/// Resolves an explicitly requested locale from flags or environment.
///
/// Returns `None` when neither is set so configuration can decide.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Option<Locale>> {
    if let Some(lang) = lang {
        return Ok(Some(lang.into()));
    }
    match env_lang {
        Some(value) => Locale::parse(value).map(Some).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        }),
        None => Ok(None),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
