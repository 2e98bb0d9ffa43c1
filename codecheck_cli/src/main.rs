//! # Codecheck CLI
//!
//! Evaluates member states from a JSON file against the EN 1993-1-1 check
//! registry and prints one report per member.
//!
//! ```bash
//! codecheck evaluate member.json
//! codecheck evaluate batch.json --config codecheck.toml --sort utilization --workers 4
//! codecheck evaluate member.json --json
//! codecheck clauses
//! ```
//!
//! Exit status is 0 when every check passes, 1 when any check fails and 2
//! when the input or settings cannot be used.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codecheck_core::clauses::ALL_CLAUSES;
use codecheck_core::{CalcError, CalcResult, CheckReport, CheckRow, MemberState, OutputFormat, ReportSort, RunSettings};

const EXIT_FAILED_CHECK: u8 = 1;
const EXIT_BAD_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "codecheck", version, about = "EN 1993-1-1 member code checks")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the check registry against one member or an array of members
    Evaluate {
        /// JSON file holding a member state object or an array of them
        input: PathBuf,

        /// TOML run settings
        #[arg(short, long, env = "CODECHECK_CONFIG")]
        config: Option<PathBuf>,

        /// Row order for tables
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,

        /// Worker threads for batch evaluation
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// List the catalogued clauses
    Clauses,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Id,
    Utilization,
}

impl From<SortArg> for ReportSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => ReportSort::Id,
            SortArg::Utilization => ReportSort::Utilization,
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Copy, Default)]
struct Overrides {
    sort: Option<ReportSort>,
    json: bool,
    workers: Option<usize>,
}

/// JSON shape of one evaluated member
#[derive(Serialize)]
struct MemberOutput<'a> {
    member: usize,
    passes: bool,
    governing: Option<&'a CheckRow>,
    report: &'a CheckReport,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let outcome = match cli.command {
        Commands::Evaluate {
            input,
            config,
            sort,
            json,
            workers,
        } => {
            let overrides = Overrides {
                sort: sort.map(ReportSort::from),
                json,
                workers,
            };
            evaluate(&input, config.as_deref(), overrides)
        }
        Commands::Clauses => {
            list_clauses();
            Ok(true)
        }
    };

    if let Err(e) = &outcome {
        eprintln!("Error: {}", e);
        if e.is_recoverable() {
            eprintln!("Fix the file path or permissions and re-run.");
        }
        if let Ok(json) = serde_json::to_string_pretty(e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
    }
    ExitCode::from(exit_code(&outcome))
}

fn exit_code(outcome: &CalcResult<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => EXIT_FAILED_CHECK,
        Err(_) => EXIT_BAD_INPUT,
    }
}

/// Returns whether every member passed.
fn evaluate(input: &Path, config: Option<&Path>, overrides: Overrides) -> CalcResult<bool> {
    let settings = match config {
        Some(path) => RunSettings::load(path)?,
        None => RunSettings::default(),
    };
    let settings = apply_overrides(settings, overrides)?;

    let content = std::fs::read_to_string(input)
        .map_err(|e| CalcError::file_error("read input", input.display().to_string(), e.to_string()))?;
    info!(input = %input.display(), "evaluating");

    let (output, all_pass) = evaluate_content(&content, &settings)?;
    print!("{}", output);
    Ok(all_pass)
}

/// Layer command-line flags over file settings and re-validate.
fn apply_overrides(mut settings: RunSettings, overrides: Overrides) -> CalcResult<RunSettings> {
    if let Some(sort) = overrides.sort {
        settings.report.sort = sort;
    }
    if overrides.json {
        settings.report.format = OutputFormat::Json;
    }
    if let Some(workers) = overrides.workers {
        settings.workers = workers;
    }
    settings.validate()?;
    Ok(settings)
}

/// Parse, run and render a JSON batch. Returns the rendered output and
/// whether every check of every member passed.
fn evaluate_content(content: &str, settings: &RunSettings) -> CalcResult<(String, bool)> {
    let registry = settings.registry()?;
    debug!(checks = ?registry.labels(), "registry composed");

    let members = MemberState::batch_from_json(content)?;
    if members.is_empty() {
        return Err(CalcError::invalid_input("input", "[]", "Batch holds no members"));
    }
    for member in &members {
        member.validate()?;
    }

    let reports = registry.run_batch_parallel(&members, settings.workers()?)?;
    let all_pass = reports.iter().all(CheckReport::passes);

    let output = match settings.report.format {
        OutputFormat::Json => render_json(&reports)?,
        OutputFormat::Table => render_tables(&reports, settings.report.sort),
    };
    Ok((output, all_pass))
}

fn render_tables(reports: &[CheckReport], sort: ReportSort) -> String {
    let batch = reports.len() > 1;
    let mut output = String::new();
    for (index, report) in reports.iter().enumerate() {
        if batch {
            if index > 0 {
                output.push('\n');
            }
            output.push_str(&format!("Member {}\n", index + 1));
        }
        output.push_str(&report.render_table(sort));
        match report.governing() {
            Some(row) => output.push_str(&format!(
                "Governing: {} (UR = {:.4}) {}\n",
                row.clause,
                row.utilization_ratio,
                if report.passes() { "PASS" } else { "FAIL" }
            )),
            None => output.push_str("No checks registered\n"),
        }
    }
    output
}

fn render_json(reports: &[CheckReport]) -> CalcResult<String> {
    let output: Vec<MemberOutput<'_>> = reports
        .iter()
        .enumerate()
        .map(|(index, report)| MemberOutput {
            member: index + 1,
            passes: report.passes(),
            governing: report.governing(),
            report,
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&output).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}

fn list_clauses() {
    for clause in ALL_CLAUSES {
        let metadata = clause.metadata();
        let run = if clause.is_default() { "default" } else { "optional" };
        println!("{:<10} {:<8} {}", clause.label(), run, metadata.name);
        println!("           {}", metadata.reference.citation());
        println!("           {}", metadata.formula_plain);
    }
}
