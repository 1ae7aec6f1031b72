#![forbid(unsafe_code)]
//! `prio` — deterministic task prioritization from the command line.
//!
//! This binary is the request layer around `prio-core`: it decodes JSON
//! input, enforces the field bounds the engine itself stays lenient about,
//! dispatches to the `analyze`/`suggest` operations, and renders the
//! result. Any unexpected failure is reported as a generic error on stderr
//! with a nonzero exit — the process never panics on bad input.

mod output;
mod validate;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use prio_core::{AnalyzeRequest, StrategyWeights, SuggestRequest, TaskInput, analyze, suggest};
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "prio: deterministic task prioritization",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Score a task batch and print it ranked by priority",
        after_help = "EXAMPLES:\n    # Score tasks from a file\n    prio analyze tasks.json\n\n    # Read from stdin with an explicit strategy\n    cat tasks.json | prio analyze --strategy deadline_driven\n\n    # Emit machine-readable output\n    prio analyze tasks.json --json"
    )]
    Analyze(AnalyzeArgs),

    #[command(
        about = "Suggest the top-N tasks to work on next",
        after_help = "EXAMPLES:\n    # Top 3 (the default)\n    prio suggest tasks.json\n\n    # Top 5 under the quick-wins strategy\n    prio suggest tasks.json --strategy fastest_wins --count 5"
    )]
    Suggest(SuggestArgs),

    #[command(about = "List the built-in strategies and their weight vectors")]
    Strategies,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// JSON input file; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Strategy name. Unknown names silently fall back to smart_balance.
    #[arg(short, long)]
    strategy: Option<String>,
}

#[derive(Args, Debug)]
struct SuggestArgs {
    /// JSON input file; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Strategy name. Unknown names silently fall back to smart_balance.
    #[arg(short, long)]
    strategy: Option<String>,

    /// How many suggestions to return.
    #[arg(short, long)]
    count: Option<usize>,
}

/// Accepted input shapes: a bare task array, or a request object whose
/// fields the command-line flags override.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Tasks(Vec<TaskInput>),
    Request {
        tasks: Vec<TaskInput>,
        #[serde(default)]
        strategy: Option<String>,
        #[serde(default)]
        count: Option<usize>,
        #[serde(default)]
        custom_weights: Option<StrategyWeights>,
    },
}

struct DocumentParts {
    tasks: Vec<TaskInput>,
    strategy: Option<String>,
    count: Option<usize>,
    custom_weights: Option<StrategyWeights>,
}

impl InputDocument {
    fn into_parts(self) -> DocumentParts {
        match self {
            Self::Tasks(tasks) => DocumentParts {
                tasks,
                strategy: None,
                count: None,
                custom_weights: None,
            },
            Self::Request {
                tasks,
                strategy,
                count,
                custom_weights,
            } => DocumentParts {
                tasks,
                strategy,
                count,
                custom_weights,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Analyze(args) => run_analyze(args, cli.json),
        Commands::Suggest(args) => run_suggest(args, cli.json),
        Commands::Strategies => output::print_strategies(cli.json),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_analyze(args: &AnalyzeArgs, json: bool) -> Result<()> {
    let doc = read_document(args.file.as_deref())?.into_parts();
    debug!(tasks = doc.tasks.len(), "decoded input document");
    validate::validate_tasks(&doc.tasks)?;

    let req = AnalyzeRequest {
        tasks: doc.tasks,
        strategy: args.strategy.clone().or(doc.strategy),
        custom_weights: doc.custom_weights,
    };
    let resp = analyze(&req).context("failed to score task batch")?;
    output::print_analysis(&resp, json)
}

fn run_suggest(args: &SuggestArgs, json: bool) -> Result<()> {
    let doc = read_document(args.file.as_deref())?.into_parts();
    debug!(tasks = doc.tasks.len(), "decoded input document");
    validate::validate_tasks(&doc.tasks)?;

    let count = args.count.or(doc.count);
    validate::validate_count(count)?;

    let req = SuggestRequest {
        tasks: doc.tasks,
        strategy: args.strategy.clone().or(doc.strategy),
        custom_weights: doc.custom_weights,
        count,
    };
    let resp = suggest(&req).context("failed to build suggestions")?;
    output::print_suggestions(&resp, json)
}

fn read_document(file: Option<&Path>) -> Result<InputDocument> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw)
        .context("input must be a JSON task array or a {\"tasks\": [...]} request object")
}
