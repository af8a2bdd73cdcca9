//! textmask - mask sensitive spans of text.
//!
//! Reads text from the command line or stdin, runs the detection and
//! redaction engine, and prints the masked text (optionally with the full
//! redaction report). Semantic entities come from a precomputed JSON file
//! when `--entities` is given; otherwise detection is pattern-only.

use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tm_core::{
    Entity, MaskEngine, MaskMode, MaskReport, NullRecognizer, PatternCatalog, StaticRecognizer,
};
use tracing_subscriber::EnvFilter;

/// Mask sensitive spans of text (entities + pattern identifiers)
#[derive(Parser)]
#[command(name = "textmask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to mask; reads stdin when absent
    text: Option<String>,

    /// Masking mode
    #[arg(long, short, default_value = "partial")]
    mode: MaskMode,

    /// Include one record per redaction in the output
    #[arg(long)]
    details: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "json")]
    format: OutputFormat,

    /// JSON file with precomputed entity spans ([{start,end,category,text}])
    #[arg(long, value_name = "FILE", env = "TEXTMASK_ENTITIES")]
    entities: Option<PathBuf>,

    /// Extra detector rule, CATEGORY=PATTERN (repeatable)
    #[arg(long = "rule", value_name = "CATEGORY=PATTERN")]
    rules: Vec<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (errors only)
    #[arg(short, long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Structured JSON (default for machine consumption)
    #[default]
    Json,

    /// Masked text, one detail per line with --details
    Text,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid entities file: {0}")]
    Entities(#[from] serde_json::Error),

    #[error("invalid --rule '{0}': expected CATEGORY=PATTERN")]
    RuleSyntax(String),

    #[error(transparent)]
    Engine(#[from] tm_core::EngineError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let text = match &cli.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let engine = build_engine(cli)?;
    let report = engine.mask(&text, cli.mode)?;
    print_report(&report, cli);
    Ok(())
}

fn build_engine(cli: &Cli) -> Result<MaskEngine, CliError> {
    let mut catalog = PatternCatalog::builtin()?;
    for rule in &cli.rules {
        let (category, pattern) = rule
            .split_once('=')
            .ok_or_else(|| CliError::RuleSyntax(rule.clone()))?;
        catalog.push_rule(category, pattern)?;
    }

    let engine = match &cli.entities {
        Some(path) => {
            let entities: Vec<Entity> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            tracing::info!(count = entities.len(), "loaded precomputed entities");
            MaskEngine::with_catalog(catalog, Arc::new(StaticRecognizer::new(entities)))
        }
        None => MaskEngine::with_catalog(catalog, Arc::new(NullRecognizer)),
    };
    Ok(engine)
}

fn print_report(report: &MaskReport, cli: &Cli) {
    match cli.format {
        OutputFormat::Json => {
            let value = if cli.details {
                serde_json::json!({
                    "masked_text": report.masked_text,
                    "details": report.details,
                })
            } else {
                serde_json::json!({ "masked_text": report.masked_text })
            };
            // Value contains only strings and integers; serialization
            // cannot fail.
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!("{}", report.masked_text);
            if cli.details {
                for d in &report.details {
                    println!(
                        "[{}..{}] {}/{} {:?} -> {:?}",
                        d.start, d.end, d.source, d.category, d.original_text, d.replacement
                    );
                }
            }
        }
    }
}
