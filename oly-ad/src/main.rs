//! oly-ad - AI-Detection Analysis CLI
//!
//! Reads text from a file argument or stdin, runs the detection
//! pipeline, and prints the JSON report on stdout. Diagnostics go to
//! stderr so the stdout stream stays machine-parseable.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use oly_ad::{analyze, AnalysisOptions, AnalyzeError, EmotionLexicon};
use oly_common::config;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for oly-ad
#[derive(Parser, Debug)]
#[command(name = "oly-ad")]
#[command(about = "AI-detection analysis engine for OriginLytics")]
#[command(version)]
struct Args {
    /// Input file to analyze ("-" or absent reads stdin)
    input: Option<PathBuf>,

    /// Pre-scored likelihood (0-100) from the external detection model
    #[arg(short, long)]
    model_score: Option<f64>,

    /// Emotion lexicon JSON file (overrides ENV and config file)
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Minimum word count required before analysis runs
    #[arg(long, env = "OLY_MIN_WORDS")]
    min_words: Option<usize>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config file is advisory; a broken one falls back to defaults
    let toml_config = match config::load_toml_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("warning: {}", e);
            Default::default()
        }
    };

    // Initialize tracing on stderr (stdout carries the report)
    let default_filter = toml_config
        .log_filter
        .clone()
        .unwrap_or_else(|| "oly_ad=info".into());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(score) = args.model_score {
        if !(0.0..=100.0).contains(&score) {
            bail!("model score must be within 0-100, got {}", score);
        }
    }

    let lexicon = match config::resolve_lexicon_path(args.lexicon.as_ref(), &toml_config) {
        Some(path) => {
            info!("Loading emotion lexicon from {}", path.display());
            EmotionLexicon::from_json_file(&path)?
        }
        None => EmotionLexicon::builtin(),
    };

    let text = read_input(args.input.as_deref())?;

    let options = AnalysisOptions {
        model_score: args.model_score,
        min_word_count: args
            .min_words
            .or(toml_config.min_word_count)
            .unwrap_or_else(|| AnalysisOptions::default().min_word_count),
    };

    match analyze(&text, &options, &lexicon) {
        Ok(report) => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
        }
        Err(err @ AnalyzeError::TextTooShort { .. }) => {
            // Analysis-content outcomes are reported, not fatal
            warn!("{}", err);
            println!("{}", serde_json::json!({ "error": err.to_string() }));
        }
    }

    Ok(())
}

/// Read the input text from a file or stdin
fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file {}", p.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
