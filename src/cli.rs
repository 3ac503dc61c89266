//! CLI argument parsing for faceval
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json.
//! Judge settings are flags with environment fallback so a harness can
//! configure the endpoint once for a whole run.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Faceval - judge-based answer correctness evaluation
#[derive(Parser, Debug)]
#[command(name = "faceval")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log judge transcripts and per-query detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a dataset of query/response records against the judge
    Run {
        /// JSONL dataset: one {"id", "query", "response"} record per line
        #[arg(long, short)]
        input: PathBuf,

        /// Judge endpoint URL
        #[arg(long, env = "FACEVAL_JUDGE_URL")]
        judge_url: String,

        /// Judge request timeout in seconds
        #[arg(long, env = "FACEVAL_JUDGE_TIMEOUT", default_value_t = 30)]
        timeout: u64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}
