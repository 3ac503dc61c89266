//! Faceval - judge-based answer correctness evaluation
//!
//! Sends each (query, final answer) pair to a remote judge model, parses a
//! solved/unsolved verdict out of the reply, and reports the aggregate task
//! success rate.

mod cli;
mod commands;
mod dataset;
mod output;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, OutputFormat};
use faceval_core::error::ExitCode as FacevalExitCode;
use faceval_core::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(FacevalExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                let envelope = serde_json::json!({
                    "error": {
                        "code": i32::from(e.exit_code()),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", envelope);
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
