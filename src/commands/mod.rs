//! Command dispatch

mod run;

use crate::cli::{Cli, Commands};
use faceval_core::error::Result;

pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run {
            input,
            judge_url,
            timeout,
        } => run::execute(cli, input, judge_url, *timeout),
    }
}
