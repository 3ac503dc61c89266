//! `faceval run` - evaluate a dataset against the judge

use std::path::Path;

use faceval_core::collector::{FacCollector, MetricCollector};
use faceval_core::config::JudgeConfig;
use faceval_core::error::Result;

use crate::cli::Cli;
use crate::dataset;
use crate::output::{print_summary, RunSummary};

pub fn execute(cli: &Cli, input: &Path, judge_url: &str, timeout: u64) -> Result<()> {
    let records = dataset::load(input)?;
    tracing::info!(
        records = records.len(),
        input = %input.display(),
        "dataset loaded"
    );

    let config = JudgeConfig::new(judge_url).with_timeout(timeout);
    let collector = FacCollector::new(config)?;

    collector.set_up();
    for record in &records {
        collector.prepare_for_measurement(&record.spec);
        collector.register_measurement(&record.spec, record.response.as_ref());
    }
    collector.tear_down();

    let metrics = collector.report_results();
    let summary = RunSummary {
        solved: collector.results().solved(),
        total: collector.results().len(),
        metrics,
    };
    print_summary(&summary, cli.format);

    Ok(())
}
