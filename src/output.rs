//! Run summary printing in human and JSON formats

use std::collections::HashMap;

use crate::cli::OutputFormat;

/// Final report of one evaluation run
pub struct RunSummary {
    pub metrics: HashMap<String, f64>,
    pub solved: usize,
    pub total: usize,
}

pub fn print_summary(summary: &RunSummary, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "metrics": summary.metrics,
                "solved": summary.solved,
                "total": summary.total,
            });
            println!("{}", payload);
        }
        OutputFormat::Human => {
            for (name, value) in &summary.metrics {
                println!(
                    "{}: {:.2} (solved {}/{} queries)",
                    name, value, summary.solved, summary.total
                );
            }
        }
    }
}
