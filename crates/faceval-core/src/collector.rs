//! Metric collection for judge-based answer correctness
//!
//! `FacCollector` wires the full per-query pipeline (normalize answer ->
//! judge -> parse verdict) behind the harness-facing `MetricCollector`
//! lifecycle. The pipeline is failure-isolated as a whole: whatever goes
//! wrong inside one query, exactly one boolean lands in the result log and
//! the run continues.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::answer::{extract_final_answer, strip_think};
use crate::config::JudgeConfig;
use crate::error::Result;
use crate::judge::verdict::preview;
use crate::judge::JudgeClient;

/// Fixed metric label under which the success rate is reported
pub const SUCCESS_METRIC: &str = "Average Task Success (FAC Evaluator)";

/// One query to evaluate. Owned by the harness; the collector reads only
/// the query text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySpecification {
    pub id: String,
    pub query: String,
}

impl QuerySpecification {
    pub fn new(id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            query: query.into(),
        }
    }
}

/// Harness-facing collector lifecycle. One `register_measurement` call per
/// attempted query; `report_results` after the run.
pub trait MetricCollector {
    /// Names of the metrics this collector reports
    fn collected_metric_names(&self) -> Vec<String>;

    /// Reset per-run state before a run starts
    fn set_up(&self) {}

    /// Hook before a single query is measured
    fn prepare_for_measurement(&self, _query_spec: &QuerySpecification) {}

    /// Run the per-query pipeline and record exactly one outcome
    fn register_measurement(&self, query_spec: &QuerySpecification, response: Option<&Value>);

    /// Hook after all measurements
    fn tear_down(&self) {}

    /// Compute the final metrics from recorded outcomes
    fn report_results(&self) -> HashMap<String, f64>;
}

/// Append-only per-run record of verdicts.
///
/// Appends are funneled through a mutex so concurrent harness callers can
/// never lose or duplicate an entry; entry order carries no meaning.
#[derive(Debug, Default)]
pub struct ResultLog {
    outcomes: Mutex<Vec<bool>>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<bool>> {
        // A panicked writer cannot corrupt a Vec<bool>; recover the log
        // rather than wedging the run.
        self.outcomes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one outcome
    pub fn record(&self, outcome: bool) {
        self.lock().push(outcome);
    }

    /// Discard all outcomes
    pub fn reset(&self) {
        self.lock().clear();
    }

    /// Number of recorded outcomes
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of solved outcomes
    pub fn solved(&self) -> usize {
        self.lock().iter().filter(|&&solved| solved).count()
    }

    /// Success rate: solved / total, exactly 0.0 for an empty log
    pub fn rate(&self) -> f64 {
        let outcomes = self.lock();
        if outcomes.is_empty() {
            0.0
        } else {
            let solved = outcomes.iter().filter(|&&s| s).count();
            solved as f64 / outcomes.len() as f64
        }
    }
}

/// Judge-backed answer correctness collector
pub struct FacCollector {
    judge: JudgeClient,
    results: ResultLog,
}

impl FacCollector {
    /// Build a collector for the given judge endpoint. Fails when the
    /// endpoint is not configured - before any query is processed.
    pub fn new(config: JudgeConfig) -> Result<Self> {
        Ok(Self {
            judge: JudgeClient::new(config)?,
            results: ResultLog::new(),
        })
    }

    /// Build a collector from `FACEVAL_JUDGE_URL`/`FACEVAL_JUDGE_TIMEOUT`
    pub fn from_env() -> Result<Self> {
        Self::new(JudgeConfig::from_env()?)
    }

    /// Recorded outcomes so far
    pub fn results(&self) -> &ResultLog {
        &self.results
    }

    /// The fallible part of the per-query pipeline, kept behind the
    /// catch-all boundary in `register_measurement`.
    fn evaluate_query(
        &self,
        query_spec: &QuerySpecification,
        response: Option<&Value>,
    ) -> Result<bool> {
        let raw_answer = extract_final_answer(response.unwrap_or(&Value::Null));
        let final_answer = strip_think(&raw_answer);

        let result = self.judge.evaluate(&query_spec.query, &final_answer);

        tracing::debug!(
            query = %query_spec.query,
            answer = %final_answer,
            evaluation = %result.evaluation,
            "judge transcript"
        );

        Ok(result.is_solved)
    }
}

impl MetricCollector for FacCollector {
    fn collected_metric_names(&self) -> Vec<String> {
        vec![SUCCESS_METRIC.to_string()]
    }

    fn set_up(&self) {
        self.results.reset();
    }

    fn register_measurement(&self, query_spec: &QuerySpecification, response: Option<&Value>) {
        // Exactly one entry per attempted query: a pipeline failure counts
        // as unsolved, never as a lost or duplicated entry.
        let solved = self.evaluate_query(query_spec, response).unwrap_or(false);
        self.results.record(solved);

        tracing::debug!(
            id = %query_spec.id,
            query = %preview(&query_spec.query, 50),
            solved,
            "query evaluated"
        );
    }

    fn report_results(&self) -> HashMap<String, f64> {
        let total = self.results.len();
        let solved = self.results.solved();
        let rate = self.results.rate();

        tracing::info!(rate, solved, total, "average task success (FAC evaluator)");

        HashMap::from([(SUCCESS_METRIC.to_string(), rate)])
    }
}
