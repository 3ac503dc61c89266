//! Remote judge client
//!
//! One blocking POST per query/answer pair, bounded by the configured
//! timeout, no retry. `evaluate` is total: transport failures, non-2xx
//! statuses and malformed bodies all resolve to an unsolved result carrying
//! the failure reason, never an error to the caller.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::config::JudgeConfig;
use crate::error::{FacevalError, Result};
use crate::judge::prompt::render_judge_prompt;
use crate::judge::verdict::{parse_verdict, trim_to_verdict};

/// Response payload keys that may carry the generated text, in the priority
/// order they are tried. First matching key wins.
const GENERATED_TEXT_KEYS: [&str; 4] = ["generated_text", "text", "response", "output"];

/// Request payload sent to the judge endpoint. Sampling is disabled so
/// judging is deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct JudgeRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub top_p: f64,
}

impl JudgeRequest {
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            max_new_tokens: 512,
            do_sample: false,
            top_p: 1.0,
        }
    }
}

/// Outcome of judging one query/answer pair
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    /// Judge text the verdict was parsed from (or a synthesized
    /// status block when the call failed)
    pub evaluation: String,
    /// Binary verdict
    pub is_solved: bool,
}

impl EvaluationResult {
    /// Synthesize an unsolved result for a failed judge call
    pub fn unsolved(reason: impl std::fmt::Display) -> Self {
        Self {
            evaluation: format!("Answer Status: Unsolved\nReason: {}", reason),
            is_solved: false,
        }
    }
}

/// HTTP client for the remote judge endpoint
pub struct JudgeClient {
    config: JudgeConfig,
    agent: ureq::Agent,
}

impl JudgeClient {
    /// Create a client for the configured endpoint.
    ///
    /// An empty URL is a setup-time error: construction fails before any
    /// query can be evaluated.
    pub fn new(config: JudgeConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(FacevalError::MissingJudgeUrl);
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build();

        Ok(Self { config, agent })
    }

    /// Judge endpoint URL this client talks to
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Judge one query/answer pair. Never fails: every failure mode
    /// resolves to an unsolved result with the reason embedded.
    pub fn evaluate(&self, query: &str, answer: &str) -> EvaluationResult {
        let prompt = render_judge_prompt(query, answer);
        let request = JudgeRequest::new(prompt);

        let payload = match serde_json::to_string(&request) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(url = %self.config.url, error = %e, "failed to serialize judge request");
                return EvaluationResult::unsolved(format!("Error calling judge model: {}", e));
            }
        };

        let response = self
            .agent
            .post(&self.config.url)
            .set("Content-Type", "application/json")
            .send_string(&payload);

        match response {
            Ok(res) => {
                let body: Value = match res.into_json() {
                    Ok(body) => body,
                    Err(e) => {
                        tracing::error!(url = %self.config.url, error = %e, "judge response body was not valid JSON");
                        return EvaluationResult::unsolved(format!(
                            "Error calling judge model: {}",
                            e
                        ));
                    }
                };

                let generated = extract_generated_text(&body);
                let evaluation = trim_to_verdict(&generated).to_string();
                let is_solved = parse_verdict(&evaluation);

                EvaluationResult {
                    evaluation,
                    is_solved,
                }
            }
            Err(ureq::Error::Status(code, res)) => {
                let body = res.into_string().unwrap_or_default();
                let error_msg = format!("API call failed: {} - {}", code, body);
                // The one place configuration and payload are echoed, so a
                // rejected request can be debugged from the logs alone.
                tracing::error!(
                    url = %self.config.url,
                    status = code,
                    payload = %payload,
                    response = %body,
                    "judge endpoint rejected request"
                );
                EvaluationResult::unsolved(error_msg)
            }
            Err(ureq::Error::Transport(e)) => {
                tracing::error!(url = %self.config.url, error = %e, "judge request failed");
                EvaluationResult::unsolved(format!("Error calling judge model: {}", e))
            }
        }
    }
}

/// Resolve the generated text out of an unguaranteed response shape: known
/// keys in priority order, then stringification of the whole body as a last
/// resort. The pipeline always gets some text to parse, never a schema
/// failure.
pub fn extract_generated_text(body: &Value) -> String {
    for key in GENERATED_TEXT_KEYS {
        match body.get(key) {
            Some(Value::String(s)) => return s.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }
    body.to_string()
}
