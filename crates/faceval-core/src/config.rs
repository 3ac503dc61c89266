//! Judge endpoint configuration
//!
//! The judge URL is required external configuration: without it the
//! collector cannot be constructed. The timeout has a sane default and is
//! clamped to a usable range when overridden.

use crate::error::{FacevalError, Result};

/// Default timeout for judge requests
pub const DEFAULT_JUDGE_TIMEOUT_SECONDS: u64 = 30;

/// Environment variable naming the judge endpoint URL
pub const JUDGE_URL_ENV: &str = "FACEVAL_JUDGE_URL";

/// Environment variable overriding the judge request timeout (seconds)
pub const JUDGE_TIMEOUT_ENV: &str = "FACEVAL_JUDGE_TIMEOUT";

/// Configuration for the remote judge endpoint
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// URL of the judge endpoint
    pub url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl JudgeConfig {
    /// Create a configuration with the default timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_seconds: DEFAULT_JUDGE_TIMEOUT_SECONDS,
        }
    }

    /// Override the request timeout, clamped to 5-300 seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds.clamp(5, 300);
        self
    }

    /// Load configuration from environment variables.
    ///
    /// A missing or empty `FACEVAL_JUDGE_URL` is a fatal setup-time error:
    /// no queries may be evaluated against an unconfigured judge.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(JUDGE_URL_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(FacevalError::MissingJudgeUrl)?;

        let mut config = Self::new(url);

        if let Ok(timeout) = std::env::var(JUDGE_TIMEOUT_ENV) {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.timeout_seconds = seconds.clamp(5, 300);
            }
        }

        Ok(config)
    }
}
