//! Error types and exit codes for faceval
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, missing judge endpoint)
//! - 3: Data error (missing or unreadable dataset)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the faceval CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or unreadable dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during faceval operations
#[derive(Error, Debug)]
pub enum FacevalError {
    // Usage errors (exit code 2)
    #[error("judge endpoint not configured (set FACEVAL_JUDGE_URL or pass --judge-url)")]
    MissingJudgeUrl,

    // Data errors (exit code 3)
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FacevalError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FacevalError::MissingJudgeUrl => ExitCode::Usage,
            FacevalError::DatasetNotFound { .. } => ExitCode::Data,
            FacevalError::Io(_) => ExitCode::Failure,
        }
    }
}

/// Result type alias for faceval operations
pub type Result<T> = std::result::Result<T, FacevalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(FacevalError::MissingJudgeUrl.exit_code(), ExitCode::Usage);
        assert_eq!(
            FacevalError::DatasetNotFound {
                path: PathBuf::from("missing.jsonl")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            FacevalError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Failure), 1);
        assert_eq!(i32::from(ExitCode::Usage), 2);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }
}
