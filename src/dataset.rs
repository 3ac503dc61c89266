//! JSONL dataset loading
//!
//! One record per line: `{"id": string, "query": string, "response": any}`.
//! A malformed line still produces a degenerate record (empty query, no
//! response) so every attempted line contributes exactly one entry to the
//! run - the denominator always matches the dataset.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use faceval_core::error::{FacevalError, Result};
use faceval_core::QuerySpecification;

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<String>,
    query: String,
    #[serde(default)]
    response: Option<Value>,
}

/// One query plus the agent response to judge
#[derive(Debug)]
pub struct DatasetRecord {
    pub spec: QuerySpecification,
    pub response: Option<Value>,
}

/// Load a JSONL dataset. Blank lines are skipped; malformed lines are kept
/// as degenerate records and logged.
pub fn load(path: &Path) -> Result<Vec<DatasetRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FacevalError::DatasetNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FacevalError::Io(e)
        }
    })?;

    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let lineno = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<RawRecord>(line) {
            Ok(raw) => {
                let id = raw.id.unwrap_or_else(|| format!("line-{}", lineno));
                records.push(DatasetRecord {
                    spec: QuerySpecification::new(id, raw.query),
                    response: raw.response,
                });
            }
            Err(e) => {
                tracing::warn!(
                    line = lineno,
                    error = %e,
                    "malformed dataset record, will count as unsolved"
                );
                records.push(DatasetRecord {
                    spec: QuerySpecification::new(format!("line-{}", lineno), ""),
                    response: None,
                });
            }
        }
    }

    Ok(records)
}
