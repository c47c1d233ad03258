//! Dataset loader with a process-lifetime cache.
//!
//! The sample set is read and parsed at most once per process; every
//! subsequent load serves the cached sequence. A failed load leaves the cache
//! empty so a corrected source starts serving without a restart.

use std::env;
use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;

use crate::error::{EnvmonError, Result};
use crate::models::Sample;

/// Environment variable overriding the data file location.
pub const DATA_FILE_ENV: &str = "ENVMON_DATA_FILE";

/// Conventional location when the process runs from the service subdirectory.
const DATA_FILE_FROM_SUBDIR: &str = "../data/environmental-samples.json";

/// Conventional location when the process runs from the project root.
const DATA_FILE_FROM_ROOT: &str = "data/environmental-samples.json";

/// Wrapper field names accepted around the sample array, first present wins.
const WRAPPER_FIELDS: &[&str] = &["items", "samples", "data"];

/// Cached, lazily-initialized sample dataset.
///
/// The [`OnceCell`] guard ensures the source is read at most once under
/// concurrent first access; after initialization every query shares the same
/// immutable slice with no further locking.
#[derive(Debug, Default)]
pub struct SampleStore {
    cache: OnceCell<Vec<Sample>>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self { cache: OnceCell::new() }
    }

    /// Return the full sample sequence, loading it on first call.
    pub async fn load(&self) -> Result<&[Sample]> {
        let samples = self
            .cache
            .get_or_try_init(|| async {
                let path = resolve_data_file();
                read_dataset(&path).await
            })
            .await?;
        Ok(samples.as_slice())
    }

    /// Number of cached samples, if the dataset has been loaded.
    pub fn len(&self) -> Option<usize> {
        self.cache.get().map(Vec::len)
    }
}

/// Resolve the data file location: the first existing candidate wins, and if
/// none exist the subdirectory-relative default is returned so the read fails
/// with a clear not-found error rather than a silent empty dataset.
pub fn resolve_data_file() -> PathBuf {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Ok(overridden) = env::var(DATA_FILE_ENV) {
        candidates.push(PathBuf::from(overridden));
    }
    candidates.push(PathBuf::from(DATA_FILE_FROM_SUBDIR));
    candidates.push(PathBuf::from(DATA_FILE_FROM_ROOT));
    candidates.push(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/environmental-samples.json"),
    );

    for candidate in &candidates {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Resolved sample data file");
            return candidate.clone();
        }
    }

    PathBuf::from(DATA_FILE_FROM_SUBDIR)
}

async fn read_dataset(path: &Path) -> Result<Vec<Sample>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        EnvmonError::DatasetUnavailable {
            reason: format!("failed to read {}: {}", path.display(), e),
        }
    })?;

    let samples = parse_dataset(&content)?;
    tracing::info!(path = %path.display(), count = samples.len(), "Loaded sample dataset");
    Ok(samples)
}

/// Decode the dataset body: a bare top-level array, or an object wrapping the
/// array under one of the conventional field names. No per-record schema
/// validation happens here; sparse records deserialize with defaults.
pub fn parse_dataset(content: &str) -> Result<Vec<Sample>> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| EnvmonError::DatasetUnavailable {
            reason: format!("invalid JSON: {}", e),
        })?;

    let array = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => {
            let field = WRAPPER_FIELDS.iter().find(|f| map.contains_key(**f)).ok_or_else(
                || EnvmonError::DatasetUnavailable {
                    reason: format!(
                        "expected a top-level array or an object with one of {:?}",
                        WRAPPER_FIELDS
                    ),
                },
            )?;
            match map.remove(*field) {
                Some(serde_json::Value::Array(items)) => items,
                _ => {
                    return Err(EnvmonError::DatasetUnavailable {
                        reason: format!("field '{}' is not an array", field),
                    })
                }
            }
        }
        other => {
            return Err(EnvmonError::DatasetUnavailable {
                reason: format!("unexpected top-level JSON value: {}", value_kind(&other)),
            })
        }
    };

    serde_json::from_value(serde_json::Value::Array(array)).map_err(|e| {
        EnvmonError::DatasetUnavailable {
            reason: format!("malformed sample record: {}", e),
        }
    })
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let samples = parse_dataset(r#"[{"sampleId": "A"}, {"sampleId": "B"}]"#).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].sample_id, "B");
    }

    #[test]
    fn parses_wrapped_array_first_field_wins() {
        for field in ["items", "samples", "data"] {
            let content = format!(r#"{{"{}": [{{"sampleId": "A"}}]}}"#, field);
            let samples = parse_dataset(&content).unwrap();
            assert_eq!(samples.len(), 1);
        }
    }

    #[test]
    fn rejects_unknown_wrapper() {
        let err = parse_dataset(r#"{"records": []}"#).unwrap_err();
        assert!(matches!(err, EnvmonError::DatasetUnavailable { .. }));
    }

    #[test]
    fn rejects_non_array_wrapper_value() {
        let err = parse_dataset(r#"{"items": 42}"#).unwrap_err();
        assert!(matches!(err, EnvmonError::DatasetUnavailable { .. }));
    }

    #[test]
    fn rejects_scalar_top_level() {
        let err = parse_dataset("7").unwrap_err();
        assert!(matches!(err, EnvmonError::DatasetUnavailable { .. }));
    }

    #[test]
    fn rejects_invalid_syntax() {
        let err = parse_dataset("not json at all").unwrap_err();
        assert!(matches!(err, EnvmonError::DatasetUnavailable { .. }));
    }
}
