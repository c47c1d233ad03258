//! Integration tests for the dataset loader and cache
//!
//! The env-override tests mutate process environment, so they run serially.

use std::env;
use std::io::Write;

use envmon_core::loader::{SampleStore, DATA_FILE_ENV};
use envmon_core::EnvmonError;
use serial_test::serial;
use tempfile::NamedTempFile;

fn write_dataset(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

const TWO_SAMPLES: &str = r#"[
    {"sampleId": "ENV-001", "zone": "urban", "status": "normal"},
    {"sampleId": "ENV-002", "zone": "rural", "status": "warning"}
]"#;

#[tokio::test]
#[serial]
async fn test_load_reads_env_override() {
    let file = write_dataset(TWO_SAMPLES);
    env::set_var(DATA_FILE_ENV, file.path());

    let store = SampleStore::new();
    let samples = store.load().await.unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].sample_id, "ENV-001");

    env::remove_var(DATA_FILE_ENV);
}

#[tokio::test]
#[serial]
async fn test_load_is_idempotent_and_reads_source_once() {
    let file = write_dataset(TWO_SAMPLES);
    env::set_var(DATA_FILE_ENV, file.path());

    let store = SampleStore::new();
    let first: Vec<String> =
        store.load().await.unwrap().iter().map(|s| s.sample_id.clone()).collect();

    // Rewriting the source after the first load must not change what is
    // served; the cache holds for the life of the store.
    std::fs::write(file.path(), r#"[{"sampleId": "ENV-999"}]"#).unwrap();

    let second: Vec<String> =
        store.load().await.unwrap().iter().map(|s| s.sample_id.clone()).collect();
    assert_eq!(first, second);
    assert_eq!(store.len(), Some(2));

    env::remove_var(DATA_FILE_ENV);
}

#[tokio::test]
#[serial]
async fn test_concurrent_first_access_loads_once() {
    let file = write_dataset(TWO_SAMPLES);
    env::set_var(DATA_FILE_ENV, file.path());

    let store = std::sync::Arc::new(SampleStore::new());
    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.load().await.map(|s| s.len()) })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), 2);
    }

    env::remove_var(DATA_FILE_ENV);
}

#[tokio::test]
#[serial]
async fn test_malformed_source_is_dataset_unavailable() {
    let file = write_dataset("{ definitely not json");
    env::set_var(DATA_FILE_ENV, file.path());

    let store = SampleStore::new();
    let err = store.load().await.unwrap_err();
    assert!(matches!(err, EnvmonError::DatasetUnavailable { .. }));

    env::remove_var(DATA_FILE_ENV);
}

#[tokio::test]
#[serial]
async fn test_failed_load_is_not_cached() {
    let file = write_dataset("[not valid");
    env::set_var(DATA_FILE_ENV, file.path());

    let store = SampleStore::new();
    assert!(store.load().await.is_err());

    // Correcting the source lets the same store serve without a restart.
    std::fs::write(file.path(), TWO_SAMPLES).unwrap();
    let samples = store.load().await.unwrap();
    assert_eq!(samples.len(), 2);

    env::remove_var(DATA_FILE_ENV);
}

#[tokio::test]
#[serial]
async fn test_wrapped_shapes_load() {
    for wrapper in ["items", "samples", "data"] {
        let file =
            write_dataset(&format!(r#"{{"{}": [{{"sampleId": "ENV-010"}}]}}"#, wrapper));
        env::set_var(DATA_FILE_ENV, file.path());

        let store = SampleStore::new();
        let samples = store.load().await.unwrap();
        assert_eq!(samples.len(), 1);
    }

    env::remove_var(DATA_FILE_ENV);
}
