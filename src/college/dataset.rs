//! Dataset loading.
//!
//! The listing is backed by a static JSON array of colleges, either bundled
//! into the binary or read from a file given in the configuration.

use crate::college::models::CollegeRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/colleges.json");

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a dataset from its JSON text.
///
/// # Arguments
/// * `content` - JSON array of college records
///
/// # Returns
/// * `Result<Vec<CollegeRecord>, DatasetError>` - Records in file order
pub fn parse(content: &str) -> Result<Vec<CollegeRecord>, DatasetError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse the dataset bundled with the binary.
pub fn bundled() -> Result<Vec<CollegeRecord>, DatasetError> {
    parse(BUNDLED_DATASET)
}

/// Read and parse a dataset file.
///
/// # Arguments
/// * `path` - Path to the JSON dataset
///
/// # Returns
/// * `Result<Vec<CollegeRecord>, DatasetError>` - Records in file order or error
pub async fn load(path: &Path) -> Result<Vec<CollegeRecord>, DatasetError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse(&content)
}

/// Load the configured dataset, degrading to an empty listing on failure.
///
/// # Arguments
/// * `path` - Dataset file, or `None` for the bundled dataset
///
/// # Details
/// Load failures are logged and never surfaced to the user: the table
/// simply stays empty.
pub async fn load_or_empty(path: Option<&Path>) -> Vec<CollegeRecord> {
    let result = match path {
        Some(p) => load(p).await,
        None => bundled(),
    };
    match result {
        Ok(records) => {
            tracing::info!(count = records.len(), "Loaded college dataset");
            records
        }
        Err(e) => {
            tracing::warn!("Dataset unavailable, showing empty listing: {}", e);
            Vec::new()
        }
    }
}
