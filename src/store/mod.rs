//! Capture snapshot access and the stored record model.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read capture snapshot {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("capture snapshot {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("capture snapshot {path} must hold a single JSON object keyed by capture id")]
    Shape { path: String },
}

/// One HTTP header as captured. Order and duplicates are preserved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpHeader {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// One stored probe result. Field names match the capture format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotRecord {
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "FinalURL")]
    pub final_url: String,

    #[serde(rename = "ResponseCode")]
    pub response_code: i32,

    #[serde(rename = "PageTitle")]
    pub page_title: String,

    #[serde(rename = "ScreenshotFile")]
    pub screenshot_file: String,

    #[serde(rename = "Headers", default)]
    pub headers: Vec<HttpHeader>,
}

/// Read-only view of the captured records.
///
/// A scan is one pass over the whole store in ascending key order. Record
/// bodies stay undecoded here so the caller can attribute decode failures
/// to the offending key.
pub trait RecordStore {
    fn scan(&self) -> Result<Vec<(String, Value)>, StoreError>;
}

/// Snapshot file holding a single JSON object of capture id to record body.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordStore for SnapshotStore {
    fn scan(&self) -> Result<Vec<(String, Value)>, StoreError> {
        let path = self.path.display().to_string();
        let raw = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let doc: Value = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;
        let Value::Object(entries) = doc else {
            return Err(StoreError::Shape { path });
        };
        // BTreeMap supplies the ascending key order the scan promises.
        let ordered: BTreeMap<String, Value> = entries.into_iter().collect();
        Ok(ordered.into_iter().collect())
    }
}
