use std::fs;
use std::io;

use crate::report::template::PLACEHOLDER_IMAGE;
use crate::report::ReportError;
use crate::store::{RecordStore, ScreenshotRecord};

/// Materialize every stored record. Records whose screenshot file is missing
/// on disk get the placeholder reference; a record body that fails to decode
/// aborts the whole run.
pub fn load_records(store: &dyn RecordStore) -> Result<Vec<ScreenshotRecord>, ReportError> {
    let mut records = Vec::new();
    for (key, body) in store.scan()? {
        log::debug!("generating screenshot entry for {key}");
        let mut record: ScreenshotRecord =
            serde_json::from_value(body).map_err(|source| ReportError::Decode {
                key: key.clone(),
                source,
            })?;
        if !screenshot_exists(&record.screenshot_file)? {
            log::debug!(
                "adding placeholder for missing screenshot {}",
                record.screenshot_file
            );
            record.screenshot_file = PLACEHOLDER_IMAGE.to_string();
        }
        records.push(record);
    }
    Ok(records)
}

// Only NotFound means "missing"; anything else is surfaced to the caller.
fn screenshot_exists(path: &str) -> Result<bool, ReportError> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ReportError::ScreenshotProbe {
            path: path.to_string(),
            source,
        }),
    }
}
