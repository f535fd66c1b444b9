use crate::store::ScreenshotRecord;

#[derive(Debug)]
pub struct FilterOutcome {
    pub kept: Vec<ScreenshotRecord>,
    pub ignored: usize,
}

/// Keep records with a 2xx response code. With `include_errors` everything is
/// kept and nothing counts as ignored.
pub fn split_by_status(records: Vec<ScreenshotRecord>, include_errors: bool) -> FilterOutcome {
    if include_errors {
        return FilterOutcome {
            kept: records,
            ignored: 0,
        };
    }

    let mut kept = Vec::with_capacity(records.len());
    let mut ignored = 0;
    for record in records {
        if (200..300).contains(&record.response_code) {
            kept.push(record);
        } else {
            log::debug!(
                "ignoring {} with response code {}",
                record.url,
                record.response_code
            );
            ignored += 1;
        }
    }
    FilterOutcome { kept, ignored }
}
