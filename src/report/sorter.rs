use crate::store::ScreenshotRecord;

/// Two-level stable ordering: ascending case-insensitive page title, then,
/// within the untitled records, ascending case-insensitive `Server` header.
///
/// Untitled records sort to the front of the title ordering (the empty string
/// compares smallest), so they always form a contiguous prefix. The prefix
/// length is the count of leading empty titles, which also covers the case
/// where every record is untitled.
pub fn sort_records(records: &mut [ScreenshotRecord]) {
    records.sort_by_cached_key(|record| record.page_title.to_lowercase());

    let untitled = records
        .iter()
        .take_while(|record| record.page_title.is_empty())
        .count();
    records[..untitled].sort_by_cached_key(|record| server_header(record).to_lowercase());
}

/// Value of the first header whose key matches `server`, or "" if absent.
pub fn server_header(record: &ScreenshotRecord) -> &str {
    record
        .headers
        .iter()
        .find(|header| header.key.eq_ignore_ascii_case("server"))
        .map(|header| header.value.as_str())
        .unwrap_or("")
}
