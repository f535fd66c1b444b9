//! The report generation pipeline: load, filter, sort, paginate, render.
//!
//! Every stage consumes the complete output of the previous one; nothing is
//! streamed and nothing runs concurrently. The record list is owned by the
//! pipeline for the duration of a single run.

pub mod filter;
pub mod loader;
pub mod paginator;
pub mod renderer;
pub mod sorter;
pub mod template;

use std::path::PathBuf;

use thiserror::Error;

use crate::store::{RecordStore, StoreError};

pub const DEFAULT_PAGE_SIZE: usize = 40;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to decode stored record {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to probe screenshot file {path}: {source}")]
    ScreenshotProbe {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse the report page template: {source}")]
    Template {
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to render page {page}: {source}")]
    Render {
        page: usize,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to write page {page} to {path}: {source}")]
    Write {
        page: usize,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Settings threaded through every stage. Constructed once by the caller;
/// there is no ambient configuration state.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub page_size: usize,
    pub include_errors: bool,
    pub report_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            include_errors: false,
            report_dir: PathBuf::from("."),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReportOutcome {
    /// Nothing survived the status filter; no files were written.
    Empty { candidates: usize, ignored: usize },

    Written {
        pages: usize,
        records: usize,
        first_page: PathBuf,
    },
}

pub fn generate(
    store: &dyn RecordStore,
    config: &ReportConfig,
) -> Result<ReportOutcome, ReportError> {
    let records = loader::load_records(store)?;
    let candidates = records.len();

    let filter::FilterOutcome { mut kept, ignored } =
        filter::split_by_status(records, config.include_errors);
    if kept.is_empty() {
        return Ok(ReportOutcome::Empty {
            candidates,
            ignored,
        });
    }

    sorter::sort_records(&mut kept);

    let renderer = renderer::PageRenderer::new()?;
    let page_count = paginator::page_count(kept.len(), config.page_size);
    let page_index = paginator::page_index(page_count);

    for page in paginator::pages(&kept, config.page_size) {
        let html = renderer.render_page(&page, page_count, &page_index, kept.len(), ignored)?;
        let path = renderer::write_page(&config.report_dir, page.number, &html)?;
        log::debug!("wrote {}", path.display());
    }

    Ok(ReportOutcome::Written {
        pages: page_count,
        records: kept.len(),
        first_page: config.report_dir.join(paginator::page_file(0)),
    })
}
