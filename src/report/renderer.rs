use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{context, Environment};
use serde::Serialize;

use crate::report::paginator::{self, ReportPage};
use crate::report::template::{self, PLACEHOLDER_IMAGE};
use crate::report::ReportError;
use crate::store::{HttpHeader, ScreenshotRecord};

/// Display-ready copy of a record. The canonical sorted list is never
/// touched; each page projects its own copies.
#[derive(Clone, Debug, Serialize)]
pub struct DisplayRecord {
    pub url: String,
    pub final_url: String,
    pub response_code: i32,
    pub page_title: String,
    pub screenshot_file: String,
    pub headers: Vec<HttpHeader>,
}

impl DisplayRecord {
    pub fn project(record: &ScreenshotRecord) -> Self {
        Self {
            url: record.url.clone(),
            final_url: record.final_url.clone(),
            response_code: record.response_code,
            page_title: record.page_title.clone(),
            screenshot_file: display_screenshot(&record.screenshot_file),
            headers: record
                .headers
                .iter()
                .filter(|header| header.key.eq_ignore_ascii_case("server"))
                .cloned()
                .collect(),
        }
    }
}

// The placeholder reference is not a real path and passes through untouched;
// everything else is reduced to its base file name.
fn display_screenshot(path: &str) -> String {
    if path == PLACEHOLDER_IMAGE {
        return path.to_string();
    }
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, ReportError> {
        let mut env = Environment::new();
        // The .html template name turns on HTML auto-escaping; the navigation
        // markup opts out with `safe` in the template.
        env.add_template("report-page.html", template::REPORT_PAGE)
            .map_err(|source| ReportError::Template { source })?;
        Ok(Self { env })
    }

    pub fn render_page(
        &self,
        page: &ReportPage<'_>,
        page_count: usize,
        page_index: &str,
        total: usize,
        errors_ignored: usize,
    ) -> Result<String, ReportError> {
        let screenshots: Vec<DisplayRecord> =
            page.records.iter().map(DisplayRecord::project).collect();
        let tmpl = self
            .env
            .get_template("report-page.html")
            .map_err(|source| ReportError::Template { source })?;
        tmpl.render(context! {
            screenshots => screenshots,
            page_index => page_index,
            total => total,
            page_next => paginator::next_link(page.number, page_count),
            page_prev => paginator::prev_link(page.number, page_count),
            page_number => page.number,
            errors_ignored => errors_ignored,
        })
        .map_err(|source| ReportError::Render {
            page: page.number,
            source,
        })
    }
}

pub fn write_page(report_dir: &Path, number: usize, html: &str) -> Result<PathBuf, ReportError> {
    let path = report_dir.join(paginator::page_file(number));
    fs::write(&path, html).map_err(|source| ReportError::Write {
        page: number,
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}
