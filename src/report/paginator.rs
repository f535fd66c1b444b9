use crate::store::ScreenshotRecord;

/// A fixed-size window into the sorted kept list.
#[derive(Clone, Copy, Debug)]
pub struct ReportPage<'a> {
    pub number: usize,
    pub records: &'a [ScreenshotRecord],
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

pub fn pages(
    records: &[ScreenshotRecord],
    page_size: usize,
) -> impl Iterator<Item = ReportPage<'_>> {
    records
        .chunks(page_size)
        .enumerate()
        .map(|(number, records)| ReportPage { number, records })
}

pub fn page_file(number: usize) -> String {
    format!("page-{number}.html")
}

/// Navigation strip listing every page in ascending order.
pub fn page_index(page_count: usize) -> String {
    (0..page_count)
        .map(|page| {
            format!(
                "&#8226;<a class=\"page-number\" href=\"{}\">{}</a>",
                page_file(page),
                page
            )
        })
        .collect()
}

// Navigation is circular: page 0's prev wraps to the last page and the last
// page's next wraps back to page 0.

pub fn prev_link(number: usize, page_count: usize) -> String {
    format!(
        "<a id=\"prev-page\" href=\"{}\">Prev</a>",
        page_file((number + page_count - 1) % page_count)
    )
}

pub fn next_link(number: usize, page_count: usize) -> String {
    format!(
        "&#8226;<a id=\"next-page\" href=\"{}\">Next</a>",
        page_file((number + 1) % page_count)
    )
}
