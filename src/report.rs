use crate::record::Category;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

// Reference page geometry: a header line at the top of the page, the date
// list starting at LIST_TOP and stepping down by LINE_PITCH per line until
// BOTTOM_MARGIN, then a fresh page.
const LIST_TOP: u32 = 770;
const BOTTOM_MARGIN: u32 = 50;
const LINE_PITCH: u32 = 20;

/// Number of date lines that fit one page with the reference geometry.
pub const fn default_page_capacity() -> usize {
    ((LIST_TOP - BOTTOM_MARGIN) / LINE_PITCH + 1) as usize
}

/// One exported page: the header naming the category and person, plus its
/// slice of the date list in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub header: String,
    pub dates: Vec<NaiveDate>,
}

impl ReportPage {
    /// Plain-text rendering: header line, then one bullet line per date.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        out.push('\n');
        for date in &self.dates {
            out.push_str("• ");
            out.push_str(&date.to_string());
            out.push('\n');
        }
        out
    }
}

/// Split a pre-sorted date sequence into fixed-capacity pages. Every date
/// lands on exactly one page and input order is preserved. Empty input yields
/// a single empty page so a renderer still emits the header.
pub fn paginate(dates: &[NaiveDate], capacity: usize) -> Vec<Vec<NaiveDate>> {
    let capacity = capacity.max(1);
    if dates.is_empty() {
        return vec![Vec::new()];
    }
    dates.chunks(capacity).map(|chunk| chunk.to_vec()).collect()
}

/// Paginate and attach the `Record of {Category} - {PERSON}` header to every
/// page.
pub fn build_report(
    person: &str,
    category: Category,
    dates: &[NaiveDate],
    capacity: usize,
) -> Vec<ReportPage> {
    let header = format!("Record of {} - {}", category.label(), person);
    paginate(dates, capacity)
        .into_iter()
        .map(|dates| ReportPage {
            header: header.clone(),
            dates,
        })
        .collect()
}

/// Render a whole report, pages separated by a form feed.
pub fn render_report(pages: &[ReportPage]) -> String {
    let mut out = String::new();
    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            out.push('\u{0c}');
        }
        out.push_str(&page.render());
    }
    out
}

/// First artifact path of the form `{person}_{category}_{n}.{ext}` whose
/// suffix `n` (starting at 1) does not collide with an existing file.
pub fn next_report_path(dir: &Path, person: &str, category: Category, ext: &str) -> PathBuf {
    let mut num = 1u32;
    loop {
        let candidate = dir.join(format!("{person}_{}_{num}.{ext}", category.as_str()));
        if !candidate.exists() {
            return candidate;
        }
        num += 1;
    }
}
