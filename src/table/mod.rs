// file: src/table/mod.rs
// description: filter -> sort -> paginate pipeline behind the dashboard table
// reference: pipeline orchestration

mod filter;
mod paginate;
mod sort;

pub use filter::{FilterCriteria, filter_records};
pub use paginate::{
    MAX_PAGE_BUTTONS, PAGE_SIZE_OPTIONS, PageSize, PageSpec, clamp_page, page_slice, page_window,
    total_pages,
};
pub use sort::{SortColumn, SortDirection, SortSpec, sort_records};

use crate::models::Comment;
use tracing::debug;

/// The slice of records to draw plus the pager metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<'a> {
    pub visible: Vec<&'a Comment>,
    pub total_records: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl TablePage<'_> {
    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page == self.total_pages
    }

    pub fn page_buttons(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages)
    }
}

pub struct TableViewPipeline;

impl TableViewPipeline {
    pub fn run<'a>(
        records: &'a [Comment],
        filter: &FilterCriteria,
        sort: &SortSpec,
        page: &PageSpec,
    ) -> TablePage<'a> {
        let filtered = filter_records(records, filter);
        let sorted = sort_records(filtered, sort);

        let total_records = sorted.len();
        let total_pages = total_pages(total_records, page.page_size);
        let current_page = clamp_page(page.page_number, total_pages);
        let visible = page_slice(&sorted, current_page, page.page_size).to_vec();

        debug!(
            "Table view: {} of {} records match, page {}/{}",
            total_records,
            records.len(),
            current_page,
            total_pages
        );

        TablePage {
            visible,
            total_records,
            total_pages,
            current_page,
        }
    }
}
