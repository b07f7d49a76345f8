// file: src/table/paginate.rs
// description: page size options, page clamping and slicing

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 50, 100];

/// Upper bound on the page buttons the pager will ever list.
pub const MAX_PAGE_BUTTONS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(10);

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn options() -> impl Iterator<Item = PageSize> {
        PAGE_SIZE_OPTIONS.into_iter().map(PageSize)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = DashboardError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if PAGE_SIZE_OPTIONS.contains(&value) {
            Ok(PageSize(value))
        } else {
            Err(DashboardError::Validation(format!(
                "Rows per page must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, value
            )))
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page_number: usize,
    pub page_size: PageSize,
}

impl PageSpec {
    pub fn new(page_number: usize, page_size: PageSize) -> Self {
        Self {
            page_number,
            page_size,
        }
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(1, PageSize::DEFAULT)
    }
}

pub fn total_pages(total_records: usize, page_size: PageSize) -> usize {
    total_records.div_ceil(page_size.get()).max(1)
}

/// Floors at 1 and clamps down to `total_pages`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.max(1).min(total_pages.max(1))
}

/// Items of page `current` (1-based); empty when the page is out of range.
pub fn page_slice<T>(items: &[T], current: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let start = current.saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Page numbers offered as direct jumps around `current`: up to two on
/// either side, drawn from the first `MAX_PAGE_BUTTONS` pages.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    let listed = total_pages.min(MAX_PAGE_BUTTONS);
    let start = current.saturating_sub(3).min(listed);
    let end = current.saturating_add(2).min(listed);
    if start >= end {
        return Vec::new();
    }
    ((start + 1)..=end).collect()
}
