//! Paged Result Contract
//!
//! One page of entities plus the metadata needed to page through the rest.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Rows-per-page choices offered by the results table
pub const PAGE_SIZE_OPTIONS: &[u32] = &[5, 10, 25, 50];

/// Number of pages needed for `total_count` rows
pub fn pages_for(total_count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(u64::from(page_size))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// Rows of the current page, in server order
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// 1-based page number
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Matching rows across all pages
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub pages_count: u64,
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self::empty(1, DEFAULT_PAGE_SIZE)
    }
}

impl<T> PagedResult<T> {
    /// An empty page at the given position
    pub fn empty(page: u32, page_size: u32) -> Self {
        Self {
            results: Vec::new(),
            page,
            page_size,
            total_count: 0,
            pages_count: 0,
        }
    }

    /// Recompute `pages_count` and cap `results` at `page_size`
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.pages_count = pages_for(self.total_count, self.page_size);
        if self.page_size > 0 {
            self.results.truncate(self.page_size as usize);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Mean of `value` over the current page; 0 for an empty page
    pub fn average(&self, value: impl Fn(&T) -> f64) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let total: f64 = self.results.iter().map(value).sum();
        total / self.results.len() as f64
    }

    /// Zero-based index of the current page, as pagination widgets count
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.pages_count
    }

    /// 1-based inclusive row range shown on this page, e.g. (11, 20)
    pub fn row_range(&self) -> (u64, u64) {
        if self.results.is_empty() {
            return (0, 0);
        }
        let start = u64::from(self.page_index()) * u64::from(self.page_size) + 1;
        (start, start + self.results.len() as u64 - 1)
    }
}
