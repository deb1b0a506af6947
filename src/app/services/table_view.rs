//! Paginated, searchable view over the cleaned dataset
//!
//! The view holds a shared snapshot of the rows plus the indices that match the
//! current query. Page requests outside the valid range are clamped, never
//! rejected.

use crate::app::models::CleanRecord;
use crate::constants::DEFAULT_PAGE_SIZE;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Query, page cursor and filtered indices for one table
#[derive(Debug, Clone)]
pub struct TableViewModel {
    rows: Arc<[CleanRecord]>,
    filtered: Vec<usize>,
    query: String,
    page: usize,
    page_size: usize,
}

/// One rendered page of the filtered rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a> {
    pub items: Vec<&'a CleanRecord>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl TableViewModel {
    /// A zero page size falls back to the default
    pub fn new(rows: Arc<[CleanRecord]>, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        let filtered = (0..rows.len()).collect();
        Self {
            rows,
            filtered,
            query: String::new(),
            page: 1,
            page_size,
        }
    }

    pub fn empty(page_size: usize) -> Self {
        Self::new(Arc::from(Vec::new()), page_size)
    }

    /// Set the free-text query and go back to page 1
    ///
    /// Matching is a case-insensitive substring test on name, category and type.
    /// A blank query shows every row.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.trim().to_lowercase();
        self.refilter();
        self.page = 1;
        debug!(
            "Table query '{}' matched {} of {} rows",
            self.query,
            self.filtered.len(),
            self.rows.len()
        );
    }

    /// Move to page `n`, clamped into `[1, total_pages]`
    pub fn set_page(&mut self, n: usize) {
        self.page = n.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Swap in a new dataset, keeping the query and resetting to page 1
    pub fn replace_rows(&mut self, rows: Arc<[CleanRecord]>) {
        self.rows = rows;
        self.refilter();
        self.page = 1;
    }

    pub fn visible_page(&self) -> PageView<'_> {
        let total_pages = self.total_pages();
        let start = (self.page - 1) * self.page_size;
        let items = self
            .filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&index| &self.rows[index])
            .collect();

        PageView {
            items,
            page: self.page,
            total_pages,
            total_filtered: self.filtered.len(),
            has_prev: self.page > 1,
            has_next: self.page < total_pages,
        }
    }

    /// Rows matching the current query, in dataset order
    pub fn filtered_rows(&self) -> impl Iterator<Item = &CleanRecord> + '_ {
        self.filtered.iter().map(|&index| &self.rows[index])
    }

    /// `max(1, ceil(filtered / page_size))`
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn rows(&self) -> &Arc<[CleanRecord]> {
        &self.rows
    }

    fn refilter(&mut self) {
        self.filtered = if self.query.is_empty() {
            (0..self.rows.len()).collect()
        } else {
            self.rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.matches_query(&self.query))
                .map(|(index, _)| index)
                .collect()
        };
    }
}
