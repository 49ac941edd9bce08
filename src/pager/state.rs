/// Resolved pagination of one request.
///
/// Produced by [`Paginator::pager`](super::Paginator::pager) and never mutated
/// afterwards; a new request computes a new state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub(super) rows: u64,
    pub(super) limit: u64,
    pub(super) range: u64,
    pub(super) pages: u64,
    pub(super) page: u64,
    pub(super) offset: u64,
    pub(super) hash: Option<String>,
    pub(super) params: String,
}

impl PaginationState {
    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn range(&self) -> u64 {
        self.range
    }

    pub fn pages(&self) -> u64 {
        self.pages
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Zero based index of the first row on the current page.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// `#fragment`, present only when a non-empty hash was requested.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Encoded extra parameters, `""` or starting with `&`.
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Row range of the current page, clipped to the row count.
    pub fn slice(&self) -> std::ops::Range<u64> {
        self.offset..std::cmp::min(self.offset + self.limit, self.rows)
    }

    /// Whether there is more than one page to navigate.
    pub fn is_paginated(&self) -> bool {
        self.rows > self.limit
    }
}
