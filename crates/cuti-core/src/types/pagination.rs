//! Pagination types for search endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub size: u64,
}

impl PageRequest {
    /// Create a new page request, clamping into the accepted range.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: page.max(1),
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    ///
    /// Saturates at `i64::MAX`, so a page past the end reads as empty.
    pub fn offset(&self) -> i64 {
        let skipped = self.page.saturating_sub(1).saturating_mul(self.size);
        i64::try_from(skipped).unwrap_or(i64::MAX)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.size as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paging summary returned next to every search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// Current page number (1-based).
    pub page: u64,
    /// Total number of matching items.
    pub total_items: u64,
    /// Total number of pages, `ceil(total_items / size)`.
    pub total_pages: u64,
}

/// One page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Paging summary.
    pub paging: Paging,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        Self {
            items,
            paging: Paging {
                page: request.page,
                total_items,
                total_pages: total_items.div_ceil(request.size.max(1)),
            },
        }
    }

    /// Transform every item while keeping the paging summary.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            paging: self.paging,
        }
    }
}
