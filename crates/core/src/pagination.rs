//! Page-number pagination for report listings.

/// Default number of rows per report page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on a caller-supplied page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided page size to `1..=max`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided 1-based page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>, default_size: i64) -> Self {
        Self {
            page: clamp_page(page),
            page_size: clamp_limit(page_size, default_size, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed to show `total` rows (0 when empty).
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.page_size - 1) / self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, DEFAULT_PAGE_SIZE)
    }
}
