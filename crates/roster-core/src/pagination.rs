//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// An offset-based request for a page of results.
///
/// Listing skips `skip` rows and returns at most `limit`, in insertion
/// order. Purely offset-based: results can shift if the underlying set
/// changes between calls, and no total count is carried back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of rows to skip.
    pub skip: u64,
    /// Maximum number of rows to return.
    pub limit: u64,
}

impl PageRequest {
    /// The default page limit.
    pub const DEFAULT_LIMIT: u64 = 100;

    /// Creates a new page request.
    #[must_use]
    pub const fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// Creates a request for the first page with the default limit.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.skip
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request() {
        let req = PageRequest::new(20, 10);
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_page_request_first() {
        let req = PageRequest::first();
        assert_eq!(req.offset(), 0);
        assert_eq!(req.limit(), PageRequest::DEFAULT_LIMIT);
    }

    #[test]
    fn test_page_request_default_limit_is_100() {
        assert_eq!(PageRequest::default().limit(), 100);
    }
}
