//! Pagination extractor.

use roster_core::PageRequest;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of rows to skip.
    #[serde(default)]
    pub skip: Option<u64>,
    /// Maximum number of rows to return.
    #[serde(default)]
    pub limit: Option<u64>,
}

impl From<ListQuery> for PageRequest {
    fn from(query: ListQuery) -> Self {
        PageRequest::new(
            query.skip.unwrap_or(0),
            query.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: Some(0),
            limit: Some(PageRequest::DEFAULT_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let query = ListQuery {
            skip: None,
            limit: None,
        };
        let page = PageRequest::from(query);
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_explicit_values_kept() {
        let query = ListQuery {
            skip: Some(4),
            limit: Some(2),
        };
        let page = PageRequest::from(query);
        assert_eq!(page.skip, 4);
        assert_eq!(page.limit, 2);
    }
}
