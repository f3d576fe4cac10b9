//! Paginated response envelope

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Total items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Returns true when a further page exists.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) < self.total
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more() {
        let page = Page::<u8> {
            items: vec![],
            page: 1,
            limit: 20,
            total: 45,
        };
        assert!(page.has_more());

        let last = Page::<u8> {
            items: vec![],
            page: 3,
            limit: 20,
            total: 45,
        };
        assert!(!last.has_more());
    }
}
