//! Paginated page types
//!
//! Every list and search endpoint answers with a [`PageResult`]. The
//! dashboard deliberately collapses "zero rows" and "non-success status"
//! into the single [`PageOutcome::NotFound`] sentinel: the user sees the
//! same "no encontrado" view either way and the controller never
//! distinguishes the two.

use serde::{Deserialize, Serialize};

// ============================================================================
// PageResult
// ============================================================================

/// One page of rows plus pagination metadata, as the backend sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// Rows on this page, in backend order
    pub rows: Vec<T>,
    /// Total number of pages
    pub pages: u32,
    /// The page these rows belong to
    pub current: u32,
}

impl<T> PageResult<T> {
    /// Create a page result
    pub fn new(rows: Vec<T>, pages: u32, current: u32) -> Self {
        Self { rows, pages, current }
    }

    /// Whether the page carries no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// PageOutcome
// ============================================================================

/// The controller-facing outcome of a page fetch
///
/// `NotFound` covers zero rows, non-success statuses and transport
/// failures alike; no pagination metadata survives it.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome<T> {
    /// The backend answered with at least one row
    Found(PageResult<T>),
    /// Zero rows, or the request failed
    NotFound,
}

impl<T> PageOutcome<T> {
    /// Collapse a raw page into an outcome: empty rows become `NotFound`
    pub fn from_page(page: PageResult<T>) -> Self {
        if page.is_empty() {
            PageOutcome::NotFound
        } else {
            PageOutcome::Found(page)
        }
    }

    /// Whether this is the not-found sentinel
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageOutcome::NotFound)
    }

    /// The rows, if any
    pub fn rows(&self) -> &[T] {
        match self {
            PageOutcome::Found(page) => &page.rows,
            PageOutcome::NotFound => &[],
        }
    }

    /// Map the row type, keeping the outcome shape
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageOutcome<U> {
        match self {
            PageOutcome::Found(page) => PageOutcome::Found(PageResult {
                rows: page.rows.into_iter().map(f).collect(),
                pages: page.pages,
                current: page.current,
            }),
            PageOutcome::NotFound => PageOutcome::NotFound,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_rows_collapse_to_not_found() {
        let page: PageResult<u32> = PageResult::new(vec![], 0, 0);
        assert!(PageOutcome::from_page(page).is_not_found());
    }

    #[test]
    fn test_rows_are_preserved() {
        let page = PageResult::new(vec![1, 2, 3], 4, 2);
        let outcome = PageOutcome::from_page(page);
        assert_eq!(outcome.rows(), &[1, 2, 3]);
        assert!(!outcome.is_not_found());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let outcome = PageOutcome::from_page(PageResult::new(vec![1, 2], 5, 3));
        match outcome.map(|n| n * 10) {
            PageOutcome::Found(page) => {
                assert_eq!(page.rows, vec![10, 20]);
                assert_eq!(page.pages, 5);
                assert_eq!(page.current, 3);
            }
            PageOutcome::NotFound => panic!("expected rows"),
        }
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"rows":[7],"pages":3,"current":1}"#;
        let page: PageResult<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page, PageResult::new(vec![7], 3, 1));
    }
}
