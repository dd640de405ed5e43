//! Caller-owned browse state.
//!
//! The CLI (or any other frontend) owns one immutable [`SearchState`] and
//! derives each view from it with pure functions. Every transition returns a
//! new state; there is no shared mutable state behind the scenes.

use ndx_config::DEFAULT_PAGE_SIZE;
use ndx_record::CategoryFilter;
use serde::Serialize;

/// The complete input state of one browse view: what to search, how to
/// filter, and which page to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Active category filter.
    pub category: CategoryFilter,
    /// Raw query text.
    pub query: String,
    /// Current page, 1-based.
    pub page: usize,
    /// Records per page.
    pub page_size: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchState {
    /// Returns the state with a new query, back on page 1.
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            ..self
        }
    }

    /// Returns the state with a new category filter, back on page 1.
    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self {
            category,
            page: 1,
            ..self
        }
    }

    /// Returns the state with a new page size, back on page 1.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self {
            page_size,
            page: 1,
            ..self
        }
    }

    /// Returns the state on the given page.
    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Returns the state with its page clamped to `1..=max(total_pages, 1)`.
    ///
    /// Callers clamp after every result-set change, before planning the page
    /// window; the pagination planner itself never self-corrects.
    pub fn clamped(self, total_pages: usize) -> Self {
        let page = self.page.clamp(1, total_pages.max(1));
        Self { page, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_on_page_one() {
        let state = SearchState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.category, CategoryFilter::All);
        assert!(state.query.is_empty());
    }

    #[test]
    fn query_change_resets_page() {
        let state = SearchState::default().with_page(5).with_query("pain");
        assert_eq!(state.page, 1);
        assert_eq!(state.query, "pain");
    }

    #[test]
    fn category_change_resets_page() {
        let state = SearchState::default()
            .with_page(4)
            .with_category(CategoryFilter::Risk);
        assert_eq!(state.page, 1);
        assert_eq!(state.category, CategoryFilter::Risk);
    }

    #[test]
    fn page_size_change_resets_page() {
        let state = SearchState::default()
            .with_page_size(12)
            .with_page(3)
            .with_page_size(24);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 24);
    }

    #[test]
    fn clamp_limits_out_of_range_pages() {
        assert_eq!(SearchState::default().with_page(99).clamped(7).page, 7);
        assert_eq!(SearchState::default().with_page(0).clamped(7).page, 1);
        // No pages at all still clamps to page 1
        assert_eq!(SearchState::default().with_page(3).clamped(0).page, 1);
    }
}
