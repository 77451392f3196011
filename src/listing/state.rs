// src/listing/state.rs
//! Immutable listing session state with pure transitions.
//!
//! The hosting view holds exactly one `ListQueryState` value and
//! re-derives the visible list after every transition. There is no
//! ambient mutable state: each transition returns a new value, which
//! makes the reset-on-filter-change rule impossible to forget.

use crate::constants::LISTING_PAGE_SIZE;
use crate::types::DocumentSlug;

/// Which category the listing is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No narrowing — every record passes the category stage.
    #[default]
    All,
    /// Only records referencing the category with this slug.
    Slug(DocumentSlug),
}

impl CategoryFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// One listing session's query state.
///
/// Lifecycle: created at page mount with one page visible; search and
/// category transitions reset the window; "load more" grows it.
/// Owned exclusively by the listing session, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryState {
    search_text: String,
    active_category: CategoryFilter,
    visible_count: usize,
}

impl Default for ListQueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListQueryState {
    /// Fresh session state: empty search, all categories, one page.
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            active_category: CategoryFilter::All,
            visible_count: LISTING_PAGE_SIZE,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Returns a new state with the search text replaced.
    ///
    /// Always snaps the visible window back to one page: stale
    /// pagination across a search change is a correctness bug.
    pub fn apply_search(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            active_category: self.active_category.clone(),
            visible_count: LISTING_PAGE_SIZE,
        }
    }

    /// Returns a new state narrowed to the given category.
    ///
    /// Resets the visible window for the same reason as
    /// [`apply_search`](Self::apply_search).
    pub fn apply_category(&self, filter: CategoryFilter) -> Self {
        Self {
            search_text: self.search_text.clone(),
            active_category: filter,
            visible_count: LISTING_PAGE_SIZE,
        }
    }

    /// Returns a new state with one more page visible.
    ///
    /// A no-op once the window already covers the filtered sequence —
    /// the trigger should be hidden at that point, but calling it
    /// anyway must not grow the window.
    pub fn load_more(&self, filtered_len: usize) -> Self {
        if self.visible_count >= filtered_len {
            return self.clone();
        }
        Self {
            search_text: self.search_text.clone(),
            active_category: self.active_category.clone(),
            visible_count: self.visible_count + LISTING_PAGE_SIZE,
        }
    }

    /// Whether more records exist beyond the visible window.
    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.visible_count < filtered_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slug(s: &str) -> DocumentSlug {
        DocumentSlug::parse(s).unwrap()
    }

    #[test]
    fn fresh_state_shows_one_page() {
        let state = ListQueryState::new();
        assert_eq!(state.visible_count(), LISTING_PAGE_SIZE);
        assert_eq!(state.search_text(), "");
        assert!(state.active_category().is_all());
    }

    #[test]
    fn load_more_grows_by_one_page() {
        let state = ListQueryState::new().load_more(20);
        assert_eq!(state.visible_count(), 2 * LISTING_PAGE_SIZE);
    }

    #[test]
    fn load_more_at_end_is_a_no_op() {
        let state = ListQueryState::new();
        assert_eq!(state.load_more(4).visible_count(), LISTING_PAGE_SIZE);
        assert_eq!(
            state.load_more(LISTING_PAGE_SIZE).visible_count(),
            LISTING_PAGE_SIZE
        );
    }

    #[test]
    fn search_change_resets_pagination() {
        let state = ListQueryState::new().load_more(20).load_more(20);
        assert_eq!(state.visible_count(), 18);

        let reset = state.apply_search("rust");
        assert_eq!(reset.visible_count(), LISTING_PAGE_SIZE);
        assert_eq!(reset.search_text(), "rust");
    }

    #[test]
    fn category_change_resets_pagination() {
        let state = ListQueryState::new().load_more(20);
        assert_eq!(state.visible_count(), 12);

        let reset = state.apply_category(CategoryFilter::Slug(slug("web-dev")));
        assert_eq!(reset.visible_count(), LISTING_PAGE_SIZE);
        assert_eq!(
            reset.active_category(),
            &CategoryFilter::Slug(slug("web-dev"))
        );
    }

    #[test]
    fn transitions_preserve_the_untouched_field() {
        let state = ListQueryState::new()
            .apply_search("wasm")
            .apply_category(CategoryFilter::Slug(slug("systems")));
        assert_eq!(state.search_text(), "wasm");

        let searched = state.apply_search("tokio");
        assert_eq!(
            searched.active_category(),
            &CategoryFilter::Slug(slug("systems"))
        );
    }

    #[test]
    fn transitions_do_not_mutate_the_source_value() {
        let state = ListQueryState::new();
        let _ = state.load_more(100);
        assert_eq!(state.visible_count(), LISTING_PAGE_SIZE);
    }
}
