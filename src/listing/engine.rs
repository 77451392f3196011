// src/listing/engine.rs
//! The listing pipeline: search, then category filter, then the
//! page-bounded slice.
//!
//! Stage order is a design decision, not an accident: search narrows
//! the whole collection first, then the category chip narrows the
//! matches — "search within everything, then narrow by category".

use super::search::FuzzyIndex;
use super::state::{CategoryFilter, ListQueryState};
use crate::model::ListRecord;
use indexmap::IndexMap;

/// The visible subset of one listing view, plus enough context to
/// drive the "load more" trigger and the empty state.
///
/// A zero-match result is an ordinary value — distinguishable from a
/// fetch failure, which surfaces as an error long before this type
/// exists.
#[derive(Debug)]
pub struct VisibleList<'a, T> {
    /// Records inside the visible window, in pipeline order.
    pub items: Vec<&'a T>,
    /// How many records survived search + category filtering.
    pub filtered_len: usize,
}

impl<'a, T> VisibleList<'a, T> {
    /// Search/filter produced no matches at all.
    pub fn is_empty_result(&self) -> bool {
        self.filtered_len == 0
    }

    /// Whether a further page exists beyond the visible window.
    pub fn has_more(&self, state: &ListQueryState) -> bool {
        state.has_more(self.filtered_len)
    }
}

/// Applies the three-stage pipeline to a summary collection.
///
/// `index` must have been built from `all` (entry `i` describes record
/// `i`); rebuild it whenever the collection changes.
pub fn build_visible_list<'a, T: ListRecord>(
    all: &'a [T],
    index: &FuzzyIndex,
    state: &ListQueryState,
) -> VisibleList<'a, T> {
    debug_assert_eq!(index.len(), all.len(), "index built from a different collection");

    // Search stage: empty query passes the whole collection through in
    // its original (upstream reverse-chronological) order.
    let query = state.search_text().trim();
    let searched: Vec<&T> = if query.is_empty() {
        all.iter().collect()
    } else {
        index.search(query).into_iter().map(|i| &all[i]).collect()
    };

    // Category stage: "all" is a pass-through.
    let filtered: Vec<&T> = match state.active_category() {
        CategoryFilter::All => searched,
        CategoryFilter::Slug(slug) => searched
            .into_iter()
            .filter(|record| {
                record
                    .categories()
                    .iter()
                    .any(|category| category.slug == *slug)
            })
            .collect(),
    };

    // Pagination stage: first `visible_count` of the filtered sequence.
    let filtered_len = filtered.len();
    let items = filtered
        .into_iter()
        .take(state.visible_count())
        .collect();

    VisibleList { items, filtered_len }
}

/// One category's sidebar entry: display title plus how many records
/// in the full collection reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub title: String,
    pub count: usize,
}

/// Computes sidebar counts from the full collection.
///
/// Deliberately independent of the active search and category filter:
/// counts reflect everything published, so switching chips never makes
/// the numbers jump. Keyed by category slug, ordered alphabetically by
/// title the way the sidebar displays them.
pub fn category_counts<T: ListRecord>(all: &[T]) -> IndexMap<String, CategoryCount> {
    let mut counts: IndexMap<String, CategoryCount> = IndexMap::new();

    for record in all {
        for category in record.categories() {
            counts
                .entry(category.slug.as_str().to_string())
                .and_modify(|entry| entry.count += 1)
                .or_insert_with(|| CategoryCount {
                    title: category.title.clone(),
                    count: 1,
                });
        }
    }

    counts.sort_by(|_, a, _, b| a.title.cmp(&b.title));
    counts
}
