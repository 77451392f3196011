// src/listing/search.rs
//! Fuzzy matching over summary records.
//!
//! Scores sit on a 0 (exact) .. 1 (no match) scale. A record's score
//! is the best score across its searchable fields — title, excerpt,
//! and category titles — and records above the threshold are dropped.
//! Matches are ranked by ascending score with the original collection
//! order breaking ties, so equal-quality hits keep their
//! reverse-chronological placement.
//!
//! The index is rebuilt by an explicit [`FuzzyIndex::build`] call when
//! the collection changes; at listing volumes the rebuild is a cheap
//! pure function, so there is no caching layer behind it.

use crate::constants::{FUZZY_SCORE_THRESHOLD, SUBSTRING_MATCH_SCORE};
use crate::model::ListRecord;
use strsim::jaro_winkler;

/// Pre-lowered searchable fields for one record.
#[derive(Debug, Clone)]
struct IndexEntry {
    fields: Vec<String>,
}

/// A search index over one summary collection.
///
/// Entry `i` corresponds to collection index `i`; the index holds no
/// reference to the records themselves.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    entries: Vec<IndexEntry>,
}

impl FuzzyIndex {
    /// Builds the index for a collection.
    pub fn build<T: ListRecord>(records: &[T]) -> Self {
        let entries = records
            .iter()
            .map(|record| {
                let mut fields = Vec::with_capacity(2 + record.categories().len());
                fields.push(record.title().to_lowercase());
                if let Some(text) = record.search_text() {
                    fields.push(text.to_lowercase());
                }
                for category in record.categories() {
                    fields.push(category.title.to_lowercase());
                }
                IndexEntry { fields }
            })
            .collect();

        Self { entries }
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)] // Used by library consumers
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs a fuzzy query, returning matching collection indices ranked
    /// by ascending score (best first). Ties keep collection order.
    ///
    /// The query is expected pre-trimmed and non-empty; the caller
    /// handles the empty-query pass-through.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();

        let mut scored: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let score = entry
                    .fields
                    .iter()
                    .map(|field| field_score(&needle, field))
                    .fold(1.0_f64, f64::min);
                (score <= FUZZY_SCORE_THRESHOLD).then_some((i, score))
            })
            .collect();

        // sort_by is stable, so equal scores preserve collection order.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.into_iter().map(|(i, _)| i).collect()
    }
}

/// Scores one field against the lowered query. 0 is exact, 1 is no
/// relation at all.
fn field_score(needle: &str, field: &str) -> f64 {
    if field == needle {
        return 0.0;
    }
    if field.contains(needle) {
        return SUBSTRING_MATCH_SCORE;
    }

    let whole = jaro_winkler(needle, field);
    let best = field
        .split_whitespace()
        .map(|token| jaro_winkler(needle, token))
        .fold(whole, f64::max);

    1.0 - best
}
