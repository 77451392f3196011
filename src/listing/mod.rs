// src/listing/mod.rs
//! The List Engine: search, category filter, and pagination over
//! summary collections.
//!
//! One listing session owns a [`ListQueryState`] value and a
//! [`FuzzyIndex`] built from its fetched collection. Every user
//! transition produces a new state; [`build_visible_list`] re-derives
//! the visible subset from scratch each time. All of it is pure and
//! synchronous — the only asynchronous boundary is the initial fetch,
//! which lives in `crate::api`.

mod engine;
mod search;
mod state;

pub use engine::{build_visible_list, category_counts, CategoryCount, VisibleList};
pub use search::FuzzyIndex;
pub use state::{CategoryFilter, ListQueryState};
