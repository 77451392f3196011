// src/content/mod.rs
//! The content pipeline core: normalization and derived metrics.
//!
//! Raw block sequences arrive from the content lake in authoring
//! order. [`normalize`] annotates navigable headings with anchor ids;
//! [`estimate_reading_minutes`] and [`extract_outline`] derive the
//! reading-time badge and the sidebar outline from the same sequence.
//! All three are pure functions — the document order they receive is
//! the order they preserve.

mod metrics;
mod normalize;
mod slug;

pub use metrics::{estimate_reading_minutes, extract_outline, HeadingAnchor};
pub use normalize::{is_anchor_heading, normalize};
pub use slug::heading_anchor;
