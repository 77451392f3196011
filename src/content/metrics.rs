// src/content/metrics.rs
//! Derived document metrics: reading time and the table-of-contents
//! outline. Both are computed from the block sequence independently of
//! rendering, so the sidebar never waits on the body.

use super::normalize::is_anchor_heading;
use super::slug::heading_anchor;
use crate::constants::{READING_TIME_FLOOR_MINUTES, WORDS_PER_MINUTE};
use crate::model::{ContentBlock, HeadingLevel};
use crate::types::{concat_span_text, join_span_text};
use serde::Serialize;

/// One table-of-contents entry, derived from a heading block.
///
/// `id` is computed by the same slug function the normalizer uses, so a
/// TOC link always lands on its heading's anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingAnchor {
    pub text: String,
    pub id: String,
    pub level: HeadingLevel,
}

/// Estimates reading time in whole minutes.
///
/// Counts whitespace-delimited tokens across every text-bearing block
/// (span texts joined with a single space), divides by the assumed
/// words-per-minute, and rounds up. Floored at 1 minute — an empty
/// document still reads "1 min".
pub fn estimate_reading_minutes(blocks: &[ContentBlock]) -> u32 {
    let word_count: usize = blocks
        .iter()
        .filter_map(ContentBlock::inline_spans)
        .map(|spans| join_span_text(spans).split_whitespace().count())
        .sum();

    let minutes = word_count.div_ceil(WORDS_PER_MINUTE) as u32;
    minutes.max(READING_TIME_FLOOR_MINUTES)
}

/// Extracts the document outline: level 1-3 headings in document order.
///
/// Malformed or unknown blocks simply don't match and are skipped; one
/// bad block never blanks the outline.
pub fn extract_outline(blocks: &[ContentBlock]) -> Vec<HeadingAnchor> {
    blocks
        .iter()
        .filter_map(|block| block.as_heading())
        .filter(|heading| is_anchor_heading(heading))
        .map(|heading| {
            let text = concat_span_text(&heading.spans);
            let id = heading_anchor(&text);
            HeadingAnchor {
                text,
                id,
                level: heading.level,
            }
        })
        .collect()
}
