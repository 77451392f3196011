// src/content/normalize.rs
//! Content normalization: anchor injection for navigable headings.

use super::slug::heading_anchor;
use crate::constants::ANCHOR_MAX_HEADING_LEVEL;
use crate::model::{ContentBlock, HeadingBlock};
use crate::types::concat_span_text;

/// Whether a heading is deep enough to receive an anchor.
///
/// Levels 1-3 anchor and appear in the outline; level 4 is
/// intentionally excluded from both.
pub fn is_anchor_heading(heading: &HeadingBlock) -> bool {
    heading.level.get() <= ANCHOR_MAX_HEADING_LEVEL
}

/// Annotates heading blocks with their computed anchor ids.
///
/// Pure over the input sequence: block order and every non-heading
/// block pass through untouched. Two headings with identical text get
/// identical anchors — collisions are preserved as authored, not
/// deduplicated.
pub fn normalize(blocks: Vec<ContentBlock>) -> Vec<ContentBlock> {
    blocks
        .into_iter()
        .map(|block| match block {
            ContentBlock::Heading(mut heading) if is_anchor_heading(&heading) => {
                let text = concat_span_text(&heading.spans);
                heading.anchor_id = Some(heading_anchor(&text));
                ContentBlock::Heading(heading)
            }
            other => other,
        })
        .collect()
}
