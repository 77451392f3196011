// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story
//! of how the pipeline operates: how fast readers read, how large a
//! listing page is, how tolerant the search is.

// ---------------------------------------------------------------------------
// Reading-time estimation
// ---------------------------------------------------------------------------

/// Assumed reading speed, in words per minute.
///
/// The standard adult silent-reading estimate. The reading-time badge
/// divides the document word count by this and rounds up.
pub const WORDS_PER_MINUTE: usize = 200;

/// Minimum reading time reported for any document, in minutes.
///
/// Applied unconditionally: an empty document still reports 1 minute.
pub const READING_TIME_FLOOR_MINUTES: u32 = 1;

// ---------------------------------------------------------------------------
// Listing boundaries
// ---------------------------------------------------------------------------

/// How many summary cards one listing page shows.
///
/// "Load more" extends the visible window by this amount; changing the
/// search text or the active category resets the window back to it.
pub const LISTING_PAGE_SIZE: usize = 6;

/// Fuzzy-search score cutoff on a 0 (exact) .. 1 (no match) scale.
///
/// Records scoring above this are dropped from the search stage.
/// 0.3 keeps typo-distance matches while rejecting unrelated text.
pub const FUZZY_SCORE_THRESHOLD: f64 = 0.3;

/// Score assigned to a case-insensitive substring hit that is not an
/// exact field match. Sits below the threshold so substring matches
/// always survive, ranked behind exact matches.
pub const SUBSTRING_MATCH_SCORE: f64 = 0.1;

// ---------------------------------------------------------------------------
// Anchor generation
// ---------------------------------------------------------------------------

/// Deepest heading level that receives an anchor id and appears in the
/// table of contents. Level-4 headings render but are not navigable.
pub const ANCHOR_MAX_HEADING_LEVEL: u8 = 3;

// ---------------------------------------------------------------------------
// Content lake API
// ---------------------------------------------------------------------------

/// Sanity HTTP API version date used in query URLs.
pub const CONTENT_LAKE_API_VERSION: &str = "2024-01-01";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
///
/// This is a performance hint, not a constraint. Over-estimating wastes
/// a little memory; under-estimating causes reallocation.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

/// Estimated characters per RSS feed item.
pub const CHARS_PER_FEED_ITEM_ESTIMATE: usize = 320;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
