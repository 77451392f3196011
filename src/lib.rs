// src/lib.rs
//! sanity2page library — renders Sanity CMS portable-text documents
//! into site artifacts.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ContentLakeErrorCode`, `ValidationError`
//! - **Configuration** — `PipelineConfig`
//! - **Domain model** — `Article`, `ContentBlock`, `PostSummary`, `ProjectSummary`
//! - **Content pipeline** — `normalize`, `extract_outline`, `estimate_reading_minutes`
//! - **List engine** — `ListQueryState`, `FuzzyIndex`, `build_visible_list`
//! - **API client** — `SanityHttpClient`, `SanityRepository`, parsers
//! - **Formatting** — `render_blocks`, `render_article_page`
//! - **Output** — `deliver`, `render_rss`

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod content;
mod error;
mod formatting;
mod listing;
mod model;
mod output;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::{
    classify_fetch_failure, AppError, ContentLakeErrorCode, FetchFailure,
};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{Command, CommandLineInput, DocumentKind, PipelineConfig};

// --- Domain Model ---
pub use crate::model::{
    Article, Category, ContentBlock, ImageRef, ListRecord, PostSummary, ProjectLinks,
    ProjectSummary,
};

// --- Block Types ---
pub use crate::model::blocks::{
    BlockquoteBlock, CalloutBlock, CalloutTone, CodeBlock, HeadingBlock, HeadingLevel,
    ImageBlock, MathBlock, MathInlineBlock, ParagraphBlock, TableBlock, TableRow,
    UnknownBlock, VideoEmbedBlock,
};

// --- Domain Types ---
pub use crate::types::{
    concat_span_text, join_span_text, ApiToken, BlockKey, Dataset, DocumentSlug, InlineSpan,
    ProjectId, SpanMarks, ValidatedUrl,
};

// --- Content Pipeline ---
pub use crate::content::{
    estimate_reading_minutes, extract_outline, heading_anchor, is_anchor_heading, normalize,
    HeadingAnchor,
};

// --- List Engine ---
pub use crate::listing::{
    build_visible_list, category_counts, CategoryCount, CategoryFilter, FuzzyIndex,
    ListQueryState, VisibleList,
};

// --- API Client ---
pub use crate::api::{
    parser::{
        parse_article, parse_block, parse_blocks, parse_post_summaries,
        parse_project_summaries, parse_query_envelope, parse_sidebar_categories,
    },
    SanityHttpClient, SanityRepository, SidebarCategory,
};

// --- Formatting ---
pub use crate::formatting::{render_article_page, render_blocks, render_spans, RenderedPage};

// --- Output ---
pub use crate::output::{
    deliver, render_rss, DeliveryTarget, FeedChannel, OutputPlan, OutputReport,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{ArtifactDelivery, ContentSource, PageComposer};

// --- Domain Constants ---
pub use crate::constants::{FUZZY_SCORE_THRESHOLD, LISTING_PAGE_SIZE, WORDS_PER_MINUTE};
